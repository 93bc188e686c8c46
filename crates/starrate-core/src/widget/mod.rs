//! Rating widget state machine.
//!
//! - [`RatingState`]: committed value, displayed count and symbol list
//! - [`RatingWidget`]: configuration + state + change callback
//! - [`derive_symbol_list`]: the pure list derivation both build on

mod rating;
mod state;
mod symbols;

pub use rating::{ChangeCallback, RatingWidget};
pub use state::RatingState;
pub use symbols::{Symbol, SymbolList, derive_symbol_list};
