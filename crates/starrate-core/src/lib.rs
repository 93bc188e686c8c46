//! starrate core library
//!
//! Platform-agnostic state machine and rendering for the starrate rating
//! widget: a row of symbols that previews a rating on hover and commits it on
//! click.
//!
//! ```
//! use starrate_core::{RatingConfig, RatingWidget, RowEvent};
//!
//! let mut widget = RatingWidget::new(RatingConfig::new().with_initial_value(2));
//! widget.handle(RowEvent::Hover { index: 3 });
//! assert_eq!(widget.displayed_count(), 4);
//! assert_eq!(widget.handle(RowEvent::Activate { index: 3 }), Some(4));
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod render;
pub mod widget;

pub use config::RatingConfig;
pub use error::{ConfigError, ConfigResult};
pub use event::RowEvent;
pub use render::{Cursor, RatingView, RowStyle, SymbolRow, SymbolView};
pub use widget::{
    ChangeCallback, RatingState, RatingWidget, Symbol, SymbolList, derive_symbol_list,
};
