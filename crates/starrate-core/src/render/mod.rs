//! Rendering of the rating widget into front-end independent views.
//!
//! [`SymbolRow`] is a pure function of the symbol list and the row style;
//! [`RatingView`] wraps its output with the optional readout and can be turned
//! into static HTML.

mod row;
mod view;

pub use row::{Cursor, RowStyle, SymbolRow, SymbolView};
pub use view::{CENTERED_CSS, CONTAINER_CSS, INDEX_ATTRIBUTE, RatingView, escape_html};
