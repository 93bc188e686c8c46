//! egui components for the starrate rating widget.
//!
//! - **Rating**: [`StarRating`], the full widget with hover preview, commit
//!   callback and optional readout; [`StarRow`], the stateless symbol row
//! - **Colors**: CSS color parsing for symbol colors

pub mod colors;
pub mod rating;

pub use colors::{RowColors, parse_css_color};
pub use rating::{StarRating, StarRatingResponse, StarRow, StarRowResponse};

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Readout text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
}
