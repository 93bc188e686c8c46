//! Whole-widget render description and static HTML output.

use std::fmt::Write;

use super::row::SymbolView;

/// Inline CSS of the outer container: a vertical flex column.
pub const CONTAINER_CSS: &str =
    "overflow: hidden; position: relative; display: flex; flex-direction: column";
/// Inline CSS of the row wrapper and the readout, centering them horizontally.
pub const CENTERED_CSS: &str = "margin: 0 auto";
/// Attribute carrying the symbol position on web elements.
pub const INDEX_ATTRIBUTE: &str = "rate-index";

/// Everything a front-end needs to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingView {
    /// One view per symbol, in row order.
    pub symbols: Vec<SymbolView>,
    /// Readout text, present when the readout is enabled.
    pub readout: Option<String>,
}

impl RatingView {
    /// Render static HTML markup for the view.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing to a String cannot fail.
        let _ = write!(html, "<div style=\"{}\">", CONTAINER_CSS);
        let _ = write!(html, "<div style=\"{}\">", CENTERED_CSS);
        for symbol in &self.symbols {
            let _ = write!(
                html,
                "<span style=\"{}\" {}=\"{}\">{}</span>",
                escape_html(&symbol.css()),
                INDEX_ATTRIBUTE,
                symbol.index,
                escape_html(&symbol.glyph)
            );
        }
        html.push_str("</div>");
        if let Some(readout) = &self.readout {
            let _ = write!(
                html,
                "<div style=\"{}\">{}</div>",
                CENTERED_CSS,
                escape_html(readout)
            );
        }
        html.push_str("</div>");
        html
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
