//! Symbol row rendering.

use crate::config::RatingConfig;
use crate::widget::SymbolList;

/// Pointer cursor shown over a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Pointing hand, shown on editable rows.
    Pointer,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Styling keys of the configuration that the row needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    pub glyph: String,
    pub size: f32,
    pub active_color: String,
    pub inactive_color: String,
    pub editable: bool,
}

impl From<&RatingConfig> for RowStyle {
    fn from(config: &RatingConfig) -> Self {
        Self {
            glyph: config.symbol_glyph.clone(),
            size: config.symbol_size,
            active_color: config.active_color.clone(),
            inactive_color: config.inactive_color.clone(),
            editable: config.editable,
        }
    }
}

/// Render description of a single symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolView {
    /// Position in the row, reported back with every event.
    pub index: usize,
    /// Text content.
    pub glyph: String,
    /// CSS color.
    pub color: String,
    /// Font size in pixels.
    pub size: f32,
    /// Cursor over the symbol.
    pub cursor: Cursor,
    /// Whether the symbol is active.
    pub active: bool,
}

impl SymbolView {
    /// Inline CSS for a web element showing this symbol.
    pub fn css(&self) -> String {
        format!(
            "position: relative; overflow: hidden; cursor: {}; display: block; float: left; \
             transition: .10s; color: {}; font-size: {}px",
            self.cursor.as_css(),
            self.color,
            self.size
        )
    }
}

/// Stateless renderer turning a symbol list into one view per symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolRow<'a> {
    symbols: &'a SymbolList,
    style: &'a RowStyle,
}

impl<'a> SymbolRow<'a> {
    /// Create a row for the given list and style.
    pub fn new(symbols: &'a SymbolList, style: &'a RowStyle) -> Self {
        Self { symbols, style }
    }

    /// Produce the symbol views, in list order.
    pub fn render(&self) -> Vec<SymbolView> {
        let cursor = if self.style.editable {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| SymbolView {
                index,
                glyph: self.style.glyph.clone(),
                color: if symbol.active {
                    self.style.active_color.clone()
                } else {
                    self.style.inactive_color.clone()
                },
                size: self.style.size,
                cursor,
                active: symbol.active,
            })
            .collect()
    }
}
