//! CSS color parsing for symbol colors.

use egui::Color32;
use starrate_core::RatingConfig;
use starrate_core::config::{DEFAULT_ACTIVE_COLOR, DEFAULT_INACTIVE_COLOR};

/// Named colors understood besides hex and `rgb()` notation.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("silver", Color32::from_rgb(192, 192, 192)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("gold", Color32::from_rgb(255, 215, 0)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parse a CSS color string: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic name.
pub fn parse_css_color(color: &str) -> Option<Color32> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut channels = args.split(',').map(|c| c.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        return Some(Color32::from_rgb(r, g, b));
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, c)| *c)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Parsed active/inactive colors of a rating row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowColors {
    pub active: Color32,
    pub inactive: Color32,
}

impl Default for RowColors {
    fn default() -> Self {
        Self {
            active: parse_css_color(DEFAULT_ACTIVE_COLOR).unwrap_or(Color32::YELLOW),
            inactive: parse_css_color(DEFAULT_INACTIVE_COLOR).unwrap_or(Color32::GRAY),
        }
    }
}

impl RowColors {
    /// Parse the colors of a configuration, falling back to the defaults.
    pub fn from_config(config: &RatingConfig) -> Self {
        let defaults = Self::default();
        Self {
            active: parse_or_default(&config.active_color, DEFAULT_ACTIVE_COLOR, defaults.active),
            inactive: parse_or_default(
                &config.inactive_color,
                DEFAULT_INACTIVE_COLOR,
                defaults.inactive,
            ),
        }
    }

    /// Color for a symbol.
    pub fn for_symbol(&self, active: bool) -> Color32 {
        if active { self.active } else { self.inactive }
    }
}

fn parse_or_default(color: &str, default_name: &str, default: Color32) -> Color32 {
    parse_css_color(color).unwrap_or_else(|| {
        log::warn!("Unsupported color {:?}, using {}", color, default_name);
        default
    })
}
