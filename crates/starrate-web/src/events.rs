//! DOM event names and their mapping to row events.

use starrate_core::RowEvent;

/// Events listened to on every symbol element.
pub const SYMBOL_EVENTS: [&str; 5] = ["mouseover", "focus", "mouseleave", "click", "keydown"];

/// Keys that activate a focused symbol.
pub const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

/// Translate a DOM event on the symbol at `index` into a row event.
///
/// `key` is the `KeyboardEvent.key` for `keydown` events.
pub fn row_event(kind: &str, index: usize, key: Option<&str>) -> Option<RowEvent> {
    match kind {
        "mouseover" => Some(RowEvent::Hover { index }),
        "focus" => Some(RowEvent::Focus { index }),
        "mouseleave" => Some(RowEvent::Leave),
        "click" => Some(RowEvent::Activate { index }),
        "keydown" => key
            .filter(|key| ACTIVATION_KEYS.contains(key))
            .map(|_| RowEvent::Activate { index }),
        _ => None,
    }
}
