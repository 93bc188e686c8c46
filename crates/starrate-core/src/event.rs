//! Events reported by a rendered symbol row.

use serde::{Deserialize, Serialize};

/// An interaction reported by one element of a symbol row.
///
/// Front-ends translate their native events (egui responses, DOM listeners)
/// into these and hand them to [`RatingWidget::handle`](crate::RatingWidget::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowEvent {
    /// Pointer entered the symbol at `index`.
    Hover { index: usize },
    /// Keyboard focus entered the symbol at `index`.
    Focus { index: usize },
    /// The symbol at `index` was clicked or activated from the keyboard.
    Activate { index: usize },
    /// Pointer left the row.
    Leave,
}

impl RowEvent {
    /// Index of the symbol the event targets, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            RowEvent::Hover { index } | RowEvent::Focus { index } | RowEvent::Activate { index } => {
                Some(index)
            }
            RowEvent::Leave => None,
        }
    }

    /// Whether the event commits a value.
    pub fn is_commit(&self) -> bool {
        matches!(self, RowEvent::Activate { .. })
    }
}

/// Count of active symbols selected by the symbol at `index`.
pub(crate) fn count_for_index(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)
}
