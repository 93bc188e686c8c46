//! Interaction state of a rating widget.

use super::symbols::{SymbolList, derive_symbol_list};
use crate::config::RatingConfig;
use crate::event::{RowEvent, count_for_index};

/// Committed value, displayed count and the derived symbol list.
///
/// The state does not own its configuration; every transition takes the
/// current [`RatingConfig`] so front-ends that re-read configuration on each
/// frame (egui) can keep only this struct between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingState {
    committed: u32,
    displayed: u32,
    symbols: SymbolList,
}

impl RatingState {
    /// Create the mount-time state, seeded from `config.initial_value`.
    pub fn new(config: &RatingConfig) -> Self {
        let committed = config.clamp_count(config.initial_value);
        let mut state = Self {
            committed,
            displayed: committed,
            symbols: SymbolList::default(),
        };
        state.set_displayed_active_count(committed, config);
        state
    }

    /// The committed rating.
    pub fn value(&self) -> u32 {
        self.committed
    }

    /// The count currently shown, which previews hovers.
    pub fn displayed_count(&self) -> u32 {
        self.displayed
    }

    /// The symbol list for the displayed count.
    pub fn symbols(&self) -> &SymbolList {
        &self.symbols
    }

    /// Whether a hover preview is currently shown.
    pub fn is_previewing(&self) -> bool {
        self.displayed != self.committed
    }

    /// Set the displayed count and rebuild the symbol list in the same step.
    pub fn set_displayed_active_count(&mut self, count: u32, config: &RatingConfig) {
        self.displayed = config.clamp_count(count);
        self.symbols = derive_symbol_list(self.displayed, config.symbol_count);
    }

    /// Derive the list for `active_count`, or the committed value when `None`,
    /// and make it the displayed one.
    pub fn compute_symbol_list(
        &mut self,
        active_count: Option<u32>,
        config: &RatingConfig,
    ) -> &SymbolList {
        let count = active_count.unwrap_or(self.committed);
        self.set_displayed_active_count(count, config);
        &self.symbols
    }

    /// Preview the rating selected by the symbol at `index`.
    pub fn hover(&mut self, index: usize, config: &RatingConfig) {
        if !config.editable {
            return;
        }
        let count = count_for_index(index);
        log::trace!("Previewing rating {}", count);
        self.set_displayed_active_count(count, config);
    }

    /// Drop any preview and show the committed value again.
    pub fn leave(&mut self, config: &RatingConfig) {
        if !config.editable {
            return;
        }
        self.compute_symbol_list(None, config);
    }

    /// Commit the rating selected by the symbol at `index`.
    ///
    /// Returns the new value, or `None` when the widget is read-only.
    pub fn commit(&mut self, index: usize, config: &RatingConfig) -> Option<u32> {
        if !config.editable {
            return None;
        }
        self.committed = config.clamp_count(count_for_index(index));
        self.set_displayed_active_count(self.committed, config);
        log::debug!("Committed rating {}", self.committed);
        Some(self.committed)
    }

    /// Apply a row event. Returns the new value when the event committed one.
    pub fn apply(&mut self, event: RowEvent, config: &RatingConfig) -> Option<u32> {
        match event {
            RowEvent::Hover { index } | RowEvent::Focus { index } => {
                self.hover(index, config);
                None
            }
            RowEvent::Leave => {
                self.leave(config);
                None
            }
            RowEvent::Activate { index } => self.commit(index, config),
        }
    }

    /// Re-derive the state for a new configuration.
    ///
    /// The committed value survives (clamped to the new symbol count); the
    /// displayed count is reset to it.
    pub fn reconfigure(&mut self, config: &RatingConfig) {
        self.committed = config.clamp_count(self.committed);
        self.set_displayed_active_count(self.committed, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_from_initial_value() {
        let config = RatingConfig::new().with_initial_value(2);
        let state = RatingState::new(&config);
        assert_eq!(state.value(), 2);
        assert_eq!(state.displayed_count(), 2);
        assert_eq!(state.symbols().active_count(), 2);
        assert!(!state.is_previewing());
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let config = RatingConfig::new().with_symbol_count(3).with_initial_value(8);
        let state = RatingState::new(&config);
        assert_eq!(state.value(), 3);
        assert_eq!(state.symbols().len(), 3);
    }

    #[test]
    fn test_hover_previews() {
        let config = RatingConfig::new();
        let mut state = RatingState::new(&config);
        state.hover(1, &config);
        assert_eq!(state.displayed_count(), 2);
        assert_eq!(state.value(), 0);
        assert!(state.is_previewing());
    }

    #[test]
    fn test_compute_symbol_list_sets_display() {
        let config = RatingConfig::new().with_initial_value(1);
        let mut state = RatingState::new(&config);
        assert_eq!(state.compute_symbol_list(Some(4), &config).active_count(), 4);
        assert_eq!(state.displayed_count(), 4);
        assert_eq!(state.compute_symbol_list(None, &config).active_count(), 1);
        assert_eq!(state.displayed_count(), 1);
    }

    #[test]
    fn test_apply_focus_behaves_like_hover() {
        let config = RatingConfig::new();
        let mut hovered = RatingState::new(&config);
        let mut focused = RatingState::new(&config);
        hovered.apply(RowEvent::Hover { index: 2 }, &config);
        focused.apply(RowEvent::Focus { index: 2 }, &config);
        assert_eq!(hovered, focused);
    }

    #[test]
    fn test_apply_activate_commits() {
        let config = RatingConfig::new();
        let mut state = RatingState::new(&config);
        assert_eq!(state.apply(RowEvent::Activate { index: 4 }, &config), Some(5));
        assert_eq!(state.apply(RowEvent::Leave, &config), None);
        assert_eq!(state.value(), 5);
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let config = RatingConfig::new().with_symbol_count(2);
        let mut state = RatingState::new(&config);
        state.hover(9, &config);
        assert_eq!(state.displayed_count(), 2);
        assert_eq!(state.commit(usize::MAX, &config), Some(2));
    }

    #[test]
    fn test_reconfigure_keeps_value() {
        let config = RatingConfig::new();
        let mut state = RatingState::new(&config);
        state.commit(3, &config);
        state.hover(0, &config);

        let wider = config.clone().with_symbol_count(10).with_initial_value(7);
        state.reconfigure(&wider);
        assert_eq!(state.value(), 4);
        assert_eq!(state.displayed_count(), 4);
        assert_eq!(state.symbols().len(), 10);

        let narrower = wider.with_symbol_count(2);
        state.reconfigure(&narrower);
        assert_eq!(state.value(), 2);
        assert_eq!(state.symbols().len(), 2);
    }

    #[test]
    fn test_invariants_hold_across_events() {
        let config = RatingConfig::new().with_symbol_count(4).with_initial_value(9);
        let mut state = RatingState::new(&config);
        let events = [
            RowEvent::Hover { index: 7 },
            RowEvent::Activate { index: 2 },
            RowEvent::Focus { index: 0 },
            RowEvent::Leave,
            RowEvent::Activate { index: 10 },
            RowEvent::Hover { index: 1 },
        ];
        for event in events {
            state.apply(event, &config);
            assert!(state.value() <= config.symbol_count);
            assert!(state.displayed_count() <= config.symbol_count);
            assert_eq!(state.symbols().len(), 4);
            assert_eq!(state.symbols().active_count() as u32, state.displayed_count());
        }
    }
}
