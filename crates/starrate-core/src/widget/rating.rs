//! The rating widget component.

use std::fmt;

use super::state::RatingState;
use super::symbols::SymbolList;
use crate::config::RatingConfig;
use crate::event::RowEvent;
use crate::render::{RatingView, RowStyle, SymbolRow};

/// Callback invoked with the new value on every commit.
pub type ChangeCallback<'a> = Box<dyn FnMut(u32) + 'a>;

/// A mounted rating widget.
///
/// Owns the configuration, the interaction state and the optional change
/// callback. It is the only place the committed value changes; every
/// operation updates the state synchronously, so reading [`view`](Self::view)
/// after an event always reflects it.
pub struct RatingWidget<'a> {
    config: RatingConfig,
    state: RatingState,
    on_change: Option<ChangeCallback<'a>>,
}

impl<'a> RatingWidget<'a> {
    /// Mount a widget with the given configuration.
    pub fn new(config: RatingConfig) -> Self {
        let state = RatingState::new(&config);
        Self {
            config,
            state,
            on_change: None,
        }
    }

    /// Attach a change callback.
    pub fn on_change(mut self, callback: impl FnMut(u32) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replace or clear the change callback.
    pub fn set_on_change(&mut self, callback: Option<ChangeCallback<'a>>) {
        self.on_change = callback;
    }

    /// The current configuration.
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// The interaction state.
    pub fn state(&self) -> &RatingState {
        &self.state
    }

    /// The committed rating.
    pub fn value(&self) -> u32 {
        self.state.value()
    }

    /// The count currently shown.
    pub fn displayed_count(&self) -> u32 {
        self.state.displayed_count()
    }

    /// The symbol list for the displayed count.
    pub fn symbols(&self) -> &SymbolList {
        self.state.symbols()
    }

    /// Text of the numeric readout, if enabled.
    pub fn readout(&self) -> Option<String> {
        self.config
            .show_readout
            .then(|| self.state.displayed_count().to_string())
    }

    /// Apply a new configuration, keeping the committed value.
    pub fn set_config(&mut self, config: RatingConfig) {
        log::debug!(
            "Reconfiguring rating widget ({} symbols, editable: {})",
            config.symbol_count,
            config.editable
        );
        self.config = config;
        self.state.reconfigure(&self.config);
    }

    /// Set the displayed count and rebuild the symbol list.
    pub fn set_displayed_active_count(&mut self, count: u32) {
        self.state.set_displayed_active_count(count, &self.config);
    }

    /// Derive and display the list for `active_count`, or the committed value.
    pub fn compute_symbol_list(&mut self, active_count: Option<u32>) -> &SymbolList {
        self.state.compute_symbol_list(active_count, &self.config)
    }

    /// Preview the rating of the hovered symbol.
    pub fn on_hover_symbol(&mut self, index: usize) {
        self.state.hover(index, &self.config);
    }

    /// Focus previews like hover.
    pub fn on_focus_symbol(&mut self, index: usize) {
        self.state.hover(index, &self.config);
    }

    /// Revert any preview to the committed value.
    pub fn on_pointer_leave(&mut self) {
        self.state.leave(&self.config);
    }

    /// Commit the rating of the activated symbol and notify the callback.
    pub fn on_commit_symbol(&mut self, index: usize) -> Option<u32> {
        let value = self.state.commit(index, &self.config)?;
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        Some(value)
    }

    /// Dispatch a row event. Returns the new value when it was a commit.
    pub fn handle(&mut self, event: RowEvent) -> Option<u32> {
        match event {
            RowEvent::Hover { index } => {
                self.on_hover_symbol(index);
                None
            }
            RowEvent::Focus { index } => {
                self.on_focus_symbol(index);
                None
            }
            RowEvent::Leave => {
                self.on_pointer_leave();
                None
            }
            RowEvent::Activate { index } => self.on_commit_symbol(index),
        }
    }

    /// Render description of the whole widget.
    pub fn view(&self) -> RatingView {
        let style = RowStyle::from(&self.config);
        RatingView {
            symbols: SymbolRow::new(self.state.symbols(), &style).render(),
            readout: self.readout(),
        }
    }
}

impl fmt::Debug for RatingWidget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn flags(widget: &RatingWidget<'_>) -> Vec<bool> {
        widget.symbols().iter().map(|s| s.active).collect()
    }

    #[test]
    fn test_initial_render() {
        let widget = RatingWidget::new(RatingConfig::new().with_initial_value(2));
        assert_eq!(flags(&widget), vec![true, true, false, false, false]);
        assert_eq!(widget.value(), 2);
    }

    #[test]
    fn test_hover_does_not_commit() {
        let calls = RefCell::new(Vec::new());
        let mut widget =
            RatingWidget::new(RatingConfig::new()).on_change(|v| calls.borrow_mut().push(v));
        widget.on_hover_symbol(3);
        assert_eq!(widget.symbols().active_count(), 4);
        assert_eq!(widget.value(), 0);
        drop(widget);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_leave_reverts() {
        let mut widget = RatingWidget::new(RatingConfig::new());
        widget.on_hover_symbol(3);
        widget.on_pointer_leave();
        assert_eq!(widget.symbols().active_count(), 0);
        assert_eq!(widget.displayed_count(), 0);
    }

    #[test]
    fn test_commit_fires_callback_once() {
        let calls = RefCell::new(Vec::new());
        let mut widget =
            RatingWidget::new(RatingConfig::new()).on_change(|v| calls.borrow_mut().push(v));
        assert_eq!(widget.on_commit_symbol(3), Some(4));
        assert_eq!(widget.value(), 4);
        assert_eq!(widget.symbols().active_count(), 4);
        drop(widget);
        assert_eq!(*calls.borrow(), vec![4]);
    }

    #[test]
    fn test_read_only_is_frozen() {
        let calls = RefCell::new(0);
        let config = RatingConfig::new().with_editable(false).with_initial_value(2);
        let mut widget = RatingWidget::new(config).on_change(|_| *calls.borrow_mut() += 1);
        let before = widget.state().clone();

        widget.on_hover_symbol(4);
        widget.on_focus_symbol(0);
        widget.on_pointer_leave();
        assert_eq!(widget.on_commit_symbol(1), None);
        assert_eq!(widget.handle(RowEvent::Activate { index: 3 }), None);

        assert_eq!(widget.state(), &before);
        drop(widget);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_empty_row() {
        let config = RatingConfig::new().with_symbol_count(0).with_initial_value(3);
        let mut widget = RatingWidget::new(config);
        assert!(widget.symbols().is_empty());
        assert_eq!(widget.value(), 0);
        widget.on_hover_symbol(0);
        assert!(widget.symbols().is_empty());
        assert_eq!(widget.displayed_count(), 0);
        assert!(widget.view().symbols.is_empty());
    }

    #[test]
    fn test_leave_is_idempotent() {
        let mut widget = RatingWidget::new(RatingConfig::new().with_initial_value(1));
        widget.on_hover_symbol(4);
        widget.on_pointer_leave();
        let once = widget.state().clone();
        widget.on_pointer_leave();
        assert_eq!(widget.state(), &once);
    }

    #[test]
    fn test_handle_dispatch() {
        let mut widget = RatingWidget::new(RatingConfig::new());
        assert_eq!(widget.handle(RowEvent::Focus { index: 1 }), None);
        assert_eq!(widget.displayed_count(), 2);
        assert_eq!(widget.handle(RowEvent::Activate { index: 2 }), Some(3));
        assert_eq!(widget.handle(RowEvent::Hover { index: 4 }), None);
        assert_eq!(widget.handle(RowEvent::Leave), None);
        assert_eq!(widget.displayed_count(), 3);
    }

    #[test]
    fn test_readout_tracks_display() {
        let mut widget = RatingWidget::new(RatingConfig::new().with_readout(true));
        assert_eq!(widget.readout().as_deref(), Some("0"));
        widget.on_hover_symbol(2);
        assert_eq!(widget.readout().as_deref(), Some("3"));
        assert_eq!(widget.view().readout.as_deref(), Some("3"));

        let hidden = RatingWidget::new(RatingConfig::new());
        assert_eq!(hidden.readout(), None);
    }

    #[test]
    fn test_set_config_rederives_style() {
        let mut widget = RatingWidget::new(RatingConfig::new());
        widget.on_commit_symbol(1);
        widget.set_config(RatingConfig::new().with_colors("red", "blue").with_initial_value(5));
        assert_eq!(widget.value(), 2);
        let view = widget.view();
        assert_eq!(view.symbols[0].color, "red");
        assert_eq!(view.symbols[2].color, "blue");
    }

    #[test]
    fn test_set_on_change_replaces_callback() {
        let first = RefCell::new(0);
        let second = RefCell::new(0);
        let mut widget =
            RatingWidget::new(RatingConfig::new()).on_change(|_| *first.borrow_mut() += 1);
        widget.on_commit_symbol(0);
        widget.set_on_change(Some(Box::new(|_: u32| *second.borrow_mut() += 1)));
        widget.on_commit_symbol(1);
        widget.set_on_change(None);
        widget.on_commit_symbol(2);
        drop(widget);
        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
    }
}
