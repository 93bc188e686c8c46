//! Star rating widget: a row of clickable symbols with hover preview.

use std::hash::Hash;

use egui::{
    Align2, CursorIcon, FontId, Id, Rect, Response, RichText, Sense, Ui, Vec2, Widget, vec2,
};
use starrate_core::{Cursor, RatingConfig, RatingState, RowEvent, RowStyle, SymbolRow, SymbolView};

use crate::colors::RowColors;
use crate::theme;

/// Response from showing a [`StarRow`].
pub struct StarRowResponse {
    /// Events reported by the row this frame, in the order they apply.
    pub events: Vec<RowEvent>,
    /// Response covering the whole row.
    pub response: Response,
}

/// Stateless symbol row: paints one glyph per view and reports events.
///
/// The only memory kept between frames is which symbol the pointer was over,
/// so that entering a symbol and leaving the row are reported once.
pub struct StarRow<'a> {
    id: Id,
    views: &'a [SymbolView],
    colors: RowColors,
}

impl<'a> StarRow<'a> {
    /// Create a row for the given symbol views.
    pub fn new(id: Id, views: &'a [SymbolView], colors: RowColors) -> Self {
        Self { id, views, colors }
    }

    /// Show the row and collect its events.
    pub fn show(self, ui: &mut Ui) -> StarRowResponse {
        let size = self.views.first().map_or(0.0, |view| view.size);
        let desired = vec2(size * self.views.len() as f32, size);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        let mut hovered = None;
        let mut actions = Vec::new();
        for view in self.views {
            let editable = view.cursor == Cursor::Pointer;
            let cell = Rect::from_min_size(
                rect.min + vec2(size * view.index as f32, 0.0),
                Vec2::splat(size),
            );
            let sense = if editable { Sense::click() } else { Sense::hover() };
            let cell_response = ui.interact(cell, self.id.with(view.index), sense);

            if cell_response.hovered() {
                hovered = Some(view.index);
            }
            if cell_response.gained_focus() {
                actions.push(RowEvent::Focus { index: view.index });
            }
            if cell_response.clicked() {
                actions.push(RowEvent::Activate { index: view.index });
            }

            if ui.is_rect_visible(cell) {
                ui.painter().text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    &view.glyph,
                    FontId::proportional(view.size),
                    self.colors.for_symbol(view.active),
                );
            }

            if editable {
                cell_response.on_hover_cursor(CursorIcon::PointingHand);
            }
        }

        let previous = ui
            .data(|d| d.get_temp::<Option<usize>>(self.id))
            .flatten();
        ui.data_mut(|d| d.insert_temp(self.id, hovered));

        let mut events = Vec::with_capacity(actions.len() + 1);
        match (previous, hovered) {
            (_, Some(index)) if previous != Some(index) => events.push(RowEvent::Hover { index }),
            (Some(_), None) => events.push(RowEvent::Leave),
            _ => {}
        }
        events.extend(actions);

        StarRowResponse { events, response }
    }
}

/// Result of showing a [`StarRating`].
pub struct StarRatingResponse {
    /// Response of the symbol row, marked changed when a value was committed.
    pub response: Response,
    /// The committed rating after this frame.
    pub value: u32,
    /// The count shown after this frame.
    pub displayed: u32,
    /// The value committed this frame, if any.
    pub committed: Option<u32>,
    /// Readout text drawn below the row, when enabled.
    pub readout: Option<String>,
}

/// Per-widget state kept in egui memory between frames.
#[derive(Clone)]
struct Mounted {
    config: RatingConfig,
    colors: RowColors,
    state: RatingState,
}

impl Mounted {
    fn new(config: &RatingConfig) -> Self {
        Self {
            config: config.clone(),
            colors: RowColors::from_config(config),
            state: RatingState::new(config),
        }
    }

    fn reconfigure(&mut self, config: &RatingConfig) {
        log::debug!("Rating configuration changed");
        self.config = config.clone();
        self.colors = RowColors::from_config(config);
        self.state.reconfigure(config);
    }
}

/// An egui rating input.
///
/// The committed value lives in egui memory under the widget id and is seeded
/// once from `initial_value`; the rest of the configuration is re-read every
/// frame.
pub struct StarRating<'a> {
    id_salt: Id,
    config: &'a RatingConfig,
    on_change: Option<Box<dyn FnMut(u32) + 'a>>,
}

impl<'a> StarRating<'a> {
    /// Create a rating widget.
    pub fn new(id_salt: impl Hash, config: &'a RatingConfig) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            config,
            on_change: None,
        }
    }

    /// Call `callback` with the new value on every commit.
    pub fn on_change(mut self, callback: impl FnMut(u32) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Show the widget.
    pub fn show(mut self, ui: &mut Ui) -> StarRatingResponse {
        let id = ui.make_persistent_id(self.id_salt);
        let mut mounted = ui
            .data(|d| d.get_temp::<Mounted>(id))
            .unwrap_or_else(|| Mounted::new(self.config));
        if mounted.config != *self.config {
            mounted.reconfigure(self.config);
        }

        let displayed_before = mounted.state.displayed_count();
        let style = RowStyle::from(self.config);
        let views = SymbolRow::new(mounted.state.symbols(), &style).render();
        let show_readout = self.config.show_readout;

        let inner = ui.vertical_centered(|ui| {
            let row = StarRow::new(id.with("row"), &views, mounted.colors).show(ui);
            let mut committed = None;
            for event in row.events {
                if let Some(value) = mounted.state.apply(event, self.config) {
                    committed = Some(value);
                    if let Some(callback) = self.on_change.as_mut() {
                        callback(value);
                    }
                }
            }
            let readout = show_readout.then(|| mounted.state.displayed_count().to_string());
            if let Some(text) = &readout {
                ui.label(RichText::new(text).color(theme::TEXT));
            }
            (row.response, committed, readout)
        });

        let (mut response, committed, readout) = inner.inner;
        if committed.is_some() {
            response.mark_changed();
        }
        let value = mounted.state.value();
        let displayed = mounted.state.displayed_count();
        // The row was painted before this frame's events were applied.
        if displayed != displayed_before || committed.is_some() {
            ui.ctx().request_repaint();
        }
        ui.data_mut(|d| d.insert_temp(id, mounted));

        StarRatingResponse {
            response,
            value,
            displayed,
            committed,
            readout,
        }
    }
}

impl Widget for StarRating<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}
