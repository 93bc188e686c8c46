//! DOM rendering and per-element listener management.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use starrate_core::render::{CENTERED_CSS, CONTAINER_CSS, INDEX_ATTRIBUTE};
use starrate_core::{RatingConfig, RatingWidget, RowEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

use crate::error::{MountError, MountResult};
use crate::events::{SYMBOL_EVENTS, row_event};

/// An event listener that is removed from its target when dropped.
pub(crate) struct ListenerGuard {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Register `handler` for `kind` events on `target`.
    pub(crate) fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> MountResult<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A widget mounted into a host element.
///
/// Listeners only hold a weak reference back to the mount, so dropping the
/// last strong reference tears everything down.
pub(crate) struct MountedRating {
    this: Weak<RefCell<MountedRating>>,
    widget: RatingWidget<'static>,
    document: Document,
    container: Element,
    row: Element,
    readout: Option<Element>,
    spans: Vec<Element>,
    listeners: Vec<ListenerGuard>,
    on_change: Option<js_sys::Function>,
}

impl MountedRating {
    /// Build the widget elements inside `host` and wire their listeners.
    pub(crate) fn mount(
        host: &Element,
        config: RatingConfig,
        on_change: Option<js_sys::Function>,
    ) -> MountResult<Rc<RefCell<Self>>> {
        let document = host.owner_document().ok_or(MountError::NoDocument)?;
        let container = document.create_element("div")?;
        container.set_attribute("style", CONTAINER_CSS)?;
        let row = document.create_element("div")?;
        row.set_attribute("style", CENTERED_CSS)?;
        container.append_child(&row)?;
        host.append_child(&container)?;

        let mounted = Rc::new_cyclic(|this| {
            RefCell::new(Self {
                this: this.clone(),
                widget: RatingWidget::new(config),
                document,
                container,
                row,
                readout: None,
                spans: Vec::new(),
                listeners: Vec::new(),
                on_change,
            })
        });
        {
            let mut inner = mounted.borrow_mut();
            inner.rebuild_row()?;
            inner.render()?;
        }
        log::debug!("Mounted rating widget");
        Ok(mounted)
    }

    pub(crate) fn widget(&self) -> &RatingWidget<'static> {
        &self.widget
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Apply a new configuration and rebuild the row to match it.
    pub(crate) fn set_config(&mut self, config: RatingConfig) -> MountResult<()> {
        self.widget.set_config(config);
        self.rebuild_row()?;
        self.render()
    }

    /// Replace the row elements and their listeners.
    fn rebuild_row(&mut self) -> MountResult<()> {
        self.listeners.clear();
        for span in self.spans.drain(..) {
            span.remove();
        }

        let editable = self.widget.config().editable;
        let count = self.widget.symbols().len();
        for index in 0..count {
            let span = self.document.create_element("span")?;
            span.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
            if editable {
                span.set_attribute("tabindex", "0")?;
            }
            self.row.append_child(&span)?;
            for kind in SYMBOL_EVENTS {
                let this = self.this.clone();
                let listener = ListenerGuard::attach(&span, kind, move |event: Event| {
                    let key = event.dyn_ref::<KeyboardEvent>().map(|e| e.key());
                    if let Some(mapped) = row_event(kind, index, key.as_deref()) {
                        if kind == "keydown" {
                            event.prevent_default();
                        }
                        dispatch(&this, mapped);
                    }
                })?;
                self.listeners.push(listener);
            }
            self.spans.push(span);
        }
        Ok(())
    }

    /// Bring the elements in line with the widget state.
    fn render(&mut self) -> MountResult<()> {
        let view = self.widget.view();
        for (span, symbol) in self.spans.iter().zip(&view.symbols) {
            span.set_attribute("style", &symbol.css())?;
            span.set_text_content(Some(&symbol.glyph));
        }

        match (view.readout, &self.readout) {
            (Some(text), Some(readout)) => readout.set_text_content(Some(&text)),
            (Some(text), None) => {
                let readout = self.document.create_element("div")?;
                readout.set_attribute("style", CENTERED_CSS)?;
                readout.set_text_content(Some(&text));
                self.container.append_child(&readout)?;
                self.readout = Some(readout);
            }
            (None, Some(_)) => {
                if let Some(readout) = self.readout.take() {
                    readout.remove();
                }
            }
            (None, None) => {}
        }
        Ok(())
    }
}

impl Drop for MountedRating {
    fn drop(&mut self) {
        self.listeners.clear();
        self.container.remove();
        log::debug!("Unmounted rating widget");
    }
}

/// Apply a row event to a mount, re-render it, then notify the page.
fn dispatch(this: &Weak<RefCell<MountedRating>>, event: RowEvent) {
    let Some(mounted) = this.upgrade() else {
        return;
    };
    let notify = {
        let Ok(mut inner) = mounted.try_borrow_mut() else {
            log::warn!("Ignoring re-entrant rating event {:?}", event);
            return;
        };
        let committed = inner.widget.handle(event);
        if let Err(err) = inner.render() {
            log::error!("Failed to render rating widget: {}", err);
        }
        committed.zip(inner.on_change.clone())
    };
    drop(mounted);

    if let Some((value, callback)) = notify {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(value)) {
            wasm_bindgen::throw_val(err);
        }
    }
}
