//! JavaScript API for mounting rating widgets.

use std::cell::RefCell;
use std::rc::Rc;

use starrate_core::RatingConfig;
use wasm_bindgen::prelude::*;

use crate::dom::MountedRating;
use crate::error::{MountError, MountResult};

/// Initialize panic reporting and logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Decode rating options from a JS object. `undefined` and `null` give the defaults.
fn parse_options(options: JsValue) -> MountResult<RatingConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(RatingConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| MountError::Options(e.to_string()))
}

/// Handle to a mounted widget.
///
/// Keep it alive for as long as the widget should stay on the page; calling
/// `unmount` (or freeing the handle) removes the widget and all its listeners.
#[wasm_bindgen]
pub struct RatingHandle {
    mounted: Rc<RefCell<MountedRating>>,
}

#[wasm_bindgen]
impl RatingHandle {
    /// The committed rating.
    pub fn value(&self) -> u32 {
        self.mounted.borrow().widget().value()
    }

    /// The count currently shown, including hover previews.
    #[wasm_bindgen(js_name = displayedCount)]
    pub fn displayed_count(&self) -> u32 {
        self.mounted.borrow().widget().displayed_count()
    }

    /// Number of DOM listeners currently registered by the widget.
    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.mounted.borrow().listener_count()
    }

    /// Apply new options. The committed value is kept.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, options: JsValue) -> Result<(), JsValue> {
        let config = parse_options(options)?;
        self.mounted.borrow_mut().set_config(config)?;
        Ok(())
    }

    /// Remove the widget and its listeners from the page.
    pub fn unmount(self) {
        drop(self);
    }
}

/// Mount a rating widget as the last child of `host`.
///
/// `options` uses the camelCase configuration keys; `on_change` is called with
/// the new value on every commit.
#[wasm_bindgen(js_name = mountRating)]
pub fn mount_rating(
    host: &web_sys::Element,
    options: JsValue,
    on_change: Option<js_sys::Function>,
) -> Result<RatingHandle, JsValue> {
    let config = parse_options(options)?;
    let mounted = MountedRating::mount(host, config, on_change)?;
    Ok(RatingHandle { mounted })
}

/// Mount a rating widget into the element with id `host_id`.
#[wasm_bindgen(js_name = mountRatingById)]
pub fn mount_rating_by_id(
    host_id: &str,
    options: JsValue,
    on_change: Option<js_sys::Function>,
) -> Result<RatingHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    let host = document
        .get_element_by_id(host_id)
        .ok_or_else(|| MountError::NoElement(host_id.to_string()))?;
    mount_rating(&host, options, on_change)
}
