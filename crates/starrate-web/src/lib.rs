//! starrate for web pages
//!
//! Mounts the rating widget into a DOM element. Each symbol is a `<span>`
//! with its own hover, focus, leave, click and keyboard listeners; the
//! listeners are removed again when the widget is unmounted.
//!
//! ```js
//! import init, { mountRatingById } from "./starrate_web.js";
//!
//! await init();
//! const rating = mountRatingById("stars", { symbolCount: 5, showReadout: true },
//!     (value) => console.log("rated", value));
//! ```

pub mod error;
pub mod events;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod web;

pub use error::{MountError, MountResult};
pub use events::{ACTIVATION_KEYS, SYMBOL_EVENTS, row_event};

#[cfg(target_arch = "wasm32")]
pub use web::{RatingHandle, mount_rating, mount_rating_by_id, start};
