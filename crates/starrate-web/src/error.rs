//! Mount errors.

use starrate_core::ConfigError;
use thiserror::Error;

/// Errors raised while mounting or reconfiguring a widget on a page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("Invalid rating options: {0}")]
    Options(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No document available")]
    NoDocument,
    #[error("Element not found: {0}")]
    NoElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type for mount operations.
pub type MountResult<T> = Result<T, MountError>;

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        MountError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starrate_core::RatingConfig;

    #[test]
    fn test_config_error_is_transparent() {
        let err = RatingConfig::from_json("[").unwrap_err();
        let message = err.to_string();
        assert_eq!(MountError::from(err).to_string(), message);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MountError::NoElement("stars".into()).to_string(),
            "Element not found: stars"
        );
        assert_eq!(MountError::NoDocument.to_string(), "No document available");
    }
}
