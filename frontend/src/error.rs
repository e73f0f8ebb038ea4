use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons an animation session could not be set up. None of these are fatal:
/// the section renders its content statically instead.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("{group} is not attached to the document yet")]
    Detached { group: &'static str },
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected the request: {0}")]
    Browser(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_message_names_the_group() {
        let err = SetupError::Detached { group: "gallery items" };
        assert_eq!(err.to_string(), "gallery items is not attached to the document yet");
    }
}
