//! Data URI WASM bindings.

use sizefit_core::payload;
use wasm_bindgen::prelude::*;

/// Format encoded image bytes as a `data:image/...;base64,` URI.
///
/// Empty input returns an empty string.
#[wasm_bindgen]
pub fn get_payload_data_uri(bytes: &[u8]) -> Result<String, JsValue> {
    payload::get_payload_data_uri(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode the bytes carried by a `data:image/...;base64,` URI.
#[wasm_bindgen]
pub fn get_payload_from_uri(uri: &str) -> Result<Vec<u8>, JsValue> {
    payload::get_payload_from_uri(uri).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_empty_payload() {
        assert_eq!(get_payload_data_uri(&[]).unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn test_round_trip() {
        let payload = [0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3];
        let uri = get_payload_data_uri(&payload).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(get_payload_from_uri(&uri).unwrap(), payload.to_vec());
    }

    #[wasm_bindgen_test]
    fn test_unknown_payload_is_error() {
        assert!(get_payload_data_uri(b"plain text").is_err());
    }
}
