//! Sizefit WASM - WebAssembly bindings for Sizefit
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `encode` - JPEG encoding bindings (fixed quality and best size)
//! - `payload` - `data:` URI formatting and parsing
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_to_best_size, get_payload_data_uri, JsDecodedImage } from '@sizefit/wasm';
//!
//! await init();
//!
//! const image = new JsDecodedImage(width, height, rgbPixels);
//! const jpeg = encode_to_best_size(image, 1);
//! img.src = get_payload_data_uri(jpeg);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod payload;
mod types;

// Re-export public types
pub use encode::{encode_jpeg, encode_to_best_size, encode_to_best_size_with_config};
pub use payload::{get_payload_data_uri, get_payload_from_uri};
pub use types::JsDecodedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
