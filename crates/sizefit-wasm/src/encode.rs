//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode RGB pixel data to JPEG bytes at a fixed quality
//! - [`encode_to_best_size`] - Best-quality JPEG within a size category's budget
//! - [`encode_to_best_size_with_config`] - Same, with caller-supplied limits
//!
//! # Example
//!
//! ```typescript
//! import { encode_to_best_size, JsDecodedImage } from '@sizefit/wasm';
//!
//! const image = new JsDecodedImage(80, 80, pixels);
//! const jpeg = encode_to_best_size(image, 0); // 0 = small, 1 = large
//! ```

use crate::types::JsDecodedImage;
use sizefit_core::{encode, BestSizeEncoder, EncoderConfig, ResizeDimension};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image at the highest quality that fits the size category.
///
/// `dimension` is 0 for small, 1 for large; any other value is an error.
///
/// # Errors
///
/// Returns an error if the codec rejects the image, or if even the lowest
/// quality exceeds the category's maximum size.
#[wasm_bindgen]
pub fn encode_to_best_size(image: &JsDecodedImage, dimension: u8) -> Result<Vec<u8>, JsValue> {
    best_size(EncoderConfig::default(), image, dimension).map_err(|e| JsValue::from_str(&e))
}

/// Like [`encode_to_best_size`], with an `EncoderConfig` object from JavaScript.
///
/// Missing fields fall back to the built-in defaults:
///
/// ```typescript
/// encode_to_best_size_with_config(image, 1, {
///   maxQuality: 90,
///   minQuality: 40,
///   limits: { small: { ideal: 4096, max: 8192 }, large: { ideal: 32768, max: 65536 } },
/// });
/// ```
#[wasm_bindgen]
pub fn encode_to_best_size_with_config(
    image: &JsDecodedImage,
    dimension: u8,
    config: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let config: EncoderConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    best_size(config, image, dimension).map_err(|e| JsValue::from_str(&e))
}

fn best_size(config: EncoderConfig, image: &JsDecodedImage, dimension: u8) -> Result<Vec<u8>, String> {
    config.validate().map_err(|e| e.to_string())?;
    let dimension = ResizeDimension::try_from(dimension).map_err(|e| e.to_string())?;

    BestSizeEncoder::new(config)
        .encode_best(&image.to_decoded(), dimension)
        .map_err(|e| e.to_string())
}
