//! `data:` URIs for inline image payloads.

use base64::engine::{general_purpose::STANDARD, Engine};
use thiserror::Error;

use crate::mime::{get_mime_type, DetectionError};

const DATA_URI_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid data URI")]
    InvalidDataUri,

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Format an encoded image as `data:image/<type>;base64,<payload>`.
///
/// An empty payload means "no image" and yields an empty string, not an error.
/// Detection failures are returned as-is.
pub fn get_payload_data_uri(payload: &[u8]) -> Result<String, DetectionError> {
    if payload.is_empty() {
        return Ok(String::new());
    }

    let mime_type = get_mime_type(payload)?;

    let mut uri = String::with_capacity(
        DATA_URI_PREFIX.len() + mime_type.len() + BASE64_MARKER.len() + payload.len().div_ceil(3) * 4,
    );
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(mime_type);
    uri.push_str(BASE64_MARKER);
    STANDARD.encode_string(payload, &mut uri);

    Ok(uri)
}

/// Decode the payload of a `data:image/<type>;base64,<data>` URI.
pub fn get_payload_from_uri(uri: &str) -> Result<Vec<u8>, PayloadError> {
    let rest = uri.strip_prefix(DATA_URI_PREFIX).ok_or(PayloadError::InvalidDataUri)?;
    let (subtype, data) = rest.split_once(BASE64_MARKER).ok_or(PayloadError::InvalidDataUri)?;

    if subtype.is_empty() || subtype.contains([';', ',']) {
        return Err(PayloadError::InvalidDataUri);
    }

    Ok(STANDARD.decode(data)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
