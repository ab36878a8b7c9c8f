//! Response body decoding by requested response type.

use crate::error::FetchError;

use super::{Decoded, ResponseType};

/// Decodes a raw response body as `response_type`.
pub fn decode(body: &[u8], response_type: ResponseType) -> Result<Decoded, FetchError> {
    match response_type {
        ResponseType::Json => Ok(Decoded::Json(serde_json::from_slice(body)?)),
        ResponseType::Text => Ok(Decoded::Text(String::from_utf8_lossy(body).into_owned())),
        ResponseType::Binary => Ok(Decoded::Binary(body.to_vec())),
    }
}
