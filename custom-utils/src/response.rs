use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STATUS_OK: i32 = 200;
pub const STATUS_BAD_REQUEST: i32 = 400;

pub const CONTENT_TYPE: &str = "application/json";
pub const ALLOW_ORIGIN: &str = "*";

/// What every function hands back to the runtime. `body` holds serialized
/// JSON text, not a nested object, because that is what a proxy integration
/// expects.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: i32,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
        ("Access-Control-Allow-Origin".to_string(), ALLOW_ORIGIN.to_string()),
    ])
}

/// Wraps `data` in an envelope with the standard headers.
///
/// The status code is passed through untouched. Fails if `data` cannot be
/// serialized to JSON.
pub fn format_response<T: Serialize + ?Sized>(status_code: i32, data: &T) -> Result<ResponseEnvelope> {
    Ok(ResponseEnvelope {
        status_code,
        headers: default_headers(),
        body: serde_json::to_string(data)?,
    })
}
