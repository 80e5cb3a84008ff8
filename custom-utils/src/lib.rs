//! Code shared by the greeting functions: the response envelope every
//! function returns, the inbound event they all accept, and a couple of
//! small helpers for building greetings.

mod display;
mod errors;
mod event;
mod response;

pub use display::{display_something, get_greeting, LAYER_MESSAGE};
pub use errors::{Result, UtilsError};
pub use event::{request_id, InboundEvent, MISSING_REQUEST_ID};
pub use response::{
    default_headers, format_response, ResponseEnvelope, ALLOW_ORIGIN, CONTENT_TYPE,
    STATUS_BAD_REQUEST, STATUS_OK,
};
