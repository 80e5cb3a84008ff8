use custom_utils::{
    format_response, request_id, InboundEvent, ResponseEnvelope, STATUS_BAD_REQUEST, STATUS_OK,
};
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

const FUNCTION_NAME: &str = "hello-post-function";
const DEFAULT_NAME: &str = "Guest";
const EMPTY_BODY: &str = "{}";

#[derive(Error, Debug)]
pub enum BodyError {
    /// The body is not JSON, or is JSON but not an object.
    #[error("Invalid JSON in request body")]
    MalformedBody(#[from] serde_json::Error),
}

#[derive(Serialize)]
pub struct Response {
    message: String,
    function: &'static str,
    received_message: Value,
    request_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Fields read from the request body, with defaults applied.
#[derive(Debug, PartialEq)]
pub(crate) struct Greeting {
    name: String,
    message: Value,
}

pub(crate) fn parse_body(body: Option<&str>) -> Result<Greeting, BodyError> {
    let fields: Map<String, Value> = serde_json::from_str(body.unwrap_or(EMPTY_BODY))?;

    let name = match fields.get("name") {
        None => DEFAULT_NAME.to_string(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
    };
    let message = fields
        .get("message")
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()));

    Ok(Greeting { name, message })
}

pub(crate) async fn function_handler(event: LambdaEvent<InboundEvent>) -> Result<ResponseEnvelope, Error> {
    let (event, context) = event.into_parts();
    tracing::info!(event = %serde_json::to_string(&event)?, "Received event");

    let greeting = match parse_body(event.body.as_deref()) {
        Ok(greeting) => greeting,
        Err(e) => {
            tracing::warn!(error = ?e, "Rejecting request body");
            let response = ErrorResponse { error: e.to_string() };
            return Ok(format_response(STATUS_BAD_REQUEST, &response)?);
        }
    };

    let response = Response {
        message: format!("Hello, {}!", greeting.name),
        function: FUNCTION_NAME,
        received_message: greeting.message,
        request_id: request_id(&context),
    };

    Ok(format_response(STATUS_OK, &response)?)
}
