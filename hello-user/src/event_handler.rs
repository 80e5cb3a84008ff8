use custom_utils::{format_response, request_id, InboundEvent, ResponseEnvelope, STATUS_OK};
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

const FUNCTION_NAME: &str = "hello-user-function";
const DEFAULT_USER: &str = "Guest";

#[derive(Serialize)]
pub struct Response {
    message: String,
    function: &'static str,
    user: String,
    request_id: String,
}

/// Greets the `{user}` path parameter, or a guest when the route had none.
/// An empty `user` is kept as is.
pub(crate) async fn function_handler(event: LambdaEvent<InboundEvent>) -> Result<ResponseEnvelope, Error> {
    let (event, context) = event.into_parts();
    tracing::info!(event = %serde_json::to_string(&event)?, "Received event");

    let user = event.path_parameter("user").unwrap_or(DEFAULT_USER).to_string();

    let response = Response {
        message: format!("Hello, {user}!"),
        function: FUNCTION_NAME,
        user,
        request_id: request_id(&context),
    };

    Ok(format_response(STATUS_OK, &response)?)
}
