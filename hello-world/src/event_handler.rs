use crate::config::Variant;
use custom_utils::{
    default_headers, display_something, format_response, get_greeting, request_id, InboundEvent,
    ResponseEnvelope, STATUS_OK,
};
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

const FUNCTION_NAME: &str = "hello-world-function";
const MESSAGE: &str = "Hello from LocalStack Lambda!";
const DEFAULT_NAME: &str = "World";

#[derive(Serialize)]
pub struct Response {
    message: String,
    function: &'static str,
    request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer_message: Option<String>,
}

pub(crate) async fn function_handler(
    variant: Variant,
    event: LambdaEvent<InboundEvent>,
) -> Result<ResponseEnvelope, Error> {
    let (event, context) = event.into_parts();
    tracing::info!(event = %serde_json::to_string(&event)?, "Received event");

    let request_id = request_id(&context);

    match variant {
        Variant::Plain => plain(request_id, None),
        Variant::Layer => plain(request_id, Some(display_something())),
        Variant::Greeting => greeting(&event, request_id),
    }
}

fn plain(request_id: String, layer_message: Option<String>) -> Result<ResponseEnvelope, Error> {
    let response = Response {
        message: MESSAGE.to_string(),
        function: FUNCTION_NAME,
        request_id,
        layer_message,
    };

    Ok(ResponseEnvelope {
        status_code: STATUS_OK,
        headers: default_headers(),
        body: serde_json::to_string(&response)?,
    })
}

fn greeting(event: &InboundEvent, request_id: String) -> Result<ResponseEnvelope, Error> {
    let name = event.query_parameter("name").unwrap_or(DEFAULT_NAME);

    let response = Response {
        message: get_greeting(name),
        function: FUNCTION_NAME,
        request_id,
        layer_message: None,
    };

    Ok(format_response(STATUS_OK, &response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_utils::LAYER_MESSAGE;
    use lambda_runtime::Context;
    use serde_json::{json, Value};

    fn context(request_id: &str) -> Context {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        context
    }

    async fn invoke(variant: Variant, event: Value, context: Context) -> (ResponseEnvelope, Value) {
        let event = serde_json::from_value(event).expect("valid event");
        let response = function_handler(variant, LambdaEvent::new(event, context))
            .await
            .expect("expected Ok(_) value");
        let body = serde_json::from_str(&response.body).expect("body is JSON");
        (response, body)
    }

    #[tokio::test]
    async fn plain_returns_fixed_message() {
        let (response, body) = invoke(Variant::Plain, json!({}), context("test-request-id")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, default_headers());
        assert_eq!(
            body,
            json!({
                "message": "Hello from LocalStack Lambda!",
                "function": "hello-world-function",
                "request_id": "test-request-id"
            })
        );
    }

    #[tokio::test]
    async fn plain_ignores_event_fields() {
        let event = json!({
            "pathParameters": {"user": "Someone"},
            "queryStringParameters": {"name": "Bob"},
            "body": "not json"
        });
        let (_, with_fields) = invoke(Variant::Plain, event, context("id")).await;
        let (_, without) = invoke(Variant::Plain, json!({}), context("id")).await;

        assert_eq!(with_fields, without);
    }

    #[tokio::test]
    async fn missing_request_id_defaults() {
        let (_, body) = invoke(Variant::Plain, json!({}), Context::default()).await;
        assert_eq!(body["request_id"], "N/A");
    }

    #[tokio::test]
    async fn layer_adds_layer_message() {
        let (response, body) = invoke(Variant::Layer, json!({}), context("id")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(body["message"], "Hello from LocalStack Lambda!");
        assert_eq!(body["layer_message"], LAYER_MESSAGE);
    }

    #[tokio::test]
    async fn greeting_uses_query_name() {
        let event = json!({"queryStringParameters": {"name": "Alice"}});
        let (response, body) = invoke(Variant::Greeting, event, context("id")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body["message"],
            "Hello, Alice! Welcome to our serverless application built with LocalStack."
        );
    }

    #[tokio::test]
    async fn greeting_defaults_to_world() {
        let event = json!({"queryStringParameters": null});
        let (_, body) = invoke(Variant::Greeting, event, context("id")).await;

        assert_eq!(
            body["message"],
            "Hello, World! Welcome to our serverless application built with LocalStack."
        );
    }

    #[tokio::test]
    async fn inline_and_formatted_envelopes_have_same_shape() {
        let (plain, plain_body) = invoke(Variant::Plain, json!({}), context("id")).await;
        let (greeting, greeting_body) = invoke(Variant::Greeting, json!({}), context("id")).await;

        assert_eq!(plain.status_code, greeting.status_code);
        assert_eq!(plain.headers, greeting.headers);

        let keys = |body: &Value| {
            let mut keys: Vec<String> = body.as_object().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(&plain_body), keys(&greeting_body));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let first = invoke(Variant::Greeting, json!({}), context("same-id")).await;
        let second = invoke(Variant::Greeting, json!({}), context("same-id")).await;
        assert_eq!(first, second);
    }
}
