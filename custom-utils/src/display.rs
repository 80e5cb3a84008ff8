use lambda_runtime::tracing;

pub const LAYER_MESSAGE: &str = "This message comes from a package (via a Lambda Layer)";

/// Builds the welcome line shown to a caller. `name` is embedded as is.
pub fn get_greeting(name: &str) -> String {
    format!("Hello, {name}! Welcome to our serverless application built with LocalStack.")
}

/// Logs and returns a fixed message, so a function can show that it picked
/// up shared code.
pub fn display_something() -> String {
    tracing::info!("{LAYER_MESSAGE}");
    LAYER_MESSAGE.to_string()
}
