use lambda_runtime::{run, service_fn, tracing, Error};

mod config;
mod event_handler;
use config::Config;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let variant = config.variant;
    tracing::info!(%variant, "hello-world function starting");

    run(service_fn(move |event| async move { function_handler(variant, event).await })).await
}
