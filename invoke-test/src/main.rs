use anyhow::{anyhow, bail};
use aws_config::BehaviorVersion;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::Client;
use clap::Parser;
use custom_utils::{default_headers, ResponseEnvelope, STATUS_BAD_REQUEST, STATUS_OK};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

const NAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Erin", "Frank", ""];

#[derive(Default)]
struct Stats {
    ok_count: usize,
    bad_request_count: usize,
    error_count: usize,
}

#[derive(Parser, Debug)]
#[command(name = "invoke-test")]
#[command(about = "Invoke a greeting function with sample events and check the responses")]
struct Args {
    /// Lambda function name
    function: String,

    /// Lambda endpoint, e.g. http://localhost:4566 for LocalStack
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Number of iterations to run
    #[arg(long, default_value = "10")]
    iters: usize,

    /// Number of parallel threads
    #[arg(long, default_value = "1")]
    threads: usize,
}

/// The kind of event a function expects, guessed from its name.
#[derive(Clone, Copy, Debug, PartialEq)]
enum EventKind {
    Query,
    Path,
    Body,
}

impl EventKind {
    fn for_function(name: &str) -> Self {
        if name.contains("user") {
            EventKind::Path
        } else if name.contains("post") {
            EventKind::Body
        } else {
            EventKind::Query
        }
    }

    fn sample(self, rng: &mut impl Rng) -> Value {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        match self {
            EventKind::Query => json!({ "queryStringParameters": { "name": name } }),
            EventKind::Path => json!({ "pathParameters": { "user": name } }),
            EventKind::Body if rng.gen_bool(0.2) => json!({ "body": "invalid json" }),
            EventKind::Body => json!({
                "body": json!({ "name": name, "message": "sent by invoke-test" }).to_string()
            }),
        }
    }
}

/// Checks that a reply is a well formed envelope and returns its status code.
fn check_envelope(payload: &str) -> anyhow::Result<i32> {
    let envelope: ResponseEnvelope = serde_json::from_str(payload)?;

    if envelope.headers != default_headers() {
        bail!("unexpected headers {:?}", envelope.headers);
    }
    serde_json::from_str::<Value>(&envelope.body).map_err(|e| anyhow!("body is not JSON: {e}"))?;

    Ok(envelope.status_code)
}

async fn run_invocations(
    client: Arc<Client>,
    function_name: String,
    thread_id: usize,
    start: usize,
    end: usize,
    total: usize,
    stats: Arc<Mutex<Stats>>,
) {
    let mut rng = StdRng::from_entropy();
    let kind = EventKind::for_function(&function_name);

    for i in start..=end {
        let event = kind.sample(&mut rng);

        let result = client
            .invoke()
            .function_name(&function_name)
            .payload(Blob::new(event.to_string()))
            .send()
            .await;

        let outcome = match result {
            Ok(response) => match response.function_error() {
                Some(function_error) => Err(anyhow!("function error: {function_error}")),
                None => {
                    let payload = response
                        .payload()
                        .map(|b| String::from_utf8_lossy(b.as_ref()).to_string())
                        .unwrap_or_default();
                    check_envelope(&payload).map(|status| (status, payload))
                }
            },
            Err(e) => Err(anyhow!("{}", DisplayErrorContext(&e))),
        };

        {
            let mut stats = stats.lock().await;
            match &outcome {
                Ok((STATUS_OK, _)) => stats.ok_count += 1,
                Ok((STATUS_BAD_REQUEST, _)) => stats.bad_request_count += 1,
                _ => stats.error_count += 1,
            }
        }

        match outcome {
            Ok((_, payload)) => println!("[Thread {}: {}/{}] {} => {}", thread_id, i, total, event, payload),
            Err(e) => eprintln!("[Thread {}: {}/{}] {} failed: {:#}", thread_id, i, total, event, e),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.threads == 0 || args.iters < args.threads {
        bail!("--threads must be between 1 and --iters");
    }

    println!(
        "Running {} invocations of {} across {} thread(s)",
        args.iters, args.function, args.threads
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let config = loader.load().await;
    let client = Arc::new(Client::new(&config));

    let stats = Arc::new(Mutex::new(Stats::default()));

    let iters_per_thread = args.iters / args.threads;
    let remainder = args.iters % args.threads;

    let mut tasks = JoinSet::new();

    let mut start = 1;
    for t in 1..=args.threads {
        let end = if t == args.threads {
            start + iters_per_thread - 1 + remainder
        } else {
            start + iters_per_thread - 1
        };

        let client = Arc::clone(&client);
        let function_name = args.function.clone();
        let stats = Arc::clone(&stats);
        let total = args.iters;

        tasks.spawn(async move {
            run_invocations(client, function_name, t, start, end, total, stats).await;
        });

        start = end + 1;
    }

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            eprintln!("Task failed: {}", e);
        }
    }

    let stats = stats.lock().await;
    println!("Completed {} invocations", args.iters);
    println!();
    println!("Results:");
    println!("  200 OK:          {}", stats.ok_count);
    println!("  400 Bad Request: {}", stats.bad_request_count);
    println!("  Errors:          {}", stats.error_count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_follows_function_name() {
        assert_eq!(EventKind::for_function("hello-user-function"), EventKind::Path);
        assert_eq!(EventKind::for_function("hello-post-function"), EventKind::Body);
        assert_eq!(EventKind::for_function("hello-world-function"), EventKind::Query);
    }

    #[test]
    fn body_samples_carry_a_string_body() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let event = EventKind::Body.sample(&mut rng);
            assert!(event["body"].is_string());
        }
    }

    #[test]
    fn accepts_well_formed_envelope() {
        let payload = json!({
            "statusCode": 400,
            "headers": {"Content-Type": "application/json", "Access-Control-Allow-Origin": "*"},
            "body": "{\"error\":\"Invalid JSON in request body\"}"
        });
        assert_eq!(check_envelope(&payload.to_string()).unwrap(), 400);
    }

    #[test]
    fn rejects_missing_headers_and_non_json_body() {
        let no_cors = json!({
            "statusCode": 200,
            "headers": {"Content-Type": "application/json"},
            "body": "{}"
        });
        assert!(check_envelope(&no_cors.to_string()).is_err());

        let bad_body = json!({
            "statusCode": 200,
            "headers": {"Content-Type": "application/json", "Access-Control-Allow-Origin": "*"},
            "body": "Hello"
        });
        assert!(check_envelope(&bad_body.to_string()).is_err());
    }
}
