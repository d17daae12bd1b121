//! AWS Lambda entry point.
//!
//! Settings and collaborators are rebuilt for every invocation; only the
//! tracing subscriber lives for the whole process.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use resizer_core::{InvocationResult, Settings};
use resizer_infra::init_telemetry;
use resizer_lambda::handle_payload;
use tracing::Instrument;

async fn function_handler(event: LambdaEvent<serde_json::Value>) -> Result<InvocationResult, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    async move {
        let settings = Settings::from_env();
        let result = handle_payload(&settings, payload).await;
        tracing::info!(status_code = result.status_code, body = %result.body, "Invocation finished");
        Ok(result)
    }
    .instrument(span)
    .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::from_env();
    init_telemetry(settings.log_format)?;

    tracing::info!(
        environment = %settings.environment,
        storage_backend = %settings.storage_backend,
        notifier_backend = %settings.notifier_backend,
        "Starting resizer"
    );

    run(service_fn(function_handler)).await
}
