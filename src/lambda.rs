use crate::{
    Error, Result,
    relay::{PredictionRelay, ProxyEvent, ProxyResponse},
};
use lambda_runtime::{LambdaEvent, service_fn};
use std::sync::Arc;
use tracing::info;

/// Request failures come back as non-200 responses, never as runtime errors.
pub async fn handler(
    relay: Arc<PredictionRelay>,
    event: LambdaEvent<ProxyEvent>,
) -> std::result::Result<ProxyResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    Ok(relay.handle(payload, &context.request_id).await)
}

pub async fn run(relay: Arc<PredictionRelay>) -> Result<()> {
    info!(
        "Starting Lambda runtime for endpoint {}",
        relay.endpoint_name()
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyEvent>| {
        handler(Arc::clone(&relay), event)
    }))
    .await
    .map_err(|e| Error::runtime(e.to_string()))
}
