use super::types::{ProxyEvent, ProxyResponse};
use crate::{
    Error, Result,
    config::SageMakerConfig,
    inference::{InferenceClient, InvocationRequest},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Decodes an event body and returns its `data` field.
///
/// The body must be a JSON object with a `data` key; the value itself may be
/// any JSON, including `null`.
pub fn extract_payload(body: Option<&str>) -> Result<Value> {
    let body = body.ok_or_else(|| Error::decode("event has no body"))?;

    let decoded: Value = serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("body is not valid JSON: {}", e)))?;

    match decoded {
        Value::Object(mut fields) => fields
            .remove("data")
            .ok_or_else(|| Error::decode("body has no `data` field")),
        other => Err(Error::decode(format!(
            "body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Forwards event payloads to a single inference endpoint.
pub struct PredictionRelay {
    client: Arc<dyn InferenceClient>,
    endpoint_name: String,
}

impl PredictionRelay {
    pub fn new(config: &SageMakerConfig, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            client,
            endpoint_name: config.endpoint_name.clone(),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    /// Runs one prediction and returns the endpoint's decoded JSON result.
    pub async fn predict(&self, event: &ProxyEvent, request_id: &str) -> Result<Value> {
        let data = extract_payload(event.body.as_deref())?;
        info!("[{}] Making a prediction on: {}", request_id, data);

        let request = InvocationRequest::json(&self.endpoint_name, serde_json::to_vec(&data)?);
        let response = self.client.invoke(request).await?;
        info!(
            "[{}] Prediction from variant {}: {}",
            request_id,
            response.invoked_production_variant.as_deref().unwrap_or("-"),
            response.body_text()
        );

        serde_json::from_slice(&response.body).map_err(|e| {
            Error::upstream(format!(
                "endpoint {} returned a non-JSON body ({}): {}",
                self.endpoint_name,
                e,
                response.body_text()
            ))
        })
    }

    /// Runs one prediction and wraps the outcome as an HTTP-style response.
    pub async fn handle(&self, event: ProxyEvent, request_id: &str) -> ProxyResponse {
        let result = self
            .predict(&event, request_id)
            .await
            .and_then(|prediction| Ok(serde_json::to_string(&prediction)?));

        match result {
            Ok(body) => ProxyResponse::ok(body),
            Err(e) => {
                error!("[{}] Prediction failed: {}", request_id, e);
                ProxyResponse::error(&e)
            }
        }
    }
}
