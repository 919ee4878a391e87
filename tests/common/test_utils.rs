use super::RecordingInferenceClient;
use prediction_relay::{
    config::SageMakerConfig,
    relay::{PredictionRelay, ProxyEvent},
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_ENDPOINT: &str = "test-endpoint";

/// Create a SageMaker configuration pointing at the test endpoint
pub fn create_test_config() -> SageMakerConfig {
    SageMakerConfig {
        endpoint_name: TEST_ENDPOINT.to_string(),
        region: Some("us-east-1".to_string()),
        endpoint_url: None,
    }
}

/// Create a relay backed by the given mock client
pub fn create_test_relay(client: &RecordingInferenceClient) -> Arc<PredictionRelay> {
    Arc::new(PredictionRelay::new(
        &create_test_config(),
        Arc::new(client.clone()),
    ))
}

/// Create an event whose body is `{"data": <data>}`
pub fn create_event(data: Value) -> ProxyEvent {
    ProxyEvent::new(serde_json::json!({ "data": data }).to_string())
}
