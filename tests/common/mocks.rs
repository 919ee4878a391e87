use async_trait::async_trait;
use prediction_relay::{
    Error, Result,
    inference::{APPLICATION_JSON, InferenceClient, InvocationRequest, InvocationResponse},
};
use std::sync::{Arc, Mutex};

/// How the mock endpoint answers an invocation.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Returns the request body unchanged, like an echo model.
    Echo,
    /// Returns this body for every request.
    Respond(String),
    /// Fails every request with an upstream error.
    Fail(String),
}

/// Mock inference client that records every request it receives
#[derive(Debug, Clone)]
pub struct RecordingInferenceClient {
    pub requests: Arc<Mutex<Vec<InvocationRequest>>>,
    pub behavior: MockBehavior,
}

impl RecordingInferenceClient {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            behavior,
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn responding(body: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond(body.into()))
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(error.into()))
    }

    pub fn get_requests(&self) -> Vec<InvocationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for RecordingInferenceClient {
    async fn invoke(&self, request: InvocationRequest) -> Result<InvocationResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let body = match &self.behavior {
            MockBehavior::Echo => request.body,
            MockBehavior::Respond(body) => body.clone().into_bytes(),
            MockBehavior::Fail(error) => return Err(Error::upstream(error.clone())),
        };

        Ok(InvocationResponse {
            body,
            content_type: Some(APPLICATION_JSON.to_string()),
            invoked_production_variant: Some("AllTraffic".to_string()),
        })
    }
}
