pub const APPLICATION_JSON: &str = "application/json";

/// One `InvokeEndpoint` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub endpoint_name: String,
    pub body: Vec<u8>,
    pub content_type: String,
    pub accept: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
    pub invoked_production_variant: Option<String>,
}

impl InvocationRequest {
    /// Builds a request that sends and accepts `application/json`.
    pub fn json(endpoint_name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            body: body.into(),
            content_type: APPLICATION_JSON.to_string(),
            accept: APPLICATION_JSON.to_string(),
        }
    }
}

impl InvocationResponse {
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
