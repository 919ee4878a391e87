use serde::{Deserialize, Serialize};

/// HTTP-style trigger event. Only `body` is read; everything else the
/// platform sends along is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ProxyEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

impl ProxyResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    pub fn error(error: &crate::Error) -> Self {
        let payload = ErrorResponse {
            error: error.to_string(),
        };
        Self {
            status_code: error.status_code(),
            body: serde_json::to_string(&payload).unwrap_or_default(),
        }
    }
}
