mod predictor;
mod types;

pub use predictor::{PredictionRelay, extract_payload};
pub use types::{ErrorResponse, ProxyEvent, ProxyResponse};
