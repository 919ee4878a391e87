mod client;
mod types;

pub use client::{InferenceClient, SageMakerClient};
#[cfg(test)]
pub use client::MockInferenceClient;
pub use types::{APPLICATION_JSON, InvocationRequest, InvocationResponse};
