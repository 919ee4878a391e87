use super::types::*;
use crate::{Error, Result, config::SageMakerConfig};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sagemakerruntime::{
    Client,
    config::{Region, retry::RetryConfig},
    error::DisplayErrorContext,
    primitives::Blob,
};
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, request: InvocationRequest) -> Result<InvocationResponse>;
}

/// SageMaker Runtime backed client. Built once per process.
#[derive(Debug, Clone)]
pub struct SageMakerClient {
    client: Client,
}

impl SageMakerClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolves region and credentials through the standard AWS provider chain.
    /// SDK retries are disabled: every request gets exactly one attempt.
    pub async fn from_env(config: &SageMakerConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_sagemakerruntime::config::Builder::from(&sdk_config)
            .retry_config(RetryConfig::disabled());
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!("Using SageMaker Runtime endpoint override: {}", endpoint_url);
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl InferenceClient for SageMakerClient {
    async fn invoke(&self, request: InvocationRequest) -> Result<InvocationResponse> {
        debug!(
            "Invoking endpoint {} with {} byte body",
            request.endpoint_name,
            request.body.len()
        );

        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(request.endpoint_name)
            .content_type(request.content_type)
            .accept(request.accept)
            .body(Blob::new(request.body))
            .send()
            .await
            .map_err(|e| {
                Error::upstream(format!("InvokeEndpoint failed: {}", DisplayErrorContext(&e)))
            })?;

        Ok(InvocationResponse {
            body: output
                .body()
                .map(|b| b.as_ref().to_vec())
                .unwrap_or_default(),
            content_type: output.content_type().map(str::to_string),
            invoked_production_variant: output.invoked_production_variant().map(str::to_string),
        })
    }
}
