use std::sync::Arc;
use std::time::Duration;

use insightful_logging::{engine_debug, engine_warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{build_client, parse_endpoint, post_json};
use crate::{EngineConfig, FailureKind, RemoteError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRequest<'a> {
    pub text: &'a str,
    pub keyword: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightResponse {
    pub insights: String,
}

/// Remote model that writes a short blurb about `keyword` as used in `context`.
#[async_trait::async_trait]
pub trait InsightSource: Send + Sync {
    async fn generate(&self, keyword: &str, context: &str) -> Result<String, RemoteError>;
}

#[derive(Debug, Clone)]
pub struct HttpInsightSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpInsightSource {
    pub fn new(config: &EngineConfig) -> Result<Self, RemoteError> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: parse_endpoint(&config.insight_endpoint)?,
        })
    }
}

#[async_trait::async_trait]
impl InsightSource for HttpInsightSource {
    async fn generate(&self, keyword: &str, context: &str) -> Result<String, RemoteError> {
        let request = InsightRequest {
            text: context,
            keyword,
        };
        let response: InsightResponse = post_json(&self.client, &self.endpoint, &request).await?;
        Ok(response.insights)
    }
}

/// Resolves one insight per call. Nothing is cached; callers re-resolve on
/// every activation.
#[derive(Clone)]
pub struct InsightResolver {
    source: Arc<dyn InsightSource>,
    timeout: Duration,
}

impl InsightResolver {
    pub fn new(source: Arc<dyn InsightSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Returns trimmed insight text. Timeouts, transport errors and blank
    /// answers all come back as a [`RemoteError`].
    pub async fn resolve(&self, keyword: &str, context: &str) -> Result<String, RemoteError> {
        engine_debug!("Resolving insight keyword={} context_len={}", keyword, context.len());
        let pending = self.source.generate(keyword, context);
        let outcome = match tokio::time::timeout(self.timeout, pending).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::new(
                FailureKind::Timeout,
                format!("no answer within {:?}", self.timeout),
            )),
        };

        let outcome = outcome.and_then(|text| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(RemoteError::new(FailureKind::Malformed, "empty insights"))
            } else {
                Ok(trimmed.to_string())
            }
        });

        if let Err(err) = &outcome {
            engine_warn!("Insight for keyword={} failed: {}", keyword, err);
        }
        outcome
    }
}
