use std::sync::Arc;
use std::time::Duration;

use insightful_logging::{engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{build_client, parse_endpoint, post_json};
use crate::{EngineConfig, FailureKind, RemoteError};

/// Returned whenever avatar generation fails.
pub const PLACEHOLDER_AVATAR_URI: &str = "https://placehold.co/80x80.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest<'a> {
    pub hint: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_data_uri: String,
}

#[async_trait::async_trait]
pub trait ImageSource: Send + Sync {
    async fn generate(&self, hint: &str) -> Result<String, RemoteError>;
}

#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpImageSource {
    pub fn new(config: &EngineConfig) -> Result<Self, RemoteError> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: parse_endpoint(&config.image_endpoint)?,
        })
    }
}

#[async_trait::async_trait]
impl ImageSource for HttpImageSource {
    async fn generate(&self, hint: &str) -> Result<String, RemoteError> {
        let response: ImageResponse =
            post_json(&self.client, &self.endpoint, &ImageRequest { hint }).await?;
        Ok(response.image_data_uri)
    }
}

#[derive(Clone)]
pub struct AvatarResolver {
    source: Arc<dyn ImageSource>,
    timeout: Duration,
}

impl AvatarResolver {
    pub fn new(source: Arc<dyn ImageSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Never fails: any error or unusable answer yields [`PLACEHOLDER_AVATAR_URI`].
    pub async fn resolve(&self, hint: &str) -> String {
        let outcome = match tokio::time::timeout(self.timeout, self.source.generate(hint)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::new(FailureKind::Timeout, "avatar timed out")),
        };

        match outcome {
            Ok(uri) if is_usable_image_uri(&uri) => {
                engine_info!("Avatar generated for hint={:?} uri_len={}", hint, uri.len());
                uri.trim().to_string()
            }
            Ok(uri) => {
                engine_warn!(
                    "Avatar for hint={:?} returned unusable uri (len {}), using placeholder",
                    hint,
                    uri.len()
                );
                PLACEHOLDER_AVATAR_URI.to_string()
            }
            Err(err) => {
                engine_warn!("Avatar for hint={:?} failed: {}, using placeholder", hint, err);
                PLACEHOLDER_AVATAR_URI.to_string()
            }
        }
    }
}

/// `data:image/<type>;base64,<payload>` or an absolute http(s) URL.
pub fn is_usable_image_uri(uri: &str) -> bool {
    let uri = uri.trim();
    if let Some(rest) = uri.strip_prefix("data:image/") {
        return rest
            .split_once(";base64,")
            .is_some_and(|(subtype, payload)| !subtype.is_empty() && !payload.is_empty());
    }
    Url::parse(uri).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}
