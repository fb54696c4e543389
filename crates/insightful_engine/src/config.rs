use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Accepts `{ "text", "keyword" }`, answers `{ "insights" }`.
    pub insight_endpoint: String,
    /// Accepts `{ "hint" }`, answers `{ "imageDataUri" }`.
    pub image_endpoint: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    /// Upper bound on one resolution as seen by the caller.
    pub resolve_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            insight_endpoint: "http://127.0.0.1:3400/generateContextualInsights".to_string(),
            image_endpoint: "http://127.0.0.1:3400/generateTestimonialImage".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
            resolve_timeout_ms: 45_000,
        }
    }
}

impl EngineConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}
