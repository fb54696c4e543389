//! Insightful engine: remote insight and avatar generation, run off the UI thread.
mod avatar;
mod config;
mod engine;
mod http;
mod insight;
mod types;

pub use avatar::{
    is_usable_image_uri, AvatarResolver, HttpImageSource, ImageRequest, ImageResponse,
    ImageSource, PLACEHOLDER_AVATAR_URI,
};
pub use config::EngineConfig;
pub use engine::{EngineError, EngineHandle};
pub use insight::{HttpInsightSource, InsightRequest, InsightResolver, InsightResponse, InsightSource};
pub use types::{EngineEvent, FailureKind, RemoteError, RunId, TestimonialId};
