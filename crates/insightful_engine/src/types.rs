use std::fmt;

pub type RunId = usize;
pub type TestimonialId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    InsightResolved {
        run: RunId,
        /// Activation token the request was issued under, echoed back untouched.
        token: u64,
        result: Result<String, RemoteError>,
    },
    /// Always carries a usable URI; failures have already become the placeholder.
    AvatarReady {
        testimonial: TestimonialId,
        image_uri: String,
    },
}

/// Failure of a remote generation call. `message` is for logs only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RemoteError {
    pub kind: FailureKind,
    pub message: String,
}

impl RemoteError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    /// The call succeeded but the payload was unusable.
    Malformed,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
