use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use insightful_logging::{engine_debug, engine_info};
use tokio_util::sync::CancellationToken;

use crate::avatar::{AvatarResolver, HttpImageSource, ImageSource};
use crate::insight::{HttpInsightSource, InsightResolver, InsightSource};
use crate::{EngineConfig, EngineEvent, RemoteError, RunId, TestimonialId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to set up remote client: {0}")]
    Client(#[from] RemoteError),
}

enum EngineCommand {
    ResolveInsight {
        run: RunId,
        token: u64,
        keyword: String,
        context: String,
    },
    CancelInsight {
        run: RunId,
    },
    GenerateAvatar {
        testimonial: TestimonialId,
        hint: String,
    },
}

/// Runs remote calls on a background tokio runtime. Commands go in through
/// the handle; results come back as [`EngineEvent`]s via [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let insights: Arc<dyn InsightSource> = Arc::new(HttpInsightSource::new(&config)?);
        let images: Arc<dyn ImageSource> = Arc::new(HttpImageSource::new(&config)?);
        Self::with_sources(&config, insights, images)
    }

    pub fn with_sources(
        config: &EngineConfig,
        insights: Arc<dyn InsightSource>,
        images: Arc<dyn ImageSource>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let insight_resolver = InsightResolver::new(insights, config.resolve_timeout());
        let avatar_resolver = AvatarResolver::new(images, config.resolve_timeout());

        thread::spawn(move || {
            let mut in_flight: HashMap<RunId, CancellationToken> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::ResolveInsight {
                        run,
                        token,
                        keyword,
                        context,
                    } => {
                        let cancel = CancellationToken::new();
                        if let Some(previous) = in_flight.insert(run, cancel.clone()) {
                            previous.cancel();
                        }
                        let resolver = insight_resolver.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = cancel.cancelled() => {
                                    engine_debug!("Insight for run {} token {} abandoned", run, token);
                                }
                                result = resolver.resolve(&keyword, &context) => {
                                    let _ = event_tx.send(EngineEvent::InsightResolved { run, token, result });
                                }
                            }
                        });
                    }
                    EngineCommand::CancelInsight { run } => {
                        if let Some(cancel) = in_flight.remove(&run) {
                            cancel.cancel();
                        }
                    }
                    EngineCommand::GenerateAvatar { testimonial, hint } => {
                        let resolver = avatar_resolver.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let image_uri = resolver.resolve(&hint).await;
                            let _ = event_tx.send(EngineEvent::AvatarReady {
                                testimonial,
                                image_uri,
                            });
                        });
                    }
                }
            }
            engine_info!("Engine command channel closed, shutting down runtime");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn resolve_insight(
        &self,
        run: RunId,
        token: u64,
        keyword: impl Into<String>,
        context: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::ResolveInsight {
            run,
            token,
            keyword: keyword.into(),
            context: context.into(),
        });
    }

    /// Drops interest in the run's in-flight resolution. A result that was
    /// already sent is still delivered; callers must check its token.
    pub fn cancel_insight(&self, run: RunId) {
        let _ = self.cmd_tx.send(EngineCommand::CancelInsight { run });
    }

    pub fn generate_avatar(&self, testimonial: TestimonialId, hint: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::GenerateAvatar {
            testimonial,
            hint: hint.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
