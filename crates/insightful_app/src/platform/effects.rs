use std::sync::mpsc;
use std::thread;

use insightful_core::{Effect, InsightFailure, Msg};
use insightful_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle, FailureKind};
use insightful_logging::{engine_debug, engine_info, engine_warn};

use super::input::Command;

pub struct EffectRunner {
    engine: EngineHandle,
    inbox: mpsc::Sender<Command>,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, inbox: mpsc::Sender<Command>) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(config)?,
            inbox,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleOpen { run, token, delay } => {
                    engine_debug!("ScheduleOpen run={} token={:?} delay={:?}", run, token, delay);
                    let inbox = self.inbox.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = inbox.send(Command::Msg(Msg::HoverDelayElapsed { run, token }));
                    });
                }
                Effect::ResolveInsight {
                    run,
                    token,
                    keyword,
                    context,
                } => {
                    engine_info!(
                        "ResolveInsight run={} token={:?} keyword={} context_len={}",
                        run,
                        token,
                        keyword,
                        context.len()
                    );
                    self.engine.resolve_insight(run, token.0, keyword, context);
                }
                Effect::CancelInsight { run } => {
                    engine_debug!("CancelInsight run={}", run);
                    self.engine.cancel_insight(run);
                }
                Effect::GenerateAvatar { testimonial, hint } => {
                    engine_info!("GenerateAvatar testimonial={} hint={}", testimonial, hint);
                    self.engine.generate_avatar(testimonial, hint);
                }
            }
        }
    }

    /// Drains finished engine work as core messages.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::InsightResolved { run, token, result } => Msg::InsightResolved {
            run,
            token: insightful_core::ActivationToken(token),
            outcome: result.map_err(|err| {
                engine_warn!("Insight for run {} failed: {}", run, err);
                map_failure(&err.kind)
            }),
        },
        EngineEvent::AvatarReady {
            testimonial,
            image_uri,
        } => Msg::AvatarResolved {
            testimonial,
            image_uri,
        },
    }
}

fn map_failure(kind: &FailureKind) -> InsightFailure {
    match kind {
        FailureKind::Timeout => InsightFailure::Timeout,
        FailureKind::Malformed => InsightFailure::Malformed,
        FailureKind::InvalidEndpoint | FailureKind::HttpStatus(_) | FailureKind::Network => {
            InsightFailure::Remote
        }
    }
}
