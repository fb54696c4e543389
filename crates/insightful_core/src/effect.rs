use std::time::Duration;

use crate::{ActivationToken, RunId, TestimonialId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::HoverDelayElapsed { run, token }` after `delay`.
    ScheduleOpen {
        run: RunId,
        token: ActivationToken,
        delay: Duration,
    },
    ResolveInsight {
        run: RunId,
        token: ActivationToken,
        keyword: String,
        context: String,
    },
    /// The activation for `run` ended while its resolution was in flight.
    CancelInsight { run: RunId },
    GenerateAvatar {
        testimonial: TestimonialId,
        hint: String,
    },
}
