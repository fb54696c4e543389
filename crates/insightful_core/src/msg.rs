use crate::{ActivationToken, Competitor, InsightFailure, RunId, SettingsPatch, TestimonialId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Landing page mounted: segment the headline and request avatars.
    PageLoaded,
    /// Replace the highlighted body text and its keyword list.
    DocumentChanged { text: String, keywords: Vec<String> },
    /// Partial settings update from the settings panel.
    SettingsChanged(SettingsPatch),
    /// Pointer entered a keyword run.
    HoverStarted { run: RunId },
    /// Hover delay for the given activation has passed.
    HoverDelayElapsed { run: RunId, token: ActivationToken },
    /// Pointer left a keyword run.
    HoverEnded { run: RunId },
    /// Engine finished resolving an insight.
    InsightResolved {
        run: RunId,
        token: ActivationToken,
        outcome: Result<String, InsightFailure>,
    },
    /// Engine produced an avatar image (or its placeholder).
    AvatarResolved {
        testimonial: TestimonialId,
        image_uri: String,
    },
    /// User flipped a competitor checkbox on the comparison chart.
    CompetitorToggled(Competitor),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
