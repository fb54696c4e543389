//! Per-keyword hover trigger and the lifecycle of the insight it shows.
//!
//! Every activation carries an [`ActivationToken`]. Results are applied only
//! when they carry the trigger's current token, so a resolution that arrives
//! after its activation ended is dropped instead of landing on a later one.

pub const LOADING_MESSAGE: &str = "Loading insights...";
pub const UNAVAILABLE_MESSAGE: &str = "Insights unavailable for this keyword.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivationToken(pub u64);

/// Why a resolution failed. Kept for logs and tests; the user only ever sees
/// [`UNAVAILABLE_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightFailure {
    Remote,
    Malformed,
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsightState {
    #[default]
    Idle,
    Loading,
    Resolved(String),
    Failed(InsightFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Closed,
    /// Pointer is over the keyword; waiting out the hover delay.
    Waiting,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTrigger {
    keyword: String,
    phase: HoverPhase,
    insight: InsightState,
    token: Option<ActivationToken>,
}

impl InsightTrigger {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            phase: HoverPhase::Closed,
            insight: InsightState::Idle,
            token: None,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn insight(&self) -> &InsightState {
        &self.insight
    }

    pub fn token(&self) -> Option<ActivationToken> {
        self.token
    }

    /// Starts waiting out the hover delay under a fresh token. Any earlier
    /// activation is forgotten.
    pub fn begin_hover(&mut self, token: ActivationToken) {
        self.phase = HoverPhase::Waiting;
        self.insight = InsightState::Idle;
        self.token = Some(token);
    }

    /// Opens the trigger if `token` is the pending hover. Returns whether the
    /// insight moved to `Loading`.
    pub fn open(&mut self, token: ActivationToken) -> bool {
        if self.phase != HoverPhase::Waiting || self.token != Some(token) {
            return false;
        }
        self.phase = HoverPhase::Open;
        self.insight = InsightState::Loading;
        true
    }

    /// Resets to `Idle` and invalidates the current token. Returns true when
    /// a resolution was still in flight.
    pub fn close(&mut self) -> bool {
        let was_loading = self.insight == InsightState::Loading;
        self.phase = HoverPhase::Closed;
        self.insight = InsightState::Idle;
        self.token = None;
        was_loading
    }

    /// Applies a resolution outcome. Stale tokens and outcomes arriving in
    /// any state other than `Loading` are discarded and return false.
    pub fn apply(&mut self, token: ActivationToken, outcome: Result<String, InsightFailure>) -> bool {
        if self.token != Some(token) || self.insight != InsightState::Loading {
            return false;
        }
        self.insight = match outcome {
            Ok(text) => InsightState::Resolved(text),
            Err(failure) => InsightState::Failed(failure),
        };
        true
    }

    /// Text for the insight surface, `None` while the trigger is not open.
    pub fn user_message(&self) -> Option<&str> {
        match &self.insight {
            InsightState::Idle => None,
            InsightState::Loading => Some(LOADING_MESSAGE),
            InsightState::Resolved(text) => Some(text),
            InsightState::Failed(_) => Some(UNAVAILABLE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requires_pending_token() {
        let mut trigger = InsightTrigger::new("reports");
        assert!(!trigger.open(ActivationToken(1)));

        trigger.begin_hover(ActivationToken(2));
        assert!(!trigger.open(ActivationToken(1)));
        assert!(trigger.open(ActivationToken(2)));
        assert_eq!(trigger.insight(), &InsightState::Loading);
        // A second open for the same token is not a new activation.
        assert!(!trigger.open(ActivationToken(2)));
    }

    #[test]
    fn resolved_state_is_terminal_until_close() {
        let mut trigger = InsightTrigger::new("reports");
        trigger.begin_hover(ActivationToken(1));
        trigger.open(ActivationToken(1));
        assert!(trigger.apply(ActivationToken(1), Ok("first".into())));
        assert!(!trigger.apply(ActivationToken(1), Err(InsightFailure::Remote)));
        assert_eq!(trigger.user_message(), Some("first"));

        assert!(!trigger.close());
        assert_eq!(trigger.insight(), &InsightState::Idle);
        assert_eq!(trigger.user_message(), None);
    }

    #[test]
    fn failure_shows_generic_message() {
        let mut trigger = InsightTrigger::new("forecasts");
        trigger.begin_hover(ActivationToken(5));
        trigger.open(ActivationToken(5));
        assert!(trigger.apply(ActivationToken(5), Err(InsightFailure::Timeout)));
        assert_eq!(trigger.insight(), &InsightState::Failed(InsightFailure::Timeout));
        assert_eq!(trigger.user_message(), Some(UNAVAILABLE_MESSAGE));
    }
}
