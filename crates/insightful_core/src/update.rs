use insightful_logging::engine_debug;

use crate::{ActivationToken, AppState, Effect, HoverPhase, Msg, RunId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => state.load_landing_page(),
        Msg::DocumentChanged { text, keywords } => state.set_document(text, keywords),
        Msg::SettingsChanged(patch) => {
            let merged = state.settings().merged(patch);
            state.set_settings(merged)
        }
        Msg::HoverStarted { run } => {
            let settings = state.settings();
            if !settings.insights_enabled {
                return (state, Vec::new());
            }
            match state.trigger(run).map(|t| t.phase()) {
                Some(HoverPhase::Closed) => {}
                // Unknown run, or already hovering.
                _ => return (state, Vec::new()),
            }

            let token = state.mint_token();
            let Some(trigger) = state.trigger_mut(run) else {
                return (state, Vec::new());
            };
            trigger.begin_hover(token);
            state.mark_dirty();
            if settings.hover_delay_ms == 0 {
                open_trigger(&mut state, run, token)
            } else {
                vec![Effect::ScheduleOpen {
                    run,
                    token,
                    delay: settings.hover_delay(),
                }]
            }
        }
        Msg::HoverDelayElapsed { run, token } => open_trigger(&mut state, run, token),
        Msg::HoverEnded { run } => {
            let Some(trigger) = state.trigger_mut(run) else {
                return (state, Vec::new());
            };
            if trigger.phase() == HoverPhase::Closed {
                return (state, Vec::new());
            }
            let in_flight = trigger.close();
            state.mark_dirty();
            if in_flight {
                vec![Effect::CancelInsight { run }]
            } else {
                Vec::new()
            }
        }
        Msg::InsightResolved {
            run,
            token,
            outcome,
        } => {
            let applied = state
                .trigger_mut(run)
                .is_some_and(|trigger| trigger.apply(token, outcome));
            if applied {
                state.mark_dirty();
            } else {
                engine_debug!("Discarding stale insight for run {} token {:?}", run, token);
            }
            Vec::new()
        }
        Msg::AvatarResolved {
            testimonial,
            image_uri,
        } => {
            state.set_avatar(testimonial, image_uri);
            Vec::new()
        }
        Msg::CompetitorToggled(competitor) => {
            state.comparison_mut().toggle(competitor);
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn open_trigger(state: &mut AppState, run: RunId, token: ActivationToken) -> Vec<Effect> {
    let context = state.text().to_string();
    let Some(trigger) = state.trigger_mut(run) else {
        return Vec::new();
    };
    if !trigger.open(token) {
        return Vec::new();
    }
    let keyword = trigger.keyword().to_string();
    state.mark_dirty();
    vec![Effect::ResolveInsight {
        run,
        token,
        keyword,
        context,
    }]
}
