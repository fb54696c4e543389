use std::time::Duration;

use insightful_core::{
    update, ActivationToken, AppState, CardDescriptor, Effect, HoverPhase, InsightFailure,
    InsightState, Msg, RunId, Settings, SettingsPatch, LOADING_MESSAGE, UNAVAILABLE_MESSAGE,
};

const TEXT: &str = "Compare the annual_report with the cash forecast";

fn init_logging() {
    insightful_logging::initialize_for_tests();
}

fn loaded(settings: Settings) -> AppState {
    let (mut state, effects) = update(
        AppState::with_settings(settings),
        Msg::DocumentChanged {
            text: TEXT.to_string(),
            keywords: vec!["report".into(), "annual_report".into(), "cash".into()],
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    state
}

fn keyword_run(state: &AppState, keyword: &str) -> RunId {
    state
        .runs()
        .iter()
        .position(|run| run.matched_keyword() == Some(keyword))
        .expect("keyword run")
}

/// Hovers `run` and plays the scheduled delay, returning the resolve token.
fn activate(state: AppState, run: RunId) -> (AppState, ActivationToken) {
    let (state, effects) = update(state, Msg::HoverStarted { run });
    let token = match effects.as_slice() {
        [Effect::ScheduleOpen { token, .. }] => *token,
        other => panic!("expected ScheduleOpen, got {other:?}"),
    };
    let (state, effects) = update(state, Msg::HoverDelayElapsed { run, token });
    assert!(matches!(
        effects.as_slice(),
        [Effect::ResolveInsight { token: t, .. }] if *t == token
    ));
    (state, token)
}

#[test]
fn hover_waits_for_delay_before_resolving() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "annual_report");

    let (state, effects) = update(state, Msg::HoverStarted { run });
    let token = match effects.as_slice() {
        [Effect::ScheduleOpen { run: r, token, delay }] => {
            assert_eq!(*r, run);
            assert_eq!(*delay, Duration::from_millis(200));
            *token
        }
        other => panic!("unexpected effects {other:?}"),
    };
    assert_eq!(state.trigger(run).unwrap().phase(), HoverPhase::Waiting);
    assert_eq!(state.trigger(run).unwrap().insight(), &InsightState::Idle);

    let (state, effects) = update(state, Msg::HoverDelayElapsed { run, token });
    assert_eq!(
        effects,
        vec![Effect::ResolveInsight {
            run,
            token,
            keyword: "annual_report".into(),
            context: TEXT.into(),
        }]
    );
    assert_eq!(state.trigger(run).unwrap().insight(), &InsightState::Loading);

    let view = state.view();
    let run_view = &view.runs[run];
    assert_eq!(run_view.insight.as_deref(), Some(LOADING_MESSAGE));
    assert!(matches!(run_view.card, Some(CardDescriptor::Generic { .. })));
}

#[test]
fn leaving_before_delay_never_resolves() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "cash");

    let (state, effects) = update(state, Msg::HoverStarted { run });
    let token = match effects.as_slice() {
        [Effect::ScheduleOpen { token, .. }] => *token,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, effects) = update(state, Msg::HoverEnded { run });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::HoverDelayElapsed { run, token });
    assert!(effects.is_empty());
    assert_eq!(state.trigger(run).unwrap().phase(), HoverPhase::Closed);
}

#[test]
fn zero_delay_opens_immediately() {
    init_logging();
    let state = loaded(Settings {
        hover_delay_ms: 0,
        insights_enabled: true,
    });
    let run = keyword_run(&state, "cash");

    let (state, effects) = update(state, Msg::HoverStarted { run });
    assert!(matches!(
        effects.as_slice(),
        [Effect::ResolveInsight { keyword, .. }] if keyword == "cash"
    ));
    assert_eq!(state.trigger(run).unwrap().phase(), HoverPhase::Open);
}

#[test]
fn resolved_insight_is_shown() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "cash");
    let (state, token) = activate(state, run);

    let (mut state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token,
            outcome: Ok("Cash is king.".into()),
        },
    );
    assert!(state.consume_dirty());
    assert_eq!(
        state.view().runs[run].insight.as_deref(),
        Some("Cash is king.")
    );
}

#[test]
fn failed_resolution_shows_only_generic_message() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "annual_report");
    let (state, token) = activate(state, run);

    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token,
            outcome: Err(InsightFailure::Remote),
        },
    );
    assert_eq!(
        state.trigger(run).unwrap().insight(),
        &InsightState::Failed(InsightFailure::Remote)
    );
    let view = state.view();
    assert_eq!(view.runs[run].insight.as_deref(), Some(UNAVAILABLE_MESSAGE));
    // Other keywords are untouched.
    let other = keyword_run(&state, "cash");
    assert_eq!(view.runs[other].insight, None);
}

#[test]
fn stale_result_does_not_touch_later_activation() {
    init_logging();
    let state = loaded(Settings::default());
    let a = keyword_run(&state, "annual_report");
    let b = keyword_run(&state, "cash");

    let (state, token_a) = activate(state, a);
    let (state, effects) = update(state, Msg::HoverEnded { run: a });
    assert_eq!(effects, vec![Effect::CancelInsight { run: a }]);
    let (state, token_b) = activate(state, b);
    assert_ne!(token_a, token_b);

    // A's answer arrives late, addressed to A and to B.
    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run: a,
            token: token_a,
            outcome: Ok("about annual reports".into()),
        },
    );
    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run: b,
            token: token_a,
            outcome: Ok("about annual reports".into()),
        },
    );
    assert_eq!(state.trigger(a).unwrap().insight(), &InsightState::Idle);
    assert_eq!(state.trigger(b).unwrap().insight(), &InsightState::Loading);

    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run: b,
            token: token_b,
            outcome: Ok("about cash".into()),
        },
    );
    assert_eq!(
        state.trigger(b).unwrap().insight(),
        &InsightState::Resolved("about cash".into())
    );
}

#[test]
fn reopening_same_keyword_ignores_previous_activation() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "cash");

    let (state, first) = activate(state, run);
    let (state, _) = update(state, Msg::HoverEnded { run });
    let (state, second) = activate(state, run);

    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token: first,
            outcome: Ok("old".into()),
        },
    );
    assert_eq!(state.trigger(run).unwrap().insight(), &InsightState::Loading);

    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token: second,
            outcome: Ok("new".into()),
        },
    );
    assert_eq!(
        state.trigger(run).unwrap().insight(),
        &InsightState::Resolved("new".into())
    );
}

#[test]
fn each_activation_resolves_again() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "cash");

    let (state, first) = activate(state, run);
    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token: first,
            outcome: Ok("cached?".into()),
        },
    );
    let (state, effects) = update(state, Msg::HoverEnded { run });
    assert!(effects.is_empty());
    let (state, second) = activate(state, run);
    assert_ne!(first, second);
    assert_eq!(state.trigger(run).unwrap().insight(), &InsightState::Loading);
}

#[test]
fn disabling_insights_closes_open_triggers() {
    init_logging();
    let state = loaded(Settings::default());
    let run = keyword_run(&state, "cash");
    let (state, token) = activate(state, run);

    let (state, effects) = update(
        state,
        Msg::SettingsChanged(SettingsPatch::insights_enabled(false)),
    );
    assert_eq!(effects, vec![Effect::CancelInsight { run }]);
    assert_eq!(state.runs().len(), 1);
    assert!(state.trigger(run).is_none());

    let (state, effects) = update(state, Msg::HoverStarted { run: 0 });
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::InsightResolved {
            run,
            token,
            outcome: Ok("late".into()),
        },
    );
    assert!(state.view().runs.iter().all(|r| r.insight.is_none()));
}

#[test]
fn hovering_plain_text_is_ignored() {
    init_logging();
    let state = loaded(Settings::default());
    let (state, effects) = update(state, Msg::HoverStarted { run: 0 });
    assert!(effects.is_empty());
    assert!(state.trigger(0).is_none());
}
