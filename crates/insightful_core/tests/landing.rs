use insightful_core::content::{HEADLINE, TESTIMONIALS};
use insightful_core::{
    card_for, update, AppState, CardDescriptor, Competitor, Effect, Msg, Series,
};

#[test]
fn page_load_segments_headline_and_requests_avatars() {
    let (mut state, effects) = update(AppState::new(), Msg::PageLoaded);
    assert!(state.consume_dirty());

    let view = state.view();
    let text: String = view.runs.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(text, HEADLINE);
    assert_eq!(view.runs.iter().filter(|r| r.keyword.is_some()).count(), 4);

    let hints: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::GenerateAvatar { testimonial, hint } => Some((*testimonial, hint.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(hints.len(), TESTIMONIALS.len());
    assert_eq!(hints[0], (0, TESTIMONIALS[0].avatar_hint));
    assert!(view.testimonials.iter().all(|t| t.avatar_uri.is_none()));
}

#[test]
fn resolved_avatars_are_not_requested_again() {
    let (state, _) = update(AppState::new(), Msg::PageLoaded);
    let (state, _) = update(
        state,
        Msg::AvatarResolved {
            testimonial: 1,
            image_uri: "data:image/png;base64,AAAA".into(),
        },
    );
    assert_eq!(
        state.view().testimonials[1].avatar_uri.as_deref(),
        Some("data:image/png;base64,AAAA")
    );

    let (_, effects) = update(state, Msg::PageLoaded);
    let requested: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::GenerateAvatar { testimonial, .. } => Some(*testimonial),
            _ => None,
        })
        .collect();
    assert_eq!(requested, vec![0, 2]);
}

#[test]
fn unknown_testimonial_avatar_is_ignored() {
    let (mut state, _) = update(
        AppState::new(),
        Msg::AvatarResolved {
            testimonial: 99,
            image_uri: "https://example.com/a.png".into(),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn cards_are_looked_up_case_insensitively() {
    assert!(matches!(card_for("Reports"), CardDescriptor::IncomeChart { .. }));
    assert!(matches!(card_for("DASHBOARDS"), CardDescriptor::ExpenseBreakdown { .. }));
    assert_eq!(card_for("forecasts"), card_for("Consolidations"));
    assert_eq!(card_for("forecasts").title(), "Cash");
    assert_eq!(card_for("ledger").title(), "Insights for \"ledger\"");

    if let CardDescriptor::IncomeChart { bars, .. } = card_for("reports") {
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].value, 20_000);
        assert!(bars.iter().any(|bar| bar.is_negative()));
    }
}

#[test]
fn competitor_toggle_updates_view() {
    let (mut state, _) = update(AppState::new(), Msg::CompetitorToggled(Competitor::Other));
    assert!(state.consume_dirty());
    let view = state.view();
    assert!(view.competitors.contains(&(Competitor::Other, true)));
    assert_eq!(view.comparison[0].values.len(), 4);
    assert_eq!(view.comparison[0].values[3].0, Series::OtherCompetitor);
}
