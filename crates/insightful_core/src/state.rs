use std::collections::BTreeMap;

use crate::comparison::ComparisonChart;
use crate::content::{HEADLINE, HEADLINE_KEYWORDS, TESTIMONIALS};
use crate::segment::{segment, Run};
use crate::trigger::{ActivationToken, HoverPhase, InsightTrigger};
use crate::view_model::{AppViewModel, RunView, TestimonialView};
use crate::{card_for, Effect, Settings};

/// Index of a run in the current segmentation.
pub type RunId = usize;
/// Index into the landing page testimonials.
pub type TestimonialId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    settings: Settings,
    text: String,
    keywords: Vec<String>,
    runs: Vec<Run>,
    /// One trigger per keyword run, keyed by run index.
    triggers: BTreeMap<RunId, InsightTrigger>,
    next_token: u64,
    avatars: Vec<Option<String>>,
    comparison: ComparisonChart,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            text: String::new(),
            keywords: Vec::new(),
            runs: vec![Run::text("")],
            triggers: BTreeMap::new(),
            next_token: 0,
            avatars: vec![None; TESTIMONIALS.len()],
            comparison: ComparisonChart::default(),
            dirty: false,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn trigger(&self, run: RunId) -> Option<&InsightTrigger> {
        self.triggers.get(&run)
    }

    pub fn view(&self) -> AppViewModel {
        let runs = self
            .runs
            .iter()
            .enumerate()
            .map(|(idx, run)| {
                let trigger = self.triggers.get(&idx);
                let open = trigger.is_some_and(|t| t.phase() == HoverPhase::Open);
                RunView {
                    run_id: idx,
                    content: run.content.clone(),
                    keyword: run.matched_keyword().map(ToOwned::to_owned),
                    hovered: trigger.is_some_and(|t| t.phase() != HoverPhase::Closed),
                    card: if open {
                        run.matched_keyword().map(card_for)
                    } else {
                        None
                    },
                    insight: trigger
                        .and_then(|t| t.user_message())
                        .map(ToOwned::to_owned),
                }
            })
            .collect();

        let testimonials = TESTIMONIALS
            .iter()
            .zip(&self.avatars)
            .map(|(t, avatar)| TestimonialView {
                name: t.name,
                role: t.role,
                quote: t.quote,
                avatar_uri: avatar.clone(),
            })
            .collect();

        AppViewModel {
            settings: self.settings,
            runs,
            testimonials,
            competitors: crate::Competitor::ALL
                .into_iter()
                .map(|c| (c, self.comparison.is_shown(c)))
                .collect(),
            comparison: self.comparison.rows(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn trigger_mut(&mut self, run: RunId) -> Option<&mut InsightTrigger> {
        self.triggers.get_mut(&run)
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn mint_token(&mut self) -> ActivationToken {
        self.next_token += 1;
        ActivationToken(self.next_token)
    }

    pub(crate) fn load_landing_page(&mut self) -> Vec<Effect> {
        let mut effects = self.set_document(
            HEADLINE.to_string(),
            HEADLINE_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
        );
        effects.extend(
            TESTIMONIALS
                .iter()
                .enumerate()
                .filter(|(idx, _)| self.avatars[*idx].is_none())
                .map(|(idx, t)| Effect::GenerateAvatar {
                    testimonial: idx,
                    hint: t.avatar_hint.to_string(),
                }),
        );
        effects
    }

    pub(crate) fn set_document(&mut self, text: String, keywords: Vec<String>) -> Vec<Effect> {
        self.text = text;
        self.keywords = keywords;
        self.resegment()
    }

    pub(crate) fn set_settings(&mut self, settings: Settings) -> Vec<Effect> {
        let previous = std::mem::replace(&mut self.settings, settings);
        if previous == settings {
            return Vec::new();
        }
        self.dirty = true;
        if previous.insights_enabled != settings.insights_enabled {
            self.resegment()
        } else {
            Vec::new()
        }
    }

    pub(crate) fn set_avatar(&mut self, testimonial: TestimonialId, image_uri: String) -> bool {
        match self.avatars.get_mut(testimonial) {
            Some(slot) => {
                *slot = Some(image_uri);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn comparison_mut(&mut self) -> &mut ComparisonChart {
        &mut self.comparison
    }

    /// Closes every trigger, re-segments and rebuilds the trigger map.
    fn resegment(&mut self) -> Vec<Effect> {
        let effects = self
            .triggers
            .iter_mut()
            .filter_map(|(run, trigger)| trigger.close().then_some(Effect::CancelInsight { run: *run }))
            .collect();

        self.runs = segment(&self.text, &self.keywords, &self.settings);
        self.triggers = self
            .runs
            .iter()
            .enumerate()
            .filter_map(|(idx, run)| run.matched_keyword().map(|kw| (idx, InsightTrigger::new(kw))))
            .collect();
        self.dirty = true;
        effects
    }
}
