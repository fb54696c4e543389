//! Insightful core: keyword segmentation and the pure hover-insight state machine.
mod cards;
pub mod comparison;
pub mod content;
mod effect;
mod msg;
mod segment;
mod settings;
mod state;
mod trigger;
mod update;
mod view_model;

pub use cards::{card_for, Bar, CardDescriptor, Headline, Slice};
pub use comparison::{axis_label, ComparisonChart, ComparisonRow, Competitor, Series};
pub use effect::Effect;
pub use msg::Msg;
pub use segment::{segment, KeywordMatcher, Run, RunKind, SegmentError};
pub use settings::{parse_hover_delay, Settings, SettingsPatch, DEFAULT_HOVER_DELAY_MS};
pub use state::{AppState, RunId, TestimonialId};
pub use trigger::{
    ActivationToken, HoverPhase, InsightFailure, InsightState, InsightTrigger, LOADING_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, RunView, TestimonialView};
