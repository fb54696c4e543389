use crate::comparison::{ComparisonRow, Competitor};
use crate::{CardDescriptor, RunId, Settings};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub settings: Settings,
    pub runs: Vec<RunView>,
    pub testimonials: Vec<TestimonialView>,
    pub competitors: Vec<(Competitor, bool)>,
    pub comparison: Vec<ComparisonRow>,
    pub dirty: bool,
}

impl AppViewModel {
    /// Keyword runs whose card is currently open.
    pub fn open_runs(&self) -> impl Iterator<Item = &RunView> {
        self.runs.iter().filter(|run| run.card.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub run_id: RunId,
    pub content: String,
    /// Canonical keyword for keyword runs; `None` for plain text.
    pub keyword: Option<String>,
    pub hovered: bool,
    pub card: Option<CardDescriptor>,
    pub insight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialView {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// `None` until the avatar generator has answered.
    pub avatar_uri: Option<String>,
}
