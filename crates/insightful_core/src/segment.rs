use std::collections::HashSet;

use insightful_logging::engine_warn;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunKind {
    Text,
    /// `matched_keyword` is the canonical keyword from the input list, which
    /// may differ in case from the run's content.
    Keyword { matched_keyword: String },
}

/// One piece of segmented text. Concatenating every run's `content` in order
/// reproduces the segmented text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: String,
    pub kind: RunKind,
}

impl Run {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: RunKind::Text,
        }
    }

    pub fn keyword(content: impl Into<String>, matched_keyword: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: RunKind::Keyword {
                matched_keyword: matched_keyword.into(),
            },
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self.kind, RunKind::Keyword { .. })
    }

    pub fn matched_keyword(&self) -> Option<&str> {
        match &self.kind {
            RunKind::Keyword { matched_keyword } => Some(matched_keyword),
            RunKind::Text => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("keyword pattern rejected: {0}")]
    Pattern(String),
}

/// A compiled keyword set.
///
/// Keywords are tried longest first, so where one keyword is a prefix of
/// another at the same position the longer one wins. Equal lengths keep the
/// order they were given in.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Option<Regex>,
    /// Canonical keyword per capture group, group `i + 1` maps to `keywords[i]`.
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, SegmentError> {
        let mut seen = HashSet::new();
        let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
        for kw in keywords {
            let kw: &str = kw.as_ref();
            if !kw.is_empty() && seen.insert(kw.to_lowercase()) {
                unique.push(kw.to_owned());
            }
        }
        // Stable sort: ties stay in input order.
        unique.sort_by_key(|kw| std::cmp::Reverse(kw.chars().count()));

        if unique.is_empty() {
            return Ok(Self {
                pattern: None,
                keywords: unique,
            });
        }

        let alternation = unique
            .iter()
            .map(|kw| format!("({})", regex::escape(kw)))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|err| SegmentError::Pattern(err.to_string()))?;

        Ok(Self {
            pattern: Some(pattern),
            keywords: unique,
        })
    }

    /// Keywords in match priority order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Splits `text` into runs in a single left-to-right pass. Zero-length
    /// text runs are omitted; the empty string yields one empty text run.
    pub fn segment(&self, text: &str) -> Vec<Run> {
        let Some(pattern) = &self.pattern else {
            return vec![Run::text(text)];
        };

        let mut runs = Vec::new();
        let mut cursor = 0;
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let Some(group) = (1..caps.len()).find(|&idx| caps.get(idx).is_some()) else {
                continue;
            };
            if whole.start() > cursor {
                runs.push(Run::text(&text[cursor..whole.start()]));
            }
            runs.push(Run::keyword(whole.as_str(), &self.keywords[group - 1]));
            cursor = whole.end();
        }
        if cursor < text.len() || runs.is_empty() {
            runs.push(Run::text(&text[cursor..]));
        }
        runs
    }
}

/// Segments `text` around `keywords`, honouring the session settings.
///
/// Disabled insights, an empty keyword list or a keyword set the regex engine
/// refuses all produce the whole text as a single text run.
pub fn segment<S: AsRef<str>>(text: &str, keywords: &[S], settings: &Settings) -> Vec<Run> {
    if !settings.insights_enabled {
        return vec![Run::text(text)];
    }
    match KeywordMatcher::new(keywords) {
        Ok(matcher) => matcher.segment(text),
        Err(err) => {
            engine_warn!("Keyword highlighting skipped: {}", err);
            vec![Run::text(text)]
        }
    }
}
