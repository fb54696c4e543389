use std::fmt::Write;

use insightful_core::content::{
    FOOTER_OWNER, PRIMARY_CTA, RATINGS, SECONDARY_CTA, SERVICES, TAGLINE,
};
use insightful_core::{axis_label, AppViewModel, CardDescriptor, Competitor, Headline, RunView};

use super::constants::{AVATAR_URI_PREVIEW, BAR_UNIT, CARD_WIDTH, SITE_NAME};

/// Renders the whole page as plain text.
pub fn render(view: &AppViewModel, year: i32) -> String {
    let mut out = String::new();
    let settings = &view.settings;
    let _ = writeln!(
        out,
        "{SITE_NAME}    [hover delay {}ms, insights {}]",
        settings.hover_delay_ms,
        if settings.insights_enabled { "on" } else { "off" }
    );

    let ratings: Vec<String> = RATINGS
        .iter()
        .map(|r| format!("{} {} {}", r.score, r.caption, r.source))
        .collect();
    let _ = writeln!(out, "{}\n", ratings.join("  |  "));

    let _ = writeln!(out, "{}", headline_line(&view.runs));
    for run in view.open_runs() {
        out.push_str(&render_card(run));
    }
    let _ = writeln!(out, "\n{TAGLINE}");
    let _ = writeln!(out, "[ {PRIMARY_CTA} > ]   {SECONDARY_CTA}\n");

    let _ = writeln!(out, "What we do");
    for service in SERVICES.iter() {
        let _ = writeln!(out, "  * {}: {}", service.title, service.summary);
    }

    let _ = writeln!(out, "\nWhat customers say");
    for t in &view.testimonials {
        let avatar = t
            .avatar_uri
            .as_deref()
            .map(preview_uri)
            .unwrap_or_else(|| "(generating avatar...)".to_string());
        let _ = writeln!(out, "  \"{}\"\n    - {}, {}  {}", t.quote, t.name, t.role, avatar);
    }

    out.push_str(&render_comparison(view));
    let _ = writeln!(
        out,
        "\n(c) {year} {FOOTER_OWNER} All rights reserved."
    );
    out
}

/// Keyword runs are bracketed with their run number so they can be hovered.
fn headline_line(runs: &[RunView]) -> String {
    runs.iter()
        .map(|run| match (&run.keyword, run.hovered) {
            (Some(_), true) => format!("[{}:*{}*]", run.run_id, run.content),
            (Some(_), false) => format!("[{}:{}]", run.run_id, run.content),
            (None, _) => run.content.clone(),
        })
        .collect()
}

fn render_card(run: &RunView) -> String {
    let mut out = String::new();
    let border = "-".repeat(CARD_WIDTH);
    let _ = writeln!(out, "  +{border}");
    if let Some(card) = &run.card {
        let _ = writeln!(out, "  | {}", card.title());
        match card {
            CardDescriptor::IncomeChart { headline, bars } => {
                write_headline(&mut out, headline);
                for bar in bars {
                    let len = usize::try_from(bar.value.abs() / BAR_UNIT).unwrap_or(0).max(1);
                    let glyph = if bar.is_negative() { "-" } else { "#" };
                    let _ = writeln!(out, "  | {:>3} {}", bar.label, glyph.repeat(len));
                }
            }
            CardDescriptor::ExpenseBreakdown { headline, slices } => {
                write_headline(&mut out, headline);
                let total: u32 = slices.iter().map(|s| s.value).sum();
                for slice in slices {
                    let pct = f64::from(slice.value) * 100.0 / f64::from(total.max(1));
                    let _ = writeln!(out, "  | {:<15} {:>5.1}%", slice.label, pct);
                }
            }
            CardDescriptor::CashSummary { headline } => write_headline(&mut out, headline),
            CardDescriptor::Generic { .. } => {}
        }
    }
    if let Some(message) = &run.insight {
        let _ = writeln!(out, "  | {message}");
    }
    let _ = writeln!(out, "  +{border}");
    out
}

fn write_headline(out: &mut String, headline: &Headline) {
    let change = headline.change.map(|c| format!("  {c}")).unwrap_or_default();
    let _ = writeln!(out, "  | {}{}", headline.amount, change);
    if let Some(footnote) = headline.footnote {
        let _ = writeln!(out, "  | {footnote}");
    }
}

fn render_comparison(view: &AppViewModel) -> String {
    let mut out = String::from("\nPerformance Comparison\n  Filter competitors:");
    for (competitor, shown) in &view.competitors {
        let mark = if *shown { "x" } else { " " };
        let _ = write!(out, "  [{mark}] {}", competitor_label(*competitor));
    }
    out.push('\n');
    for row in &view.comparison {
        let values: Vec<String> = row
            .values
            .iter()
            .map(|(series, value)| format!("{} {}", series.label(), value))
            .collect();
        let _ = writeln!(out, "  {:<22} {}", axis_label(row.metric), values.join(", "));
    }
    out
}

fn competitor_label(competitor: Competitor) -> &'static str {
    competitor.series().label()
}

fn preview_uri(uri: &str) -> String {
    if uri.chars().count() <= AVATAR_URI_PREVIEW {
        return uri.to_string();
    }
    let head: String = uri.chars().take(AVATAR_URI_PREVIEW - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insightful_core::{update, AppState, Msg, SettingsPatch, LOADING_MESSAGE};

    fn landing() -> AppState {
        let (state, _) = update(
            AppState::with_settings(insightful_core::Settings {
                hover_delay_ms: 0,
                insights_enabled: true,
            }),
            Msg::PageLoaded,
        );
        state
    }

    #[test]
    fn keywords_are_numbered_in_headline() {
        let text = render(&landing().view(), 2026);
        assert!(text.contains("Create [1:reports], [3:forecasts], [5:dashboards] & [7:consolidations]"));
        assert!(text.contains("(c) 2026 AI Financial Tools Inc."));
        assert!(text.contains("(generating avatar...)"));
    }

    #[test]
    fn open_card_shows_loading_message() {
        let (state, _) = update(landing(), Msg::HoverStarted { run: 1 });
        let text = render(&state.view(), 2026);
        assert!(text.contains("[1:*reports*]"));
        assert!(text.contains("Total income"));
        assert!(text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn disabled_insights_render_plain_headline() {
        let (state, _) = update(
            landing(),
            Msg::SettingsChanged(SettingsPatch::insights_enabled(false)),
        );
        let text = render(&state.view(), 2026);
        assert!(text.contains("Create reports, forecasts, dashboards & consolidations"));
        assert!(text.contains("insights off"));
    }

    #[test]
    fn long_avatar_uris_are_shortened() {
        let uri = format!("data:image/png;base64,{}", "A".repeat(200));
        let preview = preview_uri(&uri);
        assert_eq!(preview.chars().count(), AVATAR_URI_PREVIEW);
        assert!(preview.ends_with("..."));
    }
}
