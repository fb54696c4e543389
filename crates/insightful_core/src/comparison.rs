//! Data side of the performance comparison chart.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Series {
    Insightful,
    CompetitorA,
    CompetitorB,
    OtherCompetitor,
}

impl Series {
    pub const ALL: [Series; 4] = [
        Series::Insightful,
        Series::CompetitorA,
        Series::CompetitorB,
        Series::OtherCompetitor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Series::Insightful => "Insightful",
            Series::CompetitorA => "Competitor A",
            Series::CompetitorB => "Competitor B",
            Series::OtherCompetitor => "Anonymous Tool X",
        }
    }

    fn index(self) -> usize {
        match self {
            Series::Insightful => 0,
            Series::CompetitorA => 1,
            Series::CompetitorB => 2,
            Series::OtherCompetitor => 3,
        }
    }
}

/// Series the user can hide. `Insightful` is always displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competitor {
    A,
    B,
    Other,
}

impl Competitor {
    pub const ALL: [Competitor; 3] = [Competitor::A, Competitor::B, Competitor::Other];

    pub fn series(self) -> Series {
        match self {
            Competitor::A => Series::CompetitorA,
            Competitor::B => Series::CompetitorB,
            Competitor::Other => Series::OtherCompetitor,
        }
    }
}

const METRICS: [(&str, [f64; 4]); 4] = [
    ("Time Saved (hrs/mo)", [40.0, 20.0, 15.0, 10.0]),
    ("Accuracy Increase (%)", [15.0, 8.0, 5.0, 3.0]),
    ("Cost Reduction (%)", [25.0, 10.0, 7.0, 5.0]),
    ("User Satisfaction (Score)", [4.8, 4.2, 3.9, 3.5]),
];

const AXIS_LABEL_MAX: usize = 20;
const AXIS_LABEL_KEEP: usize = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub values: Vec<(Series, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonChart {
    show_a: bool,
    show_b: bool,
    show_other: bool,
}

impl Default for ComparisonChart {
    fn default() -> Self {
        Self {
            show_a: true,
            show_b: true,
            show_other: false,
        }
    }
}

impl ComparisonChart {
    pub fn is_shown(&self, competitor: Competitor) -> bool {
        match competitor {
            Competitor::A => self.show_a,
            Competitor::B => self.show_b,
            Competitor::Other => self.show_other,
        }
    }

    pub fn toggle(&mut self, competitor: Competitor) {
        let flag = match competitor {
            Competitor::A => &mut self.show_a,
            Competitor::B => &mut self.show_b,
            Competitor::Other => &mut self.show_other,
        };
        *flag = !*flag;
    }

    pub fn displayed_series(&self) -> Vec<Series> {
        let mut series = vec![Series::Insightful];
        series.extend(
            Competitor::ALL
                .into_iter()
                .filter(|c| self.is_shown(*c))
                .map(Competitor::series),
        );
        series
    }

    pub fn rows(&self) -> Vec<ComparisonRow> {
        let displayed = self.displayed_series();
        METRICS
            .iter()
            .map(|&(metric, values)| ComparisonRow {
                metric,
                values: displayed.iter().map(|s| (*s, values[s.index()])).collect(),
            })
            .collect()
    }
}

/// Shortens long metric names for the x-axis.
pub fn axis_label(metric: &str) -> String {
    if metric.chars().count() > AXIS_LABEL_MAX {
        let kept: String = metric.chars().take(AXIS_LABEL_KEEP).collect();
        format!("{kept}...")
    } else {
        metric.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_competitor_starts_hidden() {
        let chart = ComparisonChart::default();
        assert_eq!(
            chart.displayed_series(),
            vec![Series::Insightful, Series::CompetitorA, Series::CompetitorB]
        );
    }

    #[test]
    fn toggling_filters_rows() {
        let mut chart = ComparisonChart::default();
        chart.toggle(Competitor::A);
        chart.toggle(Competitor::Other);

        let rows = chart.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0].values,
            vec![
                (Series::Insightful, 40.0),
                (Series::CompetitorB, 15.0),
                (Series::OtherCompetitor, 10.0)
            ]
        );
    }

    #[test]
    fn axis_labels_truncate_past_twenty_chars() {
        assert_eq!(axis_label("Cost Reduction (%)"), "Cost Reduction (%)");
        assert_eq!(axis_label("User Satisfaction (Score)"), "User Satisfaction ...");
    }
}
