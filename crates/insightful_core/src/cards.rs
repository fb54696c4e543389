//! Canned hover-card content, looked up by keyword.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: &'static str,
    pub value: i64,
}

impl Bar {
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: &'static str,
    pub amount: &'static str,
    pub change: Option<&'static str>,
    pub footnote: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardDescriptor {
    IncomeChart { headline: Headline, bars: Vec<Bar> },
    ExpenseBreakdown { headline: Headline, slices: Vec<Slice> },
    CashSummary { headline: Headline },
    Generic { title: String },
}

impl CardDescriptor {
    pub fn title(&self) -> &str {
        match self {
            CardDescriptor::IncomeChart { headline, .. }
            | CardDescriptor::ExpenseBreakdown { headline, .. }
            | CardDescriptor::CashSummary { headline } => headline.title,
            CardDescriptor::Generic { title } => title,
        }
    }
}

const MONTHLY_INCOME: [(&str, i64); 12] = [
    ("Feb", 200),
    ("Mar", 350),
    ("Apr", 150),
    ("May", 450),
    ("Jun", 250),
    ("Jul", 500),
    ("Aug", 300),
    ("Sep", 220),
    ("Oct", -50),
    ("Nov", 400),
    ("Dec", 600),
    ("Jan", 300),
];
const INCOME_SCALE: i64 = 100;

const EXPENSES: [(&str, u32); 5] = [
    ("Insurance", 400),
    ("Wages", 300),
    ("Rent", 300),
    ("Legal Expenses", 200),
    ("Other", 278),
];

/// Card for a keyword. Case-insensitive; unknown keywords get a generic card.
pub fn card_for(keyword: &str) -> CardDescriptor {
    match keyword.to_lowercase().as_str() {
        "reports" => CardDescriptor::IncomeChart {
            headline: Headline {
                title: "Total income",
                amount: "$426.8K",
                change: Some("+36.5%"),
                footnote: Some("$672.5K total last year"),
            },
            bars: MONTHLY_INCOME
                .iter()
                .map(|&(label, value)| Bar {
                    label,
                    value: value * INCOME_SCALE,
                })
                .collect(),
        },
        "dashboards" => CardDescriptor::ExpenseBreakdown {
            headline: Headline {
                title: "Expenses",
                amount: "$56.2K",
                change: None,
                footnote: None,
            },
            slices: EXPENSES
                .iter()
                .map(|&(label, value)| Slice { label, value })
                .collect(),
        },
        "forecasts" | "consolidations" => CardDescriptor::CashSummary {
            headline: Headline {
                title: "Cash",
                amount: "$288,721",
                change: Some("+202.9%"),
                footnote: Some("$95,319 prior last year"),
            },
        },
        _ => CardDescriptor::Generic {
            title: format!("Insights for \"{keyword}\""),
        },
    }
}
