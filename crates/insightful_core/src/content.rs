//! Static copy for the landing page.

pub const HEADLINE: &str = "Create reports, forecasts, dashboards & consolidations";
pub const HEADLINE_KEYWORDS: [&str; 4] = ["reports", "forecasts", "dashboards", "consolidations"];
pub const TAGLINE: &str = "Now with AI-insights";
pub const PRIMARY_CTA: &str = "Start 14-day free trial";
pub const SECONDARY_CTA: &str = "See what we do";
pub const FOOTER_OWNER: &str = "AI Financial Tools Inc.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBadge {
    pub source: &'static str,
    pub score: &'static str,
    pub caption: &'static str,
}

pub const RATINGS: [RatingBadge; 4] = [
    RatingBadge { source: "Capterra", score: "4.8", caption: "rating on" },
    RatingBadge { source: "G2", score: "4.8", caption: "rating on" },
    RatingBadge { source: "Xero", score: "350+", caption: "reviews on" },
    RatingBadge { source: "QuickBooks", score: "550+", caption: "reviews on" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Reporting",
        summary: "Board-ready management reports built straight from your ledger.",
    },
    Service {
        title: "Forecasting",
        summary: "Rolling cash and revenue forecasts that update as the books close.",
    },
    Service {
        title: "Consolidation",
        summary: "Multi-entity, multi-currency consolidations in a few clicks.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Short description handed to the avatar generator.
    pub avatar_hint: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Lindqvist",
        role: "CFO, Northwind Retail",
        quote: "Month-end reporting went from a week to an afternoon.",
        avatar_hint: "female executive",
    },
    Testimonial {
        name: "Daniel Okafor",
        role: "Founder, Brightline Studio",
        quote: "The forecasts finally match what actually lands in the bank.",
        avatar_hint: "male professional",
    },
    Testimonial {
        name: "Mei Tanaka",
        role: "Group Controller, Harbor Logistics",
        quote: "Consolidating six entities used to be a spreadsheet marathon.",
        avatar_hint: "female accountant",
    },
];
