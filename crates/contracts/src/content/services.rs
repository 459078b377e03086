/// Icon + label chip shown under the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorProduct {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "rocket", label: "Eval Pass Prep" },
    Highlight { icon: "dollar-sign", label: "Risk Management" },
    Highlight { icon: "gauge", label: "Discipline Systems" },
    Highlight { icon: "trending-up", label: "Custom Indicators" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Prop-Firm Evaluation Coaching",
        description: "Targeted prep to align your plan to each firm\u{2019}s rules and risk. Get structured checklists, daily routines, and performance feedback.",
        icon: "book-open",
    },
    Service {
        title: "Custom NinjaTrader Tools",
        description: "Indicators, WPF overlays, and strategy dashboards tailored to your workflow. Built with NT8 best practices and clean UI.",
        icon: "wrench",
    },
    Service {
        title: "Trade Plan & Discipline Systems",
        description: "Operationalize your plan with checklists, guardrails, and stats visibility so execution stays consistent under pressure.",
        icon: "gauge",
    },
];

pub const PROP_FIRM_REASONS: &[&str] = &[
    "Lower capital at risk while learning to execute.",
    "Clear rules force risk discipline and consistency.",
    "Scalable\u{2014}add accounts as you prove edge.",
    "Objective milestones; get paid for performance.",
];

pub const INDICATORS: &[IndicatorProduct] = &[
    IndicatorProduct {
        title: "Strategy Stats Panel",
        blurb: "Live PnL, drawdown, and win-rate right on your chart (with history sync).",
    },
    IndicatorProduct {
        title: "Pulcini Order-Flow Zones",
        blurb: "Absorption, spoofing layers, and imbalance\u{2014}visualized cleanly.",
    },
    IndicatorProduct {
        title: "Risk/Reward Overlay",
        blurb: "Draggable R:R box synced to your strategy or manual entries.",
    },
];
