#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    /// Billing period shown after the price, e.g. "/ month".
    pub cadence: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    /// Badge text for the highlighted plan.
    pub badge: Option<&'static str>,
}

impl PricingPlan {
    pub fn is_featured(&self) -> bool {
        self.badge.is_some()
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "eval-sprint",
        name: "Eval Sprint",
        price: "$249",
        cadence: "one-time",
        summary: "Two weeks of focused prep for a single prop-firm evaluation.",
        features: &[
            "Rule-by-rule plan review",
            "Daily pre-market checklist",
            "Two 45-minute coaching calls",
        ],
        badge: None,
    },
    PricingPlan {
        id: "coaching",
        name: "Ongoing Coaching",
        price: "$399",
        cadence: "/ month",
        summary: "Weekly accountability while you trade funded accounts.",
        features: &[
            "Weekly performance review",
            "Risk guardrail tuning",
            "Chat support during market hours",
            "Strategy Stats Panel license",
        ],
        badge: Some("Most popular"),
    },
    PricingPlan {
        id: "custom-build",
        name: "Custom Tool Build",
        price: "From $750",
        cadence: "per project",
        summary: "A NinjaTrader indicator or overlay built around your workflow.",
        features: &[
            "Scoping call and written plan",
            "Clean, documented NinjaScript",
            "30 days of fixes after delivery",
        ],
        badge: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_plan() {
        let featured: Vec<_> = PRICING_PLANS.iter().filter(|p| p.is_featured()).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "coaching");
    }
}
