//! Blog preview widget: tab definitions and the posts shown for each tab.

use crate::shared::tabs::TabDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
    pub read_minutes: u8,
}

pub const BLOG_TABS: &[TabDef] = &[
    TabDef { id: "latest", label: "Latest" },
    TabDef { id: "risk", label: "Risk Management" },
    TabDef { id: "prop", label: "Prop Firms" },
];

const LATEST_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building a Pre-Market Routine That Sticks",
        summary: "A 20-minute checklist that sets levels, bias, and max loss before the open.",
        tag: "Routine",
        read_minutes: 6,
    },
    BlogPost {
        title: "What the Strategy Stats Panel Taught Us About Overtrading",
        summary: "Three months of chart-side stats and the patterns they exposed.",
        tag: "Tools",
        read_minutes: 8,
    },
    BlogPost {
        title: "Journaling Without Burning Out",
        summary: "Capture the five data points that matter and skip the rest.",
        tag: "Discipline",
        read_minutes: 5,
    },
];

const RISK_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Sizing to the Trailing Drawdown",
        summary: "Work backwards from the firm's drawdown to a contract size you can survive.",
        tag: "Risk",
        read_minutes: 7,
    },
    BlogPost {
        title: "The Daily Loss Limit Is a Ceiling, Not a Target",
        summary: "Why your personal stop should sit well inside the firm's limit.",
        tag: "Risk",
        read_minutes: 4,
    },
    BlogPost {
        title: "Guardrails That Turn Off Your Platform",
        summary: "Automating lockouts so a bad morning can't become a blown account.",
        tag: "Risk",
        read_minutes: 6,
    },
];

const PROP_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Reading the Fine Print of an Evaluation",
        summary: "Consistency rules, news restrictions, and the clauses that fail most traders.",
        tag: "Prop Firms",
        read_minutes: 9,
    },
    BlogPost {
        title: "From Funded to Paid: Your First Payout",
        summary: "Buffers, payout schedules, and keeping the account after the first withdrawal.",
        tag: "Prop Firms",
        read_minutes: 6,
    },
    BlogPost {
        title: "Scaling Across Multiple Accounts",
        summary: "Trade copiers, correlated risk, and when adding accounts makes sense.",
        tag: "Prop Firms",
        read_minutes: 7,
    },
];

/// Posts for a blog tab. Unknown ids get no posts.
pub fn posts_for_tab(id: &str) -> &'static [BlogPost] {
    match id {
        "latest" => LATEST_POSTS,
        "risk" => RISK_POSTS,
        "prop" => PROP_POSTS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::site_config::load_site_config;
    use crate::shared::tabs::TabState;

    fn configured_state() -> TabState {
        let config = load_site_config().unwrap();
        TabState::with_configured_default(BLOG_TABS, &config.blog.default_tab)
    }

    #[test]
    fn test_every_configured_tab_has_three_posts() {
        for tab in BLOG_TABS {
            assert_eq!(posts_for_tab(tab.id).len(), 3, "tab {}", tab.id);
        }
    }

    #[test]
    fn test_site_default_tab_is_configured() {
        let config = load_site_config().unwrap();
        let state = configured_state();
        assert!(state.is_configured(&config.blog.default_tab));
        assert_eq!(state.current(), "latest");
        assert_eq!(posts_for_tab(state.current()), LATEST_POSTS);
    }

    #[test]
    fn test_select_each_tab_shows_its_block() {
        let mut state = configured_state();
        for (id, expected) in [("risk", RISK_POSTS), ("prop", PROP_POSTS), ("latest", LATEST_POSTS)] {
            state.select(id);
            assert_eq!(state.current(), id);
            assert_eq!(posts_for_tab(state.current()), expected);
        }
    }

    #[test]
    fn test_selecting_risk_replaces_latest_posts() {
        let mut state = TabState::new(BLOG_TABS, "latest");
        let before = posts_for_tab(state.current());

        state.select("risk");

        assert_eq!(state.current(), "risk");
        let after = posts_for_tab(state.current());
        assert_eq!(after.len(), 3);
        assert!(after.iter().all(|post| !before.contains(post)));
        assert_eq!(after[0].title, "Sizing to the Trailing Drawdown");
    }

    #[test]
    fn test_unknown_tab_renders_nothing() {
        let mut state = configured_state();
        let other = configured_state();

        state.select("archive");

        assert!(posts_for_tab(state.current()).is_empty());
        assert_eq!(other.current(), "latest");
        assert_eq!(posts_for_tab(other.current()).len(), 3);
    }
}
