//! Static navigation anchors. Every link is a plain `#<route-id>` href.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        href_for(self.route)
    }
}

pub const PRIMARY_NAV: &[NavLink] = &[
    NavLink { route: "home", label: "Home" },
    NavLink { route: "sales", label: "Services" },
    NavLink { route: "blog", label: "Blog" },
    NavLink { route: "contact", label: "Contact" },
];

pub const FOOTER_COMPANY: &[NavLink] = &[
    NavLink { route: "sales", label: "Services" },
    NavLink { route: "sales", label: "Pricing" },
    NavLink { route: "blog", label: "Blog" },
    NavLink { route: "contact", label: "Contact" },
];

pub const FOOTER_LEGAL: &[NavLink] = &[
    NavLink { route: "terms", label: "Terms" },
    NavLink { route: "privacy", label: "Privacy" },
    NavLink { route: "disclaimer", label: "Risk Disclaimer" },
];

pub fn href_for(route: &str) -> String {
    format!("#{}", route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::pages::Page;

    #[test]
    fn test_href_for() {
        assert_eq!(href_for("blog"), "#blog");
        assert_eq!(PRIMARY_NAV[0].href(), "#home");
    }

    #[test]
    fn test_every_link_resolves_to_a_page() {
        for link in PRIMARY_NAV.iter().chain(FOOTER_COMPANY).chain(FOOTER_LEGAL) {
            assert!(
                Page::from_route(link.route).is_some(),
                "dangling link: {}",
                link.route
            );
        }
    }
}
