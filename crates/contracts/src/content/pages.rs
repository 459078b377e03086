use super::navigation::href_for;
use serde::{Deserialize, Serialize};

/// Content block selected by the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Sales,
    Blog,
    Contact,
    Terms,
    Privacy,
    Disclaimer,
}

impl Page {
    /// Route id, i.e. the fragment without `#`.
    pub fn route_id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Sales => "sales",
            Page::Blog => "blog",
            Page::Contact => "contact",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::Disclaimer => "disclaimer",
        }
    }

    /// In-page anchor for this page, e.g. `#contact`.
    pub fn href(&self) -> String {
        href_for(self.route_id())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Sales => "Products & Services",
            Page::Blog => "Trading Journal",
            Page::Contact => "Book a Free Discovery Call",
            Page::Terms => "Terms of Service",
            Page::Privacy => "Privacy Policy",
            Page::Disclaimer => "Risk Disclaimer",
        }
    }

    pub fn all() -> [Page; 7] {
        [
            Page::Home,
            Page::Sales,
            Page::Blog,
            Page::Contact,
            Page::Terms,
            Page::Privacy,
            Page::Disclaimer,
        ]
    }

    /// `None` for routes without a content block; the caller renders nothing.
    pub fn from_route(route: &str) -> Option<Page> {
        Page::all().into_iter().find(|page| page.route_id() == route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::location::{HashRouter, MemoryLocation};

    #[test]
    fn test_route_ids_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_route(page.route_id()), Some(page));
        }
    }

    #[test]
    fn test_href_resolves_back_to_page() {
        assert_eq!(Page::Contact.href(), "#contact");
        for page in Page::all() {
            let router = HashRouter::new(MemoryLocation::with_fragment(&page.href()), "home");
            assert_eq!(Page::from_route(&router.current()), Some(page));
        }
    }

    #[test]
    fn test_unknown_routes_have_no_page() {
        assert_eq!(Page::from_route("pricing"), None);
        assert_eq!(Page::from_route(""), None);
        assert_eq!(Page::from_route("Sales"), None);
        assert_eq!(Page::from_route("#sales"), None);
    }

    #[test]
    fn test_sales_fragment_at_load_shows_products_and_services() {
        let router = HashRouter::new(MemoryLocation::with_fragment("#sales"), "home");
        let route = router.current();
        assert_eq!(route, "sales");

        let page = Page::from_route(&route);
        assert_eq!(page, Some(Page::Sales));
        assert_eq!(page.map(|p| p.title()), Some("Products & Services"));
        assert_ne!(page, Some(Page::Home));
    }

    #[test]
    fn test_empty_fragment_at_load_shows_home() {
        let router = HashRouter::new(MemoryLocation::new(), "home");
        assert_eq!(Page::from_route(&router.current()), Some(Page::Home));
    }

    #[test]
    fn test_serde_uses_route_ids() {
        let json = serde_json::to_string(&Page::Disclaimer).unwrap();
        assert_eq!(json, "\"disclaimer\"");
    }
}
