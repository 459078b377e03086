//! Selected-tab state for one tab region.

/// One entry of a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDef {
    pub id: &'static str,
    pub label: &'static str,
}

/// Current tab of a region plus the tabs it was configured with.
///
/// Constructing a new state is how a region resets to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    tabs: &'static [TabDef],
    current: String,
}

impl TabState {
    pub fn new(tabs: &'static [TabDef], default_tab: &str) -> Self {
        Self {
            tabs,
            current: default_tab.to_string(),
        }
    }

    /// Like `new`, but starts at the first tab when `preferred` is not one of
    /// `tabs`.
    pub fn with_configured_default(tabs: &'static [TabDef], preferred: &str) -> Self {
        let mut state = Self::new(tabs, preferred);
        if !state.is_configured(preferred) {
            if let Some(first) = tabs.first() {
                state.select(first.id);
            }
        }
        state
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Make `id` the current tab. Ids outside the configured set are stored
    /// as-is and simply resolve to no content.
    pub fn select(&mut self, id: &str) {
        if self.current != id {
            self.current = id.to_string();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current == id
    }

    pub fn is_configured(&self, id: &str) -> bool {
        self.tabs.iter().any(|tab| tab.id == id)
    }
}
