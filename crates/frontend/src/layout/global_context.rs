use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// Read-only site configuration shared with the whole view tree.
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn site_name(&self) -> String {
        self.config.with_value(|c| c.site.name.clone())
    }

    pub fn tagline(&self) -> String {
        self.config.with_value(|c| c.site.tagline.clone())
    }

    pub fn contact_email(&self) -> String {
        self.config.with_value(|c| c.contact.email.clone())
    }

    pub fn default_blog_tab(&self) -> String {
        self.config.with_value(|c| c.blog.default_tab.clone())
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found. Provide it in App.")
}
