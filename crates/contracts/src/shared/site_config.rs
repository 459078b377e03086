//! Site configuration.
//!
//! `site.toml` at the crate root is embedded at compile time, so the wasm
//! bundle needs no runtime fetch to know its defaults.

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub routing: RoutingConfig,
    pub blog: BlogConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Route used while the URL fragment is empty.
    pub default_route: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    pub default_tab: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub email: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo {
                name: "MKW Consulting".to_string(),
                tagline: "Day trading consultation, education, and custom NinjaTrader tools."
                    .to_string(),
            },
            routing: RoutingConfig {
                default_route: "home".to_string(),
            },
            blog: BlogConfig {
                default_tab: "latest".to_string(),
            },
            contact: ContactConfig {
                email: "info@mkwtrading.com".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../site.toml");

/// Load the embedded `site.toml`.
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    parse_site_config(EMBEDDED_CONFIG).context("embedded site.toml is invalid")
}

pub fn parse_site_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_site_config().unwrap();
        assert_eq!(config.routing.default_route, "home");
        assert_eq!(config.blog.default_tab, "latest");
        assert_eq!(config.contact.email, "info@mkwtrading.com");
    }

    #[test]
    fn test_embedded_config_matches_fallback() {
        assert_eq!(load_site_config().unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = parse_site_config(
            r#"
[site]
name = "Test"
tagline = "t"

[routing]
default_route = "start"

[blog]
default_tab = "risk"

[contact]
email = "a@b.c"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.routing.default_route, "start");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_site_config("[site]\nname = \"x\"\ntagline = \"y\"\n").is_err());
        assert!(parse_site_config("not toml at all [").is_err());
    }
}
