pub mod app;
pub mod layout;
pub mod pages;
pub mod routing;
pub mod shared;

use app::App;
use contracts::shared::site_config::{load_site_config, SiteConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Parse a configured level name, falling back to `Info`.
pub fn log_level(name: &str) -> log::Level {
    name.parse().unwrap_or(log::Level::Info)
}

#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match load_site_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level(&config.logging.level));
    if let Some(err) = load_error {
        log::error!("{:#}; using built-in defaults", err);
    }
    log::info!("{} starting", config.site.name);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level("debug"), log::Level::Debug);
        assert_eq!(log_level("WARN"), log::Level::Warn);
        assert_eq!(log_level("verbose"), log::Level::Info);
    }
}
