use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::routing::{provide_router, BrowserLocation, RouteOutlet};
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let default_route = config.routing.default_route.clone();

    // Site configuration for the whole tree
    provide_context(SiteContext::new(config));

    // One hashchange subscription, released when App is torn down
    provide_router(BrowserLocation::default(), &default_route);

    view! {
        <Shell>
            <RouteOutlet />
        </Shell>
    }
}
