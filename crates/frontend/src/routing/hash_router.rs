//! Hash router wired into the reactive graph.
//!
//! `provide_router` runs once in `App`: it resolves the initial route, attaches
//! one fragment listener for the lifetime of the owning view and detaches it
//! when that view is cleaned up.

use crate::pages::render_page;
use contracts::shared::location::{HashLocation, HashRouter};
use leptos::prelude::*;

type Navigate = Box<dyn Fn(&str)>;

#[derive(Clone, Copy)]
pub struct RouterContext {
    route: RwSignal<String>,
    navigate: StoredValue<Navigate, LocalStorage>,
}

impl RouterContext {
    /// Current route id. Changes only when a fragment change is delivered.
    pub fn route(&self) -> Signal<String> {
        self.route.into()
    }

    pub fn navigate(&self, target: &str) {
        log::info!("navigate -> '{}'", target);
        self.navigate.with_value(|navigate| navigate(target));
    }
}

/// Build the router over `location` and provide it as context to the current owner.
pub fn provide_router<L>(location: L, default_route: &str) -> RouterContext
where
    L: HashLocation + Clone + 'static,
{
    let router = HashRouter::new(location, default_route);
    let route = RwSignal::new(router.current());
    log::debug!(
        "router mounted at '{}' (default '{}')",
        route.get_untracked(),
        router.default_route()
    );

    let subscription = router.watch(move |next| {
        log::debug!("hashchange -> '{}'", next);
        route.set(next);
    });
    let subscription = StoredValue::new_local(Some(subscription));

    // Dropping the guard would also detach it when the stored value is
    // disposed; detach explicitly so teardown order does not matter.
    on_cleanup(move || {
        if let Some(Some(mut sub)) = subscription.try_update_value(Option::take) {
            if sub.detach() {
                log::debug!("router detached");
            }
        }
    });

    let navigate: Navigate = Box::new(move |target: &str| router.navigate(target));
    let ctx = RouterContext {
        route,
        navigate: StoredValue::new_local(navigate),
    };
    provide_context(ctx);
    ctx
}

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found. Call provide_router in App.")
}

/// Renders the content block of the current route.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = use_router();
    let route = router.route();

    Effect::new(move |_| {
        route.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <main class="page">
            {move || render_page(&route.get())}
        </main>
    }
}
