use crate::layout::global_context::use_site;
use crate::routing::use_router;
use crate::shared::components::ui::{Button, ButtonSize};
use crate::shared::icons::icon;
use contracts::content::navigation::PRIMARY_NAV;
use contracts::content::pages::Page;
use leptos::prelude::*;

/// Sticky top bar with brand, primary navigation and the call-to-action.
#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let router = use_router();
    let route = router.route();
    let (menu_open, set_menu_open) = signal(false);

    // Close the mobile menu whenever the route changes
    Effect::new(move |_| {
        route.track();
        set_menu_open.set(false);
    });

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="site-header">
            <div class="site-header__inner container">
                <a href=Page::Home.href() class="site-header__brand">{site.site_name()}</a>

                <nav
                    aria-label="Primary"
                    class=move || {
                        if menu_open.get() {
                            "site-header__nav site-header__nav--open"
                        } else {
                            "site-header__nav"
                        }
                    }
                >
                    {PRIMARY_NAV
                        .iter()
                        .map(|link| {
                            let is_current = move || route.with(|r| r.as_str() == link.route);
                            view! {
                                <a
                                    href=link.href()
                                    class=move || {
                                        if is_current() {
                                            "site-header__link site-header__link--active"
                                        } else {
                                            "site-header__link"
                                        }
                                    }
                                    aria-current=move || is_current().then_some("page")
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <Button
                        size=ButtonSize::Sm
                        class="site-header__cta"
                        on_click=Callback::new(move |_| router.navigate("contact"))
                    >
                        "Book a Call"
                    </Button>
                    <button
                        type="button"
                        class="site-header__menu-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>
        </header>
    }
}
