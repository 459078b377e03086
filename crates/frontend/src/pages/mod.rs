//! Route content registry: the single place mapping a route id to its view.

pub mod blog;
pub mod contact;
pub mod home;
pub mod legal;
pub mod sales;

use contracts::content::pages::Page;
use leptos::prelude::*;

/// View for a route id. Routes without a content block render nothing.
pub fn render_page(route: &str) -> AnyView {
    let Some(page) = Page::from_route(route) else {
        log::debug!("no content block for route '{}'", route);
        return view! { <></> }.into_any();
    };

    match page {
        Page::Home => view! { <home::HomePage /> }.into_any(),
        Page::Sales => view! { <sales::SalesPage /> }.into_any(),
        Page::Blog => view! { <blog::BlogPage /> }.into_any(),
        Page::Contact => view! { <contact::ContactPage /> }.into_any(),
        Page::Terms | Page::Privacy | Page::Disclaimer => {
            view! { <legal::LegalPage page=page /> }.into_any()
        }
    }
}
