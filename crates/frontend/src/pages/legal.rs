use crate::shared::components::SectionHeader;
use contracts::content::legal::legal_notice;
use contracts::content::pages::Page;
use leptos::prelude::*;

#[component]
pub fn LegalPage(page: Page) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container legal">
                <SectionHeader title=page.title() />
                {legal_notice(page)
                    .iter()
                    .map(|paragraph| view! { <p class="legal__paragraph">{*paragraph}</p> })
                    .collect_view()}
                <p class="legal__back"><a href=Page::Home.href()>"Back to home"</a></p>
            </div>
        </section>
    }
}
