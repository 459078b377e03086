use contracts::shared::tabs::TabDef;
use leptos::prelude::*;

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__tab tabs__tab--active"
    } else {
        "tabs__tab"
    }
}

/// Tab strip. Holds no state: the owning region passes the current id in and
/// receives the clicked id through `on_change`.
#[component]
pub fn Tabs(
    tabs: &'static [TabDef],
    #[prop(into)]
    current: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {tabs
                .iter()
                .map(|tab| {
                    let id = tab.id;
                    let is_active = move || current.with(|c| c.as_str() == id);
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || tab_class(is_active())
                            on:click=move |_| on_change.run(id.to_string())
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
