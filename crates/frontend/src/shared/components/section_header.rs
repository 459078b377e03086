use leptos::prelude::*;

/// Heading block at the top of every page section.
#[component]
pub fn SectionHeader(
    /// Section title (required)
    #[prop(into)]
    title: String,

    /// Optional lead paragraph under the title
    #[prop(optional, into)]
    subtitle: Option<String>,

    /// Render light text for dark sections
    #[prop(optional)]
    inverted: bool,
) -> impl IntoView {
    let class = if inverted {
        "section-header section-header--inverted"
    } else {
        "section-header"
    };

    view! {
        <div class=class>
            <h2 class="section-header__title">{title}</h2>
            {subtitle.map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}
