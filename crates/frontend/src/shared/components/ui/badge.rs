use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Accent,
    Success,
}

/// Small pill label
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        BadgeVariant::Neutral => "badge--neutral",
        BadgeVariant::Accent => "badge--accent",
        BadgeVariant::Success => "badge--success",
    };

    view! {
        <span class=format!("badge {} {}", variant_class, class)>
            {children()}
        </span>
    }
}
