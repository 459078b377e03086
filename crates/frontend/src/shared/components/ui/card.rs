use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("card {}", class)>{children()}</div> }
}

#[component]
pub fn CardHeader(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("card__header {}", class)>{children()}</div> }
}

#[component]
pub fn CardContent(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("card__content {}", class)>{children()}</div> }
}

#[component]
pub fn CardFooter(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("card__footer {}", class)>{children()}</div> }
}
