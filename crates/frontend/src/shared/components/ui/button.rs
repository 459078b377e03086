use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Secondary => "button--secondary",
        ButtonVariant::Outline => "button--outline",
    };
    let size_class = match size {
        ButtonSize::Sm => "button--sm",
        ButtonSize::Md => "button--md",
        ButtonSize::Lg => "button--lg",
    };
    let mut class = format!("button {} {}", variant_class, size_class);
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Button with variants (primary, secondary, outline) and sizes (sm, md, lg)
#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional)]
    size: ButtonSize,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute, "button" unless set
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=button_class(variant, size, class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
