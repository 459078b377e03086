use leptos::prelude::*;

/// Labelled text input
#[component]
pub fn Input(
    /// Element id, also used by the label's `for`
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    /// "text" unless set ("email", "tel", ...)
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                name=id
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
