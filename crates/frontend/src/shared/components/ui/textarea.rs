use leptos::prelude::*;

/// Labelled multi-line input
#[component]
pub fn Textarea(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    /// Visible rows, 4 unless set
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <textarea
                id=id
                name=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
