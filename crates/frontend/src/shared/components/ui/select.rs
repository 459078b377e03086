use leptos::prelude::*;

/// Labelled dropdown over a fixed list of options
#[component]
pub fn Select(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Option values; each value doubles as its label
    options: &'static [&'static str],
    /// Text of the leading empty option
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                id=id
                name=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.with(String::is_empty)>{text}</option>
                })}
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.with(|v| v.as_str() == option)>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
