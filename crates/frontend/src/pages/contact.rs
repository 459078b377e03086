use crate::layout::global_context::use_site;
use crate::shared::components::ui::{button_class, Button, ButtonSize, ButtonVariant, Input, Select, Textarea};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::contact::{ContactRequest, CONTACT_TOPICS};
use contracts::content::pages::Page;
use leptos::prelude::*;

/// Field setter bound to one `ContactRequest` field.
fn field_setter(
    form: RwSignal<ContactRequest>,
    set: fn(&mut ContactRequest, String),
) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| set(f, value)))
}

fn field_value(form: RwSignal<ContactRequest>, get: fn(&ContactRequest) -> &String) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f).clone()))
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_site();
    let recipient = site.contact_email();
    let form = RwSignal::new(ContactRequest::default());

    // The form is never posted anywhere: the request goes to the visitor's
    // mail client as a prefilled message.
    let mailto = recipient.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = form.with_untracked(|f| f.mailto_url(&mailto));
        log::info!("handing contact request to mail client");
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(&url) {
            log::error!("failed to open mail client: {:?}", err);
        }
    };

    view! {
        <section class="section section--dark">
            <div class="container contact">
                <SectionHeader
                    title="Book a Free Discovery Call"
                    subtitle="Tell us where you\u{2019}re at and what\u{2019}s blocking consistency. We\u{2019}ll outline a plan."
                    inverted=true
                />

                <div class="contact__layout">
                    <form class="contact__form form" on:submit=on_submit>
                        <div class="form__row">
                            <Input
                                id="contact-name"
                                label="Name"
                                autocomplete="name"
                                value=field_value(form, |f| &f.name)
                                on_input=field_setter(form, |f, v| f.name = v)
                            />
                            <Input
                                id="contact-email"
                                label="Email"
                                input_type="email"
                                autocomplete="email"
                                value=field_value(form, |f| &f.email)
                                on_input=field_setter(form, |f, v| f.email = v)
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                id="contact-phone"
                                label="Phone"
                                input_type="tel"
                                autocomplete="tel"
                                value=field_value(form, |f| &f.phone)
                                on_input=field_setter(form, |f, v| f.phone = v)
                            />
                            <Select
                                id="contact-topic"
                                label="Topic"
                                options=CONTACT_TOPICS
                                placeholder="Choose a topic"
                                value=field_value(form, |f| &f.topic)
                                on_change=field_setter(form, |f, v| f.topic = v)
                            />
                        </div>
                        <Textarea
                            id="contact-message"
                            label="Message"
                            rows=5
                            placeholder="Your market, account size, and what keeps going wrong."
                            value=field_value(form, |f| &f.message)
                            on_input=field_setter(form, |f, v| f.message = v)
                        />
                        <Button button_type="submit">"Send Message"</Button>
                    </form>

                    <aside class="contact__aside">
                        <p>"Prefer email? Write to us directly."</p>
                        <a
                            aria-label="Open email to contact us"
                            href=format!("mailto:{}", recipient)
                            class=button_class(ButtonVariant::Secondary, ButtonSize::Md, "")
                        >
                            {icon("mail")}
                            <span>{recipient.clone()}</span>
                        </a>
                        <p class="contact__fineprint">
                            "By contacting us you agree to our "
                            <a href=Page::Terms.href()>"terms"</a>
                            " and understand trading involves risk."
                        </p>
                    </aside>
                </div>
            </div>
        </section>
    }
}
