use crate::layout::global_context::use_site;
use chrono::{Datelike, Utc};
use contracts::content::navigation::{NavLink, FOOTER_COMPANY, FOOTER_LEGAL};
use leptos::prelude::*;

fn link_list(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="site-footer__links">
            {links
                .iter()
                .map(|link| view! {
                    <li><a href=link.href() class="site-footer__link">{link.label}</a></li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let email = site.contact_email();
    let year = Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid container">
                <div>
                    <h4 class="site-footer__brand">{site.site_name()}</h4>
                    <p class="site-footer__tagline">{site.tagline()}</p>
                </div>
                <div>
                    <h5 class="site-footer__heading">"Company"</h5>
                    {link_list(FOOTER_COMPANY)}
                </div>
                <div>
                    <h5 class="site-footer__heading">"Legal"</h5>
                    {link_list(FOOTER_LEGAL)}
                </div>
                <div>
                    <h5 class="site-footer__heading">"Get in touch"</h5>
                    <p class="site-footer__text">
                        "Email: "
                        <a href=format!("mailto:{}", email) class="site-footer__link">{email.clone()}</a>
                    </p>
                </div>
            </div>
            <div class="site-footer__legal container">
                {format!("\u{a9} {} {}. All rights reserved.", year, site.site_name())}
            </div>
        </footer>
    }
}
