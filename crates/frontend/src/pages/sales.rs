use crate::routing::use_router;
use crate::shared::components::ui::{
    button_class, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader,
};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::content::pages::Page;
use contracts::content::pricing::{PricingPlan, PRICING_PLANS};
use contracts::content::services::{INDICATORS, SERVICES};
use leptos::prelude::*;

fn plan_card(plan: &'static PricingPlan, on_choose: Callback<leptos::ev::MouseEvent>) -> impl IntoView {
    let class = if plan.is_featured() { "pricing pricing--featured" } else { "pricing" };
    let variant = if plan.is_featured() {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    view! {
        <Card class=class>
            <CardHeader class="pricing__header">
                <h3 class="pricing__name">{plan.name}</h3>
                {plan.badge.map(|text| view! { <Badge variant=BadgeVariant::Success>{text}</Badge> })}
            </CardHeader>
            <CardContent>
                <p class="pricing__price">
                    <span class="pricing__amount">{plan.price}</span>
                    <span class="pricing__cadence">{plan.cadence}</span>
                </p>
                <p class="pricing__summary">{plan.summary}</p>
                <ul class="checklist checklist--compact">
                    {plan
                        .features
                        .iter()
                        .map(|feature| view! {
                            <li class="checklist__item">{icon("check")}<span>{*feature}</span></li>
                        })
                        .collect_view()}
                </ul>
            </CardContent>
            <CardFooter>
                <Button variant=variant class="pricing__cta" on_click=on_choose>
                    "Get Started"
                </Button>
            </CardFooter>
        </Card>
    }
}

/// "Products & Services": what we do, custom indicators, pricing.
#[component]
pub fn SalesPage() -> impl IntoView {
    let router = use_router();
    let to_contact = Callback::new(move |_: leptos::ev::MouseEvent| router.navigate("contact"));

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Products & Services"
                    subtitle="Practical help for real results\u{2014}no fluff."
                />
                <div class="grid grid--3">
                    {SERVICES
                        .iter()
                        .map(|service| view! {
                            <Card>
                                <CardHeader class="service__header">
                                    {icon(service.icon)}
                                    <h3 class="service__title">{service.title}</h3>
                                </CardHeader>
                                <CardContent class="service__body">{service.description}</CardContent>
                                <CardFooter>
                                    <Button size=ButtonSize::Sm on_click=to_contact>"Get Started"</Button>
                                </CardFooter>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="container">
                <SectionHeader
                    title="Custom Indicators & Overlays"
                    subtitle="From order-flow zones to draggable WPF panels, we ship clean, well-documented NinjaScript."
                />
                <div class="grid grid--3">
                    {INDICATORS
                        .iter()
                        .map(|item| view! {
                            <Card>
                                <CardHeader><h3 class="service__title">{item.title}</h3></CardHeader>
                                <CardContent class="service__body">{item.blurb}</CardContent>
                                <CardFooter>
                                    <a
                                        href=Page::Contact.href()
                                        class=button_class(ButtonVariant::Outline, ButtonSize::Sm, "")
                                    >
                                        "Ask About This"
                                    </a>
                                </CardFooter>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeader title="Pricing" subtitle="Simple packages. Cancel coaching any month." />
                <div class="grid grid--3">
                    {PRICING_PLANS.iter().map(|plan| plan_card(plan, to_contact)).collect_view()}
                </div>
            </div>
        </section>
    }
}
