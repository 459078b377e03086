use crate::layout::global_context::use_site;
use crate::pages::blog::BlogPreview;
use crate::routing::use_router;
use crate::shared::components::ui::{Button, ButtonVariant, Card, CardContent};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::content::services::{HERO_HIGHLIGHTS, PROP_FIRM_REASONS};
use contracts::content::testimonials::TESTIMONIALS;
use leptos::prelude::*;

#[component]
fn Hero() -> impl IntoView {
    let router = use_router();

    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__inner container">
                <h1 class="hero__title">
                    "Pass Prop-Firm Evals. Trade With Confidence. Level Up Your Edge."
                </h1>
                <p class="hero__lead">
                    "We help futures traders build disciplined trade plans, pass evaluations, and scale using custom NinjaTrader tools and focused coaching."
                </p>
                <div class="hero__actions">
                    <Button on_click=Callback::new(move |_| router.navigate("sales"))>
                        "Explore Services"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| router.navigate("contact"))
                    >
                        "Free Discovery Call"
                    </Button>
                </div>
                <div class="hero__highlights">
                    {HERO_HIGHLIGHTS
                        .iter()
                        .map(|item| view! {
                            <Card class="card--glass">
                                <CardContent class="hero__highlight">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </CardContent>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PropFirmReasons() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <SectionHeader title="Why Traders Use Prop Firms" />
                <ul class="checklist">
                    {PROP_FIRM_REASONS
                        .iter()
                        .map(|reason| view! {
                            <li class="checklist__item">{icon("check")}<span>{*reason}</span></li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <SectionHeader title="What Traders Say" />
                <div class="grid grid--3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <Card>
                                <CardContent class="testimonial">
                                    <blockquote class="testimonial__quote">
                                        {format!("\u{201c}{}\u{201d}", t.quote)}
                                    </blockquote>
                                    <p class="testimonial__author">{t.author}</p>
                                </CardContent>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site();

    view! {
        <Hero />
        <PropFirmReasons />
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="From the Trading Journal"
                    subtitle="Short reads on routines, risk, and funded-account rules."
                />
                <BlogPreview default_tab=site.default_blog_tab() />
            </div>
        </section>
        <Testimonials />
    }
}
