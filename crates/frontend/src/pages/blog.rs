use crate::layout::global_context::use_site;
use crate::shared::components::ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, Tabs};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::content::blog::{posts_for_tab, BlogPost, BLOG_TABS};
use contracts::shared::tabs::TabState;
use leptos::prelude::*;

fn post_card(post: &'static BlogPost) -> impl IntoView {
    view! {
        <Card class="post">
            <CardHeader class="post__header">
                <Badge variant=BadgeVariant::Accent>{post.tag}</Badge>
                <span class="post__meta">
                    {icon("clock")}
                    {format!("{} min read", post.read_minutes)}
                </span>
            </CardHeader>
            <CardContent>
                <h3 class="post__title">{post.title}</h3>
                <p class="post__summary">{post.summary}</p>
            </CardContent>
        </Card>
    }
}

/// Tabbed blog widget. Owns its tab state, so every mount starts at `default_tab`.
#[component]
pub fn BlogPreview(#[prop(into)] default_tab: String) -> impl IntoView {
    let initial = TabState::with_configured_default(BLOG_TABS, &default_tab);
    if initial.current() != default_tab {
        log::warn!(
            "blog tab '{}' is not configured, starting at '{}'",
            default_tab,
            initial.current()
        );
    }
    let state = RwSignal::new(initial);
    let current = Signal::derive(move || state.with(|s| s.current().to_string()));

    let on_change = Callback::new(move |id: String| {
        log::debug!("blog tab -> '{}'", id);
        state.update(|s| s.select(&id));
    });

    view! {
        <div class="blog-preview">
            <Tabs tabs=BLOG_TABS current=current on_change=on_change />
            <div class="blog-preview__posts grid grid--3" role="tabpanel">
                {move || {
                    state.with(|s| posts_for_tab(s.current()))
                        .iter()
                        .map(post_card)
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let site = use_site();

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Trading Journal"
                    subtitle="Notes from coaching sessions: routines, risk, and prop-firm rules."
                />
                <BlogPreview default_tab=site.default_blog_tab() />
            </div>
        </section>
    }
}
