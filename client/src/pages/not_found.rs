//! Catch-all view for unknown paths.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::animated_section::AnimatedSection;
use crate::state::route::SiteRoute;
use crate::util::motion::SectionVariant;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
    #[cfg(feature = "hydrate")]
    log::error!("404: no route for {path}");

    view! {
        <section class="not-found">
            <AnimatedSection variant=SectionVariant::Pop>
                <h1 class="not-found__code">"404"</h1>
            </AnimatedSection>
            <AnimatedSection variant=SectionVariant::Text delay_ms=200>
                <p class="not-found__message">"This page doesn't exist"</p>
                <p class="not-found__path">{path}</p>
            </AnimatedSection>
            <AnimatedSection variant=SectionVariant::Text delay_ms=400>
                <a class="button button--hero" href=SiteRoute::Home.path()>"Return Home"</a>
            </AnimatedSection>
        </section>
    }
}
