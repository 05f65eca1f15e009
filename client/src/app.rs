//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::TransitionHost;
use crate::components::toast::ToastViewport;
use crate::state::route::SiteRoute;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::theme::{self, LocalThemeStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and toast contexts and sets up client-side
/// routing. `Routes` only owns the document title per path; the mounted
/// view is rendered by [`TransitionHost`] so the outgoing page can finish
/// its exit animation before the incoming one mounts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(ui);
    provide_context(toasts);

    // Runs once after hydration; the server always renders the light theme.
    Effect::new(move |_| {
        let preferred = theme::read_preference(&LocalThemeStore, theme::system_prefers_dark());
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Router>
            <Routes fallback=|| view! { <Title text=SiteRoute::NotFound.title()/> }>
                <Route path=StaticSegment("") view=|| view! { <Title text=SiteRoute::Home.title()/> }/>
                <Route path=StaticSegment("about") view=|| view! { <Title text=SiteRoute::About.title()/> }/>
                <Route
                    path=StaticSegment("case-studies")
                    view=|| view! { <Title text=SiteRoute::CaseStudies.title()/> }
                />
                <Route
                    path=StaticSegment("documentation-samples")
                    view=|| view! { <Title text=SiteRoute::DocumentationSamples.title()/> }
                />
                <Route
                    path=StaticSegment("experience")
                    view=|| view! { <Title text=SiteRoute::Experience.title()/> }
                />
                <Route path=StaticSegment("contact") view=|| view! { <Title text=SiteRoute::Contact.title()/> }/>
                <Route path=StaticSegment("resume") view=|| view! { <Title text=SiteRoute::Resume.title()/> }/>
            </Routes>
            <TransitionHost/>
        </Router>
        <ToastViewport/>
    }
}
