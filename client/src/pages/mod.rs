//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Static copy lives in `content`.

pub mod about;
pub mod case_studies;
pub mod contact;
pub(crate) mod content;
pub mod documentation_samples;
pub mod experience;
pub mod home;
pub mod not_found;
pub mod resume;

use leptos::prelude::*;

use crate::state::route::SiteRoute;
use about::AboutPage;
use case_studies::CaseStudiesPage;
use contact::ContactPage;
use documentation_samples::DocumentationSamplesPage;
use experience::ExperiencePage;
use home::HomePage;
use not_found::NotFoundPage;
use resume::ResumePage;

/// Build the view for a resolved route.
pub fn render(route: SiteRoute) -> AnyView {
    match route {
        SiteRoute::Home => view! { <HomePage/> }.into_any(),
        SiteRoute::About => view! { <AboutPage/> }.into_any(),
        SiteRoute::CaseStudies => view! { <CaseStudiesPage/> }.into_any(),
        SiteRoute::DocumentationSamples => view! { <DocumentationSamplesPage/> }.into_any(),
        SiteRoute::Experience => view! { <ExperiencePage/> }.into_any(),
        SiteRoute::Contact => view! { <ContactPage/> }.into_any(),
        SiteRoute::Resume => view! { <ResumePage/> }.into_any(),
        SiteRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
