//! Headings shared by page sections.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::util::motion::SectionVariant;

/// Eyebrow label, heading, and optional intro, each revealed in turn.
#[component]
pub fn SectionHeader(
    #[prop(into)] label: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] intro: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <AnimatedSection variant=SectionVariant::Text>
                <p class="label-caps">{label}</p>
            </AnimatedSection>
            <AnimatedSection variant=SectionVariant::Text delay_ms=100>
                <h2 class="heading-section">{title}</h2>
            </AnimatedSection>
            {intro.map(|intro| view! {
                <AnimatedSection variant=SectionVariant::Text delay_ms=200>
                    <p class="body-large">{intro}</p>
                </AnimatedSection>
            })}
        </div>
    }
}

/// Top-of-page hero block.
#[component]
pub fn PageHero(
    #[prop(into)] label: String,
    #[prop(into)] title: String,
    #[prop(into)] intro: String,
) -> impl IntoView {
    view! {
        <section class="section-padding page-hero">
            <div class="container-narrow">
                <AnimatedSection variant=SectionVariant::Text>
                    <p class="label-caps">{label}</p>
                </AnimatedSection>
                <AnimatedSection variant=SectionVariant::Text delay_ms=100>
                    <h1 class="heading-display">{title}</h1>
                </AnimatedSection>
                <AnimatedSection variant=SectionVariant::Text delay_ms=200>
                    <p class="body-large">{intro}</p>
                </AnimatedSection>
            </div>
        </section>
    }
}
