//! Biography page.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::{PageHero, SectionHeader};
use crate::util::motion::SectionVariant;

const PRINCIPLES: &[(&str, &str)] = &[
    ("Audience first", "Every document starts from who is reading it and what they need to do next."),
    ("Accuracy over polish", "Docs are tested against the product, not just proofread."),
    ("Docs as code", "Documentation lives next to the source, reviewed and versioned like it."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHero
            label="About"
            title="Writer, editor, and systems thinker"
            intro="Five years of documenting enterprise software, from developer platforms to regulated healthcare products."
        />
        <section class="section-padding surface-warm">
            <div class="container-narrow">
                <AnimatedSection variant=SectionVariant::SlideLeft>
                    <p class="body-large">
                        "I started as a contract writer documenting integrations for B2B software companies, and have since led documentation for platform products used by hundreds of enterprise clients."
                    </p>
                </AnimatedSection>
                <AnimatedSection variant=SectionVariant::SlideRight delay_ms=100>
                    <p class="body-large">
                        "My work sits between engineering, product, and support: interviewing subject-matter experts, shaping information architecture, and keeping content accurate as products change."
                    </p>
                </AnimatedSection>
            </div>
        </section>
        <section class="section-padding">
            <div class="container-wide">
                <SectionHeader label="Approach" title="How I work"/>
                <div class="card-grid">
                    {PRINCIPLES
                        .iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <AnimatedSection delay_ms=super::home::delay_for(i) class="card-elevated">
                                    <h3 class="heading-subsection">{*title}</h3>
                                    <p>{*body}</p>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
