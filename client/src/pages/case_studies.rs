//! Case studies: context, challenge, approach, outcome.

use leptos::prelude::*;

use super::content::CASE_STUDIES;
use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::PageHero;
use crate::util::motion::SectionVariant;

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <PageHero
            label="Case Studies"
            title="Documentation that moved the numbers"
            intro="Selected projects, what was broken, and what changed after the docs shipped."
        />
        {CASE_STUDIES
            .iter()
            .enumerate()
            .map(|(i, study)| {
                let surface = if i % 2 == 0 { "section-padding surface-warm" } else { "section-padding" };
                view! {
                    <section class=surface id=study.slug>
                        <div class="container-narrow case-study">
                            <AnimatedSection variant=SectionVariant::Text>
                                <h2 class="heading-section">{study.title}</h2>
                            </AnimatedSection>
                            <AnimatedSection delay_ms=100>
                                <h3 class="label-caps">"Context"</h3>
                                <p>{study.context}</p>
                                <h3 class="label-caps">"Challenge"</h3>
                                <p>{study.challenge}</p>
                            </AnimatedSection>
                            <AnimatedSection delay_ms=200>
                                <h3 class="label-caps">"Approach"</h3>
                                <ul class="case-study__steps">
                                    {study.approach.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                                </ul>
                            </AnimatedSection>
                            <AnimatedSection variant=SectionVariant::Pop delay_ms=300 class="case-study__outcome">
                                <h3 class="label-caps">"Outcome"</h3>
                                <p>{study.outcome}</p>
                            </AnimatedSection>
                        </div>
                    </section>
                }
            })
            .collect_view()}
    }
}
