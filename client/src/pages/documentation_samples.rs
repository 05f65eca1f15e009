//! Short writing samples by document type.

use leptos::prelude::*;

use super::content::SAMPLES;
use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::PageHero;
use crate::util::motion::SectionVariant;

#[component]
pub fn DocumentationSamplesPage() -> impl IntoView {
    view! {
        <PageHero
            label="Documentation Samples"
            title="Writing samples"
            intro="Excerpts written for fictional products, showing structure and voice across document types."
        />
        <section class="section-padding surface-warm">
            <div class="container-wide card-grid">
                {SAMPLES
                    .iter()
                    .enumerate()
                    .map(|(i, sample)| {
                        view! {
                            <AnimatedSection variant=SectionVariant::Scale delay_ms=super::home::delay_for(i) class="card-elevated sample">
                                <p class="label-caps">{sample.kind}</p>
                                <h2 class="heading-subsection">{sample.title}</h2>
                                <p class="sample__description">{sample.description}</p>
                                <blockquote class="sample__excerpt">{sample.excerpt}</blockquote>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
