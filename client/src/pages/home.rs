//! Landing page: hero, headline numbers, and entry points into the site.

use leptos::prelude::*;

use super::content::{HIGHLIGHTS, OWNER_TITLE};
use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::SectionHeader;
use crate::state::route::SiteRoute;
use crate::util::motion::SectionVariant;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container-wide hero__grid">
                <div>
                    <AnimatedSection variant=SectionVariant::Text>
                        <p class="label-caps">{OWNER_TITLE}</p>
                    </AnimatedSection>
                    <AnimatedSection variant=SectionVariant::Text delay_ms=100>
                        <h1 class="heading-display">"Clear documentation for complex products."</h1>
                    </AnimatedSection>
                    <AnimatedSection variant=SectionVariant::Text delay_ms=200>
                        <p class="body-large">
                            "I turn dense systems, regulated workflows, and sprawling APIs into documentation people actually finish reading."
                        </p>
                    </AnimatedSection>
                    <AnimatedSection variant=SectionVariant::Pop delay_ms=300>
                        <div class="hero__actions">
                            <a class="button button--hero" href=SiteRoute::CaseStudies.path()>"View Case Studies"</a>
                            <a class="button button--outline" href=SiteRoute::Contact.path()>"Get in Touch"</a>
                        </div>
                    </AnimatedSection>
                </div>
                <AnimatedSection variant=SectionVariant::Scale delay_ms=200 class="hero__art">
                    <div class="hero__card">
                        <p class="hero__card-label">"Currently"</p>
                        <p class="hero__card-value">"Open to new opportunities"</p>
                    </div>
                </AnimatedSection>
            </div>
        </section>

        <section class="section-padding surface-warm">
            <div class="container-wide">
                <SectionHeader label="Impact" title="Results that ship with the product"/>
                <div class="stat-grid">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, h)| {
                            view! {
                                <AnimatedSection variant=SectionVariant::SlideUp delay_ms=delay_for(i) class="stat-card">
                                    <p class="stat-card__value">{h.value}</p>
                                    <p class="stat-card__label">{h.label}</p>
                                    <p class="stat-card__description">{h.description}</p>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section-padding">
            <div class="container-narrow cta">
                <AnimatedSection variant=SectionVariant::Fade>
                    <h2 class="heading-section">"Have a documentation challenge?"</h2>
                    <p class="body-large">"Tell me about it. I usually reply within two business days."</p>
                    <a class="button button--hero" href=SiteRoute::Contact.path()>"Start a Conversation"</a>
                </AnimatedSection>
            </div>
        </section>
    }
}

/// Stagger for the n-th card in a grid.
pub(crate) fn delay_for(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(100)
}
