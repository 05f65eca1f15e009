//! Experience timeline and skills.

use leptos::prelude::*;

use super::content::{ROLES, SKILL_GROUPS};
use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::{PageHero, SectionHeader};
use crate::util::motion::SectionVariant;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <PageHero
            label="Experience & Skills"
            title="Where I've worked"
            intro="Roles across enterprise SaaS, healthcare technology, and contract documentation."
        />
        <section class="section-padding surface-warm">
            <div class="container-narrow timeline">
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <AnimatedSection variant=SectionVariant::SlideLeft class="timeline__item">
                                <p class="timeline__period">{role.period}</p>
                                <h3 class="heading-subsection">{role.role}</h3>
                                <p class="timeline__company">{role.company}</p>
                                <ul>
                                    {role.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                                </ul>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="section-padding" id="skills">
            <div class="container-wide">
                <SectionHeader label="Skills" title="Toolkit"/>
                <div class="card-grid">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <AnimatedSection delay_ms=super::home::delay_for(i) class="card-elevated">
                                    <h3 class="heading-subsection">{group.title}</h3>
                                    <ul class="tag-list">
                                        {group.skills.iter().map(|s| view! { <li class="tag">{*s}</li> }).collect_view()}
                                    </ul>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
