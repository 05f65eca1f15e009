//! Printable one-page resume.

use leptos::prelude::*;

use super::content::{OWNER_LOCATION, OWNER_TITLE, ROLES, SKILL_GROUPS};
use crate::components::animated_section::AnimatedSection;
use crate::state::route::SiteRoute;

const SUMMARY: &str = "Technical writer with 5+ years delivering documentation for enterprise software platforms, with depth in API documentation, regulatory compliance content, and docs-as-code workflows.";

fn print_page() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.print() {
            log::warn!("print dialog unavailable: {err:?}");
        }
    }
}

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <section class="section-padding resume">
            <div class="container-narrow">
                <div class="resume__toolbar no-print">
                    <button class="button button--outline" on:click=move |_| print_page()>"Print"</button>
                    <a class="button button--hero" href=SiteRoute::Contact.path()>"Contact"</a>
                </div>
                <AnimatedSection class="resume__header">
                    <h1 class="heading-display">{OWNER_TITLE}</h1>
                    <p class="resume__meta">{OWNER_LOCATION}</p>
                    <p>{SUMMARY}</p>
                </AnimatedSection>
                <AnimatedSection delay_ms=100>
                    <h2 class="label-caps">"Experience"</h2>
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <div class="resume__role">
                                    <div class="resume__role-head">
                                        <strong>{role.role}</strong>
                                        " · "
                                        {role.company}
                                        <span class="resume__period">{role.period}</span>
                                    </div>
                                    <ul>
                                        {role.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </AnimatedSection>
                <AnimatedSection delay_ms=200>
                    <h2 class="label-caps">"Skills"</h2>
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <p>
                                    <strong>{group.title}": "</strong>
                                    {group.skills.join(", ")}
                                </p>
                            }
                        })
                        .collect_view()}
                </AnimatedSection>
            </div>
        </section>
    }
}
