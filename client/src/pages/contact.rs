//! Contact page: direct links plus the message form.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::section_header::PageHero;
use crate::components::toast::notify;
use crate::state::contact::{ContactField, ContactState, SubmitBlocked};
use crate::state::toast::ToastState;
use crate::util::motion::SectionVariant;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageHero
            label="Get in Touch"
            title="Let's Connect"
            intro="Open to new opportunities, collaborations, and interesting documentation challenges. I'd love to hear from you."
        />
        <section class="section-padding surface-warm">
            <div class="container-narrow contact-grid">
                <AnimatedSection class="contact-grid__direct">
                    <h2 class="heading-subsection">"Direct Contact"</h2>
                    <a class="contact-link" href="https://www.linkedin.com/" target="_blank" rel="noopener noreferrer">
                        <span class="contact-link__label">"LinkedIn"</span>
                        <span class="contact-link__value">"Connect on LinkedIn"</span>
                    </a>
                    <div class="divider"></div>
                    <p class="muted">"Based in the United States, available for remote work globally."</p>
                </AnimatedSection>
                <AnimatedSection delay_ms=100 class="contact-grid__form card-elevated">
                    <h2 class="heading-subsection">"Send a Message"</h2>
                    <ContactForm/>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let inline_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match contact.try_update(ContactState::begin_submit) {
            Some(Ok(request)) => {
                inline_error.set(None);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::net::contact::{ContactChannel, SiteChannel};
                    use crate::state::contact::complete;

                    let result = SiteChannel::from_build_env().send(&request).await;
                    if let Err(e) = &result {
                        log::error!("contact submission failed: {e}");
                    }
                    if let Some(notice) = contact.try_update(|s| complete(s, result)) {
                        notify(toasts, notice.kind, notice.title, &notice.description);
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (request, toasts);
            }
            Some(Err(SubmitBlocked::Invalid(err))) => inline_error.set(Some(err.to_string())),
            Some(Err(SubmitBlocked::InFlight)) | None => {}
        }
    };

    let field_value = move |field: ContactField| move || contact.with(|s| s.fields.get(field).to_owned());
    let submitting = move || contact.with(ContactState::is_submitting);

    view! {
        <Show
            when=move || contact.with(ContactState::is_submitted)
            fallback=move || {
                view! {
                    <form class="contact-form" on:submit=on_submit>
                        <div class="contact-form__row">
                            <label class="contact-form__field">
                                <span>"Name"</span>
                                <input
                                    name="name"
                                    type="text"
                                    placeholder="Your name"
                                    required
                                    prop:value=field_value(ContactField::Name)
                                    on:input=move |ev| contact.update(|s| s.fields.set(ContactField::Name, event_target_value(&ev)))
                                />
                            </label>
                            <label class="contact-form__field">
                                <span>"Email"</span>
                                <input
                                    name="email"
                                    type="email"
                                    placeholder="your@email.com"
                                    required
                                    prop:value=field_value(ContactField::Email)
                                    on:input=move |ev| contact.update(|s| s.fields.set(ContactField::Email, event_target_value(&ev)))
                                />
                            </label>
                        </div>
                        <label class="contact-form__field">
                            <span>"Brief Project Description"</span>
                            <textarea
                                name="message"
                                rows="4"
                                placeholder="Tell me about your documentation needs or opportunity..."
                                required
                                prop:value=field_value(ContactField::Message)
                                on:input=move |ev| contact.update(|s| s.fields.set(ContactField::Message, event_target_value(&ev)))
                            ></textarea>
                            <small class="muted">"A sentence or two is perfect. We can discuss details later."</small>
                        </label>
                        <Show when=move || inline_error.get().is_some()>
                            <p class="contact-form__error" role="alert">{move || inline_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="button button--hero" type="submit" disabled=submitting>
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                }
            }
        >
            <AnimatedSection variant=SectionVariant::Pop class="contact-success">
                <div class="contact-success__icon">"✓"</div>
                <h3 class="heading-subsection">"Message Sent!"</h3>
                <p class="muted">"Thank you for reaching out. I'll get back to you within 24-48 hours."</p>
                <button class="button button--outline" on:click=move |_| contact.update(ContactState::reset)>
                    "Send Another Message"
                </button>
            </AnimatedSection>
        </Show>
    }
}
