//! Scroll-revealed wrapper that plays a section variant once.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::motion::{SectionVariant, section_variant};

/// Without hydration there is no observer to reveal anything, so server
/// rendered markup starts in the animate frame and stays readable.
#[component]
pub fn AnimatedSection(
    #[prop(optional)] variant: SectionVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let revealed = RwSignal::new(crate::util::reveal::starts_revealed());
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let guard = StoredValue::new_local(None::<crate::util::reveal::RevealGuard>);
        Effect::new(move |_| {
            let Some(el) = node.get() else {
                return;
            };
            let margin = if variant == SectionVariant::Text { "0px" } else { crate::util::reveal::SECTION_ROOT_MARGIN };
            guard.set_value(crate::util::reveal::observe_once(&el, margin, move || revealed.set(true)));
        });
        on_cleanup(move || {
            guard.try_update_value(|g| g.take());
        });
    }

    let motion = section_variant(variant).with_delay(delay_ms);
    let style = move || if revealed.get() { motion.animate_style() } else { motion.initial_style() };

    view! {
        <div node_ref=node class=format!("animated-section {class}") style=style>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "animated_section_test.rs"]
mod tests;
