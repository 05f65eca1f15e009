//! Thin bar across the top of the viewport tracking scroll depth.

use leptos::prelude::*;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::read_document_progress;

        progress.set(read_document_progress());
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            progress.set(read_document_progress());
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="scroll-progress"
            style=move || format!("transform:scaleX({:.4});", progress.get())
        ></div>
    }
}
