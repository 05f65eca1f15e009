//! Toast viewport and the helper pages use to raise notifications.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, ToastKind, ToastState};
use crate::util::transition::schedule;

/// Push a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: &str) {
    let Some(id) = toasts.try_update(|t| t.push(kind, title, description)) else {
        return;
    };
    schedule(TOAST_DURATION_MS, move || toasts.update(|t| t.dismiss(id)));
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class=toast.kind.class() role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
