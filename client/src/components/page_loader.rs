//! Full-screen loading overlay shown at startup and between routes.

use leptos::prelude::*;

use crate::util::motion::loader_variant;

#[component]
pub fn PageLoader(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let style = move || {
        let variant = loader_variant();
        if visible.get() {
            variant.animate_style()
        } else {
            format!("{}pointer-events:none;", variant.exit_style())
        }
    };

    view! {
        <div class="page-loader" style=style aria-hidden=move || (!visible.get()).to_string()>
            <div class="page-loader__spinner">
                <div class="page-loader__ring"></div>
                <div class="page-loader__arc"></div>
                <div class="page-loader__pulse"></div>
                <div class="page-loader__dot"></div>
            </div>
            <div class="page-loader__label">
                <span>"Loading"</span>
                <span class="page-loader__dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </span>
            </div>
        </div>
    }
}
