//! Sun/moon button that flips and persists the color theme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::motion::theme_icon_variant;
use crate::util::theme::{self, LocalThemeStore};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_dark = move || ui.with(|u| u.theme.is_dark());

    let on_click = move |_| {
        let current = ui.with_untracked(|u| u.theme);
        let next = theme::toggle(&LocalThemeStore, current);
        ui.update(|u| u.theme = next);
    };

    // Both icons stay mounted; the inactive one sits in its exit frame.
    let icon_style = move |for_dark: bool| {
        move || {
            let variant = theme_icon_variant(for_dark);
            if is_dark() == for_dark { variant.animate_style() } else { variant.exit_style() }
        }
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle theme">
            <span class="theme-toggle__icon" style=icon_style(true)>"☾"</span>
            <span class="theme-toggle__icon" style=icon_style(false)>"☀"</span>
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
