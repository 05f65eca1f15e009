//! Persistent page chrome and the route transition host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TransitionHost` watches the router location and drives
//! [`TransitionState`]: the outgoing view plays the page exit variant, the
//! pending path is mounted once that finishes, and the incoming view plays
//! the enter variant. The header, footer, and scroll bar wrap every view.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::page_loader::PageLoader;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::theme_toggle::ThemeToggle;
use crate::pages;
use crate::state::route::{NAV_LINKS, SiteRoute, is_active};
use crate::state::ui::UiState;
use crate::util::motion::page_variant;
use crate::util::reveal::starts_revealed;
use crate::util::transition::{INITIAL_LOADER_MS, ROUTE_LOADER_MS, TransitionPhase, TransitionState, schedule};

#[component]
pub fn TransitionHost() -> impl IntoView {
    let location = use_location();
    let ui = expect_context::<RwSignal<UiState>>();
    let transition = RwSignal::new(TransitionState::new(&location.pathname.get_untracked()));
    provide_context(transition);

    schedule(INITIAL_LOADER_MS, move || transition.update(TransitionState::dismiss_initial));
    schedule(page_variant().enter.total_ms(), move || {
        transition.update(|t| {
            t.enter_complete(0);
        });
    });

    Effect::new(move |_| {
        let path = location.pathname.get();
        let Some(seq) = transition.try_update(|t| t.navigate(&path)).flatten() else {
            return;
        };
        ui.update(UiState::on_navigate);

        schedule(page_variant().leave.total_ms(), move || {
            if transition.try_update(|t| t.exit_complete(seq)).unwrap_or(false) {
                scroll_to_top();
                schedule(page_variant().enter.total_ms(), move || {
                    transition.update(|t| {
                        t.enter_complete(seq);
                    });
                });
            }
        });
        schedule(ROUTE_LOADER_MS, move || {
            transition.update(|t| {
                t.loader_elapsed(seq);
            });
        });
    });

    let mounted_path = Memo::new(move |_| transition.with(|t| t.path.clone()));
    let leaving = Signal::derive(move || transition.with(|t| t.phase == TransitionPhase::Exiting));
    let loader_visible = Signal::derive(move || transition.with(|t| t.loader.visible()));

    view! {
        <PageLoader visible=loader_visible/>
        {move || {
            let route = SiteRoute::resolve(&mounted_path.get());
            view! { <PageFrame leaving=leaving>{pages::render(route)}</PageFrame> }
        }}
    }
}

/// One mounted view. In the browser it starts in the page variant's initial
/// frame, moves to the animate frame on the next animation frame, and to the
/// exit frame while `leaving` is set. Server rendered markup starts shown.
#[component]
fn PageFrame(#[prop(into)] leaving: Signal<bool>, children: Children) -> impl IntoView {
    let shown = RwSignal::new(starts_revealed());
    #[cfg(feature = "hydrate")]
    leptos::leptos_dom::helpers::request_animation_frame(move || shown.set(true));

    let style = move || frame_style(leaving.get(), shown.get());

    view! {
        <div class="page-frame" style=style>
            <div class="page-layout">
                <ScrollProgress/>
                <Navigation/>
                <main class="page-main">{children()}</main>
                <Footer/>
            </div>
        </div>
    }
}

fn frame_style(leaving: bool, shown: bool) -> String {
    let variant = page_variant();
    if leaving {
        variant.exit_style()
    } else if shown {
        variant.animate_style()
    } else {
        variant.initial_style()
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let ui = expect_context::<RwSignal<UiState>>();

    let link_class = move |route: SiteRoute, base: &'static str| {
        move || {
            if is_active(&pathname.get(), route) {
                format!("{base} {base}--active")
            } else {
                base.to_owned()
            }
        }
    };

    view! {
        <header class="site-header">
            <nav class="site-nav">
                <a href="/" class="site-nav__brand">"Portfolio"</a>
                <ul class="site-nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(route, label)| {
                            view! {
                                <li>
                                    <a href=route.path() class=link_class(route, "site-nav__link")>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="site-nav__actions">
                    <ThemeToggle/>
                    <button
                        class="site-nav__menu"
                        aria-label="Toggle navigation"
                        aria-expanded=move || ui.get().mobile_nav_open.to_string()
                        on:click=move |_| ui.update(UiState::toggle_mobile_nav)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <Show when=move || ui.get().mobile_nav_open>
                <ul class="site-nav__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|&(route, label)| {
                            view! {
                                <li>
                                    <a href=route.path() class=link_class(route, "site-nav__mobile-link")>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__row">
                <div>
                    <p class="site-footer__headline">"Let's work together"</p>
                    <p class="site-footer__sub">"Open to new opportunities and collaborations."</p>
                </div>
                <div class="site-footer__links">
                    <a href=SiteRoute::Contact.path()>"Contact"</a>
                    <a href=SiteRoute::Resume.path()>"Resume"</a>
                    <a href="https://www.linkedin.com/" target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                </div>
            </div>
            <div class="site-footer__divider"></div>
            <p class="site-footer__fine">"Built with Rust, Leptos, and Axum."</p>
        </footer>
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
