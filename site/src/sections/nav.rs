use crate::components::{ICON_MENU, ICON_X, Icon};
use crate::content::{BRAND_SHORT, NAV_LINKS};
use crate::state::{MenuState, NavStyle};
use leptos::prelude::*;

/// Fixed navigation bar: brand, desktop links, mobile menu toggle.
#[component]
pub fn Nav(
    /// Transparent at the top of the page, elevated once scrolled
    #[prop(into)]
    style: Signal<NavStyle>,
    /// Shared with [`MobileMenu`]
    menu: RwSignal<MenuState>,
) -> impl IntoView {
    let is_open = move || menu.get().is_open();
    let last = NAV_LINKS.len() - 1;

    view! {
        <nav class=move || format!("site-nav {}", style.get().class())>
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    {BRAND_SHORT}
                    <span class="nav-brand-dot">"."</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let class = if i == last { "nav-link nav-cta" } else { "nav-link" };
                            view! { <a href=link.href class=class>{link.label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label=move || if is_open() { "Cerrar menú" } else { "Abrir menú" }
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        if is_open() {
                            view! { <Icon paths=ICON_X /> }.into_any()
                        } else {
                            view! { <Icon paths=ICON_MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Full-screen link overlay for narrow viewports.
///
/// Always in the DOM so it can transition out; `inert` while closed.
/// Following a link closes it.
#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let is_open = move || menu.get().is_open();

    view! {
        <div
            class=move || if is_open() { "mobile-menu is-open" } else { "mobile-menu" }
            aria-hidden=move || (!is_open()).to_string()
            inert=move || !is_open()
        >
            <div class="mobile-menu-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.href on:click=move |_| menu.update(MenuState::close)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
