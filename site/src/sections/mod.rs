//! The landing page and its sections.

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{MobileMenu, Nav};
pub use services::Services;

use crate::state::{MenuState, NavStyle};
use leptos::ev;
use leptos::prelude::*;

/// The whole page: navigation, hero, services, about, contact, footer.
///
/// Owns the two pieces of UI state. The navigation style follows
/// `window.scrollY` through a scroll listener that is removed on unmount;
/// the mobile menu state is shared by the toggle and the overlay links.
#[component]
pub fn LandingPage() -> impl IntoView {
    let nav_style = RwSignal::new(NavStyle::default());
    let menu = RwSignal::new(MenuState::default());

    let sync_nav = move || {
        let offset = window().scroll_y().unwrap_or(0.0);
        let next = NavStyle::from_scroll(offset);
        if nav_style.get_untracked() != next {
            nav_style.set(next);
        }
    };

    // Browser only: effects never run during static rendering
    Effect::new(move |_| {
        // A page restored mid-scroll starts elevated
        sync_nav();

        let scroll = window_event_listener(ev::scroll, move |_| sync_nav());
        on_cleanup(move || scroll.remove());
    });

    view! {
        <div class="page">
            <Nav style=nav_style menu=menu />
            <MobileMenu menu=menu />
            <main>
                <Hero />
                <Services />
                <About />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
