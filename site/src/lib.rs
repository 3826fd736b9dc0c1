//! # jm-site
//!
//! The J&M Industry landing page as [Leptos](https://leptos.dev/) components.
//!
//! One component tree, two ways to ship it:
//!
//! - **Client-side** - the `jm-site-web` crate mounts [`LandingPage`] into
//!   `<body>` (feature `csr`). Scroll elevation, the mobile menu and the
//!   viewport-entry animations are live.
//! - **Static** - [`render_page`] renders a complete, script-free HTML
//!   document (feature `ssr`, on by default). Used by the `jm-site` CLI for
//!   static exports and by the tests in this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use jm_site::{render_page, SiteConfig};
//!
//! let config = SiteConfig { year: Some(2025), ..Default::default() };
//! let html = render_page(&config);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Nuestras Soluciones"));
//! ```
//!
//! ## Architecture
//!
//! - [`sections`] - the page and its sections (nav, hero, services, ...)
//! - [`components`] - reusable pieces: icons, reveal wrappers, service card, document shell
//! - [`state`] - the UI state the page reacts to (scroll elevation, mobile menu, reveal phase)
//! - [`motion`] - entrance animation parameters
//! - [`content`] - copy and link literals shared by several sections
//! - [`config`] - document-level settings
//! - [`styles`] - the stylesheet
//! - [`viewport`] - `IntersectionObserver` glue

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod motion;
pub mod sections;
pub mod state;
pub mod styles;
pub mod viewport;

pub use config::{ConfigError, SiteConfig};
pub use sections::LandingPage;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the landing page as a complete HTML document.
///
/// The result is static: no hydration script is attached, every
/// entrance-animated block is drawn in its visible pose and
/// the mobile menu renders closed.
///
/// # Example
///
/// ```rust
/// use jm_site::{render_page, SiteConfig};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.contains(r#"<html lang="es""#));
/// ```
pub fn render_page(config: &SiteConfig) -> String {
    // Root owner so contexts and signals have somewhere to live
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <SiteDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
