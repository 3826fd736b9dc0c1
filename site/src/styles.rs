//! Stylesheet for the landing page.
//!
//! The CSS lives in `assets/site.css` so the web build can link it directly
//! (trunk) while the static export inlines the same text.
//!
//! # Features
//!
//! - Neutral palette, black accent, system sans-serif stack
//! - Fixed navigation with transparent and elevated variants
//! - Mobile overlay menu below 768px
//! - Reduced-motion support for reveal blocks

/// Complete stylesheet.
pub const SITE_CSS: &str = include_str!("../assets/site.css");


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_interactive_classes() {
        for selector in [
            ".site-nav.is-transparent",
            ".site-nav.is-elevated",
            ".mobile-menu.is-open",
            ".service-card",
            "prefers-reduced-motion",
        ] {
            assert!(SITE_CSS.contains(selector), "missing {selector}");
        }
    }

    #[test]
    fn reduced_motion_shows_reveal_blocks_at_rest() {
        let (_, reduced) = SITE_CSS
            .split_once("@media (prefers-reduced-motion: reduce)")
            .expect("reduced-motion block");

        assert!(reduced.contains("[data-reveal]"));
        assert!(reduced.contains("opacity: 1 !important"));
        assert!(reduced.contains("transform: none !important"));
    }
}
