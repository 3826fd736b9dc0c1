//! Inline SVG icon components.
//!
//! Geometry follows the [Lucide](https://lucide.dev/) set: 24×24 viewBox,
//! stroked with `currentColor`, round caps and joins. Rects and circles are
//! expressed as paths so every icon is a plain list of `d` strings.

use leptos::prelude::*;

/// Renders a stroked 24×24 SVG icon from path data.
///
/// # Props
///
/// * `paths` - SVG path data strings (one `<path>` each)
/// * `size` - Icon size in pixels (default: "24")
/// * `stroke_width` - Stroke width in viewBox units (default: "2")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_MAIL class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, one entry per `<path>`
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Stroke width (viewBox units)
    #[prop(default = "2")]
    stroke_width: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

/// Robot head (chatbots)
pub const ICON_BOT: &[&str] = &[
    "M12 8V4H8",
    "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
    "M2 14h2",
    "M20 14h2",
    "M15 13v2",
    "M9 13v2",
];

/// Four-point sparkle (content generation)
pub const ICON_SPARKLES: &[&str] = &[
    "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
    "M20 3v4",
    "M22 5h-4",
    "M4 17v2",
    "M5 18H3",
];

/// Brain (virtual agents, about visual)
pub const ICON_BRAIN: &[&str] = &[
    "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
    "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
    "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
    "M17.599 6.5a3 3 0 0 0 .399-1.375",
    "M6.003 5.125A3 3 0 0 0 6.401 6.5",
    "M3.477 10.896a4 4 0 0 1 .585-.396",
    "M19.938 10.5a4 4 0 0 1 .585.396",
    "M6 18a4 4 0 0 1-1.967-.516",
    "M19.967 17.484A4 4 0 0 1 18 18",
];

/// Hamburger
pub const ICON_MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];

/// Close
pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

/// Chevron pointing right
pub const ICON_CHEVRON_RIGHT: &[&str] = &["m9 18 6-6-6-6"];

/// Envelope
pub const ICON_MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

/// Arrow pointing right
pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_one_path_per_entry() {
        let html = view! { <Icon paths=ICON_BOT class="icon-lg" /> }.to_html();

        assert!(html.starts_with("<svg"));
        assert_eq!(html.matches("<path").count(), ICON_BOT.len());
        assert!(html.contains(r#"class="icon-lg""#));
        assert!(html.contains(r#"stroke="currentColor""#));
    }

    #[test]
    fn custom_stroke_and_size() {
        let html = view! { <Icon paths=ICON_BRAIN size="192" stroke_width="0.5" /> }.to_html();

        assert!(html.contains(r#"width="192""#));
        assert!(html.contains(r#"stroke-width="0.5""#));
    }
}
