//! UI state the landing page reacts to.
//!
//! Plain values, no signals: the page wraps them in `RwSignal`s, which keeps
//! the transitions testable without a browser.

/// Vertical scroll offset (CSS px) past which the navigation bar is elevated.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Presentation of the fixed navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavStyle {
    /// At the top of the page: no background, roomy padding.
    #[default]
    Transparent,
    /// Scrolled: translucent background, blur, bottom border.
    Elevated,
}

impl NavStyle {
    /// Style for a given `window.scrollY`.
    ///
    /// The threshold is strict: an offset of exactly [`SCROLL_THRESHOLD`] is
    /// still transparent. Overscroll (negative) and `NaN` offsets are too.
    pub fn from_scroll(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            Self::Elevated
        } else {
            Self::Transparent
        }
    }

    /// CSS modifier class applied next to `site-nav`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Transparent => "is-transparent",
            Self::Elevated => "is-elevated",
        }
    }
}

/// Visibility of the mobile navigation overlay. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip between open and closed (the hamburger / close button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the overlay (any overlay link). No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the overlay is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// One-shot entrance animation phase of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not seen yet; rendered in its hidden pose.
    #[default]
    Pending,
    /// Animated in. Terminal.
    Revealed,
}

impl RevealPhase {
    /// Transition on viewport entry (or mount, for the hero).
    pub fn enter(self) -> Self {
        Self::Revealed
    }

    /// Whether the block shows its visible pose.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}
