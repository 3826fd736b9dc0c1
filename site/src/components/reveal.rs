//! One-shot entrance animation wrappers.
//!
//! [`Reveal`] owns a [`RevealPhase`] and flips it once, either on mount or
//! on first viewport entry. [`Stagger`] children pick the phase up from
//! context and delay themselves by their index.
//!
//! Under an [`AtRest`] context every block renders already revealed.

use crate::motion::{Motion, RISE};
use crate::state::RevealPhase;
use crate::viewport::observe_once;
use leptos::html;
use leptos::prelude::*;
use web_sys::IntersectionObserver;

/// When a [`Reveal`] block animates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// On the first animation frame after mount, regardless of position.
    Mount,
    /// The first time the block enters the viewport (grown/shrunk by `margin`).
    InView {
        /// CSS margin applied to the viewport box
        margin: &'static str,
    },
}

impl Trigger {
    /// In-view trigger with no margin.
    pub const fn in_view() -> Self {
        Trigger::InView { margin: "0px" }
    }

    /// In-view trigger with a root margin, e.g. `"-50px"`.
    pub const fn in_view_with_margin(margin: &'static str) -> Self {
        Trigger::InView { margin }
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::in_view()
    }
}

/// Marker context: draw every [`Reveal`] in its visible pose.
///
/// [`SiteDocument`](super::SiteDocument) provides it. A static document ships
/// no script, so nothing would ever play the entrance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AtRest;

/// Phase and parent motion shared with [`Stagger`] children.
#[derive(Clone, Copy)]
pub struct RevealContext {
    phase: ReadSignal<RevealPhase>,
    parent: Motion,
}

/// Block that animates from `motion.hidden` to `motion.visible` exactly once.
///
/// An in-view block that never intersects (e.g. inside a `display:none`
/// parent) stays pending; the stylesheet's `prefers-reduced-motion` rule
/// overrides the inline pose for users who opt out of motion.
#[component]
pub fn Reveal(
    /// Poses and timing
    #[prop(default = RISE)]
    motion: Motion,
    /// What reveals the block
    #[prop(optional)]
    trigger: Trigger,
    /// CSS class of the wrapper `div`
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let initial = if use_context::<AtRest>().is_some() {
        RevealPhase::Revealed
    } else {
        RevealPhase::Pending
    };
    let (phase, set_phase) = signal(initial);
    let node = NodeRef::<html::Div>::new();

    provide_context(RevealContext {
        phase,
        parent: motion,
    });

    let reveal = move || set_phase.update(|p| *p = p.enter());

    match trigger {
        Trigger::Mount => {
            Effect::new(move |_| request_animation_frame(reveal));
        }
        Trigger::InView { margin } => {
            let observer = StoredValue::new_local(None::<IntersectionObserver>);

            Effect::new(move |_| {
                let Some(el) = node.get() else { return };
                if observer.with_value(Option::is_some) || phase.get_untracked().is_revealed() {
                    return;
                }
                match observe_once(&el, margin, reveal) {
                    Some(handle) => observer.set_value(Some(handle)),
                    None => reveal(),
                }
            });

            on_cleanup(move || {
                observer.with_value(|handle| {
                    if let Some(handle) = handle {
                        handle.disconnect();
                    }
                });
            });
        }
    }

    view! {
        <div
            node_ref=node
            class=class
            data-reveal=""
            style=move || motion.style(phase.get().is_revealed(), 0.0)
        >
            {children()}
        </div>
    }
}

/// Child of a [`Reveal`] that starts `index` stagger steps after its parent.
///
/// Outside a `Reveal` it renders at rest.
#[component]
pub fn Stagger(
    /// Position among its siblings
    index: usize,
    /// Poses and timing of this child
    motion: Motion,
    /// CSS class of the wrapper `div`
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<RevealContext>();
    let delay = ctx.map(|c| c.parent.child_delay(index)).unwrap_or(0.0);

    let style = move || {
        let revealed = ctx.map(|c| c.phase.get().is_revealed()).unwrap_or(true);
        motion.style(revealed, delay)
    };

    view! {
        <div class=class data-reveal="" style=style>
            {children()}
        </div>
    }
}
