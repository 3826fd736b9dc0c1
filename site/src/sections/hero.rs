use crate::components::{ICON_ARROW_RIGHT, Icon, Reveal, Stagger, Trigger};
use crate::content::HERO_LEAD;
use crate::motion::{FADE_IN_UP, STAGGER_CONTAINER};
use leptos::prelude::*;

/// Opening block. Its four lines fade up one after another on mount.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <Reveal motion=STAGGER_CONTAINER trigger=Trigger::Mount class="hero-content">
                    <Stagger index=0 motion=FADE_IN_UP>
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            <span>"Innovación en IA"</span>
                        </div>
                    </Stagger>

                    <Stagger index=1 motion=FADE_IN_UP>
                        <h1 class="hero-title">
                            "Automatizando" <br /> "el Futuro de" <br /> "Tu Negocio."
                        </h1>
                    </Stagger>

                    <Stagger index=2 motion=FADE_IN_UP>
                        <p class="hero-lead">{HERO_LEAD}</p>
                    </Stagger>

                    <Stagger index=3 motion=FADE_IN_UP class="hero-actions">
                        <a href="#contact" class="btn btn-primary">
                            "Empezar Ahora"
                            <Icon paths=ICON_ARROW_RIGHT size="16" class="btn-arrow" />
                        </a>
                        <a href="#services" class="btn btn-secondary">
                            "Ver Soluciones"
                        </a>
                    </Stagger>
                </Reveal>
            </div>

            <div class="hero-decoration" aria-hidden="true">
                <svg viewBox="0 0 100 100" fill="none" stroke="currentColor" stroke-width="0.5">
                    <circle cx="50" cy="50" r="40"></circle>
                    <circle cx="50" cy="50" r="30"></circle>
                    <circle cx="50" cy="50" r="20"></circle>
                </svg>
            </div>
        </section>
    }
}
