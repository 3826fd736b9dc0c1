use crate::components::{ICON_MAIL, Icon, Reveal};
use crate::content::{CONTACT_EMAIL, mailto_href};
use leptos::prelude::*;

/// Closing call to action: email link and demo button.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container container-narrow contact-inner">
                <Reveal>
                    <h2 class="contact-title">"¿Listo para automatizar?"</h2>
                </Reveal>
                <p class="contact-lead">
                    "Hablemos sobre cómo podemos optimizar tu empresa hoy mismo. \
                    Agenda una consulta gratuita."
                </p>

                <div class="contact-actions">
                    <a href=mailto_href() class="btn btn-light">
                        <Icon paths=ICON_MAIL size="20" class="btn-icon" />
                        {CONTACT_EMAIL}
                    </a>
                    // No scheduling flow exists yet
                    <button type="button" class="btn btn-outline">
                        "Agendar Demo"
                    </button>
                </div>
            </div>
        </section>
    }
}
