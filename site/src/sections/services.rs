use crate::components::{Icon, Reveal, ServiceCard};
use crate::content::SERVICES;
use leptos::prelude::*;

/// "Nuestras Soluciones": heading plus one card per service.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container container-wide">
                <Reveal class="section-header">
                    <h2 class="section-title">"Nuestras Soluciones"</h2>
                    <p class="section-lead">
                        "Tecnología de punta aplicada a problemas reales. Simplificamos lo complejo."
                    </p>
                </Reveal>

                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .map(|service| {
                            view! {
                                <ServiceCard
                                    icon=move || view! { <Icon paths=service.icon size="32" /> }
                                    title=service.title
                                    description=service.description
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
