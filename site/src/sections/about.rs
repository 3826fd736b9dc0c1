use crate::components::{ICON_BRAIN, Icon, Reveal};
use crate::content::{ABOUT_BELIEF, COMPANY_NAME, STATS};
use crate::motion::ZOOM_IN;
use leptos::prelude::*;

/// Company pitch with a large brain illustration and headline figures.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container container-wide about-inner">
                <div class="about-visual-col">
                    <Reveal motion=ZOOM_IN class="about-visual">
                        <Icon paths=ICON_BRAIN size="192" stroke_width="0.5" class="about-brain" />
                    </Reveal>
                </div>

                <div class="about-copy">
                    <h2 class="section-title">"Menos Fricción, " <br /> "Más Resultados."</h2>
                    <p class="about-text">
                        "En " <strong>{COMPANY_NAME}</strong>
                        ", " {ABOUT_BELIEF}
                    </p>
                    <div class="stats">
                        {STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <h4 class="stat-value">{stat.value}</h4>
                                        <p class="stat-label">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn stats_and_zoomed_visual() {
        let html = Owner::new().with(|| view! { <About /> }.to_html());

        assert!(html.contains(r#"id="about""#));
        assert!(html.contains("No implementamos IA solo por tendencia"));
        assert!(html.contains("el retorno de inversión."));
        assert!(html.contains(">98%<"));
        assert!(html.contains(">Precisión<"));
        assert!(html.contains(">24/7<"));
        assert!(html.contains(r#"stroke-width="0.5""#));
        assert!(html.contains("transform:scale(0.95)"));
    }
}
