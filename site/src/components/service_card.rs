use super::{ICON_CHEVRON_RIGHT, Icon, Reveal, Trigger};
use crate::motion::RISE;
use leptos::prelude::*;

/// One offered service: icon tile, title, description and a "Saber más" hint.
///
/// `icon` is any view, so call sites decide what goes in the tile.
#[component]
pub fn ServiceCard(
    /// Rendered inside the icon tile
    #[prop(into)]
    icon: ViewFn,
    /// Card heading
    title: &'static str,
    /// Card body
    description: &'static str,
) -> impl IntoView {
    view! {
        <Reveal
            motion=RISE
            trigger=Trigger::in_view_with_margin("-50px")
            class="service-card"
        >
            <div class="service-card-icon">{icon.run()}</div>
            <h3 class="service-card-title">{title}</h3>
            <p class="service-card-description">{description}</p>
            <div class="service-card-more">
                <span>"Saber más"</span>
                <Icon paths=ICON_CHEVRON_RIGHT size="16" class="service-card-chevron" />
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ICON_MAIL;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_given_icon_title_and_description() {
        let html = Owner::new().with(|| {
            view! {
                <ServiceCard
                    icon=|| view! { <Icon paths=ICON_MAIL class="sample-icon" /> }
                    title="Sample Title"
                    description="Sample description."
                />
            }
            .to_html()
        });

        assert!(html.contains(r#"class="service-card""#));
        assert!(html.contains("sample-icon"));
        assert!(html.contains("Sample Title"));
        assert!(html.contains("Sample description."));
        assert!(html.contains("Saber más"));
    }

    #[test]
    fn icon_slot_accepts_plain_markup() {
        let html = Owner::new().with(|| {
            view! {
                <ServiceCard
                    icon=|| view! { <span class="emoji">"*"</span> }
                    title="Other"
                    description="Other description."
                />
            }
            .to_html()
        });

        assert!(html.contains(r#"<span class="emoji">*</span>"#));
    }
}
