use crate::config::SiteConfig;
use crate::content::{COMPANY_NAME, LEGAL_NAME, SOCIAL_LINKS};
use leptos::prelude::*;

/// Legal name, copyright line and social links, in that order.
///
/// The year comes from a [`SiteConfig`] in context when one is provided,
/// otherwise from the clock.
#[component]
pub fn Footer() -> impl IntoView {
    let year = use_context::<SiteConfig>()
        .unwrap_or_default()
        .footer_year();
    let copyright = format!("© {year} {COMPANY_NAME}. Todos los derechos reservados.");

    view! {
        <footer class="site-footer">
            <div class="container container-wide footer-inner">
                <div class="footer-entity">{LEGAL_NAME}</div>
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-social">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
