//! Root document component - the complete HTML page for static export.

use super::AtRest;
use crate::config::SiteConfig;
use crate::sections::LandingPage;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// `<html>` shell around [`LandingPage`], with the stylesheet inlined.
///
/// Provides `config` as context for the sections (footer year), and
/// [`AtRest`] so entrance-animated blocks render in their visible pose.
#[component]
pub fn SiteDocument(config: SiteConfig) -> impl IntoView {
    let SiteConfig {
        title,
        description,
        lang,
        canonical_url,
        ..
    } = config.clone();

    provide_context(config);
    provide_context(AtRest);

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {canonical_url.map(|href| view! { <link rel="canonical" href=href /> })}
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <LandingPage />
            </body>
        </html>
    }
}
