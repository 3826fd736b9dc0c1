//! Copy and link literals used by more than one section, or worth
//! asserting on in tests.

use crate::components::{ICON_BOT, ICON_BRAIN, ICON_SPARKLES};

/// Short brand mark shown in the navigation bar.
pub const BRAND_SHORT: &str = "J&M";
/// Company name used in copy.
pub const COMPANY_NAME: &str = "J&M Industry";
/// Legal entity shown in the footer.
pub const LEGAL_NAME: &str = "J&M Industry, LLC";
/// The single contact channel.
pub const CONTACT_EMAIL: &str = "jymindustry@jymindustry.com";

/// Hero lead paragraph.
pub const HERO_LEAD: &str = "J&M Industry transforma operaciones complejas en sistemas autónomos eficientes. \
    Impulsa tu crecimiento con soluciones de Inteligencia Artificial a medida.";

/// About paragraph, following the bold company name and a comma.
pub const ABOUT_BELIEF: &str = "creemos que la tecnología debe ser invisible y potente. \
    No implementamos IA solo por tendencia, sino para eliminar cuellos de botella reales en tu operación. \
    Nuestro enfoque minimalista se centra en la claridad, la velocidad y el retorno de inversión.";

/// `mailto:` href for [`CONTACT_EMAIL`].
pub fn mailto_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// An in-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// Anchor target
    pub href: &'static str,
}

/// Navigation links, shared by the desktop bar and the mobile overlay.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Servicios",
        href: "#services",
    },
    NavLink {
        label: "Nosotros",
        href: "#about",
    },
    NavLink {
        label: "Contactar",
        href: "#contact",
    },
];

/// One offered service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// Icon path data (see [`crate::components::Icon`])
    pub icon: &'static [&'static str],
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// The services showcase, in display order.
pub const SERVICES: [Service; 3] = [
    Service {
        icon: ICON_BOT,
        title: "Chatbots Inteligentes",
        description: "Atención al cliente 24/7 con procesamiento de lenguaje natural que entiende y resuelve, no solo responde.",
    },
    Service {
        icon: ICON_SPARKLES,
        title: "Generación de Contenido",
        description: "Sistemas automatizados para crear textos, imágenes y reportes de alta calidad a escala.",
    },
    Service {
        icon: ICON_BRAIN,
        title: "Agentes Virtuales",
        description: "Asistentes autónomos capaces de ejecutar tareas complejas, agendar citas y gestionar flujos de trabajo.",
    },
];

/// A headline figure in the about block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// The figure itself
    pub value: &'static str,
    /// What it measures
    pub label: &'static str,
}

/// Figures under the about copy.
pub const STATS: [Stat; 2] = [
    Stat {
        value: "98%",
        label: "Precisión",
    },
    Stat {
        value: "24/7",
        label: "Disponibilidad",
    },
];

/// Footer social links. Targets are placeholders until the accounts exist.
pub const SOCIAL_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Twitter",
        href: "#",
    },
    NavLink {
        label: "LinkedIn",
        href: "#",
    },
    NavLink {
        label: "Instagram",
        href: "#",
    },
];
