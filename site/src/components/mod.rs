//! Reusable Leptos components.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static export only)
//! └── LandingPage
//!     ├── Nav / MobileMenu          (Icon)
//!     ├── Hero                      (Reveal + Stagger, on mount)
//!     ├── Services                  (Reveal, ServiceCard ×3)
//!     ├── About                     (Reveal)
//!     ├── Contact                   (Reveal)
//!     └── Footer
//! ```
//!
//! Sections live in [`crate::sections`]; this module holds the building
//! blocks they share.

mod document;
mod icons;
mod reveal;
mod service_card;

pub use document::SiteDocument;
pub use icons::*;
pub use reveal::{AtRest, Reveal, RevealContext, Stagger, Trigger};
pub use service_card::ServiceCard;
