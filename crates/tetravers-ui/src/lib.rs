//! Le Tétravers UI Components
//!
//! Dioxus widgets shared by every page of the site, following the
//! cosmic-mystical look of the Tétravers:
//! - **Cyan (#00D9FF)**: Illusion, links, interactive elements
//! - **Magenta (#FF3366)**: Destruction, alerts, the inner ring of the eye
//! - **Purple (#9B7EDE)**: The Mists, secondary accents
//! - **Gold (#FFD700)**: Purity, titles
//!
//! Loading states use the site's own vocabulary ("Invocation des
//! créatures...", "Consultation des archives...") rather than "Loading".

pub mod components;

pub use components::*;
