//! Reusable UI components
//!
//! Styling comes from the global stylesheet; components only emit class
//! names and the per-entry accent colors passed in by pages.

mod button;
mod loading;
mod modal;
mod starfield;

pub use button::*;
pub use loading::*;
pub use modal::*;
pub use starfield::*;
