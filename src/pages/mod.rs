//! Page components, one per route.

mod contact;
mod creatures;
mod home;
mod recits;
mod univers;

pub use contact::Contact;
pub use creatures::Creatures;
pub use home::Home;
pub use recits::Recits;
pub use univers::Univers;
