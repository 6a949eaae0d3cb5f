//! Site components.

mod creature_card;
mod mystic_eye;
mod navigation;

pub use creature_card::CreatureCard;
pub use mystic_eye::MysticEye;
pub use navigation::Navigation;
