//! Color constants for the cosmic palette.
//!
//! Mirrored as CSS custom properties in [`GLOBAL_STYLES`](super::GLOBAL_STYLES).

#![allow(dead_code)]

// === COSMOS (Backgrounds) ===
pub const COSMOS_BLACK: &str = "#0a0a1a";
pub const COSMOS_DEEP: &str = "#12122a";
pub const COSMOS_PANEL: &str = "rgba(18, 18, 42, 0.85)";

// === REALM ACCENTS ===
pub const CYAN: &str = "#00D9FF";
pub const MAGENTA: &str = "#FF3366";
pub const PURPLE: &str = "#9B7EDE";
pub const GOLD: &str = "#FFD700";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8e8f0";
pub const TEXT_SECONDARY: &str = "rgba(232, 232, 240, 0.7)";

/// CSS custom property name and value for every palette entry
pub const CSS_VARIABLES: [(&str, &str); 9] = [
    ("--color-bg", COSMOS_BLACK),
    ("--color-bg-deep", COSMOS_DEEP),
    ("--color-panel", COSMOS_PANEL),
    ("--color-cyan", CYAN),
    ("--color-magenta", MAGENTA),
    ("--color-purple", PURPLE),
    ("--color-gold", GOLD),
    ("--color-text", TEXT_PRIMARY),
    ("--color-text-dim", TEXT_SECONDARY),
];
