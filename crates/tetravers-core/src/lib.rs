//! Le Tétravers Core Library
//!
//! Content loading, newsletter signup and the mystic eye animation for the
//! Tétravers lore site. Nothing in here depends on the UI framework.
//!
//! ## Overview
//!
//! The site shows three kinds of lore records (realms, creatures, stories)
//! read from a hosted PostgREST backend. Every page falls back to a fixed
//! catalog of illustrative entries when the backend has nothing to offer, so
//! the site always has something to show.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tetravers_core::{load_realms, realm_listing, BackendConfig, PageSession, SupabaseClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::from_env()?;
//!     let backend = Arc::new(SupabaseClient::new(&config));
//!
//!     let session = PageSession::new();
//!     let mut listing = realm_listing();
//!     let ticket = session.begin();
//!     listing.settle(&ticket, load_realms(backend.as_ref()).await);
//!
//!     for entry in listing.entries() {
//!         println!("{} ({})", entry.name(), entry.color());
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod mystic_eye;
pub mod newsletter;
pub mod selection;
pub mod types;

// Re-exports
pub use backend::{
    insert_rows, select_rows, Backend, MemoryBackend, Order, SharedBackend, SupabaseClient,
};
pub use catalog::{CreatureEntry, Entry, RealmEntry, StoryEntry};
pub use config::BackendConfig;
pub use error::{TetraversError, TetraversResult};
pub use listing::{
    load_creatures, load_realms, load_stories, realm_listing, story_listing, CreaturePage,
    Listing, LoadTicket, PageSession, RealmListing, StoryListing,
};
pub use mystic_eye::{EyePose, FrameClock};
pub use newsletter::{subscribe, FormMessage, MessageKind, NewsletterForm};
pub use selection::{OverlayClick, Selection};
pub use types::*;
