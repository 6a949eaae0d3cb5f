//! Page data loading.
//!
//! Each content page issues its queries once per mount, keeps whatever the
//! backend returned, and shows its fallback catalog when that is empty.
//! Read failures are logged and otherwise swallowed.
//!
//! A page may unmount before its queries settle. Loads are stamped with a
//! [`LoadTicket`] from the page's [`PageSession`]; once the session is torn
//! down, late results are dropped instead of being applied.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::backend::{select_rows, Backend, Order};
use crate::catalog::{
    fallback_creatures, fallback_realms, fallback_stories, CreatureEntry, Entry, FallbackCreature,
    FallbackRealm, FallbackStory,
};
use crate::error::TetraversResult;
use crate::types::{Creature, Realm, Story, CREATURES_TABLE, REALMS_TABLE, STORIES_TABLE};

/// Generation counter owned by one mounted page.
#[derive(Debug, Clone, Default)]
pub struct PageSession {
    generation: Arc<AtomicU64>,
}

/// Proof that a load was started by a still-mounted page.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket {
            generation: Arc::clone(&self.generation),
            issued: self.generation.load(Ordering::SeqCst),
        }
    }

    /// Invalidate every ticket issued so far (page unmounted).
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }
}

/// Backend rows for one page, with the fallback shown when there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<L, P> {
    rows: Vec<L>,
    fallback: Vec<P>,
    loading: bool,
}

impl<L: Clone, P: Clone> Listing<L, P> {
    /// A listing still waiting on its first load.
    pub fn new(fallback: Vec<P>) -> Self {
        Self {
            rows: Vec::new(),
            fallback,
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Rows received from the backend, in server order.
    pub fn rows(&self) -> &[L] {
        &self.rows
    }

    /// Whether the fallback catalog is what gets displayed.
    pub fn shows_fallback(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entries to display: backend rows when there are any, otherwise the fallback.
    pub fn entries(&self) -> Vec<Entry<L, P>> {
        if self.rows.is_empty() {
            self.fallback
                .iter()
                .cloned()
                .map(Entry::Placeholder)
                .collect()
        } else {
            self.rows.iter().cloned().map(Entry::Loaded).collect()
        }
    }

    /// Apply a finished load.
    ///
    /// Returns `false` and leaves the listing untouched when the ticket is
    /// stale. Otherwise rows are replaced on success, kept on failure, and
    /// the loading flag is cleared.
    pub fn settle(&mut self, ticket: &LoadTicket, result: TetraversResult<Vec<L>>) -> bool {
        if !ticket.is_current() {
            tracing::debug!("Dropping load result for an unmounted page");
            return false;
        }

        match result {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Page rows loaded");
                self.rows = rows;
            }
            Err(e) => {
                tracing::warn!("Content load failed, keeping current entries: {}", e);
            }
        }
        self.loading = false;
        true
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Realms in display order.
pub async fn load_realms(backend: &dyn Backend) -> TetraversResult<Vec<Realm>> {
    select_rows(backend, REALMS_TABLE, Some(Order::asc("ordre"))).await
}

/// Stories, most recently published first.
pub async fn load_stories(backend: &dyn Backend) -> TetraversResult<Vec<Story>> {
    select_rows(backend, STORIES_TABLE, Some(Order::desc("published_at"))).await
}

/// Creatures by name, together with the realms they may reference.
///
/// Both reads run concurrently; if either fails, neither result is returned.
pub async fn load_creatures(
    backend: &dyn Backend,
) -> TetraversResult<(Vec<Creature>, Vec<Realm>)> {
    tokio::try_join!(
        select_rows::<Creature>(backend, CREATURES_TABLE, Some(Order::asc("nom"))),
        select_rows::<Realm>(backend, REALMS_TABLE, Some(Order::asc("nom"))),
    )
}

pub type RealmListing = Listing<Realm, FallbackRealm>;
pub type StoryListing = Listing<Story, FallbackStory>;

/// Realms page state.
pub fn realm_listing() -> RealmListing {
    Listing::new(fallback_realms())
}

/// Stories page state.
pub fn story_listing() -> StoryListing {
    Listing::new(fallback_stories())
}

/// Creatures page state: the creature listing plus the realm lookup map.
#[derive(Debug, Clone, PartialEq)]
pub struct CreaturePage {
    creatures: Listing<Creature, FallbackCreature>,
    realms: HashMap<String, Realm>,
}

impl Default for CreaturePage {
    fn default() -> Self {
        Self::new()
    }
}

impl CreaturePage {
    pub fn new() -> Self {
        Self {
            creatures: Listing::new(fallback_creatures()),
            realms: HashMap::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.creatures.is_loading()
    }

    pub fn entries(&self) -> Vec<CreatureEntry> {
        self.creatures.entries()
    }

    pub fn realms(&self) -> &HashMap<String, Realm> {
        &self.realms
    }

    /// Apply the joined creature and realm load.
    pub fn settle(
        &mut self,
        ticket: &LoadTicket,
        result: TetraversResult<(Vec<Creature>, Vec<Realm>)>,
    ) -> bool {
        match result {
            Ok((creatures, realms)) => {
                let applied = self.creatures.settle(ticket, Ok(creatures));
                if applied {
                    self.realms = realms.into_iter().map(|r| (r.id.clone(), r)).collect();
                }
                applied
            }
            Err(e) => self.creatures.settle(ticket, Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TetraversError;

    #[test]
    fn new_listing_is_loading_with_fallback() {
        let listing = realm_listing();
        assert!(listing.is_loading());
        assert!(listing.shows_fallback());
        assert_eq!(listing.entries().len(), 4);
    }

    #[test]
    fn failure_clears_loading_and_keeps_fallback() {
        let session = PageSession::new();
        let mut listing = story_listing();
        let applied = listing.settle(
            &session.begin(),
            Err(TetraversError::Request("offline".to_string())),
        );

        assert!(applied);
        assert!(!listing.is_loading());
        assert!(listing.entries().iter().all(|e| !e.is_loaded()));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let session = PageSession::new();
        let ticket = session.begin();
        session.teardown();

        let mut listing = realm_listing();
        assert!(!ticket.is_current());
        assert!(!listing.settle(&ticket, Ok(Vec::new())));
        assert!(listing.is_loading());
    }

    #[test]
    fn new_tickets_after_teardown_are_current() {
        let session = PageSession::new();
        session.teardown();
        assert!(session.begin().is_current());
    }
}
