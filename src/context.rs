//! Backend context for page components.
//!
//! `main` injects a [`SharedBackend`] into the launch context; pages read it
//! back with [`use_backend`].
//!
//! ## Usage
//!
//! ```ignore
//! let backend = use_backend();
//! spawn(async move {
//!     let result = load_realms(backend.as_ref()).await;
//! });
//! ```

use dioxus::prelude::*;
use tetravers_core::{PageSession, SharedBackend};

/// Hook to access the backend handle.
pub fn use_backend() -> SharedBackend {
    use_context::<SharedBackend>()
}

/// Hook giving the component a [`PageSession`] that is torn down on unmount,
/// so loads finishing afterwards are discarded.
pub fn use_page_session() -> PageSession {
    let session = use_hook(PageSession::new);
    let on_drop = session.clone();
    use_drop(move || on_drop.teardown());
    session
}
