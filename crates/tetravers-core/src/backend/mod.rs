//! Backend access.
//!
//! The site talks to a hosted relational service through a small,
//! table-scoped port: read every row of a table (optionally ordered), or
//! insert rows into it. [`SupabaseClient`] speaks PostgREST over HTTP;
//! [`MemoryBackend`] keeps tables in process.

mod memory;
mod supabase;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::TetraversResult;

pub use memory::MemoryBackend;
pub use supabase::SupabaseClient;

/// Backend handle shared by every page of the app.
pub type SharedBackend = Arc<dyn Backend>;

/// Server-side ordering for a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }

    /// PostgREST `order` query value, e.g. `published_at.desc`.
    pub fn to_query(&self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}

/// Table-scoped access to the hosted backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch every row of `table`, sorted by the server when `order` is given.
    async fn select(&self, table: &str, order: Option<Order>) -> TetraversResult<Vec<Value>>;

    /// Insert `rows` (a JSON object or array of objects) into `table`.
    async fn insert(&self, table: &str, rows: Value) -> TetraversResult<()>;
}

/// Select every row of `table` and decode it as `T`.
pub async fn select_rows<T>(
    backend: &dyn Backend,
    table: &str,
    order: Option<Order>,
) -> TetraversResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let rows = backend.select(table, order).await?;
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Into::into))
        .collect()
}

/// Encode `rows` and insert them into `table`.
pub async fn insert_rows<T>(backend: &dyn Backend, table: &str, rows: &[T]) -> TetraversResult<()>
where
    T: Serialize + Sync,
{
    let payload = serde_json::to_value(rows)?;
    backend.insert(table, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_query_values() {
        assert_eq!(Order::asc("ordre").to_query(), "ordre.asc");
        assert_eq!(Order::desc("published_at").to_query(), "published_at.desc");
    }
}
