//! In-process backend.
//!
//! Behaves like the hosted service for the operations the site uses:
//! ordering happens "server-side", unique columns reject duplicates with the
//! PostgreSQL code, and individual tables can be made to fail.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use super::{Backend, Order};
use crate::error::{TetraversError, TetraversResult, UNIQUE_VIOLATION};

#[derive(Debug, Clone)]
enum Failure {
    Unreachable,
    Rejected {
        code: Option<String>,
        message: String,
    },
}

impl Failure {
    fn to_error(&self) -> TetraversError {
        match self {
            Failure::Unreachable => TetraversError::Request("connection refused".to_string()),
            Failure::Rejected { code, message } => TetraversError::Backend {
                code: code.clone(),
                message: message.clone(),
            },
        }
    }
}

/// Tables held in memory, with injectable failures
#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    unique: Mutex<HashMap<String, String>>,
    failures: Mutex<HashMap<String, Failure>>,
    selects: AtomicUsize,
    inserts: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows of `table`.
    pub fn with_rows<T: Serialize>(self, table: &str, rows: &[T]) -> Self {
        let values = rows
            .iter()
            .filter_map(|row| serde_json::to_value(row).ok())
            .collect();
        self.tables.lock().insert(table.to_string(), values);
        self
    }

    /// Declare `column` unique within `table`.
    pub fn with_unique(self, table: &str, column: &str) -> Self {
        self.unique
            .lock()
            .insert(table.to_string(), column.to_string());
        self
    }

    /// Make every call on `table` fail as if the network were down.
    pub fn fail_unreachable(&self, table: &str) {
        self.failures
            .lock()
            .insert(table.to_string(), Failure::Unreachable);
    }

    /// Make every call on `table` fail with a backend error.
    pub fn fail_rejected(&self, table: &str, code: Option<&str>, message: &str) {
        self.failures.lock().insert(
            table.to_string(),
            Failure::Rejected {
                code: code.map(str::to_string),
                message: message.to_string(),
            },
        );
    }

    /// Stop failing calls on `table`.
    pub fn heal(&self, table: &str) {
        self.failures.lock().remove(table);
    }

    /// Current rows of `table`, in insertion order.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.lock().get(table).cloned().unwrap_or_default()
    }

    /// Number of select calls received.
    pub fn select_count(&self) -> usize {
        self.selects.load(AtomicOrdering::SeqCst)
    }

    /// Number of insert calls received.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(AtomicOrdering::SeqCst)
    }

    fn check_failure(&self, table: &str) -> TetraversResult<()> {
        match self.failures.lock().get(table) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

/// Total order over JSON scalars: nulls first, then booleans, numbers, strings.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn select(&self, table: &str, order: Option<Order>) -> TetraversResult<Vec<Value>> {
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);
        self.check_failure(table)?;

        let mut rows = self.rows(table);
        if let Some(order) = order {
            // Stable sort keeps insertion order among equal keys.
            rows.sort_by(|a, b| {
                let ord = compare_values(
                    a.get(&order.column).unwrap_or(&Value::Null),
                    b.get(&order.column).unwrap_or(&Value::Null),
                );
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Value) -> TetraversResult<()> {
        self.inserts.fetch_add(1, AtomicOrdering::SeqCst);
        self.check_failure(table)?;

        let new_rows = match rows {
            Value::Array(rows) => rows,
            Value::Object(_) => vec![rows],
            other => {
                return Err(TetraversError::Backend {
                    code: Some("PGRST102".to_string()),
                    message: format!("cannot insert {other}"),
                })
            }
        };

        let unique = self.unique.lock().get(table).cloned();
        let mut tables = self.tables.lock();
        let existing = tables.entry(table.to_string()).or_default();

        if let Some(column) = unique {
            // Checked against stored rows and earlier rows of the same batch
            for (i, row) in new_rows.iter().enumerate() {
                let key = match row.get(&column) {
                    Some(Value::Null) | None => continue,
                    Some(key) => Some(key),
                };
                let taken = existing.iter().any(|r| r.get(&column) == key)
                    || new_rows[..i].iter().any(|r| r.get(&column) == key);
                if taken {
                    return Err(TetraversError::Backend {
                        code: Some(UNIQUE_VIOLATION.to_string()),
                        message: format!(
                            "duplicate key value violates unique constraint \"{table}_{column}_key\""
                        ),
                    });
                }
            }
        }

        existing.extend(new_rows);
        Ok(())
    }
}
