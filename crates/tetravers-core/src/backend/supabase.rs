//! PostgREST client for the hosted Supabase project.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use super::{Backend, Order};
use crate::config::BackendConfig;
use crate::error::{TetraversError, TetraversResult};

/// Client for a Supabase project's REST interface
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    config: BackendConfig,
}

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.config.table_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

/// Turn a non-success response into a backend error, keeping the PostgREST code.
async fn error_from_response(response: Response) -> TetraversError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return TetraversError::Request(e.to_string()),
    };

    match serde_json::from_str::<PostgrestError>(&body) {
        Ok(err) => {
            let message = match (err.message, err.details) {
                (Some(message), Some(details)) => format!("{message} ({details})"),
                (Some(message), None) => message,
                (None, _) => format!("HTTP {status}"),
            };
            TetraversError::Backend {
                code: err.code,
                message,
            }
        }
        Err(_) => TetraversError::Backend {
            code: None,
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {body}")
            },
        },
    }
}

#[async_trait]
impl Backend for SupabaseClient {
    async fn select(&self, table: &str, order: Option<Order>) -> TetraversResult<Vec<Value>> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        if let Some(order) = &order {
            query.push(("order".to_string(), order.to_query()));
        }

        tracing::debug!(table, order = ?order, "select");
        let response = self
            .request(reqwest::Method::GET, table)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| TetraversError::Decode(e.to_string()))
    }

    async fn insert(&self, table: &str, rows: Value) -> TetraversResult<()> {
        tracing::debug!(table, "insert");
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}
