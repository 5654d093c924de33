//! Supabase (PostgREST) implementation of the recipe store

use std::num::NonZeroUsize;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use urlencoding::encode;

use crate::domain::entities::RecipeRecord;
use crate::domain::ports::{FetchResult, RecipeStore};
use crate::error::StoreError;

/// Read-only client for a Supabase table
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String, table: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
        }
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.base_url, path)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(StoreError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(StoreError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RecipeStore for SupabaseClient {
    async fn select_recipes(&self, limit: NonZeroUsize) -> FetchResult {
        let url = self.rest_url(&format!("/{}", encode(&self.table)));
        let limit_param = limit.to_string();
        tracing::debug!("select_recipes: GET {} limit={}", url, limit_param);

        let resp = self
            .http
            .get(&url)
            .query(&[("select", "*"), ("limit", limit_param.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let rows = match self.handle_response(resp).await? {
            Value::Array(rows) => rows,
            other => {
                return Err(StoreError::NotAList {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        if rows.len() > limit.get() {
            tracing::warn!(
                "Store returned {} rows for limit {}, keeping the first {}",
                rows.len(),
                limit,
                limit
            );
        }

        Ok(rows
            .into_iter()
            .take(limit.get())
            .enumerate()
            .map(|(i, row)| decode_row(i, row))
            .collect())
    }
}

/// A row that is not an object still yields a record, with every field absent.
fn decode_row(index: usize, row: Value) -> RecipeRecord {
    match RecipeRecord::from_value(row) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Malformed recipe row {}: {}", index, e);
            RecipeRecord::default()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
