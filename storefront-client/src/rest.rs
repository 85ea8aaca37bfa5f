//! REST data store for the hosted backend

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use shared::store::{DataStore, Query, StoreResult, Table};
use std::time::Duration;

const REST_PATH: &str = "rest/v1/";

/// Asks the backend to echo written rows
const RETURN_REPRESENTATION: &str = "return=representation";

/// [`DataStore`] over the backend row API
///
/// Filters become `column=eq.value` parameters, ordering becomes
/// `order=column.asc|desc`, writes ask for the written rows back.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: Url,
}

impl RestStore {
    /// Create a REST store from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Self::rest_base(&config.base_url)?;

        let bearer = config.access_token.as_deref().unwrap_or(&config.api_key);
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&config.api_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", bearer))?);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/rest/v1/`
    fn rest_base(base_url: &str) -> ClientResult<Url> {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join(REST_PATH))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))
    }

    /// Full URL for a table and query
    pub fn table_url(&self, table: Table, query: &Query) -> ClientResult<Url> {
        let mut url = self
            .base_url
            .join(table.as_str())
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let params = query_params(query);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    fn request(&self, method: Method, table: Table, query: &Query) -> ClientResult<RequestBuilder> {
        let url = self.table_url(table, query)?;
        tracing::debug!(method = %method, url = %url, "Backend request");
        Ok(self.client.request(method, url))
    }

    /// Send a request and decode the JSON row array it returns
    async fn send_rows(request: RequestBuilder) -> ClientResult<Vec<Value>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(status = %status, body = %text, "Backend request failed");
            return Err(status_error(status, text));
        }

        match response.json::<Value>().await? {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Err(ClientError::InvalidResponse(format!(
                "expected a row array, got {}",
                other
            ))),
        }
    }
}

fn header_value(value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::Internal(format!("invalid header value: {}", e)))
}

/// Map a failed response to an error
fn status_error(status: StatusCode, body: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(body),
        StatusCode::NOT_FOUND => ClientError::NotFound(body),
        StatusCode::CONFLICT => ClientError::Conflict(body),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(body),
        _ => ClientError::Internal(format!("{}: {}", status, body)),
    }
}

/// Filter value as it appears after `eq.`
fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Query string parameters for a [`Query`]
pub fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = query
        .filters
        .iter()
        .map(|f| {
            let op = match &f.value {
                Value::Null => "is.null".to_string(),
                value => format!("eq.{}", filter_value(value)),
            };
            (f.column.clone(), op)
        })
        .collect();

    if let Some(order) = &query.order {
        params.push((
            "order".into(),
            format!("{}.{}", order.column, order.direction.as_str()),
        ));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".into(), limit.to_string()));
    }
    params
}

#[async_trait]
impl DataStore for RestStore {
    async fn select(&self, table: Table, query: &Query) -> StoreResult<Vec<Value>> {
        let request = self.request(Method::GET, table, query)?;
        Ok(Self::send_rows(request).await?)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> StoreResult<Vec<Value>> {
        let request = self
            .request(Method::POST, table, &Query::new())?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&rows);
        Ok(Self::send_rows(request).await?)
    }

    async fn update(&self, table: Table, query: &Query, patch: Value) -> StoreResult<Vec<Value>> {
        let request = self
            .request(Method::PATCH, table, query)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&patch);
        Ok(Self::send_rows(request).await?)
    }

    async fn delete(&self, table: Table, query: &Query) -> StoreResult<u64> {
        let request = self
            .request(Method::DELETE, table, query)?
            .header("Prefer", RETURN_REPRESENTATION);
        let deleted = Self::send_rows(request).await?;
        Ok(deleted.len() as u64)
    }
}
