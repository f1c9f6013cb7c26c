//! HTTP client wrapper - one method per catalog endpoint

use reqwest::{header, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::constants::ITEMS_PATH;
use crate::models::{CatalogItem, ItemDraft};

/// Any failure talking to the catalog service.
///
/// The screen treats every variant the same way; the split only makes the
/// log line more useful.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Thin async client for the `/jogos` collection
#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(CatalogClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, ITEMS_PATH, id)
    }

    /// `GET /jogos`
    pub async fn list(&self) -> Result<Vec<CatalogItem>> {
        let resp = self.http.get(self.collection_url()).send().await?;
        parse_json(resp).await
    }

    /// `GET /jogos/{id}`
    pub async fn get(&self, id: i64) -> Result<CatalogItem> {
        let resp = self.http.get(self.item_url(id)).send().await?;
        parse_json(resp).await
    }

    /// `POST /jogos`, returns the item with its server-assigned id
    pub async fn create(&self, draft: &ItemDraft) -> Result<CatalogItem> {
        let resp = self.http.post(self.collection_url()).json(draft).send().await?;
        parse_json(resp).await
    }

    /// `PUT /jogos/{id}`
    pub async fn update(&self, id: i64, draft: &ItemDraft) -> Result<CatalogItem> {
        let resp = self.http.put(self.item_url(id)).json(draft).send().await?;
        parse_json(resp).await
    }

    /// `DELETE /jogos/{id}`; any response body is ignored
    pub async fn delete(&self, id: i64) -> Result<()> {
        let resp = self.http.delete(self.item_url(id)).send().await?;
        check_status(resp).await.map(|_| ())
    }
}

/// Turn a non-2xx response into `ApiError::Status`
async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<T>().await?)
}
