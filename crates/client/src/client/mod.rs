//! HTTP client for the remote product store.

pub mod products;

use pizzeria_core::product::Product;
use pizzeria_core::storage::{remote_error_from_response, RemoteErrorBody};
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

use crate::error::Result;

/// Path of the products collection, relative to the store URL.
const PRODUCTS_PATH: &str = "rest/v1/products";

/// Store-side filter matching a single product ID.
fn id_filter(id: i64) -> [(&'static str, String); 1] {
    [("id", format!("eq.{}", id))]
}

/// REST client for the remote `products` collection.
///
/// Every request authenticates with the same key, sent both as the `apikey`
/// header and as a bearer token.
#[derive(Debug, Clone)]
pub struct RestProductStore {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl RestProductStore {
    /// Create a store client for the given store URL and API key.
    pub fn new(store_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let mut base = Url::parse(store_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: base.join(PRODUCTS_PATH)?,
            api_key: api_key.into(),
        })
    }

    /// Get the products endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Start an authenticated request against the products endpoint.
    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a request whose response body is an array of products.
    async fn fetch_rows(&self, request: RequestBuilder) -> Result<Vec<Product>> {
        let response = request.send().await?;
        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Send a request whose response body is ignored.
    async fn execute(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    /// Turn error responses into remote errors carrying the store's message.
    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let status = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<RemoteErrorBody>(&body) {
            Ok(error) => tracing::debug!(
                status,
                code = ?error.code,
                details = ?error.details,
                hint = ?error.hint,
                "Store request failed"
            ),
            Err(_) => tracing::debug!(status, body = %body, "Store request failed"),
        }
        Err(remote_error_from_response(status, &body).into())
    }
}
