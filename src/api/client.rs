// Employee web API HTTP client.
// Handles default headers, URL construction, and response status mapping.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, StoreError};

/// HTTP client bound to one employee API base URL.
#[derive(Debug, Clone)]
pub struct EmployeeApiClient {
    client: Client,
    base_url: String,
}

impl EmployeeApiClient {
    /// Create a client for the given base URL.
    /// The URL is used verbatim; endpoints are appended to it as-is.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("employee-store"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StoreError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request against the employee API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(StoreError::Api)?;

        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(StoreError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(StoreError::NotFound(url))
        }
        status => Err(StoreError::Http {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
