//! Client service integration — resolves owning clients by id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::client::Client;

#[derive(Debug, thiserror::Error)]
pub enum ClientApiError {
    #[error("client service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("client not found with id: {0}")]
    NotFound(i64),

    #[error("client service returned {status} for client {client_id}")]
    Status { client_id: i64, status: u16 },
}

/// Looks up clients owned by the client service.
#[async_trait]
pub trait ClientApi: Send + Sync {
    async fn find_client_by_id(&self, id: i64) -> Result<Client, ClientApiError>;
}

/// [`ClientApi`] backed by the client service REST endpoint
/// `GET {base_url}/api/clients/{id}`.
pub struct HttpClientApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClientApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("car-service")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ClientApi for HttpClientApi {
    async fn find_client_by_id(&self, id: i64) -> Result<Client, ClientApiError> {
        let url = format!("{}/api/clients/{id}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<Client>().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        tracing::warn!(client_id = id, "Client lookup failed: {} {}", status, text);

        if status == StatusCode::NOT_FOUND {
            Err(ClientApiError::NotFound(id))
        } else {
            Err(ClientApiError::Status {
                client_id: id,
                status: status.as_u16(),
            })
        }
    }
}
