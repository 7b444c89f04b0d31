//! HTTP client for the rostersync API.

pub mod api;
pub mod clients;
pub mod locations;
pub mod shifts;
pub mod staff;
pub mod teams;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Response envelope every rostersync endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into its payload.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(ClientError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ClientError::InvalidResponse("missing data field".to_string()))
    }
}

/// HTTP client for the rostersync API.
#[derive(Debug, Clone)]
pub struct RostersyncClient {
    client: reqwest::Client,
    base_url: String,
}

impl RostersyncClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (ROSTERSYNC_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ROSTERSYNC_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle enveloped responses.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let envelope: Envelope<T> = response.json().await.map_err(ClientError::from)?;
            envelope.into_data()
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: "Resource".to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Handle enveloped responses with no payload (delete-style endpoints).
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            let envelope: Envelope<serde_json::Value> =
                response.json().await.map_err(ClientError::from)?;
            if envelope.success {
                Ok(())
            } else {
                Err(ClientError::Rejected(
                    envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
                ))
            }
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: "Resource".to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
