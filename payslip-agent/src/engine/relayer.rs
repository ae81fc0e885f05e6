//! Relayer-backed confidentiality engine.
//!
//! Talks to a relayer service exposing the seal/reveal capability over
//! HTTP. Works with any deployment of the relayer API:
//! - local devnet relayer
//! - hosted gateway relayer

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use payslip::{CallerIdentity, CiphertextHandle, EngineContext, Proof};

use super::traits::*;

/// HTTP client for a relayer-hosted confidentiality engine.
pub struct RelayerEngine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    engine_id: String,
}

impl RelayerEngine {
    /// Create a new relayer engine client.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        let engine_id = format!("relayer:{}", base_url);

        Self {
            client,
            base_url,
            api_key,
            engine_id,
        }
    }

    /// Create a client pointing to a local devnet relayer.
    pub fn devnet(port: u16) -> Self {
        Self::new(format!("http://localhost:{}", port), None)
    }

    fn seal_url(&self) -> String {
        format!("{}/v1/seal", self.base_url)
    }

    fn reveal_url(&self) -> String {
        format!("{}/v1/reveal", self.base_url)
    }

    /// Build authorization header if an API key is set.
    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|k| format!("Bearer {}", k))
    }

    async fn post<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        url: String,
        body: &B,
        rejected: fn(String) -> EngineError,
    ) -> Result<R, EngineError> {
        let mut request = self.client.post(url);
        if let Some(auth) = self.auth_header() {
            request = request.header(header::AUTHORIZATION, auth);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| EngineError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::BAD_GATEWAY {
                return Err(EngineError::Unavailable(format!("HTTP {}: {}", status, body)));
            }
            if status.is_client_error() {
                return Err(rejected(format!("HTTP {}: {}", status, body)));
            }
            return Err(EngineError::NetworkError(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| EngineError::ParseError(e.to_string()))
    }
}

/// Relayer seal request body.
#[derive(Debug, Serialize)]
struct SealRequest<'a> {
    context: &'a str,
    identity: &'a str,
    value: u64,
}

/// Relayer seal response.
#[derive(Debug, Deserialize)]
struct SealResponse {
    handle: String,
    proof: String,
}

/// Relayer reveal request body.
#[derive(Debug, Serialize)]
struct RevealRequest<'a> {
    context: &'a str,
    handles: Vec<&'a str>,
}

/// Relayer reveal response.
#[derive(Debug, Deserialize)]
struct RevealResponse {
    /// handle -> plaintext
    clear_values: HashMap<String, u64>,
    /// Hex-encoded ABI payload of the clear values
    clear_value_bytes: String,
    proof: String,
}

#[async_trait]
impl ConfidentialityEngine for RelayerEngine {
    fn id(&self) -> &str {
        &self.engine_id
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/v1/health", self.base_url);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(header::AUTHORIZATION, auth);
        }

        request
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn seal_integer(
        &self,
        context: &EngineContext,
        identity: &CallerIdentity,
        value: u64,
    ) -> Result<SealedInteger, EngineError> {
        let body = SealRequest {
            context: context.as_str(),
            identity: identity.as_str(),
            value,
        };

        let response: SealResponse = self
            .post(self.seal_url(), &body, EngineError::SealingRejected)
            .await?;

        Ok(SealedInteger {
            handle: CiphertextHandle::new(response.handle),
            proof: Proof::new(response.proof),
        })
    }

    async fn request_reveal(
        &self,
        handles: &[CiphertextHandle],
        context: &EngineContext,
    ) -> Result<RevealOutcome, EngineError> {
        let body = RevealRequest {
            context: context.as_str(),
            handles: handles.iter().map(|h| h.as_str()).collect(),
        };

        let response: RevealResponse = self
            .post(self.reveal_url(), &body, EngineError::RevealRejected)
            .await?;

        let clear_value_bytes = hex::decode(&response.clear_value_bytes)
            .map_err(|e| EngineError::ParseError(format!("Bad clear value hex: {}", e)))?;

        let clear_values = response
            .clear_values
            .into_iter()
            .map(|(handle, value)| (CiphertextHandle::new(handle), value))
            .collect();

        Ok(RevealOutcome {
            clear_values,
            clear_value_bytes,
            proof: Proof::new(response.proof),
        })
    }
}
