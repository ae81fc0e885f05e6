//! HTTP record store gateway.
//!
//! Client for a ledger gateway service exposing the record store over a
//! small REST surface. The gateway itself fronts the durable ledger;
//! responses come back only after durable acceptance.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;

use payslip::{NewPaySlip, PaySlip, Proof, RecordId};

use super::traits::*;

/// HTTP client for a ledger gateway.
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRecordStore {
    /// Create a new gateway client.
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

        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn records_url(&self) -> String {
        format!("{}/v1/records", self.base_url)
    }

    fn record_url(&self, id: &RecordId) -> String {
        format!("{}/v1/records/{}", self.base_url, id)
    }

    fn verification_url(&self, id: &RecordId) -> String {
        format!("{}/v1/records/{}/verification", self.base_url, id)
    }

    /// Build authorization header if an API key is set.
    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|k| format!("Bearer {}", k))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Map a non-success response to the store error taxonomy.
    async fn error_for(
        response: reqwest::Response,
        id: Option<&RecordId>,
        conflict: fn(RecordId) -> StoreError,
    ) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => match id {
                Some(id) => StoreError::NotFound(id.clone()),
                None => StoreError::ParseError(format!("Unexpected 404: {}", body)),
            },
            StatusCode::CONFLICT => match id {
                Some(id) => conflict(id.clone()),
                None => StoreError::Rejected(format!("HTTP {}: {}", status, body)),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                StoreError::Rejected(format!("HTTP {}: {}", status, body))
            }
            _ => StoreError::NetworkError(format!("HTTP {}: {}", status, body)),
        }
    }

    async fn parse_record(response: reqwest::Response) -> Result<PaySlip, StoreError> {
        response
            .json()
            .await
            .map_err(|e| StoreError::ParseError(e.to_string()))
    }
}

/// Gateway list response.
#[derive(Debug, Deserialize)]
struct ListResponse {
    ids: Vec<RecordId>,
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn is_available(&self) -> bool {
        let url = format!("{}/v1/health", self.base_url);
        self.authorized(self.client.get(&url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn list_ids(&self) -> Result<Vec<RecordId>, StoreError> {
        let response = self
            .authorized(self.client.get(self.records_url()))
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, None, StoreError::DuplicateId).await);
        }

        let list: ListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::ParseError(e.to_string()))?;

        Ok(list.ids)
    }

    async fn get(&self, id: &RecordId) -> Result<PaySlip, StoreError> {
        let response = self
            .authorized(self.client.get(self.record_url(id)))
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, Some(id), StoreError::DuplicateId).await);
        }

        Self::parse_record(response).await
    }

    async fn append(&self, record: NewPaySlip) -> Result<PaySlip, StoreError> {
        let id = record.id.clone();
        let response = self
            .authorized(self.client.post(self.records_url()))
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, Some(&id), StoreError::DuplicateId).await);
        }

        Self::parse_record(response).await
    }

    async fn append_verification(
        &self,
        id: &RecordId,
        clear_value_bytes: &[u8],
        proof: &Proof,
    ) -> Result<PaySlip, StoreError> {
        let body = serde_json::json!({
            "clear_value_bytes": hex::encode(clear_value_bytes),
            "proof": proof.as_str(),
        });

        let response = self
            .authorized(self.client.post(self.verification_url(id)))
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, Some(id), StoreError::AlreadyVerified).await);
        }

        Self::parse_record(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payslip::{CallerIdentity, CiphertextHandle};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stored_record_json(id: &str, verified: bool) -> serde_json::Value {
        let mut record = serde_json::json!({
            "id": id,
            "subject_name": "Alice",
            "sealed_amount": "0xhandle",
            "public_bonus": 200,
            "public_deductions": 50,
            "description": "March",
            "creator": "0xcaller",
            "created_at": "2026-03-01T12:00:00Z",
        });
        if verified {
            record["verification"] = serde_json::json!({
                "revealed_amount": 5000,
                "proof": "ddeeff",
                "verified_at": "2026-03-02T12:00:00Z",
            });
        }
        record
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/records"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "ids": ["payslip-1"] })),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/records/payslip-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(stored_record_json("payslip-1", false)),
            )
            .mount(&server)
            .await;

        let store = HttpRecordStore::new(server.uri(), None);

        let ids = store.list_ids().await.unwrap();
        assert_eq!(ids, vec![RecordId::new("payslip-1")]);

        let record = store.get(&RecordId::new("payslip-1")).await.unwrap();
        assert_eq!(record.subject_name, "Alice");
        assert_eq!(record.sealed_amount, CiphertextHandle::new("0xhandle"));
        assert_eq!(record.creator, CallerIdentity::new("0xcaller"));
        assert!(!record.is_verified());
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/records/payslip-missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let store = HttpRecordStore::new(server.uri(), None);
        let err = store.get(&RecordId::new("payslip-missing")).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_verification_conflict() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/records/payslip-1/verification"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let store = HttpRecordStore::new(server.uri(), None);
        let err = store
            .append_verification(
                &RecordId::new("payslip-1"),
                &payslip::encode_words(&[5000]),
                &Proof::new("ddeeff"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::AlreadyVerified(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_append() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/records"))
            .respond_with(ResponseTemplate::new(403).set_body_string("not allowed"))
            .mount(&server)
            .await;

        let store = HttpRecordStore::new(server.uri(), None);
        let record = NewPaySlip {
            id: RecordId::new("payslip-1"),
            subject_name: "Alice".to_string(),
            sealed_amount: CiphertextHandle::new("0xhandle"),
            sealing_proof: Proof::new("aabbcc"),
            public_bonus: 200,
            public_deductions: 50,
            description: "March".to_string(),
            creator: CallerIdentity::new("0xcaller"),
        };

        let err = store.append(record).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }
}
