use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::nanami::enums::authority_error::AuthorityError;
use crate::nanami::structs::announce_batch::AnnounceBatch;
use crate::nanami::structs::approval_info::ApprovalInfo;
use crate::nanami::structs::nanami_http_backend::NanamiHttpBackend;
use crate::nanami::traits::authority_backend::AuthorityBackend;

const APPROVAL_ENDPOINT: &str = "approval";
const ANNOUNCE_BATCH_ENDPOINT: &str = "announce_batch";

impl NanamiHttpBackend {
    /// Builds the backend. Every request is bounded by `request_timeout`.
    pub fn new(config: Arc<NanamiConfig>) -> Result<NanamiHttpBackend, AuthorityError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthorityError::TransportError(e.to_string()))?;
        Ok(NanamiHttpBackend { config, client })
    }
}

#[async_trait]
impl AuthorityBackend for NanamiHttpBackend {
    async fn fetch_approval_info(&self) -> Result<ApprovalInfo, AuthorityError> {
        let endpoint = self.config.endpoint(APPROVAL_ENDPOINT);
        debug!("[NANAMI] GET {endpoint}");
        let response = self.client.get(&endpoint)
            .send()
            .await
            .map_err(|e| AuthorityError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthorityError::StatusError { endpoint, status: status.as_u16() });
        }

        let body = response.bytes()
            .await
            .map_err(|e| AuthorityError::TransportError(e.to_string()))?;
        serde_json::from_slice::<ApprovalInfo>(&body)
            .map_err(|e| AuthorityError::DecodeError(e.to_string()))
    }

    async fn push_announce_batch(&self, batch: &AnnounceBatch) -> Result<(), AuthorityError> {
        let endpoint = self.config.endpoint(ANNOUNCE_BATCH_ENDPOINT);
        let body = serde_json::to_vec(batch)
            .map_err(|e| AuthorityError::DecodeError(e.to_string()))?;
        debug!("[NANAMI] POST {endpoint} ({} announces, {} bytes)", batch.len(), body.len());

        let response = self.client.post(&endpoint)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(body)
            .send()
            .await
            .map_err(|e| AuthorityError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthorityError::StatusError { endpoint, status: status.as_u16() });
        }
        Ok(())
    }
}
