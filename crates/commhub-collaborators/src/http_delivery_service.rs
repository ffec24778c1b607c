//! HTTP client for the Delivery service.

use std::time::Duration;

use async_trait::async_trait;
use commhub_core::collaborator::{DELIVERY_SERVICE, DeliveryAssignment, DeliveryService};
use commhub_core::error::CollaboratorError;

use crate::{ensure_success, normalize_base_url, probe_health, transport_error};

/// Delivery service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDeliveryService {
    client: reqwest::Client,
    base_url: String,
    probe_timeout: Duration,
}

impl HttpDeliveryService {
    /// Creates a client for the Delivery service at `base_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, probe_timeout: Duration) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
            probe_timeout,
        }
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DeliveryService for HttpDeliveryService {
    async fn assign(&self, assignment: &DeliveryAssignment) -> Result<(), CollaboratorError> {
        let url = format!("{}/delivery/assign", self.base_url);
        tracing::debug!(%url, order_id = assignment.order_id, "requesting delivery assignment");

        let response = self
            .client
            .post(&url)
            .json(assignment)
            .send()
            .await
            .map_err(|e| transport_error(DELIVERY_SERVICE, &e))?;
        ensure_success(DELIVERY_SERVICE, response).await
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        probe_health(
            &self.client,
            DELIVERY_SERVICE,
            &self.base_url,
            self.probe_timeout,
        )
        .await
    }
}
