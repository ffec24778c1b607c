//! HTTP client for the Order service.

use std::time::Duration;

use async_trait::async_trait;
use commhub_core::collaborator::{ORDER_SERVICE, OrderService};
use commhub_core::error::CollaboratorError;
use commhub_core::event::OrderId;
use commhub_core::status::OrderStatus;
use serde::Serialize;

use crate::{ensure_success, normalize_base_url, probe_health, transport_error};

#[derive(Serialize)]
struct StatusUpdateBody {
    status: OrderStatus,
}

/// Order service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOrderService {
    client: reqwest::Client,
    base_url: String,
    probe_timeout: Duration,
}

impl HttpOrderService {
    /// Creates a client for the Order service at `base_url`.
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
impl OrderService for HttpOrderService {
    /// `PUT /orders/{id}/status`. The status goes in the JSON body and, for
    /// Order services that read it from the query string, as `?status=`.
    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), CollaboratorError> {
        let url = format!("{}/orders/{order_id}/status", self.base_url);
        tracing::debug!(%url, %status, "sending order status update");

        let response = self
            .client
            .put(&url)
            .query(&[("status", status.as_str())])
            .json(&StatusUpdateBody { status })
            .send()
            .await
            .map_err(|e| transport_error(ORDER_SERVICE, &e))?;
        ensure_success(ORDER_SERVICE, response).await
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        probe_health(&self.client, ORDER_SERVICE, &self.base_url, self.probe_timeout).await
    }
}
