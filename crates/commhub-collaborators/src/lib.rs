//! Commhub Collaborators — `reqwest` clients for the Order and Delivery
//! services.
//!
//! Event-processing calls carry no explicit timeout and inherit the client's
//! defaults; only health probes are bounded, by the probe timeout given at
//! construction.

mod http_delivery_service;
mod http_order_service;

use commhub_core::error::CollaboratorError;

pub use http_delivery_service::HttpDeliveryService;
pub use http_order_service::HttpOrderService;

/// Longest response body kept in a [`CollaboratorError::Rejected`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Strips trailing slashes so paths can be appended with `format!`.
fn normalize_base_url(base_url: impl Into<String>) -> String {
    let mut url = base_url.into();
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Maps a transport-level `reqwest` failure onto a collaborator error.
fn transport_error(service: &'static str, err: &reqwest::Error) -> CollaboratorError {
    if err.is_timeout() {
        CollaboratorError::Timeout { service }
    } else {
        CollaboratorError::Unreachable {
            service,
            message: err.to_string(),
        }
    }
}

/// Turns a non-2xx response into [`CollaboratorError::Rejected`].
async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<(), CollaboratorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // The body is only for diagnostics; an unreadable one is reported empty.
    let body = response.text().await.unwrap_or_default();
    Err(CollaboratorError::Rejected {
        service,
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}

/// `GET {base_url}/health`, bounded by `timeout`.
async fn probe_health(
    client: &reqwest::Client,
    service: &'static str,
    base_url: &str,
    timeout: std::time::Duration,
) -> Result<(), CollaboratorError> {
    let response = client
        .get(format!("{base_url}/health"))
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| transport_error(service, &e))?;
    ensure_success(service, response).await
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://orders:8001//"), "http://orders:8001");
        assert_eq!(normalize_base_url("http://orders:8001"), "http://orders:8001");
    }
}
