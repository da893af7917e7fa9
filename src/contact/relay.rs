use std::time::Duration;

use http::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;

use super::{rejection_reason, ContactMessage};

pub const ENDPOINT_ENV: &str = "CONTACT_FORM_ENDPOINT";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Couldn't reach the form relay: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Form relay rejected the message ({status})")]
    Rejected {
        status: StatusCode,
        reason: Option<String>,
    },
}

/// Forwards contact messages to a third-party form endpoint (Formspree style).
#[derive(Debug, Clone)]
pub struct FormRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RelayError> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    /// A relay whose requests give up after `timeout`, so a stalled endpoint
    /// surfaces as [`RelayError::Transport`].
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Endpoint from `CONTACT_FORM_ENDPOINT`, falling back to `default`.
    pub fn from_env(default: &str) -> Result<Self, RelayError> {
        Self::new(endpoint_from_env(default))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let res = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            tracing::info!(%status, "contact message relayed");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        let reason = rejection_reason(&body);
        tracing::warn!(%status, ?reason, "form relay rejected contact message");
        Err(RelayError::Rejected { status, reason })
    }
}

fn endpoint_from_env(default: &str) -> String {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use axum::{routing::post, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    /// Serve `app` on an ephemeral local port and return its base url.
    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://{addr}")
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Hello there")
    }

    #[tokio::test]
    async fn test_submit_accepted() {
        let app = Router::new().route(
            "/f/contact",
            post(|Json(msg): Json<ContactMessage>| async move {
                if msg.email == "ada@example.com" && msg.message == "Hello there" {
                    (StatusCode::OK, Json(json!({ "ok": true })))
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({ "ok": false })))
                }
            }),
        );
        let base = serve(app).await;

        let relay = FormRelay::new(format!("{base}/f/contact")).unwrap();
        assert!(relay.submit(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let app = Router::new().route(
            "/f/contact",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Validation errors",
                        "errors": [
                            { "code": "TYPE_EMAIL", "field": "email", "message": "should be an email" },
                            { "code": "REQUIRED", "field": "message", "message": "is required" }
                        ]
                    })),
                )
            }),
        );
        let base = serve(app).await;

        let relay = FormRelay::new(format!("{base}/f/contact")).unwrap();
        match relay.submit(&message()).await {
            Err(RelayError::Rejected { status, reason }) => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(reason.as_deref(), Some("should be an email"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = FormRelay::new(format!("http://{addr}/f/contact")).unwrap();
        let err = relay.submit(&message()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_submit_times_out() {
        let app = Router::new().route(
            "/f/contact",
            post(|| async { std::future::pending::<StatusCode>().await }),
        );
        let base = serve(app).await;

        let relay =
            FormRelay::with_timeout(format!("{base}/f/contact"), Duration::from_millis(200)).unwrap();
        match relay.submit(&message()).await {
            Err(RelayError::Transport(e)) => assert!(e.is_timeout(), "{e}"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_from_env() {
        let default = "https://formspree.io/f/default";

        std::env::set_var(ENDPOINT_ENV, "http://127.0.0.1:9/f/override");
        assert_eq!(endpoint_from_env(default), "http://127.0.0.1:9/f/override");
        let relay = FormRelay::from_env(default).unwrap();
        assert_eq!(relay.endpoint(), "http://127.0.0.1:9/f/override");

        std::env::set_var(ENDPOINT_ENV, "   ");
        assert_eq!(endpoint_from_env(default), default);

        std::env::remove_var(ENDPOINT_ENV);
        assert_eq!(FormRelay::from_env(default).unwrap().endpoint(), default);
    }
}
