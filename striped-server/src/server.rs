//! Axum server setup and router configuration.

use crate::api;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Build the main application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .merge(api::router())
        // Add state to all routes
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Simple health check - returns OK if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Run the server with graceful shutdown support.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use striped_core::config::ConfigStore;
    use striped_core::events::{ReceivedEventReceiver, received_event_channel};
    use striped_sdk::VerificationConfig;
    use striped_sdk::signature::{sign_header, unix_now};
    use tower::ServiceExt;

    const SECRET: &[u8] = b"whsec_test_secret";
    const BODY: &str = r#"{"id":"evt_1","type":"charge.succeeded","data":{"object":{"object":"charge"}}}"#;

    fn app() -> (Router, AppState, ReceivedEventReceiver) {
        let verification = ConfigStore::new(VerificationConfig::new([SECRET]).unwrap());
        let (tx, rx) = received_event_channel();
        let state = AppState::new(verification, tx, 64 * 1024);
        (build_router(state.clone()), state, rx)
    }

    fn delivery(header: Option<String>, body: &str) -> Request<Body> {
        let mut builder = Request::post("/webhooks/stripe").header("content-type", "application/json");
        if let Some(header) = header {
            builder = builder.header("stripe-signature", header);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    fn signed(secret: &[u8], timestamp: i64, body: &str) -> Option<String> {
        Some(sign_header(&[secret], timestamp, body.as_bytes()))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _, _rx) = app();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_valid_delivery_is_queued() {
        let (router, _, mut rx) = app();
        let now = unix_now();
        let response = router
            .oneshot(delivery(signed(SECRET, now, BODY), BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"received":true}"#);

        let received = rx.try_recv().unwrap();
        assert_eq!(received.event.id, "evt_1");
        assert_eq!(received.event_type(), "charge.succeeded");
        assert_eq!(received.signed_at, now);
    }

    #[tokio::test]
    async fn test_tampered_body_is_unauthorized() {
        let (router, _, mut rx) = app();
        let header = signed(SECRET, unix_now(), BODY);
        let tampered = BODY.replace("evt_1", "evt_2");
        let response = router.oneshot(delivery(header, &tampered)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "signature verification failed");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_header_is_bad_request() {
        let (router, _, _rx) = app();
        let response = router.oneshot(delivery(None, BODY)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stale_delivery_is_unauthorized() {
        let (router, _, _rx) = app();
        let stale = unix_now() - 301;
        let response = router
            .oneshot(delivery(signed(SECRET, stale, BODY), BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "signature expired");
    }

    #[tokio::test]
    async fn test_authentic_but_invalid_event() {
        let (router, _, _rx) = app();
        let body = r#"{"not":"an event"}"#;
        let response = router
            .oneshot(delivery(signed(SECRET, unix_now(), body), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let (router, _, _rx) = app();
        let body = format!(r#"{{"pad":"{}"}}"#, "x".repeat(128 * 1024));
        let response = router
            .oneshot(delivery(signed(SECRET, unix_now(), &body), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_router_gone_is_unavailable() {
        let (router, _, rx) = app();
        drop(rx);
        let response = router
            .oneshot(delivery(signed(SECRET, unix_now(), BODY), BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_secret_rotation_swaps_snapshot() {
        let (router, state, _rx) = app();
        let new_secret: &[u8] = b"whsec_rotated";

        state
            .verification
            .update(VerificationConfig::new([new_secret]).unwrap())
            .await;

        let now = unix_now();
        let old = router
            .clone()
            .oneshot(delivery(signed(SECRET, now, BODY), BODY))
            .await
            .unwrap();
        assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

        let new = router
            .oneshot(delivery(signed(new_secret, now, BODY), BODY))
            .await
            .unwrap();
        assert_eq!(new.status(), StatusCode::OK);
    }
}
