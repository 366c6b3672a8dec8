//! Webhook ingress: signature-checked HTTP endpoint feeding the gateway.

use crate::gateway::Gateway;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info, warn};

const SIGNATURE_HEADER: &str = "x-line-signature";
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(gateway)
}

/// Webhook handler. Rejects bad signatures with 400; everything after a
/// valid signature returns 200 quickly, with event handling spawned off
/// the request path so slow outbound calls never stall the sender's
/// delivery loop.
async fn webhook(
    State(gateway): State<Arc<Gateway>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !gateway.channel().verify_signature(&body, signature) {
        warn!("rejected webhook with invalid signature");
        return (StatusCode::BAD_REQUEST, "invalid signature");
    }

    let events = match gateway.channel().parse_events(&body) {
        Ok(events) => events,
        Err(e) => {
            // Signature was valid, so the payload came from the platform;
            // acknowledge it rather than trigger sender-side retries.
            error!("failed to parse webhook payload: {e}");
            return (StatusCode::OK, "OK");
        }
    };

    for event in events {
        let gw = gateway.clone();
        tokio::spawn(async move {
            gw.handle_event(event).await;
        });
    }
    (StatusCode::OK, "OK")
}

pub async fn serve(gateway: Arc<Gateway>) {
    let addr = format!("{}:{}", gateway.server.host, gateway.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return;
        }
    };
    info!("webhook listening on {addr}");
    let router = build_router(gateway);
    if let Err(e) = axum::serve(listener, router).await {
        error!("webhook server error: {e}");
    }
}
