//! In-process stand-in for the XRPC lookup service, used by tests.
//!
//! Known fixtures:
//! - `alice.example.com` → `did:plc:alice`, display name "Alice", posts
//!   `3kpics` (two images), `3ktext` (no embed), `3kquote` (text needing
//!   escaping), `3kmalformed` (undecodable value)
//! - `noname.example.com` → `did:plc:noname`, profile without a display name,
//!   post `3ktext`
//! - `noprofile.example.com` → `did:plc:noprofile`, no profile record
//! - `blank.example.com` → empty did
//! - `slow.example.com` → does not resolve; its profile record answers only
//!   after [`SLOW_PROFILE_DELAY`]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use crate::config::Config;

/// How long the `slow.example.com` profile lookup takes to answer.
pub const SLOW_PROFILE_DELAY: Duration = Duration::from_secs(3);

/// A running stub and the post lookups it has served.
pub struct XrpcStub {
    /// XRPC root to point a client at.
    pub root: String,
    post_fetches: Arc<AtomicUsize>,
}

impl XrpcStub {
    /// Start the stub on an ephemeral loopback port.
    pub async fn spawn() -> Self {
        let post_fetches = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route(
                "/xrpc/com.atproto.identity.resolveHandle",
                get(resolve_handle),
            )
            .route("/xrpc/com.atproto.repo.getRecord", get(get_record))
            .with_state(post_fetches.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            root: format!("http://{addr}/xrpc"),
            post_fetches,
        }
    }

    /// Number of `app.bsky.feed.post` getRecord calls received so far.
    pub fn post_fetches(&self) -> usize {
        self.post_fetches.load(Ordering::SeqCst)
    }
}

/// Start the stub and return only its XRPC root.
pub async fn spawn_xrpc_stub() -> String {
    XrpcStub::spawn().await.root
}

/// Config pointing at the given XRPC root with production defaults elsewhere.
pub fn test_config(xrpc_root: String) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        xrpc_root,
        app_url: "https://bsky.app".to_string(),
        image_cdn: "https://av-cdn.bsky.app".to_string(),
    }
}

async fn resolve_handle(Query(params): Query<HashMap<String, String>>) -> Response {
    let did = match params.get("handle").map(String::as_str) {
        Some("alice.example.com") => "did:plc:alice",
        Some("noname.example.com") => "did:plc:noname",
        Some("noprofile.example.com") => "did:plc:noprofile",
        Some("blank.example.com") => "",
        _ => return xrpc_error("InvalidRequest", "Unable to resolve handle"),
    };
    Json(json!({ "did": did })).into_response()
}

async fn get_record(
    State(post_fetches): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let repo = params.get("repo").map(String::as_str).unwrap_or_default();
    let collection = params
        .get("collection")
        .map(String::as_str)
        .unwrap_or_default();
    let rkey = params.get("rkey").map(String::as_str).unwrap_or_default();

    if collection == "app.bsky.feed.post" {
        post_fetches.fetch_add(1, Ordering::SeqCst);
    }
    if repo == "slow.example.com" {
        tokio::time::sleep(SLOW_PROFILE_DELAY).await;
    }

    match record_fixture(repo, collection, rkey) {
        Some(value) => Json(json!({
            "uri": format!("at://{repo}/{collection}/{rkey}"),
            "cid": "bafyreicid",
            "value": value,
        }))
        .into_response(),
        None => xrpc_error("RecordNotFound", "Could not locate record"),
    }
}

fn record_fixture(repo: &str, collection: &str, rkey: &str) -> Option<Value> {
    let value = match (repo, collection, rkey) {
        ("alice.example.com", "app.bsky.actor.profile", "self") => json!({
            "$type": "app.bsky.actor.profile",
            "displayName": "Alice",
            "description": "hello there",
        }),
        ("slow.example.com", "app.bsky.actor.profile", "self") => json!({
            "$type": "app.bsky.actor.profile",
            "displayName": "Slow",
        }),
        ("noname.example.com", "app.bsky.actor.profile", "self") => json!({
            "$type": "app.bsky.actor.profile",
        }),
        ("alice.example.com" | "noname.example.com", "app.bsky.feed.post", "3ktext") => json!({
            "$type": "app.bsky.feed.post",
            "text": "just words",
            "createdAt": "2023-04-01T00:00:00.000Z",
        }),
        ("alice.example.com", "app.bsky.feed.post", "3kpics") => json!({
            "$type": "app.bsky.feed.post",
            "text": "two pictures",
            "createdAt": "2023-04-01T00:00:00.000Z",
            "embed": {
                "$type": "app.bsky.embed.images",
                "images": [
                    {
                        "alt": "first",
                        "image": {
                            "$type": "blob",
                            "ref": { "$link": "bafkreifirst" },
                            "mimeType": "image/jpeg",
                            "size": 1024,
                        },
                    },
                    {
                        "alt": "second",
                        "image": {
                            "$type": "blob",
                            "ref": { "$link": "bafkreisecond" },
                            "mimeType": "image/png",
                            "size": 2048,
                        },
                    },
                ],
            },
        }),
        ("alice.example.com", "app.bsky.feed.post", "3kquote") => json!({
            "$type": "app.bsky.feed.post",
            "text": "she said \"<b>hi</b>\" & left",
            "createdAt": "2023-04-01T00:00:00.000Z",
        }),
        ("alice.example.com", "app.bsky.feed.post", "3kmalformed") => json!({
            "$type": "app.bsky.feed.post",
            "text": 42,
        }),
        _ => return None,
    };
    Some(value)
}

fn xrpc_error(error: &str, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}
