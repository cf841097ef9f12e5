//! XRPC client for the fixed lookup service.
//!
//! Two calls are needed to build a preview: `com.atproto.identity.resolveHandle`
//! and `com.atproto.repo.getRecord`. Both collapse every failure mode
//! (transport error, non-2xx status, missing field, undecodable body) into
//! `None`; callers only care whether the result is usable.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Response body of `com.atproto.identity.resolveHandle`.
#[derive(Debug, Deserialize)]
struct ResolveHandleOutput {
    #[serde(default)]
    did: Option<String>,
}

/// Response body of `com.atproto.repo.getRecord`.
#[derive(Debug, Deserialize)]
struct GetRecordOutput<T> {
    value: T,
}

/// Thin typed client over the lookup service's XRPC endpoint.
#[derive(Debug, Clone)]
pub struct XrpcClient {
    http: reqwest::Client,
    root: String,
}

impl XrpcClient {
    /// Create a client for the XRPC root (e.g. `https://bsky.social/xrpc`).
    pub fn new(root: impl Into<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("skyembed-preview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            root: root.into().trim_end_matches('/').to_string(),
        })
    }

    /// The XRPC root this client talks to.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolve a handle to the DID it is currently bound to.
    pub async fn resolve_handle(&self, handle: &str) -> Option<String> {
        let output: ResolveHandleOutput = self
            .call("com.atproto.identity.resolveHandle", &[("handle", handle)])
            .await?;

        let did = output.did.filter(|did| !did.is_empty());
        if did.is_none() {
            tracing::debug!(handle = %handle, "resolveHandle returned no did");
        }
        did
    }

    /// Fetch one record by repo (handle or DID), collection and record key.
    pub async fn get_record<T: DeserializeOwned>(
        &self,
        repo: &str,
        collection: &str,
        rkey: &str,
    ) -> Option<T> {
        let output: GetRecordOutput<T> = self
            .call(
                "com.atproto.repo.getRecord",
                &[("repo", repo), ("collection", collection), ("rkey", rkey)],
            )
            .await?;

        Some(output.value)
    }

    /// Issue a query-style XRPC GET and decode the JSON body.
    async fn call<T: DeserializeOwned>(&self, nsid: &str, params: &[(&str, &str)]) -> Option<T> {
        let url = format!("{}/{nsid}", self.root);

        let resp = match self.http.get(&url).query(params).send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(nsid = %nsid, error = %err, "xrpc request failed");
                return None;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(nsid = %nsid, status = %status, "xrpc call unsuccessful");
            return None;
        }

        match resp.json::<T>().await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(nsid = %nsid, error = %err, "xrpc response did not decode");
                None
            }
        }
    }
}
