//! Application configuration loaded from environment variables.

/// Default XRPC root. Every lookup goes to this one service.
pub const DEFAULT_XRPC_ROOT: &str = "https://bsky.social/xrpc";

/// Default web app base used to build canonical post URLs.
pub const DEFAULT_APP_URL: &str = "https://bsky.app";

/// Default image CDN host for thumbnail URLs.
pub const DEFAULT_IMAGE_CDN: &str = "https://av-cdn.bsky.app";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// XRPC root of the lookup service (e.g., "https://bsky.social/xrpc").
    pub xrpc_root: String,

    /// Web app base URL; canonical links are `{app_url}/profile/{handle}/post/{rkey}`.
    pub app_url: String,

    /// Image CDN base URL for embedded image thumbnails.
    pub image_cdn: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional (all have defaults):
    /// - `PREVIEW_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `XRPC_ROOT`: Lookup service XRPC root (default: "https://bsky.social/xrpc")
    /// - `PREVIEW_APP_URL`: Canonical link base (default: "https://bsky.app")
    /// - `PREVIEW_IMAGE_CDN`: Thumbnail CDN (default: "https://av-cdn.bsky.app")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PREVIEW_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let xrpc_root = url_var("XRPC_ROOT", DEFAULT_XRPC_ROOT)?;
        let app_url = url_var("PREVIEW_APP_URL", DEFAULT_APP_URL)?;
        let image_cdn = url_var("PREVIEW_IMAGE_CDN", DEFAULT_IMAGE_CDN)?;

        tracing::info!(
            bind_addr = %bind_addr,
            xrpc_root = %xrpc_root,
            app_url = %app_url,
            image_cdn = %image_cdn,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            xrpc_root,
            app_url,
            image_cdn,
        })
    }
}

/// Read a URL-valued variable, stripping any trailing slash.
fn url_var(key: &str, default: &str) -> anyhow::Result<String> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    let value = value.trim().trim_end_matches('/').to_string();

    if !(value.starts_with("https://") || value.starts_with("http://")) {
        anyhow::bail!("{key} must be an http(s) URL, got {value:?}");
    }

    Ok(value)
}
