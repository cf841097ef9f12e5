//! Typed views of the lexicon records this service reads.
//!
//! Only the fields needed to build preview metadata are modelled; every
//! other field in the upstream JSON is ignored during deserialization.

use serde::Deserialize;

/// Collection holding actor profiles (`app.bsky.actor.profile`).
pub const PROFILE_COLLECTION: &str = "app.bsky.actor.profile";

/// Collection holding text posts (`app.bsky.feed.post`).
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// Record key of the single profile record in a repo.
pub const PROFILE_RKEY: &str = "self";

/// An `app.bsky.actor.profile` record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// User-facing display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ProfileRecord {
    /// Display name, or `None` when absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// An `app.bsky.feed.post` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRecord {
    /// Post body.
    #[serde(default)]
    pub text: String,
    /// Attached media, if any.
    #[serde(default)]
    pub embed: Option<Embed>,
}

impl PostRecord {
    /// Embedded images in their original order. Empty when there are none.
    pub fn images(&self) -> &[ImageEmbed] {
        self.embed
            .as_ref()
            .and_then(|e| e.images.as_deref())
            .unwrap_or_default()
    }
}

/// The `embed` object of a post. Only image embeds are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub images: Option<Vec<ImageEmbed>>,
}

/// One entry of `embed.images`. Alt text and aspect ratio are not rendered
/// and are left undecoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEmbed {
    pub image: BlobRef,
}

/// A blob reference.
///
/// Current records carry `{"ref": {"$link": cid}}`; legacy records carry a
/// bare `{"cid": cid}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlobRef {
    #[serde(rename = "ref", default)]
    pub link: Option<CidLink>,
    #[serde(default)]
    pub cid: Option<String>,
}

/// IPLD link in DAG-JSON form.
#[derive(Debug, Clone, Deserialize)]
pub struct CidLink {
    #[serde(rename = "$link")]
    pub link: String,
}

impl BlobRef {
    /// Content identifier of the blob, preferring the `ref` form.
    pub fn cid(&self) -> Option<&str> {
        self.link
            .as_ref()
            .map(|l| l.link.as_str())
            .or(self.cid.as_deref())
            .filter(|cid| !cid.is_empty())
    }
}
