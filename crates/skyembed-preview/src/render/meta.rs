//! Open Graph / Twitter Card metadata for a post.
//!
//! Synthesis is a pure, total function of its inputs: missing optional
//! fields drop the tags derived from them and never fail the request.

use std::fmt;

use maud::{Markup, Render, html};

use crate::record::{PostRecord, ProfileRecord};

/// Bluesky brand color, used as the browser theme color.
pub const THEME_COLOR: &str = "#0085ff";

/// `og:site_name` value.
pub const SITE_NAME: &str = "Bluesky";

/// Image CDN processing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreset {
    Avatar,
    Banner,
    FeedThumbnail,
    FeedFullsize,
}

impl ImagePreset {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Banner => "banner",
            Self::FeedThumbnail => "feed_thumbnail",
            Self::FeedFullsize => "feed_fullsize",
        }
    }
}

impl fmt::Display for ImagePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image CDN output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a CDN URL for a blob: `{cdn}/img/{preset}/plain/{did}/{cid}@{format}`.
pub fn image_url(
    cdn: &str,
    preset: ImagePreset,
    did: &str,
    cid: &str,
    format: ImageFormat,
) -> String {
    format!("{cdn}/img/{preset}/plain/{did}/{cid}@{format}")
}

/// One `<meta>`/`<link>` element in the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    /// `<meta name=.. content=..>` (theme-color, twitter:*).
    Name { name: &'static str, content: String },
    /// `<meta property=.. content=..>` (og:*).
    Property {
        property: &'static str,
        content: String,
    },
    /// `<link rel="canonical" href=..>`.
    Canonical { href: String },
    /// `<meta http-equiv="refresh">` redirecting to `url` immediately.
    Refresh { url: String },
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self::Name {
            name,
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self::Property {
            property,
            content: content.into(),
        }
    }

    /// The attribute crawlers key on (`name`, `property`, `rel` or `http-equiv`).
    pub fn key(&self) -> &str {
        match self {
            Self::Name { name, .. } => *name,
            Self::Property { property, .. } => *property,
            Self::Canonical { .. } => "canonical",
            Self::Refresh { .. } => "refresh",
        }
    }

    /// The tag's value (`content` or `href`).
    pub fn value(&self) -> &str {
        match self {
            Self::Name { content, .. } | Self::Property { content, .. } => content.as_str(),
            Self::Canonical { href } => href.as_str(),
            Self::Refresh { url } => url.as_str(),
        }
    }
}

impl Render for MetaTag {
    fn render(&self) -> Markup {
        match self {
            Self::Name { name, content } => html! { meta name=(name) content=(content); },
            Self::Property { property, content } => {
                html! { meta property=(property) content=(content); }
            }
            Self::Canonical { href } => html! { link rel="canonical" href=(href); },
            Self::Refresh { url } => {
                html! { meta http-equiv="refresh" content={ "0;URL='" (url) "'" }; }
            }
        }
    }
}

/// Everything needed to describe one post.
#[derive(Debug, Clone, Copy)]
pub struct PostContext<'a> {
    /// Canonical URL of the post on the web app.
    pub canonical_url: &'a str,
    /// Author handle as requested.
    pub handle: &'a str,
    /// Author DID resolved from the handle.
    pub did: &'a str,
    /// Author profile record.
    pub profile: &'a ProfileRecord,
    /// The post record.
    pub post: &'a PostRecord,
}

/// Produce the ordered metadata tags for a post.
///
/// Fixed tags come first. If the post embeds at least one image, a
/// `twitter:card=summary_large_image` tag follows, then a `twitter:image` and
/// `og:image:url` pair per image in embed order.
pub fn post_meta_tags(ctx: &PostContext<'_>, image_cdn: &str) -> Vec<MetaTag> {
    let title = format!(
        "{} (@{})",
        ctx.profile.display_name().unwrap_or(ctx.handle),
        ctx.handle
    );

    let mut tags = vec![
        MetaTag::name("theme-color", THEME_COLOR),
        MetaTag::Canonical {
            href: ctx.canonical_url.to_string(),
        },
        MetaTag::property("og:url", ctx.canonical_url),
        MetaTag::Refresh {
            url: ctx.canonical_url.to_string(),
        },
        MetaTag::property("og:site_name", SITE_NAME),
        MetaTag::property("og:type", "article"),
        MetaTag::property("og:title", title),
        MetaTag::property("og:description", ctx.post.text.as_str()),
    ];

    let thumbnails: Vec<String> = ctx
        .post
        .images()
        .iter()
        .filter_map(|img| img.image.cid())
        .map(|cid| {
            image_url(
                image_cdn,
                ImagePreset::FeedThumbnail,
                ctx.did,
                cid,
                ImageFormat::Jpeg,
            )
        })
        .collect();

    if !thumbnails.is_empty() {
        tags.push(MetaTag::name("twitter:card", "summary_large_image"));
        for url in thumbnails {
            tags.push(MetaTag::name("twitter:image", url.clone()));
            tags.push(MetaTag::property("og:image:url", url));
        }
    }

    tags
}
