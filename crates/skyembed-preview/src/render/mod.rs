//! HTML rendering for post previews.
//!
//! [`meta`] turns a post into ordered Open Graph / Twitter Card tags and
//! [`page`] wraps them in the redirect document. Both are pure; all dynamic
//! values are escaped by [maud](https://maud.lambda.xyz/).

pub mod meta;
pub mod page;

pub use meta::{ImageFormat, ImagePreset, MetaTag, PostContext, image_url, post_meta_tags};
pub use page::render_page;
