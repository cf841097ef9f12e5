//! Redirect page shell.
//!
//! The page exists for crawlers: the head carries the metadata tags and the
//! body is a fallback link for clients that ignore `meta refresh`.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::meta::MetaTag;

/// Inline stylesheet for the fallback body.
pub const PAGE_CSS: &str = r#"
body {
	color: #333;
	font-family: sans-serif;
	text-align: center;
	margin-top: 2rem;
}
"#;

/// Content-Security-Policy header value.
///
/// The page runs no script and loads nothing; only the inline stylesheet
/// and HTTPS images (for clients that render `og:image`) are allowed.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https:; form-action 'none'; frame-ancestors 'none'";

/// Render the full HTML document for a set of metadata tags.
///
/// Output is byte-stable for identical inputs.
pub fn render_page(tags: &[MetaTag], canonical_url: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                @for tag in tags {
                    (tag)
                }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                h4 {
                    "Redirecting to "
                    a href=(canonical_url) { (canonical_url) }
                    "..."
                }
                p { "Not affiliated with Bluesky." }
            }
        }
    }
}
