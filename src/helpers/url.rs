//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component the way browsers' `encodeURIComponent` does
///
/// # Examples
/// ```ignore
/// encode_component("https://a.name/x") // -> "https%3A%2F%2Fa.name%2Fx"
/// ```
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Build the absolute URL of a post from the site origin and its slug
///
/// # Examples
/// ```ignore
/// canonical_url("https://ahnheejong.name", "/posts/hello") // -> "https://ahnheejong.name/posts/hello"
/// ```
pub fn canonical_url(origin: &str, slug: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if slug.starts_with('/') {
        format!("{}{}", origin, slug)
    } else {
        format!("{}/{}", origin, slug)
    }
}

/// Directory under the site root that holds one index page per tag
pub const TAG_DIR: &str = "tags";

/// Address of a tag's index page
pub fn tag_path(tag: &str) -> String {
    format!("/{}/{}/", TAG_DIR, tag)
}

/// Fill a share-intent template
///
/// `:title` becomes the encoded title wrapped in `「」`, `:url` the encoded
/// canonical URL.
pub fn share_url(template: &str, title: &str, canonical: &str) -> String {
    let encoded_url = encode_component(canonical);
    let encoded_title = encode_component(&format!("「{}」", title));

    template
        .replace(":url", &encoded_url)
        .replace(":title", &encoded_title)
}
