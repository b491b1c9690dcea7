//! Path component of a stage base URL.

/// Returns the path of `url` exactly as written, or `""` when the URL has no
/// explicit path.
///
/// `url::Url` normalises an absent http(s) path to `/` and resolves dot
/// segments, while request URIs arrive raw, so the path is sliced out of the
/// input string instead.
pub fn stage_path(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(i) => &url[i + 3..],
        None => url,
    };
    let end = after_scheme
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(after_scheme.len());
    let before_query = &after_scheme[..end];
    match before_query.find('/') {
        Some(i) => &before_query[i..],
        None => "",
    }
}
