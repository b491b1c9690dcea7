//! Rewriting the current request URL onto another stage.
//!
//! Two branches exist and they intentionally use different remainders:
//!
//! - plain installs: the current stage's path is cut out of the request URI
//!   and the rest is appended to the target stage's base URL;
//! - subdomain-per-site installs (non-main site): the current site's host is
//!   moved onto the target stage's registrable domain and the **raw** request
//!   URI is appended.
//!
//! Path stripping is a substring replace, not an anchored prefix trim. A
//! stage path of `/blog` turns `/news/blog/blog/1` into `/news/blog/1`.

mod domain;

pub use domain::{registrable_domain, subdomain_origin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL `{0}` has no host")]
    MissingHost(String),
    #[error("host `{0}` has no registrable domain")]
    NoRegistrableDomain(String),
    #[error("rewritten host `{host}` is invalid: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// How the current stage path is removed from the request URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripMode {
    /// Remove the first occurrence anywhere in the URI.
    #[default]
    First,
    /// Remove every occurrence (global replace).
    All,
}

/// Remove `stage_path` from `request_uri`. An empty path leaves the URI as is.
pub fn strip_stage_path(request_uri: &str, stage_path: &str, mode: StripMode) -> String {
    if stage_path.is_empty() {
        return request_uri.to_string();
    }
    match mode {
        StripMode::First => request_uri.replacen(stage_path, "", 1),
        StripMode::All => request_uri.replace(stage_path, ""),
    }
}

/// Equivalent URL of the current request on the stage whose base URL is
/// `target_base_url`, stripping the first occurrence of `current_stage_path`.
pub fn rewrite(
    target_base_url: &str,
    current_stage_path: &str,
    request_uri: &str,
    subdomain_multi_tenant: bool,
    current_site_url: &str,
) -> Result<String, RewriteError> {
    rewrite_with(
        target_base_url,
        current_stage_path,
        request_uri,
        subdomain_multi_tenant,
        current_site_url,
        StripMode::First,
    )
}

/// [`rewrite`] with an explicit [`StripMode`].
pub fn rewrite_with(
    target_base_url: &str,
    current_stage_path: &str,
    request_uri: &str,
    subdomain_multi_tenant: bool,
    current_site_url: &str,
    mode: StripMode,
) -> Result<String, RewriteError> {
    if subdomain_multi_tenant {
        let origin = subdomain_origin(target_base_url, current_site_url)?;
        return Ok(format!("{origin}{request_uri}"));
    }
    let remainder = strip_stage_path(request_uri, current_stage_path, mode);
    Ok(format!("{target_base_url}{remainder}"))
}
