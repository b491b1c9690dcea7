//! Registrable-domain swapping for subdomain-per-site installs.

use url::{Host, Position, Url};

use super::RewriteError;

/// Registrable domain (eTLD+1) of a DNS host name, per the public suffix list.
///
/// `tenant1.example.co.uk` -> `example.co.uk`. Returns `None` for bare public
/// suffixes and single-label names such as `localhost`.
pub fn registrable_domain(host: &str) -> Option<&str> {
    psl::domain_str(host)
}

/// Parse `url` and return it with its host (one trailing `.` of a fully
/// qualified name removed) and that host's registrable domain.
fn parse_with_domain(url: &str) -> Result<(Url, String, String), RewriteError> {
    let parsed = Url::parse(url).map_err(|source| RewriteError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let host = match parsed.host() {
        Some(Host::Domain(host)) => host.strip_suffix('.').unwrap_or(host).to_string(),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            let host = parsed.host_str().unwrap_or_default().to_string();
            return Err(RewriteError::NoRegistrableDomain(host));
        }
        None => return Err(RewriteError::MissingHost(url.to_string())),
    };
    let domain = registrable_domain(&host)
        .ok_or_else(|| RewriteError::NoRegistrableDomain(host.clone()))?
        .to_string();
    Ok((parsed, host, domain))
}

/// Origin of `current_site_url` moved onto the registrable domain of
/// `target_base_url`, keeping the subdomain labels.
///
/// `("https://example.com", "https://tenant1.example.dev/page")` ->
/// `"https://tenant1.example.com"`. Scheme, user info and explicit port come
/// from the current site; path, query and fragment are dropped and no
/// trailing `/` is kept. A trailing root `.` on either host is not carried over.
pub fn subdomain_origin(target_base_url: &str, current_site_url: &str) -> Result<String, RewriteError> {
    let (_, _, target_domain) = parse_with_domain(target_base_url)?;
    let (mut site, site_host, site_domain) = parse_with_domain(current_site_url)?;

    let labels = site_host
        .strip_suffix(site_domain.as_str())
        .ok_or_else(|| RewriteError::NoRegistrableDomain(site_host.clone()))?;
    let new_host = format!("{labels}{target_domain}");

    site.set_host(Some(new_host.as_str()))
        .map_err(|source| RewriteError::InvalidHost {
            host: new_host.clone(),
            source,
        })?;

    Ok(site[..Position::BeforePath].trim_end_matches('/').to_string())
}
