//! URL sanitization: placeholder host and redacted query.

use url::Url;

use super::pairs::redact_pairs;
use super::rules::QUERY_RULES;
use crate::error::NamingError;

/// Host written in place of the captured one.
pub const HOST_PLACEHOLDER: &str = "example.com";

/// Rewrites `raw` with [`HOST_PLACEHOLDER`] as its authority and sensitive
/// query values redacted. Scheme, path and fragment are kept; user-info and
/// port are dropped.
///
/// On parse failure returns `raw` unchanged and logs a warning.
pub fn sanitize_url(raw: &str) -> String {
    match try_sanitize_url(raw) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("URL sanitize error: {}", e);
            raw.to_string()
        }
    }
}

pub(crate) fn try_sanitize_url(raw: &str) -> Result<String, NamingError> {
    let mut url = Url::parse(raw).map_err(|e| NamingError::MalformedInput(format!("URL: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(NamingError::MalformedInput(format!(
            "URL with scheme {:?} has no host",
            url.scheme()
        )));
    }

    let query = url.query().map(|q| redact_pairs(q, &QUERY_RULES));

    let no_authority = || NamingError::MalformedInput("cannot rewrite URL authority".to_string());
    if !url.username().is_empty() {
        url.set_username("").map_err(|()| no_authority())?;
    }
    if url.password().is_some() {
        url.set_password(None).map_err(|()| no_authority())?;
    }
    if url.port().is_some() {
        url.set_port(None).map_err(|()| no_authority())?;
    }
    url.set_host(Some(HOST_PLACEHOLDER))
        .map_err(|e| NamingError::MalformedInput(format!("URL host: {e}")))?;
    url.set_query(query.as_deref());

    Ok(url.into())
}
