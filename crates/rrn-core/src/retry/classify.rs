//! Classify HTTP status and curl errors into retry policy error kinds.

use crate::retry::policy::ErrorKind;

/// Classify a non-200 HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    let code16 = u16::try_from(code).unwrap_or(u16::MAX);
    match code {
        429 | 503 => ErrorKind::Throttled,
        400..=499 => ErrorKind::Http4xx(code16),
        500..=599 => ErrorKind::Http5xx(code16),
        _ => ErrorKind::HttpOther(code16),
    }
}

/// Classify a curl error. None of these kinds are retried.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}
