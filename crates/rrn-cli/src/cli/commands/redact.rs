//! `rrn redact-url` / `rrn redact-body` – run the redactor directly.

use rrn_core::redact::{sanitize_body, sanitize_url};

pub fn run_redact_url(url: &str) {
    println!("{}", sanitize_url(url));
}

pub fn run_redact_body(body: &str, content_type: Option<&str>) {
    println!("{}", sanitize_body(body, content_type));
}
