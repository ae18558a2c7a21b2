//! Convert HAR entries into captured exchanges.

use anyhow::{Context, Result};
use std::path::Path;

use crate::message::{CapturedMessage, Exchange};

use super::parse::{HarContent, HarEntry, HarHeader, HarLog};

/// Reads a HAR file and returns its entries as exchanges, in file order.
pub fn load_exchanges(path: &Path) -> Result<Vec<Exchange>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    exchanges_from_slice(&bytes).with_context(|| format!("load HAR: {}", path.display()))
}

/// Parses HAR JSON bytes into exchanges. Fails on an empty entry list.
pub fn exchanges_from_slice(bytes: &[u8]) -> Result<Vec<Exchange>> {
    let har: HarLog = serde_json::from_slice(bytes).context("parse HAR JSON")?;
    if har.log.entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }
    Ok(har.log.entries.into_iter().map(to_exchange).collect())
}

fn to_exchange(entry: HarEntry) -> Exchange {
    let req = entry.request;
    let mut headers = to_pairs(req.headers);
    let (mime_type, body) = match req.post_data {
        Some(pd) => (pd.mime_type, pd.text.unwrap_or_default()),
        None => (None, String::new()),
    };
    // Some exporters keep the body type only on postData.
    if let Some(mime) = mime_type.filter(|m| !m.is_empty()) {
        if !has_header(&headers, "Content-Type") {
            headers.push(("Content-Type".to_string(), mime));
        }
    }
    let request = CapturedMessage {
        url: req.url,
        headers,
        body,
    };

    let response = entry.response.filter(|r| r.status != 0).map(|resp| {
        let mut headers = to_pairs(resp.headers);
        let (mime_type, body) = resp.content.map(content_text).unwrap_or_default();
        if let Some(mime) = mime_type.filter(|m| !m.is_empty()) {
            if !has_header(&headers, "Content-Type") {
                headers.push(("Content-Type".to_string(), mime));
            }
        }
        CapturedMessage {
            url: String::new(),
            headers,
            body,
        }
    });

    Exchange::new(request, response)
}

/// Base64-encoded content is binary; it is not summarized.
fn content_text(content: HarContent) -> (Option<String>, String) {
    let is_base64 = content
        .encoding
        .as_deref()
        .is_some_and(|e| e.eq_ignore_ascii_case("base64"));
    let text = if is_base64 {
        String::new()
    } else {
        content.text.unwrap_or_default()
    };
    (content.mime_type, text)
}

fn to_pairs(headers: Vec<HarHeader>) -> Vec<(String, String)> {
    headers.into_iter().map(|h| (h.name, h.value)).collect()
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::HttpMessage;

    #[test]
    fn empty_entries_err() {
        let har = br#"{"log":{"version":"1.2","entries":[]}}"#;
        assert!(exchanges_from_slice(har).is_err());
    }

    #[test]
    fn status_zero_means_no_response() {
        let har = br#"{"log":{"entries":[
            {"request":{"url":"https://a.test/x","headers":[]},"response":{"status":0,"headers":[]}},
            {"request":{"url":"https://a.test/y"}}
        ]}}"#;
        let ex = exchanges_from_slice(har).unwrap();
        assert!(ex[0].response.is_none());
        assert!(ex[1].response.is_none());
        assert_eq!(ex[1].request.url(), "https://a.test/y");
    }

    #[test]
    fn post_data_mime_type_fills_missing_content_type() {
        let har = br#"{"log":{"entries":[{
            "request":{"url":"https://a.test/form","headers":[],
                       "postData":{"mimeType":"application/x-www-form-urlencoded","text":"password=p"}},
            "response":{"status":200,"headers":[],"content":{"mimeType":"text/html","text":"<p>"}}
        }]}}"#;
        let ex = &exchanges_from_slice(har).unwrap()[0];
        assert_eq!(
            ex.request.content_type(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(ex.response.as_ref().unwrap().content_type(), Some("text/html"));
    }

    #[test]
    fn base64_response_body_is_dropped() {
        let har = br#"{"log":{"entries":[{
            "request":{"url":"https://a.test/logo.png"},
            "response":{"status":200,"headers":[],
                        "content":{"mimeType":"image/png","text":"iVBORw0KGgo=","encoding":"base64"}}
        }]}}"#;
        let ex = &exchanges_from_slice(har).unwrap()[0];
        assert_eq!(ex.response.as_ref().unwrap().body_text(), "");
    }
}
