//! Fixed-template prompt for the naming request.

use serde::{Deserialize, Serialize};

/// Prompt wording knobs (`[prompt]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    /// Language the label should be written in.
    pub language: String,
    /// Word limit stated in the instruction.
    pub max_words: u32,
    /// Include (redacted) headers in the prompt.
    pub include_headers: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            language: "Chinese".to_string(),
            max_words: 5,
            include_headers: false,
        }
    }
}

/// Request side after redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedRequest {
    pub url: String,
    /// Empty unless headers are included.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Response side after redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedResponse {
    pub content_type: Option<String>,
    /// Empty unless headers are included.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Renders the prompt. The response block is present only when `response` is.
pub fn build_prompt(
    request: &SanitizedRequest,
    response: Option<&SanitizedResponse>,
    opts: &PromptOptions,
) -> String {
    let mut out = format!(
        "Generate a concise name for this HTTP request (max {} words, use {}).\n\
         Request:\n\
         URL: {}\n",
        opts.max_words, opts.language, request.url
    );
    push_headers(&mut out, &request.headers);
    out.push_str("BODY: ");
    out.push_str(&request.body);

    if let Some(resp) = response {
        out.push_str("\n\nResponse:\nContent-Type: ");
        out.push_str(resp.content_type.as_deref().unwrap_or_default());
        out.push('\n');
        push_headers(&mut out, &resp.headers);
        out.push_str("BODY: ");
        out.push_str(&resp.body);
    }
    out
}

fn push_headers(out: &mut String, headers: &[(String, String)]) {
    if headers.is_empty() {
        return;
    }
    out.push_str("HEADERS:\n");
    for (name, value) in headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SanitizedRequest {
        SanitizedRequest {
            url: "https://example.com/login".to_string(),
            headers: Vec::new(),
            body: "user=a&password=***redacted***".to_string(),
        }
    }

    #[test]
    fn request_only() {
        let p = build_prompt(&request(), None, &PromptOptions::default());
        assert_eq!(
            p,
            "Generate a concise name for this HTTP request (max 5 words, use Chinese).\n\
             Request:\n\
             URL: https://example.com/login\n\
             BODY: user=a&password=***redacted***"
        );
        assert!(!p.contains("Response:"));
    }

    #[test]
    fn with_response_block() {
        let resp = SanitizedResponse {
            content_type: Some("application/json".to_string()),
            headers: Vec::new(),
            body: r#"{"ok":true}"#.to_string(),
        };
        let p = build_prompt(&request(), Some(&resp), &PromptOptions::default());
        assert!(p.ends_with(
            "BODY: user=a&password=***redacted***\n\n\
             Response:\n\
             Content-Type: application/json\n\
             BODY: {\"ok\":true}"
        ));
    }

    #[test]
    fn missing_response_content_type_renders_empty() {
        let p = build_prompt(
            &request(),
            Some(&SanitizedResponse::default()),
            &PromptOptions::default(),
        );
        assert!(p.contains("Response:\nContent-Type: \nBODY: "));
    }

    #[test]
    fn options_change_instruction_and_headers() {
        let opts = PromptOptions {
            language: "English".to_string(),
            max_words: 3,
            include_headers: true,
        };
        let mut req = request();
        req.headers = vec![("Cookie".to_string(), "***redacted***".to_string())];
        let p = build_prompt(&req, None, &opts);
        assert!(p.starts_with(
            "Generate a concise name for this HTTP request (max 3 words, use English)."
        ));
        assert!(p.contains("URL: https://example.com/login\nHEADERS:\nCookie: ***redacted***\nBODY: "));
    }

    #[test]
    fn full_layout_with_headers_on_both_sides() {
        let mut req = request();
        req.headers = vec![
            ("Host".to_string(), "example.com".to_string()),
            ("Authorization".to_string(), "***redacted***".to_string()),
        ];
        let resp = SanitizedResponse {
            content_type: Some("text/plain".to_string()),
            headers: vec![("Set-Cookie".to_string(), "***redacted***".to_string())],
            body: "ok".to_string(),
        };
        let p = build_prompt(&req, Some(&resp), &PromptOptions::default());
        assert_eq!(
            p,
            "Generate a concise name for this HTTP request (max 5 words, use Chinese).\n\
             Request:\n\
             URL: https://example.com/login\n\
             HEADERS:\n\
             Host: example.com\n\
             Authorization: ***redacted***\n\
             BODY: user=a&password=***redacted***\n\n\
             Response:\n\
             Content-Type: text/plain\n\
             HEADERS:\n\
             Set-Cookie: ***redacted***\n\
             BODY: ok"
        );
    }
}
