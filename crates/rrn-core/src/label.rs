//! Cleanup of the label text returned by the model.

/// Trims `raw` and strips ASCII digits, double quotes and periods, which
/// removes list numbering (`1. `) and quoting the model tends to add.
pub fn clean_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '"' && *c != '.')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numbering() {
        assert_eq!(clean_label("1. 用户登录"), "用户登录");
    }

    #[test]
    fn strips_quotes_and_periods() {
        assert_eq!(clean_label("  \"Get user profile.\"\n"), "Get user profile");
    }

    #[test]
    fn digits_inside_words_are_removed_too() {
        assert_eq!(clean_label("OAuth2 token refresh"), "OAuth token refresh");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(clean_label("  \"1.\" "), "");
    }
}
