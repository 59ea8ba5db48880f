//! URL validity check for the autofill path.

use url::Url;

/// True iff `s` parses as an absolute URL. Relative references ("abc",
/// "/path") and the empty string are invalid, matching what a browser's
/// `new URL(string)` accepts without a base.
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls() {
        assert!(is_valid_url("https://example.com/file"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("ftp://host/path"));
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("abc"));
        assert!(!is_valid_url("/path/only"));
        assert!(!is_valid_url("not a url"));
    }
}
