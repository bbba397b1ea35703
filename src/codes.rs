use md5::{Digest, Md5};

/// Number of hex characters in a short code unless CODE_LENGTH overrides it.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Derive the short code for a URL.
///
/// The code is the first `len` characters of the lowercase hex MD5 digest of
/// the URL's bytes, so the same URL always maps to the same code and
/// re-submissions land on the existing record. At the default length the code
/// carries 32 bits of the 128-bit digest; colliding URLs overwrite each
/// other's record rather than being resolved.
pub fn shorten_code(url: &str, len: usize) -> String {
    let mut hex = format!("{:x}", Md5::digest(url.as_bytes()));
    hex.truncate(len);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_deterministic() {
        let a = shorten_code("https://example.com/some/long/path?q=1", DEFAULT_CODE_LENGTH);
        let b = shorten_code("https://example.com/some/long/path?q=1", DEFAULT_CODE_LENGTH);
        assert_eq!(a, b);
    }

    #[test]
    fn code_is_truncated_md5_hex() {
        // First 8 hex chars of md5("https://example.com")
        assert_eq!(shorten_code("https://example.com", 8), "c984d06a");
        // Full 128-bit digest when len covers all 32 hex chars
        assert_eq!(
            shorten_code("https://example.com", 32),
            "c984d06aafbecf6bc55569f964148ea3"
        );
    }

    #[test]
    fn code_has_requested_length_and_is_lowercase_hex() {
        for len in [1, 4, 8, 16, 32] {
            let code = shorten_code("https://example.com", len);
            assert_eq!(code.len(), len);
            assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn distinct_urls_get_distinct_codes() {
        let a = shorten_code("https://example.com/a", DEFAULT_CODE_LENGTH);
        let b = shorten_code("https://example.com/b", DEFAULT_CODE_LENGTH);
        assert_ne!(a, b);
    }
}
