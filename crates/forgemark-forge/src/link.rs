//! `Link` response header parsing.
//!
//! GitHub paginates with headers like:
//! `<https://api.github.com/user/1/starred?page=2>; rel="next", <...?page=5>; rel="last"`

/// Extract the target of the `rel="next"` entry, if any.
pub fn parse_next_link(link_header: &str) -> Option<&str> {
    link_header.split(',').find_map(|entry| {
        let mut target = None;
        let mut is_next = false;

        for segment in entry.split(';').map(str::trim) {
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                target = Some(inner.trim());
            } else if let Some(rel) = segment.strip_prefix("rel=") {
                is_next = rel
                    .trim_matches('"')
                    .split_ascii_whitespace()
                    .any(|r| r.eq_ignore_ascii_case("next"));
            }
        }

        target.filter(|_| is_next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_last() {
        let header = r#"<https://api.github.com/user/1/starred?page=2>; rel="next", <https://api.github.com/user/1/starred?page=5>; rel="last""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://api.github.com/user/1/starred?page=2")
        );
    }

    #[test]
    fn test_next_not_first() {
        let header = r#"<https://x/?page=1>; rel="prev", <https://x/?page=3>; rel="next""#;
        assert_eq!(parse_next_link(header), Some("https://x/?page=3"));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let header = r#"<https://x/?page=1>; rel="first", <https://x/?page=4>; rel="prev""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_unquoted_and_multi_valued_rel() {
        assert_eq!(parse_next_link("<https://x/2>; rel=next"), Some("https://x/2"));
        assert_eq!(
            parse_next_link(r#"<https://x/2>; rel="next last""#),
            Some("https://x/2")
        );
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_next_link(""), None);
        assert_eq!(parse_next_link("rel=\"next\""), None);
        assert_eq!(parse_next_link("https://x/2; rel=\"next\""), None);
    }
}
