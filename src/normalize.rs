use url::Url;

/// Canonicalizes a URL for equality comparison.
///
/// Query and fragment are discarded entirely, the default port for http/https
/// is dropped, a leading `www.` host label is removed, and trailing slashes
/// are stripped from the path. The parser already lower-cases scheme and host.
///
/// Total over its input: anything that does not parse as an absolute URL with
/// a host is returned unchanged.
pub fn normalize(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };

    let Some(host) = parsed.host_str() else {
        return url.to_string();
    };

    let host = match host.strip_prefix("www.") {
        Some(stripped) => stripped,
        None => host,
    };

    let path = parsed.path().trim_end_matches('/');

    // Url::port() is already None when the port matches the scheme default
    // (80 for http, 443 for https), so only explicit non-default ports remain.
    match parsed.port() {
        Some(port) => format!("{}://{}:{}{}", parsed.scheme(), host, port, path),
        None => format!("{}://{}{}", parsed.scheme(), host, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discards_query_and_fragment() {
        assert_eq!(
            normalize("https://example.com/page?utm=1#section"),
            "https://example.com/page"
        );
        assert_eq!(
            normalize("https://example.com/page?a=1"),
            normalize("https://example.com/page?b=2")
        );
    }

    #[test]
    fn test_strips_default_ports() {
        assert_eq!(normalize("http://example.com:80/path"), "http://example.com/path");
        assert_eq!(
            normalize("https://example.com:443/path"),
            "https://example.com/path"
        );

        // Non-default ports are kept
        assert_eq!(
            normalize("http://example.com:8080/path"),
            "http://example.com:8080/path"
        );
    }

    #[test]
    fn test_strips_www_and_trailing_slash() {
        assert_eq!(normalize("https://www.example.com/path/"), "https://example.com/path");
        assert_eq!(normalize("https://example.com/"), "https://example.com");
    }

    #[test]
    fn test_equivalence() {
        // Same scheme, differing only in www/port/slash
        assert_eq!(
            normalize("http://www.example.com:80/path/"),
            normalize("http://example.com/path")
        );

        // Scheme differs, so these are not equivalent
        assert_ne!(
            normalize("http://WWW.Example.com:80/path/"),
            normalize("https://example.com/path")
        );
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "https://www.example.com:443/path/",
            "http://example.com",
            "http://example.com:8080/a/b//",
            "not a url at all",
            "mailto:someone@example.com",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("not a url"), "not a url");
        assert_eq!(normalize("/relative/path"), "/relative/path");
    }
}
