//! Route parsing for apix.
//!
//! Two screens, two paths:
//!
//! - `/` - home (provider list)
//! - `/api-details/<provider>` - details for one provider
//!
//! ## Robust Parsing
//!
//! The parser handles various input formats robustly:
//! - Case-insensitive scheme: `APIX://`, `apix://`, `Apix://`
//! - Single-slash variants: `apix:/api-details/...`
//! - Multiple slashes: `apix:////api-details/...`
//! - Web-style hash prefix: `#/api-details/...`
//! - Query and fragment stripping: `/api-details/x?utm=1#frag`
//!
//! The provider segment itself is never normalized: it is kept verbatim,
//! exactly as it will be inserted into the catalog URL path.

/// Strip query and fragment from a path
#[inline]
fn strip_query_frag(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'?' || b == b'#' {
            return &s[..i];
        }
    }
    s
}

/// Extract the path after an apix: scheme (case-insensitive, handles variants)
#[inline]
fn after_apix_scheme(raw: &str) -> Option<&str> {
    // Accept apix://, APIX://, apix:/, apix:////...
    let s = raw.trim();
    if let Some(pos) = s.find("://") {
        if s[..pos].eq_ignore_ascii_case("apix") {
            let mut rest = &s[pos + 3..];
            while rest.starts_with('/') {
                rest = &rest[1..];
            }
            return Some(rest);
        }
    } else if let Some(rest) = s.strip_prefix("apix:") {
        let mut r = rest;
        while r.starts_with('/') {
            r = &r[1..];
        }
        return Some(r);
    }
    None
}

/// Application screens
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Provider list: `/`
    Home,
    /// Provider details: `/api-details/<provider>` (provider non-empty,
    /// kept verbatim)
    ApiDetails { provider: String },
}

impl Route {
    /// Canonical path for display and logging
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ApiDetails { provider } => format!("/api-details/{provider}"),
        }
    }
}

/// Parse a route from a path or an apix:// deep link.
///
/// Accepts:
/// - `/` or the empty string
/// - `/api-details/<provider>`
/// - `apix://api-details/<provider>` and scheme variants
/// - `#/api-details/<provider>` (hash format)
///
/// Returns `None` for unknown paths, an empty provider segment, or paths
/// with trailing segments after the provider.
pub fn parse(raw: &str) -> Option<Route> {
    if raw.is_empty() {
        return Some(Route::Home);
    }

    let s = raw.trim();

    // Extract path component from various formats
    let path = if let Some(rest) = after_apix_scheme(s) {
        rest
    } else if let Some(rest) = s.strip_prefix("#/") {
        rest
    } else if let Some(rest) = s.strip_prefix('/') {
        rest
    } else {
        s
    };

    let path = strip_query_frag(path);

    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let page = segments.next().unwrap_or("");
    match page.to_ascii_lowercase().as_str() {
        "" | "home" => Some(Route::Home),
        "api-details" => {
            let provider = segments.next()?.to_string();
            // A trailing segment means this is not our route shape
            if segments.next().is_some() {
                return None;
            }
            Some(Route::ApiDetails { provider })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(parse("/").unwrap(), Route::Home);
        assert_eq!(parse("").unwrap(), Route::Home);
        assert_eq!(parse("apix://home").unwrap(), Route::Home);
        assert_eq!(parse("apix://").unwrap(), Route::Home);
        assert_eq!(parse("#/home").unwrap(), Route::Home);
    }

    #[test]
    fn test_parse_api_details() {
        let route = parse("/api-details/adyen.com").unwrap();
        assert_eq!(
            route,
            Route::ApiDetails {
                provider: "adyen.com".to_string()
            }
        );

        let route = parse("#/api-details/1forge.com").unwrap();
        assert_eq!(
            route,
            Route::ApiDetails {
                provider: "1forge.com".to_string()
            }
        );

        let route = parse("apix://api-details/github.com").unwrap();
        assert_eq!(
            route,
            Route::ApiDetails {
                provider: "github.com".to_string()
            }
        );
    }

    #[test]
    fn test_provider_kept_verbatim() {
        // Mixed case and dots survive untouched
        let route = parse("/api-details/Azure.COM").unwrap();
        assert_eq!(
            route,
            Route::ApiDetails {
                provider: "Azure.COM".to_string()
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("/api-details/").is_none()); // Missing provider
        assert!(parse("/api-details").is_none()); // Missing provider
        assert!(parse("/unknown/x").is_none()); // Unknown route
        assert!(parse("/api-details/a/b").is_none()); // Trailing segment
        assert!(parse("other://api-details/x").is_none()); // Foreign scheme
    }

    #[test]
    fn test_parse_case_insensitive_scheme() {
        let r1 = parse("APIX://api-details/adyen.com").unwrap();
        match r1 {
            Route::ApiDetails { provider } => assert_eq!(provider, "adyen.com"),
            _ => panic!("Expected ApiDetails route"),
        }

        let r2 = parse("Apix://home").unwrap();
        assert_eq!(r2, Route::Home);
    }

    #[test]
    fn test_parse_query_and_fragment() {
        let r1 = parse("/api-details/adyen.com?utm=1").unwrap();
        match r1 {
            Route::ApiDetails { provider } => assert_eq!(provider, "adyen.com"),
            _ => panic!("Expected ApiDetails route"),
        }

        let r2 = parse("apix://api-details/adyen.com#frag").unwrap();
        match r2 {
            Route::ApiDetails { provider } => assert_eq!(provider, "adyen.com"),
            _ => panic!("Expected ApiDetails route"),
        }
    }

    #[test]
    fn test_parse_single_slash_variant() {
        let r = parse("apix:/api-details/adyen.com").unwrap();
        match r {
            Route::ApiDetails { provider } => assert_eq!(provider, "adyen.com"),
            _ => panic!("Expected ApiDetails route"),
        }
    }

    #[test]
    fn test_parse_multiple_slashes() {
        let r = parse("apix:////api-details/adyen.com").unwrap();
        match r {
            Route::ApiDetails { provider } => assert_eq!(provider, "adyen.com"),
            _ => panic!("Expected ApiDetails route"),
        }
    }

    #[test]
    fn test_path_round_trip() {
        for raw in ["/", "/api-details/adyen.com"] {
            let route = parse(raw).unwrap();
            assert_eq!(route.path(), raw);
            assert_eq!(parse(&route.path()).unwrap(), route);
        }
    }
}
