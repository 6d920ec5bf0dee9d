//! Textual private/reserved address detection.
//!
//! Matches the lower-cased host component of a URL against prefix patterns
//! for loopback, RFC 1918 private, link-local, and "this network" ranges.
//! The check is purely textual: it only catches literal IP-address hosts.
//! A hostname whose DNS record points into a private range is NOT caught
//! here; the policy deliberately performs no resolution (see module docs
//! on `url_policy`).

/// Prefix patterns that identify a single leading octet (or two).
const RESERVED_PREFIXES: &[&str] = &[
    "127.",     // loopback
    "10.",      // private class A
    "192.168.", // private class C
    "169.254.", // link-local
    "0.",       // "this network"
];

/// Returns true if `host` textually matches a private/reserved prefix.
///
/// `host` must already be lower-cased; callers in this crate pass the
/// host component extracted from a parsed URL.
pub fn is_reserved_host(host: &str) -> bool {
    if RESERVED_PREFIXES.iter().any(|p| host.starts_with(p)) {
        return true;
    }
    is_private_class_b(host)
}

/// 172.16.0.0/12: second octet in 16..=31, with a literal dot after it.
fn is_private_class_b(host: &str) -> bool {
    let Some(rest) = host.strip_prefix("172.") else {
        return false;
    };
    let Some((octet, _)) = rest.split_once('.') else {
        return false;
    };
    matches!(octet.parse::<u8>(), Ok(16..=31))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_and_private_a() {
        assert!(is_reserved_host("127.0.0.1"));
        assert!(is_reserved_host("127.1.2.3"));
        assert!(is_reserved_host("10.0.0.5"));
    }

    #[test]
    fn private_class_b_range_bounds() {
        assert!(is_reserved_host("172.16.0.1"));
        assert!(is_reserved_host("172.31.255.255"));
        assert!(!is_reserved_host("172.15.0.1"));
        assert!(!is_reserved_host("172.32.0.1"));
    }

    #[test]
    fn class_b_needs_trailing_dot() {
        // "172.16" with no following dot is not a match.
        assert!(!is_reserved_host("172.16"));
        assert!(!is_reserved_host("172."));
    }

    #[test]
    fn private_c_link_local_this_network() {
        assert!(is_reserved_host("192.168.1.1"));
        assert!(is_reserved_host("169.254.169.254"));
        assert!(is_reserved_host("0.0.0.0"));
    }

    #[test]
    fn public_hosts_pass() {
        assert!(!is_reserved_host("8.8.8.8"));
        assert!(!is_reserved_host("api.analytics.com"));
        assert!(!is_reserved_host("192.167.0.1"));
        assert!(!is_reserved_host("1.27.0.0"));
    }

    #[test]
    fn prefix_only_matches_leading_text() {
        // Hostname merely containing a reserved-looking substring is fine.
        assert!(!is_reserved_host("my127.example.com"));
        assert!(!is_reserved_host("host-10.example.com"));
    }
}
