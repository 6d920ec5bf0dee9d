//! Validation verdict and rejection taxonomy.

use thiserror::Error;

/// Why a candidate URL was rejected.
///
/// Reasons are logged at debug level for operators but never surfaced to
/// callers of `sanitize`/`validate_and_clean`; the caller only observes the
/// default substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Candidate was absent or the empty string.
    #[error("empty or missing URL")]
    Empty,
    /// Candidate did not parse as a URL.
    #[error("malformed URL")]
    Malformed,
    /// Scheme was not https (plaintext http included).
    #[error("scheme is not https")]
    SchemeNotHttps,
    /// URL parsed but has no host component.
    #[error("URL has no host")]
    MissingHost,
    /// Host textually matches a private/reserved address prefix.
    #[error("host is in a private/reserved address range")]
    ReservedHost,
    /// Host is not an exact member of the trusted domain set.
    #[error("host is not in the trusted domain set")]
    UntrustedHost,
}

/// Outcome of evaluating a candidate URL against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Unsafe(RejectReason),
}

impl Verdict {
    pub fn is_safe(self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_is_safe() {
        assert!(Verdict::Safe.is_safe());
        assert!(!Verdict::Unsafe(RejectReason::Empty).is_safe());
    }

    #[test]
    fn reasons_display() {
        assert_eq!(RejectReason::Empty.to_string(), "empty or missing URL");
        assert_eq!(
            RejectReason::SchemeNotHttps.to_string(),
            "scheme is not https"
        );
    }
}
