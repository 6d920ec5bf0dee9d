//! URL safety policy: the SSRF allowlist decision procedure.
//!
//! Given an untrusted candidate URL, the policy decides whether the gateway
//! is permitted to dereference it. The decision is pure and synchronous:
//! parse, require https, require a host, reject private/reserved address
//! prefixes, then require exact membership in the trusted domain set.
//!
//! Every failure mode (absent input, parse error, wrong scheme, missing or
//! untrusted host) collapses to the unsafe verdict; `sanitize` then
//! substitutes a fixed safe default URL instead of the caller's input.
//! Nothing about *why* validation failed is surfaced to the caller.
//!
//! The private/reserved check is textual (see `reserved`): a hostname that
//! merely *resolves* to a private address is not caught, because the policy
//! performs no DNS lookups. That gap is inherited from the policy this
//! implements, not an oversight here.

mod reserved;
mod verdict;

pub use reserved::is_reserved_host;
pub use verdict::{RejectReason, Verdict};

use std::collections::BTreeSet;

use crate::config::UrlgateConfig;

/// Built-in trusted domains, used when no config file overrides them.
const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "api.analytics.com",
    "analytics-service.internal",
    "collector.analytics.net",
    "data.analytics.io",
    "metrics.company.com",
    "reporting.internal",
    "dashboard.analytics.org",
];

/// Substituted for any candidate that fails validation.
const DEFAULT_SAFE_URL: &str = "https://api.analytics.com/health";

/// Last-resort fallback if sanitization ever produced an empty string.
const DEFAULT_FALLBACK_URL: &str = "https://api.analytics.com/default";

/// Immutable allowlist policy. Built once at startup and shared by
/// reference; evaluation takes `&self` and never mutates.
#[derive(Debug, Clone)]
pub struct UrlPolicy {
    /// Exact hostnames the gateway may contact, lower-cased.
    trusted_domains: BTreeSet<String>,
    safe_default_url: String,
    fallback_default_url: String,
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self {
            trusted_domains: DEFAULT_TRUSTED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            safe_default_url: DEFAULT_SAFE_URL.to_string(),
            fallback_default_url: DEFAULT_FALLBACK_URL.to_string(),
        }
    }
}

impl UrlPolicy {
    /// Build a policy from loaded configuration. Domains are lower-cased
    /// here so every later comparison is a plain set lookup.
    pub fn from_config(cfg: &UrlgateConfig) -> Self {
        Self {
            trusted_domains: cfg
                .trusted_domains
                .iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            safe_default_url: cfg.safe_default_url.clone(),
            fallback_default_url: cfg.fallback_default_url.clone(),
        }
    }

    /// Lower-cased trusted hostnames, in sorted order.
    pub fn trusted_domains(&self) -> impl Iterator<Item = &str> {
        self.trusted_domains.iter().map(|d| d.as_str())
    }

    pub fn safe_default_url(&self) -> &str {
        &self.safe_default_url
    }

    /// Evaluate a candidate URL. Pure; never panics, never errors.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// presence, parse, https scheme, host presence, reserved-prefix
    /// rejection, then exact allowlist membership.
    pub fn verdict(&self, candidate: Option<&str>) -> Verdict {
        let raw = match candidate {
            Some(s) if !s.is_empty() => s,
            _ => return Verdict::Unsafe(RejectReason::Empty),
        };

        let parsed = match url::Url::parse(raw) {
            Ok(u) => u,
            Err(_) => return Verdict::Unsafe(RejectReason::Malformed),
        };

        // `Url::parse` normalizes the scheme to lower case, so this is a
        // case-insensitive comparison.
        if parsed.scheme() != "https" {
            return Verdict::Unsafe(RejectReason::SchemeNotHttps);
        }

        let host = match parsed.host_str() {
            Some(h) if !h.is_empty() => h.to_ascii_lowercase(),
            _ => return Verdict::Unsafe(RejectReason::MissingHost),
        };

        if is_reserved_host(&host) {
            return Verdict::Unsafe(RejectReason::ReservedHost);
        }

        if self.trusted_domains.contains(&host) {
            Verdict::Safe
        } else {
            Verdict::Unsafe(RejectReason::UntrustedHost)
        }
    }

    /// Boolean form of [`verdict`](Self::verdict).
    pub fn is_safe(&self, candidate: Option<&str>) -> bool {
        self.verdict(candidate).is_safe()
    }

    /// Returns `candidate` verbatim when safe, otherwise the safe default
    /// URL. Fail-closed substitution: the unsafe input is never returned,
    /// and the result is always a well-formed https URL.
    pub fn sanitize<'a>(&'a self, candidate: Option<&'a str>) -> &'a str {
        match self.verdict(candidate) {
            Verdict::Safe => candidate.unwrap_or(&self.safe_default_url),
            Verdict::Unsafe(reason) => {
                tracing::debug!(%reason, "candidate URL rejected, substituting safe default");
                &self.safe_default_url
            }
        }
    }

    /// [`sanitize`](Self::sanitize) with a last-resort fallback: if the
    /// sanitized value were ever empty, the fallback default is returned
    /// instead. Over the defined input space this behaves identically to
    /// `sanitize`.
    pub fn validate_and_clean(&self, candidate: Option<&str>) -> String {
        let cleaned = self.sanitize(candidate);
        if cleaned.is_empty() {
            self.fallback_default_url.clone()
        } else {
            cleaned.to_string()
        }
    }
}
