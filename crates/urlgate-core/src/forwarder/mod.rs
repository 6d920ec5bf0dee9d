//! Outbound request forwarding.
//!
//! The forwarder is the only component that performs network I/O. Every
//! outbound call goes through the URL policy first: the caller-supplied
//! candidate is sanitized and only the sanitized URL is ever handed to the
//! transport. The raw candidate never reaches libcurl.

mod transport;

use anyhow::{Context, Result};

use crate::config::ForwardConfig;
use crate::url_policy::UrlPolicy;

/// Response from a forwarded request: status code and (capped) body.
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl ForwardResponse {
    /// Body as text, lossily decoded.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Forwards caller-supplied requests to policy-approved destinations.
pub struct Forwarder {
    policy: UrlPolicy,
    cfg: ForwardConfig,
}

impl Forwarder {
    pub fn new(policy: UrlPolicy, cfg: ForwardConfig) -> Self {
        Self { policy, cfg }
    }

    /// The exact URL the transport would be given for `candidate`: the
    /// candidate itself when it passes validation, the safe default
    /// otherwise.
    pub fn target_for(&self, candidate: Option<&str>) -> String {
        self.policy.validate_and_clean(candidate)
    }

    /// Sanitize `candidate` and issue a GET, appending `query` pairs to the
    /// sanitized URL.
    pub fn get(&self, candidate: Option<&str>, query: &[(&str, &str)]) -> Result<ForwardResponse> {
        let target = self.target_for(candidate);
        let mut url = url::Url::parse(&target).context("sanitized URL failed to parse")?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        tracing::info!(url = %url, "forwarding GET");
        transport::perform(url.as_str(), None, &self.cfg)
    }

    /// Sanitize `candidate` and POST `body` as JSON to the sanitized URL.
    pub fn post_json(
        &self,
        candidate: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<ForwardResponse> {
        let target = self.target_for(candidate);
        let payload = serde_json::to_vec(body).context("serializing request body")?;
        tracing::info!(url = %target, "forwarding POST");
        transport::perform(&target, Some(&payload), &self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forwarder() -> Forwarder {
        Forwarder::new(UrlPolicy::default(), ForwardConfig::default())
    }

    #[test]
    fn target_is_candidate_when_safe() {
        let f = forwarder();
        assert_eq!(
            f.target_for(Some("https://api.analytics.com/v1/events")),
            "https://api.analytics.com/v1/events"
        );
    }

    #[test]
    fn target_is_default_when_unsafe() {
        let f = forwarder();
        assert_eq!(
            f.target_for(Some("https://169.254.169.254/latest/meta-data")),
            "https://api.analytics.com/health"
        );
        assert_eq!(f.target_for(None), "https://api.analytics.com/health");
    }

    #[test]
    fn raw_unsafe_input_never_becomes_the_target() {
        let f = forwarder();
        for bad in [
            "http://api.analytics.com/x",
            "https://evil.com/exfil",
            "https://192.168.0.10/router",
            "gopher://api.analytics.com",
            "not a url",
        ] {
            assert_ne!(f.target_for(Some(bad)), bad);
        }
    }

    #[test]
    fn response_body_text() {
        let resp = ForwardResponse {
            status: 200,
            body: b"ok".to_vec(),
        };
        assert_eq!(resp.body_text(), "ok");
    }
}
