//! `urlgate sanitize <url>` – print the sanitized form of a candidate URL.

use urlgate_core::url_policy::UrlPolicy;

pub fn run_sanitize(policy: &UrlPolicy, url: &str) {
    println!("{}", policy.validate_and_clean(Some(url)));
}
