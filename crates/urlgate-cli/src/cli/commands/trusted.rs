//! `urlgate trusted` – list the configured trusted domains.

use urlgate_core::url_policy::UrlPolicy;

pub fn run_trusted(policy: &UrlPolicy) {
    for domain in policy.trusted_domains() {
        println!("{domain}");
    }
}
