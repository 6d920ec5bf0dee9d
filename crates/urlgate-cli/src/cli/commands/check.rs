//! `urlgate check <url>` – evaluate a candidate URL against the policy.

use urlgate_core::url_policy::UrlPolicy;

/// Print the verdict and the URL the gateway would actually contact.
/// Deliberately does not print *why* a URL was rejected; reasons go to the
/// debug log only.
pub fn run_check(policy: &UrlPolicy, url: &str) {
    let verdict = if policy.is_safe(Some(url)) {
        "safe"
    } else {
        "unsafe"
    };
    println!("{verdict}: {url}");
    println!("would forward to: {}", policy.validate_and_clean(Some(url)));
}
