//! urlgate core: SSRF allowlist policy plus a thin request forwarder.
//!
//! The interesting part lives in [`url_policy`]: a pure, fail-closed
//! decision procedure over caller-supplied URLs. [`forwarder`] is the
//! boundary collaborator that consumes it; [`config`] and [`logging`]
//! wire the process.

pub mod config;
pub mod logging;

pub mod forwarder;
pub mod url_policy;
