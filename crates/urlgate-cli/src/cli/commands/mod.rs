//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod collect;
mod fetch_metrics;
mod sanitize;
mod trusted;

pub use check::run_check;
pub use collect::run_collect;
pub use fetch_metrics::run_fetch_metrics;
pub use sanitize::run_sanitize;
pub use trusted::run_trusted;
