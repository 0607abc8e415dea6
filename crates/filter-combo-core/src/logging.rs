//! Logging facilities for filter-combo.
//!
//! filter-combo uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("filter_combo::filter=trace")
//!         .init();
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a single
//! subsystem (for example only the filter passes) can be enabled with an
//! `EnvFilter` directive.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "filter_combo_core";
    /// Signal/slot dispatch.
    pub const SIGNAL: &str = "filter_combo_core::signal";
    /// Re-entrancy flag transitions.
    pub const REENTRANCY: &str = "filter_combo_core::reentrancy";
    /// Widget crate target.
    pub const WIDGET: &str = "filter_combo";
    /// Snapshot capture and filter passes.
    pub const FILTER: &str = "filter_combo::filter";
    /// Selection changes and reconciliation.
    pub const SELECTION: &str = "filter_combo::selection";
    /// Edit field text handling and display-text synchronization.
    pub const TEXT: &str = "filter_combo::text";
    /// Dropdown open/close lifecycle.
    pub const DROPDOWN: &str = "filter_combo::dropdown";
    /// Keyboard and pointer input.
    pub const INPUT: &str = "filter_combo::input";
    /// Configuration loading.
    pub const CONFIG: &str = "filter_combo::config";
}

/// Install a `tracing-subscriber` writer for tests.
///
/// Honors `RUST_LOG`; safe to call from every test since repeated
/// initialization is ignored.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace"));
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReentrancyFlag;

    #[test]
    fn test_targets_are_nested_under_crate_targets() {
        for target in [targets::SIGNAL, targets::REENTRANCY] {
            assert!(target.starts_with(targets::CORE));
        }
        for target in [
            targets::FILTER,
            targets::SELECTION,
            targets::TEXT,
            targets::DROPDOWN,
            targets::INPUT,
            targets::CONFIG,
        ] {
            assert!(target.starts_with(targets::WIDGET));
        }
    }

    #[test]
    fn test_tracing_with_subscriber_installed() {
        init_test_tracing();
        let flag = ReentrancyFlag::new("logged");
        let _scope = flag.scope();
        assert!(flag.is_set());
    }
}
