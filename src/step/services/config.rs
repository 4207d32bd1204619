//! Dispatcher configuration.

/// Configuration for scenario dispatch.
///
/// # Examples
///
/// ```
/// use stepwise::step::services::DispatchConfig;
///
/// let config = DispatchConfig::default();
/// assert!(!config.continue_after_failed_step);
/// assert!(!config.dry_run);
///
/// assert!(DispatchConfig::dry_run().dry_run);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Keep running steps after one fails or is undefined.
    pub continue_after_failed_step: bool,
    /// Resolve steps without invoking their handlers.
    pub dry_run: bool,
}

impl DispatchConfig {
    /// Creates a configuration that resolves every step but runs none.
    ///
    /// Useful for checking that a feature source has no undefined steps.
    #[must_use]
    pub const fn dry_run() -> Self {
        Self {
            continue_after_failed_step: false,
            dry_run: true,
        }
    }

    /// Creates a configuration that runs every step regardless of earlier
    /// failures.
    #[must_use]
    pub const fn continue_after_failure() -> Self {
        Self {
            continue_after_failed_step: true,
            dry_run: false,
        }
    }

    /// Returns whether a halting step stops the rest of the scenario.
    #[must_use]
    pub const fn halts_on_failure(&self) -> bool {
        !self.continue_after_failed_step && !self.dry_run
    }
}
