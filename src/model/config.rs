//! Configuration options for deriving sojourn weights.
//!
//! This module defines how the names of derived wait/exit parameters are
//! formed from the name of the rate they come from.

/// Configuration options for sojourn-weight derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SojournConfig {
    /// Suffix appended to a rate name to name its wait probability. Default: "_wait"
    pub wait_suffix: String,

    /// Suffix appended to a rate name to name its exit probability. Default: "_exit"
    pub exit_suffix: String,
}

impl Default for SojournConfig {
    fn default() -> Self {
        Self {
            wait_suffix: "_wait".to_string(),
            exit_suffix: "_exit".to_string(),
        }
    }
}

impl SojournConfig {
    /// Create a configuration with the default suffixes
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `suffix` for wait parameters
    pub fn with_wait_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.wait_suffix = suffix.into();
        self
    }

    /// Use `suffix` for exit parameters
    pub fn with_exit_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exit_suffix = suffix.into();
        self
    }

    /// Name of the wait parameter derived from `rate`
    pub fn wait_param(&self, rate: &str) -> String {
        format!("{}{}", rate, self.wait_suffix)
    }

    /// Name of the exit parameter derived from `rate`
    pub fn exit_param(&self, rate: &str) -> String {
        format!("{}{}", rate, self.exit_suffix)
    }
}
