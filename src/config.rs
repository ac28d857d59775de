//! Generation configuration for enumgen

/// Options controlling how declarations are drafted.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Abort a type on the first member that fails to resolve (otherwise skip the member with a warning)
    pub failfast: bool,
    /// Positional index of the first declared member
    pub start_index: i64,
    /// Member identifier that is skipped (still consumes an index)
    pub skip_marker: String,
    /// Leading comment word that marks a member invalid
    pub invalid_marker: String,
    /// Debug-level logging by default
    pub verbose: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            failfast: true,
            start_index: 0,
            skip_marker: "_".to_string(),
            invalid_marker: "invalid".to_string(),
            verbose: false,
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failfast policy
    pub fn with_failfast(mut self, failfast: bool) -> Self {
        self.failfast = failfast;
        self
    }

    /// Set the index of the first member
    pub fn with_start_index(mut self, start_index: i64) -> Self {
        self.start_index = start_index;
        self
    }

    /// Set the placeholder identifier that is skipped
    pub fn with_skip_marker(mut self, marker: impl Into<String>) -> Self {
        self.skip_marker = marker.into();
        self
    }

    /// Set the comment word that marks a member invalid
    pub fn with_invalid_marker(mut self, marker: impl Into<String>) -> Self {
        self.invalid_marker = marker.into();
        self
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
