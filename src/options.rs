//! Environment configuration options.

/// Configuration options for the environment.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjenv::EnvOptions;
///
/// let options = EnvOptions::default().with_verbose(false);
/// assert!(!options.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Whether to emit round progress through the `log` facade.
    ///
    /// Affects log emission only; state transitions and rewards are
    /// identical either way.
    pub verbose: bool,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self { verbose: true }
    }
}

impl EnvOptions {
    /// Sets whether round progress is logged.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_verbose(false);
    /// assert!(!options.verbose);
    /// ```
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
