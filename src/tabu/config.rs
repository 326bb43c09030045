//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_maxcut::tabu::TabuConfig;
///
/// let config = TabuConfig::default().with_max_iterations(1000);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations. Zero performs no iteration and
    /// returns the initial state unchanged.
    pub max_iterations: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
