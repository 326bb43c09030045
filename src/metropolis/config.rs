//! Metropolis configuration.

/// Configuration parameters for the Metropolis algorithm.
///
/// # Examples
///
/// ```
/// use u_maxcut::metropolis::MetropolisConfig;
///
/// let config = MetropolisConfig::default()
///     .with_max_iterations(300)
///     .with_temperature(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetropolisConfig {
    /// Maximum number of iterations. Zero performs no iteration and
    /// returns the initial state unchanged.
    pub max_iterations: usize,

    /// The fixed temperature. Must be positive.
    pub temperature: f64,

    /// Scaling constant applied to the temperature in the acceptance
    /// probability. Must be positive.
    pub constant: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for MetropolisConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            temperature: 1.0,
            constant: 1.0,
            seed: None,
        }
    }
}

impl MetropolisConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.temperature <= 0.0 {
            return Err(format!(
                "temperature must be positive, got {}",
                self.temperature
            ));
        }
        if self.constant <= 0.0 {
            return Err(format!("constant must be positive, got {}", self.constant));
        }
        Ok(())
    }
}
