//! SA configuration and cooling schedules.

/// Cooling schedule: maps the 1-based iteration index to a positive
/// temperature.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Fixed temperature at every iteration. Simulated Annealing
    /// under this schedule is the Metropolis algorithm.
    Constant {
        /// The temperature, must be positive.
        temperature: f64,
    },

    /// Geometric (exponential) cooling: `T_i = initial * alpha^(i-1)`.
    ///
    /// Most widely used. Typical `alpha`: 0.95 to 0.99.
    Geometric {
        /// Temperature at the first iteration.
        initial: f64,
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Triangular-exponent decay: `T_i = scale * alpha^(i*(i-1)/2)`.
    ///
    /// Cools faster than geometric as the exponent grows
    /// quadratically; with `alpha` very close to 1 this gives a long
    /// hot phase followed by a sharp freeze.
    TriangularDecay {
        /// Temperature scale factor.
        scale: f64,
        /// Decay base in (0, 1).
        alpha: f64,
    },
}

impl CoolingSchedule {
    /// Temperature at the given 1-based iteration index.
    pub fn temperature(&self, iteration: usize) -> f64 {
        match *self {
            CoolingSchedule::Constant { temperature } => temperature,
            CoolingSchedule::Geometric { initial, alpha } => {
                initial * alpha.powi(iteration as i32 - 1)
            }
            CoolingSchedule::TriangularDecay { scale, alpha } => {
                let i = iteration as f64;
                scale * alpha.powf(i * (i - 1.0) / 2.0)
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        match *self {
            CoolingSchedule::Constant { temperature } => {
                if temperature <= 0.0 {
                    return Err(format!("temperature must be positive, got {temperature}"));
                }
            }
            CoolingSchedule::Geometric { initial, alpha } => {
                if initial <= 0.0 {
                    return Err(format!("initial temperature must be positive, got {initial}"));
                }
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::TriangularDecay { scale, alpha } => {
                if scale <= 0.0 {
                    return Err(format!("scale must be positive, got {scale}"));
                }
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("decay alpha must be in (0, 1), got {alpha}"));
                }
            }
        }
        Ok(())
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric {
            initial: 1.0,
            alpha: 0.95,
        }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_maxcut::annealing::{AnnealingConfig, CoolingSchedule};
///
/// let config = AnnealingConfig::default()
///     .with_max_iterations(300)
///     .with_cooling(CoolingSchedule::Geometric { initial: 2.0, alpha: 0.98 })
///     .with_constant(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Maximum number of iterations. Zero performs no iteration and
    /// returns the initial state unchanged.
    pub max_iterations: usize,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Scaling constant applied to the temperature in the acceptance
    /// probability. Must be positive.
    pub constant: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            cooling: CoolingSchedule::default(),
            constant: 1.0,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
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
        if self.constant <= 0.0 {
            return Err(format!("constant must be positive, got {}", self.constant));
        }
        self.cooling.validate()
    }
}
