//! Experiment configuration.

/// Configuration for one experiment: an instance family plus the
/// number of instances to draw from it.
///
/// # Examples
///
/// ```
/// use u_maxcut::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_name("maximum-cut n=8")
///     .with_num_instances(50)
///     .with_node_count(8)
///     .with_edge_probability(0.1)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Display name used in the report header.
    pub name: String,

    /// Number of random instances to generate.
    pub num_instances: usize,

    /// Nodes per instance.
    pub node_count: usize,

    /// Probability of each possible edge in the G(n, p) model.
    pub edge_probability: f64,

    /// Random seed for instance generation and for the stochastic
    /// algorithms.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "maximum-cut".into(),
            num_instances: 100,
            node_count: 10,
            edge_probability: 0.1,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_num_instances(mut self, n: usize) -> Self {
        self.num_instances = n;
        self
    }

    pub fn with_node_count(mut self, n: usize) -> Self {
        self.node_count = n;
        self
    }

    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_instances == 0 {
            return Err("num_instances must be at least 1".into());
        }
        if self.node_count == 0 {
            return Err("node_count must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(format!(
                "edge_probability must lie in [0, 1], got {}",
                self.edge_probability
            ));
        }
        Ok(())
    }
}
