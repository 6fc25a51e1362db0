use serde::{Deserialize, Serialize};

/// What happens to the suffix when a call lands on a new millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixPolicy {
    /// Keep the previous suffix. Only the first suffix is random; later ones
    /// are that value, incremented on each same-millisecond collision.
    #[default]
    Continue,
    /// Draw a fresh random suffix whenever the timestamp changes.
    Reseed,
}

/// Settings for building a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub suffix_policy: SuffixPolicy,
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_suffix_policy(mut self, suffix_policy: SuffixPolicy) -> Self {
        self.suffix_policy = suffix_policy;
        self
    }
}
