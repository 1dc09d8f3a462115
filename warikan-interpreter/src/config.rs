use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::env;
use thiserror::Error;
use warikan_domain::{RemainderPolicy, SplitCalculator};

pub const REMAINDER_POLICY_VAR: &str = "WARIKAN_REMAINDER_POLICY";
pub const SEED_VAR: &str = "WARIKAN_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{REMAINDER_POLICY_VAR} must be `independent` or `shuffled` (got `{0}`)")]
    InvalidRemainderPolicy(String),
    #[error("{SEED_VAR} must be an unsigned integer (got `{0}`)")]
    InvalidSeed(String),
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub remainder_policy: RemainderPolicy,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let remainder_policy = match lookup(REMAINDER_POLICY_VAR) {
            None => RemainderPolicy::default(),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "independent" => RemainderPolicy::IndependentDraws,
                "shuffled" => RemainderPolicy::Shuffled,
                _ => return Err(ConfigError::InvalidRemainderPolicy(value)),
            },
        };

        let seed = match lookup(SEED_VAR) {
            None => None,
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value.clone()))?,
            ),
        };

        Ok(Self {
            remainder_policy,
            seed,
        })
    }

    pub fn calculator(&self) -> SplitCalculator {
        SplitCalculator::new(self.remainder_policy)
    }

    /// Seeded generator when a seed is configured, thread-local otherwise.
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }
}
