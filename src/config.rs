//! Configuration for law checking
//!
//! [`CheckConfig`] controls how many random cases each law is checked
//! against and how large the generated heaps may grow. Values come from, in
//! increasing precedence: the defaults, `HEAP_LAWS_*` environment variables,
//! and whatever the caller sets afterwards (the CLI applies its flags last).

use proptest::test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the number of cases per law
pub const ENV_CASES: &str = "HEAP_LAWS_CASES";
/// Environment variable holding the maximum number of generated insertions
pub const ENV_MAX_SIZE: &str = "HEAP_LAWS_MAX_SIZE";
/// Environment variable holding the maximum recursion depth of the generator
pub const ENV_MAX_DEPTH: &str = "HEAP_LAWS_MAX_DEPTH";
/// Environment variable holding the RNG seed
pub const ENV_SEED: &str = "HEAP_LAWS_SEED";

/// Error raised when a configuration value cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but does not parse as the expected number
    #[error("{key}={value:?} is not a valid {expected}")]
    Malformed {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    /// A bound that must be positive was zero
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Settings for one run of the law checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Random cases generated per law
    pub cases: u32,
    /// Upper bound on the number of operations used to build one heap
    pub max_heap_size: u32,
    /// Upper bound on the generator's recursion depth
    pub max_depth: u32,
    /// Fixed RNG seed; `None` draws a fresh seed per run
    pub seed: Option<u64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            cases: 256,
            max_heap_size: 64,
            max_depth: 32,
            seed: None,
        }
    }
}

fn parse_var<V: FromStr>(
    key: &'static str,
    value: Option<String>,
    expected: &'static str,
) -> Result<Option<V>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Malformed {
                key,
                value: raw,
                expected,
            }),
    }
}

impl CheckConfig {
    /// Defaults overridden by any `HEAP_LAWS_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CheckConfig::default();
        if let Some(cases) = parse_var(ENV_CASES, lookup(ENV_CASES), "case count")? {
            config.cases = cases;
        }
        if let Some(size) = parse_var(ENV_MAX_SIZE, lookup(ENV_MAX_SIZE), "heap size")? {
            config.max_heap_size = size;
        }
        if let Some(depth) = parse_var(ENV_MAX_DEPTH, lookup(ENV_MAX_DEPTH), "depth")? {
            config.max_depth = depth;
        }
        config.seed = parse_var(ENV_SEED, lookup(ENV_SEED), "u64 seed")?.or(config.seed);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every check vacuous
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cases == 0 {
            return Err(ConfigError::Zero { key: ENV_CASES });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Zero { key: ENV_MAX_DEPTH });
        }
        Ok(())
    }

    /// The proptest configuration matching these settings
    ///
    /// Failure persistence is disabled: the runner is used outside of
    /// `#[test]` functions, where there is no source file to persist next to.
    pub fn proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            failure_persistence: None,
            ..ProptestConfig::default()
        }
    }

    /// A test runner that is deterministic when a seed is configured
    pub fn test_runner(&self) -> TestRunner {
        let config = self.proptest_config();
        match self.seed {
            Some(seed) => {
                let mut bytes = [0u8; 32];
                for chunk in bytes.chunks_mut(8) {
                    chunk.copy_from_slice(&seed.to_le_bytes());
                }
                TestRunner::new_with_rng(config, TestRng::from_seed(RngAlgorithm::ChaCha, &bytes))
            }
            None => TestRunner::new(config),
        }
    }
}
