use serde::Deserialize;

use crate::error::MedianError;

pub const ENV_PREFIX: &str = "RUNNING_MEDIAN_";

/**
Settings for building a [`MedianTracker`](crate::MedianTracker), read from
`RUNNING_MEDIAN_*` environment variables.
*/
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// Slots reserved up front across both halves.
    #[serde(default)]
    pub initial_capacity: usize,
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, MedianError> {
        Ok(utils::config::load_prefixed(ENV_PREFIX)?)
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, MedianError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(utils::config::from_pairs(ENV_PREFIX, pairs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = TrackerConfig::from_pairs(Vec::new()).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_reads_initial_capacity() {
        let config = TrackerConfig::from_pairs(vec![(
            "RUNNING_MEDIAN_INITIAL_CAPACITY".to_string(),
            "128".to_string(),
        )])
        .unwrap();
        assert_eq!(config.initial_capacity, 128);
    }

    #[test]
    fn test_rejects_non_numeric_capacity() {
        let result = TrackerConfig::from_pairs(vec![(
            "RUNNING_MEDIAN_INITIAL_CAPACITY".to_string(),
            "lots".to_string(),
        )]);
        assert!(matches!(result, Err(MedianError::Config(_))));
    }
}
