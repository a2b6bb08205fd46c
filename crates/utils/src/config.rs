use serde::de::DeserializeOwned;

/**
Loads `.env` from the working directory when there is one, then deserializes
every environment variable starting with `prefix` into `T`.
*/
pub fn load_prefixed<T: DeserializeOwned>(prefix: &str) -> Result<T, envy::Error> {
    if let Err(error) = dotenv::dotenv() {
        tracing::debug!(%error, "No .env file loaded");
    }
    let config = envy::prefixed(prefix).from_env::<T>()?;
    tracing::debug!(prefix, "Loaded configuration from the environment");
    Ok(config)
}

/**
Same as [`load_prefixed`] but reads from the given key/value pairs instead of
the process environment.
*/
pub fn from_pairs<T, I>(prefix: &str, pairs: I) -> Result<T, envy::Error>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(prefix).from_iter(pairs)
}

#[cfg(test)]
mod tests {
    use super::{from_pairs, load_prefixed};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        port: u16,
        name: Option<String>,
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefixed_pairs_are_read() {
        let sample: Sample =
            from_pairs("APP_", pairs(&[("APP_PORT", "8080"), ("APP_NAME", "median")])).unwrap();
        assert_eq!(
            sample,
            Sample {
                port: 8080,
                name: Some("median".to_string())
            }
        );
    }

    #[test]
    fn test_unprefixed_pairs_are_ignored() {
        let sample: Sample = from_pairs("APP_", pairs(&[("PORT", "8080")])).unwrap();
        assert_eq!(sample, Sample { port: 0, name: None });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result: Result<Sample, _> = from_pairs("APP_", pairs(&[("APP_PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_environment_uses_defaults() {
        let sample: Sample = load_prefixed("UTILS_CONFIG_TEST_UNSET_").unwrap();
        assert_eq!(sample, Sample { port: 0, name: None });
    }
}
