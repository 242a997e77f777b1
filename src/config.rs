use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    /// Fixed seed for the cautionary-poem picker; entropy when unset.
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_dir = lookup("APP_DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let rng_seed = lookup("RECOVERY_RNG_SEED").and_then(|value| value.trim().parse().ok());

        Self {
            port,
            data_dir,
            rng_seed,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let config = config(&[
            ("PORT", "9100"),
            ("APP_DATA_DIR", "/tmp/recovery"),
            ("RECOVERY_RNG_SEED", "17"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/recovery"));
        assert_eq!(config.rng_seed, Some(17));
        assert_eq!(config.addr().port(), 9100);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = config(&[
            ("PORT", "not-a-port"),
            ("RECOVERY_RNG_SEED", "x"),
            ("APP_DATA_DIR", " "),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }
}
