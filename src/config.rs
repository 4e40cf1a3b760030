use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/history.json";
pub const DEFAULT_SUPPORT_URL: &str = "http://localhost:3000/support";
pub const DEFAULT_USERNAME: &str = "guest";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub support_url: String,
    pub username: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            support_url: DEFAULT_SUPPORT_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            data_path: non_empty("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            support_url: non_empty("SUPPORT_URL").unwrap_or(defaults.support_url),
            username: non_empty("SUPPORT_USERNAME").unwrap_or(defaults.username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/history.json"));
        assert_eq!(config.support_url, "http://localhost:3000/support");
        assert_eq!(config.username, "guest");
    }

    #[test]
    fn overrides_and_bad_port_fallback() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "not-a-port"),
            ("APP_DATA_PATH", "/tmp/mm.json"),
            ("SUPPORT_URL", "http://127.0.0.1:9999/support"),
            ("SUPPORT_USERNAME", ""),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("/tmp/mm.json"));
        assert_eq!(config.support_url, "http://127.0.0.1:9999/support");
        assert_eq!(config.username, "guest");
    }
}
