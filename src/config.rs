use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding index.html, app.js and styles.css
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// yt-dlp executable used for search and video lookups
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,

    /// Autocomplete endpoint
    #[serde(default = "default_suggest_url")]
    pub suggest_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

fn default_suggest_url() -> String {
    "https://suggestqueries.google.com/complete/search".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_vars(Vec::new()).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.ytdlp_path, "yt-dlp");
        assert_eq!(
            config.suggest_url,
            "https://suggestqueries.google.com/complete/search"
        );
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_port_override() {
        let config = Config::from_vars(vars(&[("PORT", "9090"), ("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_vars(vars(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }
}
