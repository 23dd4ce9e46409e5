use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stats_api_url: String,
    pub host: String,
    pub port: u16,
    pub stats_http_timeout_secs: u64,
    pub stats_accept_invalid_certs: bool,
}

impl AppConfig {
    /// Every setting has a default, so loading never fails.
    pub fn from_env() -> Self {
        Self {
            stats_api_url: env::var("STATS_API_URL")
                .unwrap_or_else(|_| "https://localhost:44380".to_string())
                .trim_end_matches('/')
                .to_string(),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            stats_http_timeout_secs: env::var("STATS_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            stats_accept_invalid_certs: env::var("STATS_ACCEPT_INVALID_CERTS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Configuration pointing at an explicit stats API, used by tests and tools.
    pub fn for_stats_api(stats_api_url: &str) -> Self {
        Self {
            stats_api_url: stats_api_url.trim_end_matches('/').to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            stats_http_timeout_secs: 30,
            stats_accept_invalid_certs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_stats_api_strips_trailing_slash() {
        let config = AppConfig::for_stats_api("http://127.0.0.1:9000/");
        assert_eq!(config.stats_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.stats_http_timeout_secs, 30);
        assert!(!config.stats_accept_invalid_certs);
    }
}
