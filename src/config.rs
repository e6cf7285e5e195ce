use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub admin_url: String,
    pub timeout: Option<Duration>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let admin_url = env_or("KONGO_ADMIN_URL", "http://localhost:8001");
        if admin_url.trim().is_empty() {
            return Err("KONGO_ADMIN_URL must not be empty".to_string());
        }

        let timeout = match std::env::var("KONGO_TIMEOUT_SECS").ok() {
            Some(secs) if !secs.trim().is_empty() => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .map_err(|e| format!("Invalid KONGO_TIMEOUT_SECS: {e}"))?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let log_level = env_or("KONGO_LOG_LEVEL", "info");

        Ok(Config {
            admin_url,
            timeout,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
