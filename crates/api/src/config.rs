/// Listener and middleware settings for the scoring service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Dashboard origins allowed to call the API.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `CORS_ORIGINS` (comma separated) and
    /// `REQUEST_TIMEOUT_SECS`. Unset variables fall back to
    /// `0.0.0.0:3001`, the local dashboard at `http://localhost:8081` and a
    /// 30 second timeout. A non-numeric port or timeout panics.
    pub fn from_env() -> Self {
        let port = var_or("PORT", "3001");
        let timeout = var_or("REQUEST_TIMEOUT_SECS", "30");

        Self {
            host: var_or("HOST", "0.0.0.0"),
            port: port
                .parse()
                .unwrap_or_else(|e| panic!("PORT '{port}' is not a valid port: {e}")),
            cors_origins: parse_origins(&var_or("CORS_ORIGINS", "http://localhost:8081")),
            request_timeout_secs: timeout.parse().unwrap_or_else(|e| {
                panic!("REQUEST_TIMEOUT_SECS '{timeout}' is not a number of seconds: {e}")
            }),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Split a comma list, skipping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn unset_variable_uses_default() {
        assert_eq!(var_or("FACTORY_HEALTH_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn empty_origin_list() {
        assert!(parse_origins("").is_empty());
    }
}
