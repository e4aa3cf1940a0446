use std::env;
use std::time::Duration;

/// Settings for the HTTP side of document fetching.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Skip TLS certificate and host name verification. Off unless asked for.
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("jdot/{}", env!("CARGO_PKG_VERSION")),
            accept_invalid_certs: false,
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(timeout) = var("JDOT_TIMEOUT") {
            match timeout.parse::<f64>() {
                Ok(secs) if secs > 0.0 => config.timeout = Duration::from_secs_f64(secs),
                _ => tracing::warn!(
                    "Invalid JDOT_TIMEOUT value '{}', using default {:?}",
                    timeout,
                    config.timeout
                ),
            }
        }

        if let Some(timeout) = var("JDOT_CONNECT_TIMEOUT") {
            match timeout.parse::<f64>() {
                Ok(secs) if secs > 0.0 => config.connect_timeout = Duration::from_secs_f64(secs),
                _ => tracing::warn!(
                    "Invalid JDOT_CONNECT_TIMEOUT value '{}', using default {:?}",
                    timeout,
                    config.connect_timeout
                ),
            }
        }

        if let Some(user_agent) = var("JDOT_USER_AGENT").filter(|s| !s.trim().is_empty()) {
            config.user_agent = user_agent;
        }

        if let Some(flag) = var("JDOT_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    tracing::warn!(
                        "Invalid JDOT_ACCEPT_INVALID_CERTS value '{}', keeping verification on",
                        flag
                    );
                    false
                }
            };
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}
