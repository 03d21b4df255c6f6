use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Simulated processing time before a job flips to `done` (default: `2000` ms).
    pub job_delay_ms: u64,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `5`).
    pub shutdown_timeout_secs: u64,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            job_delay_ms: 2000,
            request_timeout_secs: 30,
            shutdown_timeout_secs: 5,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default   |
    /// |-------------------------|-----------|
    /// | `HOST`                  | `0.0.0.0` |
    /// | `PORT`                  | `4000`    |
    /// | `JOB_DELAY_MS`          | `2000`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`      |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `5`       |
    /// | `LOG_FORMAT`            | `pretty`  |
    ///
    /// Panics on unparseable numbers so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port: u16 = std::env::var("PORT")
            .map(|v| v.parse().expect("PORT must be a valid u16"))
            .unwrap_or(defaults.port);

        let job_delay_ms: u64 = std::env::var("JOB_DELAY_MS")
            .map(|v| v.parse().expect("JOB_DELAY_MS must be a valid u64"))
            .unwrap_or(defaults.job_delay_ms);

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.request_timeout_secs);

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .map(|v| v.parse().expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.shutdown_timeout_secs);

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.json_logs);

        Self {
            host,
            port,
            job_delay_ms,
            request_timeout_secs,
            shutdown_timeout_secs,
            json_logs,
        }
    }

    pub fn job_delay(&self) -> Duration {
        Duration::from_millis(self.job_delay_ms)
    }
}
