//! Orchestrator client configuration

/// Environment variable holding the orchestrator hostname
pub const ENV_ORCHESTRATOR_HOST: &str = "ORCHESTRATOR_HOST";
/// Environment variable holding the orchestrator port
pub const ENV_ORCHESTRATOR_PORT: &str = "ORCHESTRATOR_PORT";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 80;

/// Location of the orchestrator HTTP API
///
/// Set once at construction; every request URL is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
}

impl ClientConfig {
    /// Creates a configuration pointing at `http://{host}:{port}`
    ///
    /// # Example
    ///
    /// ```rust
    /// use morpheo_orchestrator_client::orchestrator::ClientConfig;
    ///
    /// let config = ClientConfig::new("localhost", 8080);
    /// assert_eq!(config.base_url(), "http://localhost:8080");
    /// ```
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Reads `ORCHESTRATOR_HOST` and `ORCHESTRATOR_PORT`, falling back to
    /// `localhost:80`. An unparsable port also falls back to the default.
    pub fn from_env() -> Self {
        let host = std::env::var(ENV_ORCHESTRATOR_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var(ENV_ORCHESTRATOR_PORT)
            .ok()
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// Orchestrator hostname
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Orchestrator port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `http://{host}:{port}`, without trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
