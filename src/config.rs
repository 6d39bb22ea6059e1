use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use zeroize::Zeroizing;

/// Basic-auth credentials for an outbound API.
#[derive(Clone, Default)]
pub struct Credentials {
    pub user: String,
    pub secret: Zeroizing<String>,
}

impl Credentials {
    pub fn new(user: &str, secret: &str) -> Self {
        Self {
            user: user.to_string(),
            secret: Zeroizing::new(secret.to_string()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// HansaWorld ERP connection settings
#[derive(Debug, Clone)]
pub struct HansaConfig {
    /// Quotation endpoint. Empty disables API delivery.
    pub api_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl HansaConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty()
    }
}

/// WooCommerce catalog settings used for product name lookups
#[derive(Debug, Clone)]
pub struct WooConfig {
    /// REST base URL, e.g. `https://shop.example/wp-json/wc/v3`. Empty disables lookups.
    pub api_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl WooConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty()
    }
}

/// Relay configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub hansa: HansaConfig,
    pub woo: WooConfig,
    pub hot_import_folder: PathBuf,
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_address: SocketAddr,
    pub recent_orders_limit: u32,
    pub rate_limit_per_minute: u32,
    pub max_body_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            hansa: HansaConfig {
                api_url: String::new(),
                credentials: Credentials::default(),
                timeout: Duration::from_secs(10),
            },
            woo: WooConfig {
                api_url: String::new(),
                credentials: Credentials::default(),
                timeout: Duration::from_secs(5),
            },
            hot_import_folder: PathBuf::from("hansa_exports"),
            database_url: "sqlite://data/shopbridge.db".to_string(),
            database_max_connections: 5,
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
            recent_orders_limit: 5,
            rate_limit_per_minute: 600,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> RelayConfig {
        let mut config = RelayConfig::default();

        config.hansa.api_url = env_string("HANSA_API_URL").unwrap_or_default();
        config.hansa.credentials = Credentials::new(
            &env_string("HANSA_USER").unwrap_or_default(),
            &env_string("HANSA_PASS").unwrap_or_default(),
        );
        if let Some(secs) = parse_env::<u64>("HANSA_TIMEOUT_SECONDS") {
            if (1..=120).contains(&secs) {
                config.hansa.timeout = Duration::from_secs(secs);
            } else {
                tracing::warn!(
                    "HANSA_TIMEOUT_SECONDS out of range (1-120): {}, using default: {:?}",
                    secs,
                    config.hansa.timeout
                );
            }
        }

        config.woo.api_url = env_string("WOO_API_URL").unwrap_or_default();
        config.woo.credentials = Credentials::new(
            &env_string("WOO_CONSUMER_KEY").unwrap_or_default(),
            &env_string("WOO_CONSUMER_SECRET").unwrap_or_default(),
        );
        if let Some(secs) = parse_env::<u64>("WOO_TIMEOUT_SECONDS") {
            if (1..=60).contains(&secs) {
                config.woo.timeout = Duration::from_secs(secs);
            } else {
                tracing::warn!(
                    "WOO_TIMEOUT_SECONDS out of range (1-60): {}, using default: {:?}",
                    secs,
                    config.woo.timeout
                );
            }
        }

        if let Some(folder) = env_string("HOT_IMPORT_FOLDER") {
            config.hot_import_folder = PathBuf::from(folder);
        }

        if let Some(url) = env_string("DATABASE_URL") {
            config.database_url = url;
        }

        if let Some(value) = parse_env::<u32>("DATABASE_MAX_CONNECTIONS") {
            if value > 0 {
                config.database_max_connections = value;
            }
        }

        if let Some(addr) = parse_env::<SocketAddr>("BIND_ADDRESS") {
            config.bind_address = addr;
        }

        if let Some(value) = parse_env::<u32>("RECENT_ORDERS_LIMIT") {
            if (1..=100).contains(&value) {
                config.recent_orders_limit = value;
            }
        }

        if let Some(value) = parse_env::<u32>("RATE_LIMIT_PER_MINUTE") {
            if value > 0 {
                config.rate_limit_per_minute = value;
            }
        }

        if let Some(value) = parse_env::<usize>("MAX_BODY_BYTES") {
            if value >= 1024 {
                config.max_body_bytes = value;
            }
        }

        config
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string())
}

fn parse_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = env_string(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to parse {} '{}': {}, using default", key, raw, e);
            None
        }
    }
}
