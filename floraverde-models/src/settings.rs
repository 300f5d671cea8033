use config::{Config, File};
use floraverde_error::FvResult;
use serde::Deserialize;
use std::{ops::Deref, sync::Arc};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Load settings from an optional TOML file layered with `FV`-prefixed
    /// environment variables (e.g. `FV__WEB__PORT=9090`). Every field has
    /// a default, so a missing config file is not an error.
    pub fn new(config_path: &str) -> FvResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("FV")
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    /// Prefix the API routes are mounted under.
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    /// Directory of static front-end assets; served as the fallback
    /// service when it exists. Empty disables static serving.
    #[serde(default = "Web::static_dir_default")]
    pub static_dir: String,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            router_prefix: Web::router_prefix_default(),
            static_dir: Web::static_dir_default(),
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        8080
    }

    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn static_dir_default() -> String {
        "../frontend".into()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    /// Create the database file when missing (URL parameter `mode=rwc`).
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    /// Connect timeout in milliseconds.
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    /// Idle timeout in milliseconds.
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    /// Maximum connection lifetime in milliseconds.
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            auto_create: Sqlite::auto_create_default(),
            max_connections: Sqlite::max_connections_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
        }
    }
}

impl Sqlite {
    pub fn to_url(&self) -> String {
        if self.path == ":memory:" {
            return "sqlite::memory:".into();
        }
        if self.auto_create {
            format!("sqlite://{}?mode=rwc", self.path)
        } else {
            format!("sqlite://{}", self.path)
        }
    }

    pub fn db_path(&self) -> &str {
        &self.path
    }

    fn path_default() -> String {
        "./floraverde.db".into()
    }

    fn auto_create_default() -> bool {
        true
    }

    fn max_connections_default() -> u32 {
        10
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        60_000
    }

    fn max_lifetime_default() -> u64 {
        1_800_000
    }
}
