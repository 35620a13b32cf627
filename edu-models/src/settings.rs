use config::{Config, Environment, File};
use edu_error::EduResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use sysinfo::System;

use crate::constants::{DATA_DIR, ENV_PREFIX, SQLITE_MEMORY_PATH};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Loads settings from an optional TOML file, then applies `EDU__*` environment overrides.
    pub fn new(config_path: String) -> EduResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("web.cors.whitelist.origins")
                    .with_list_parse_key("web.cors.whitelist.methods")
                    .with_list_parse_key("web.cors.whitelist.headers")
                    .with_list_parse_key("web.cors.whitelist.expose_headers"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

impl From<Inner> for Settings {
    fn from(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub admin: Admin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "General::log_level_default")]
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: General::log_level_default(),
        }
    }
}

impl General {
    fn log_level_default() -> String {
        "info".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
    #[serde(default)]
    pub cors: Cors,
    #[serde(default)]
    pub jwt: Jwt,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            cors: Default::default(),
            jwt: Default::default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/v1".into()
    }

    fn port_default() -> u16 {
        3000
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn workers_default() -> i32 {
        0
    }

    /// Resolves the worker count: `0` means one per CPU, a negative value divides the CPU count.
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => System::new_all().cpus().len().max(1),
            n if n > 0 => n as usize,
            n => std::cmp::max(
                1,
                (System::new_all().cpus().len() as i32 / n.abs()) as usize,
            ),
        }
    }
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    #[serde(default)]
    pub whitelist: Whitelist,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Whitelist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Whitelist {
    #[serde(default = "Whitelist::origins_default")]
    pub origins: Vec<String>,
    #[serde(default = "Whitelist::methods_default")]
    pub methods: Vec<String>,
    #[serde(default = "Whitelist::headers_default")]
    pub headers: Vec<String>,
    #[serde(default = "Whitelist::expose_headers_default")]
    pub expose_headers: Vec<String>,
    #[serde(default = "Whitelist::credentials_default")]
    pub credentials: bool,
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist {
            origins: Whitelist::origins_default(),
            methods: Whitelist::methods_default(),
            headers: Whitelist::headers_default(),
            expose_headers: Whitelist::expose_headers_default(),
            credentials: Whitelist::credentials_default(),
        }
    }
}

impl Whitelist {
    fn origins_default() -> Vec<String> {
        vec!["*".into()]
    }

    fn methods_default() -> Vec<String> {
        vec![
            "GET".into(),
            "POST".into(),
            "PATCH".into(),
            "DELETE".into(),
        ]
    }

    fn headers_default() -> Vec<String> {
        vec!["Content-Type".into(), "Authorization".into()]
    }

    fn expose_headers_default() -> Vec<String> {
        vec!["Content-Length".into(), "Content-Type".into()]
    }

    fn credentials_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jwt {
    #[serde(default = "Jwt::secret_default")]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "Jwt::expire_default")]
    pub expire: i64,
    #[serde(default = "Jwt::issuer_default")]
    pub issuer: String,
}

impl Default for Jwt {
    fn default() -> Self {
        Jwt {
            secret: Jwt::secret_default(),
            expire: Jwt::expire_default(),
            issuer: Jwt::issuer_default(),
        }
    }
}

impl Jwt {
    fn secret_default() -> String {
        "edu-backend".into()
    }

    fn expire_default() -> i64 {
        86_400
    }

    fn issuer_default() -> String {
        "edu-backend".into()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    /// File name under the data directory, or `:memory:`.
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl Sqlite {
    /// Settings for a private in-memory database living on a single connection.
    pub fn memory() -> Self {
        Sqlite {
            path: SQLITE_MEMORY_PATH.into(),
            max_connections: 1,
            ..Default::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path == SQLITE_MEMORY_PATH
    }

    pub fn to_url(&self) -> String {
        if self.is_memory() {
            "sqlite::memory:".into()
        } else if self.auto_create {
            // mode=rwc creates the file when missing
            format!("sqlite:{}/{}?mode=rwc", DATA_DIR, self.path)
        } else {
            format!("sqlite:{}/{}", DATA_DIR, self.path)
        }
    }

    pub fn db_dir(&self) -> String {
        DATA_DIR.into()
    }

    fn path_default() -> String {
        "edu.db".into()
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

    fn max_connections_default() -> u32 {
        10
    }

    fn auto_create_default() -> bool {
        true
    }
}

/// Administrator account created on first start when no admin exists.
#[derive(Debug, Clone, Deserialize)]
pub struct Admin {
    #[serde(default = "Admin::phone_default")]
    pub phone: String,
    #[serde(default = "Admin::password_default")]
    pub password: String,
    #[serde(default = "Admin::name_default")]
    pub name: String,
}

impl Default for Admin {
    fn default() -> Self {
        Admin {
            phone: Admin::phone_default(),
            password: Admin::password_default(),
            name: Admin::name_default(),
        }
    }
}

impl Admin {
    fn phone_default() -> String {
        "0900000000".into()
    }

    fn password_default() -> String {
        "admin1234".into()
    }

    fn name_default() -> String {
        "Administrator".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied_without_a_config_file() {
        let settings = Settings::new("does-not-exist.toml".into()).unwrap();
        assert_eq!(settings.web.router_prefix, "/v1");
        assert_eq!(settings.web.jwt.expire, 86_400);
        assert_eq!(settings.db.sqlite.path, "edu.db");
        assert!(settings.web.get_worker_count() >= 1);
    }

    #[test]
    fn memory_sqlite_uses_memory_url() {
        let sqlite = Sqlite::memory();
        assert!(sqlite.is_memory());
        assert_eq!(sqlite.to_url(), "sqlite::memory:");
        assert_eq!(sqlite.max_connections, 1);
        assert_eq!(Sqlite::default().to_url(), "sqlite:./data/edu.db?mode=rwc");
    }
}
