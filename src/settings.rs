use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::StartupError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_root: String,
    /// Origins allowed to call the JSON API. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Without a URL the service runs on the in-memory catalog.
    pub url: Option<String>,
    pub pool_size: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub case_sensitive: bool,
}

impl Settings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, StartupError> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_root", "./public")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout_seconds", 30)?
            .set_default("search.case_sensitive", true)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, StartupError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults, then an optional `appsettings` file, then `CATALOG__*`
    /// environment variables (`CATALOG__SERVER__PORT=8080`).
    pub fn load() -> Result<Self, StartupError> {
        dotenv::dotenv().ok();

        Self::from_builder(
            Self::defaults()?
                .add_source(File::with_name("appsettings").required(false))
                .add_source(Environment::with_prefix("CATALOG").separator("__")),
        )
    }

    pub fn address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn defaults_run_without_a_database() {
        let settings = Settings::from_builder(Settings::defaults().unwrap()).unwrap();
        assert_eq!(settings.address(), ("127.0.0.1".to_string(), 3000));
        assert_eq!(settings.server.static_root, "./public");
        assert!(settings.server.allowed_origins.is_empty());
        assert!(settings.database.url.is_none());
        assert_eq!(settings.database.pool_size, 10);
        assert_eq!(settings.database.timeout_seconds, 30);
        assert!(settings.search.case_sensitive);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = r#"
            [server]
            port = 8080
            allowed_origins = ["http://localhost:5173"]

            [database]
            url = "postgres://localhost/catalog"

            [search]
            case_sensitive = false
        "#;
        let builder = Settings::defaults()
            .unwrap()
            .add_source(File::from_str(file, FileFormat::Toml));
        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(
            settings.database.url.as_deref(),
            Some("postgres://localhost/catalog")
        );
        assert!(!settings.search.case_sensitive);
    }
}
