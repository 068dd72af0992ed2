use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use telemetry::LogConfig;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LogConfig,
    pub recommendations: RecommendationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// 管理接口的 API Key，未配置时不校验
    pub admin_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    pub limit: usize,
}

impl Config {
    /// 配置加载优先级：
    /// 1. 内置默认值
    /// 2. `$CONFIG_PATH/default.{toml,yaml,json}` (默认目录 `config`，可选)
    /// 3. 环境变量 `APP__SECTION__KEY`
    pub fn load() -> Result<Self, AppError> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.environment", "development")?
            .set_default("store.data_dir", "data")?
            .set_default("store.file_name", "products.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("logging.target", "stdout")?
            .set_default("recommendations.limit", 6)?
            .add_source(config::File::from(config_dir.join("default")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;
        let config: Config = config.try_deserialize()?;

        Ok(config)
    }

    pub fn store_path(&self) -> PathBuf {
        self.store.data_dir.join(&self.store.file_name)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl AuthConfig {
    /// 空字符串视为未配置
    pub fn admin_key(&self) -> Option<&str> {
        self.admin_api_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let temp = tempdir().unwrap();
        let config = Config::load_from(temp.path()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store_path(), PathBuf::from("data").join("products.json"));
        assert_eq!(config.recommendations.limit, 6);
        assert_eq!(config.logging.format, telemetry::LogFormat::Pretty);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("default.toml"),
            r#"
            [server]
            port = 8088

            [store]
            data_dir = "/var/lib/storefront"

            [auth]
            admin_api_key = "s3cret"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        let config = Config::load_from(temp.path()).unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store_path(), PathBuf::from("/var/lib/storefront/products.json"));
        assert_eq!(config.auth.admin_key(), Some("s3cret"));
        assert_eq!(config.logging.format, telemetry::LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_admin_key_is_unset() {
        let auth = AuthConfig {
            admin_api_key: Some(String::new()),
        };
        assert_eq!(auth.admin_key(), None);
    }
}
