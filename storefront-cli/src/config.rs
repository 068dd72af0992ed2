use std::{
    env,
    path::{Path, PathBuf},
};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// 与服务端共用 `config/default.toml` 中的 `[store]` 配置
#[derive(Debug, Deserialize, Clone)]
pub struct StoreLocation {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl StoreLocation {
    /// 配置加载优先级：
    /// 1. 默认值 `data/products.json`
    /// 2. `$CONFIG_PATH/default.toml` (如果存在)
    /// 3. 环境变量 (APP__STORE__DATA_DIR)
    /// 4. 命令行参数 `--data-dir`
    pub fn load(config_dir: &Path, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::builder()
            .set_default("store.data_dir", "data")?
            .set_default("store.file_name", "products.json")?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()
            .context("无法加载配置文件")?;

        let mut location: StoreLocation = config
            .get("store")
            .context("配置中未找到 store")?;

        if let Some(data_dir) = data_dir {
            location.data_dir = data_dir;
        }

        Ok(location)
    }

    pub fn config_dir() -> PathBuf {
        env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }

    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
