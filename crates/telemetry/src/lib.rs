//! telemetry - 服务与 CLI 共用的 tracing 初始化
//!
//! `RUST_LOG` 存在时优先生效，否则使用 [`LogConfig::level`]。

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, util::TryInitError,
};

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log filter {directive:?}: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to initialize logging: {0}")]
    Init(#[from] TryInitError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// 日志写到哪里；CLI 用 stderr，避免和命令输出混在一起
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub target: LogTarget,
}

impl LogConfig {
    pub fn new(level: impl Into<String>, format: LogFormat, target: LogTarget) -> Self {
        Self {
            level: level.into(),
            format,
            target,
        }
    }
}

/// 初始化全局 subscriber，进程内只能调用一次
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let writer = match config.target {
        LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let formatting_layer = match config.format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(writer).boxed(),
        LogFormat::Pretty => fmt::layer().pretty().with_writer(writer).boxed(),
    };

    registry().with(env_filter).with(formatting_layer).try_init()?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}

fn level_filter(directive: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(directive).map_err(|source| LogError::Filter {
        directive: directive.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_strings() {
        let config: LogConfig =
            serde_json::from_str(r#"{"level": "info,tower_http=debug", "format": "json"}"#).unwrap();

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.target, LogTarget::Stdout);

        let config: LogConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);

        assert!(serde_json::from_str::<LogConfig>(r#"{"level": "warn", "format": "xml"}"#).is_err());
    }

    #[test]
    fn test_level_filter() {
        assert!(level_filter("info,tower_http=debug").is_ok());
        assert!(matches!(level_filter("catalog=loud"), Err(LogError::Filter { .. })));
    }

    #[test]
    fn test_second_init_fails() {
        let config = LogConfig::new("warn", LogFormat::Compact, LogTarget::Stderr);

        init(&config).unwrap();
        assert!(matches!(init(&config), Err(LogError::Init(_))));
    }
}
