// ==========================================
// 比赛评分与抽奖系统 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、覆写管理
// 来源优先级: 环境变量 > JSON 配置文件 > 内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 配置文件路径（仅环境变量有效）
    pub const CONFIG_FILE: &str = "CONTEST_CONFIG_FILE";

    // HTTP 服务
    pub const HOST: &str = "CONTEST_HOST";
    pub const PORT: &str = "CONTEST_PORT";
    pub const STATIC_DIR: &str = "CONTEST_STATIC_DIR";
    pub const MAX_UPLOAD_BYTES: &str = "CONTEST_MAX_UPLOAD_BYTES";
    pub const CORS_ENABLED: &str = "CONTEST_CORS_ENABLED";

    // 评分
    pub const SCORE_MIN: &str = "CONTEST_SCORE_MIN";
    pub const SCORE_MAX: &str = "CONTEST_SCORE_MAX";

    // 国际化
    pub const LOCALE: &str = "CONTEST_LOCALE";

    /// 可覆写的全部配置键
    pub const ALL: &[&str] = &[
        HOST,
        PORT,
        STATIC_DIR,
        MAX_UPLOAD_BYTES,
        CORS_ENABLED,
        SCORE_MIN,
        SCORE_MAX,
        LOCALE,
    ];
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 (path: {path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件格式错误 (path: {path}): {message}")]
    FileFormatError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// AppConfig - 运行时配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,       // 前端页面目录
    pub max_upload_bytes: usize,   // 名单上传大小上限
    pub cors_enabled: bool,        // 是否放开跨域
    pub score_min: f64,            // 评分下限（含）
    pub score_max: f64,            // 评分上限（含）
    pub locale: String,            // 消息语言
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            max_upload_bytes: 10 * 1024 * 1024,
            cors_enabled: true,
            score_min: 0.0,
            score_max: 100.0,
            locale: "zh-CN".to_string(),
        }
    }
}

impl AppConfig {
    /// 监听地址
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 从环境变量（及可选配置文件）加载
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_values = match std::env::var(config_keys::CONFIG_FILE) {
            Ok(path) => Self::read_config_file(&path)?,
            Err(_) => HashMap::new(),
        };

        let env_values = config_keys::ALL.iter().filter_map(|key| {
            std::env::var(key)
                .ok()
                .map(|value| (key.to_string(), value))
        });

        Ok(Self::merge(file_values, env_values))
    }

    /// 合并配置来源：同名键以环境变量为准
    fn merge(
        file_values: HashMap<String, String>,
        env_values: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut values = file_values;
        values.extend(env_values);
        Self { values }
    }

    /// 从已有键值创建（测试与嵌入使用）
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 读取 JSON 配置文件：顶层对象，键为配置键
    fn read_config_file(path: &str) -> Result<HashMap<String, String>, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let parsed: HashMap<String, serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::FileFormatError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(parsed
            .into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect())
    }

    fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.trim())
    }

    /// 读取并解析配置值，缺失时使用默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get_config_value(key) {
            None | Some("") => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::ConfigValueError {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// 生成运行时配置
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();

        let config = AppConfig {
            host: self.get_parsed_or_default(config_keys::HOST, defaults.host)?,
            port: self.get_parsed_or_default(config_keys::PORT, defaults.port)?,
            static_dir: self.get_parsed_or_default(config_keys::STATIC_DIR, defaults.static_dir)?,
            max_upload_bytes: self
                .get_parsed_or_default(config_keys::MAX_UPLOAD_BYTES, defaults.max_upload_bytes)?,
            cors_enabled: self.get_parsed_or_default(config_keys::CORS_ENABLED, defaults.cors_enabled)?,
            score_min: self.get_parsed_or_default(config_keys::SCORE_MIN, defaults.score_min)?,
            score_max: self.get_parsed_or_default(config_keys::SCORE_MAX, defaults.score_max)?,
            locale: self.get_parsed_or_default(config_keys::LOCALE, defaults.locale)?,
        };

        if !(config.score_min < config.score_max) {
            return Err(ConfigError::ConfigValueError {
                key: config_keys::SCORE_MAX.to_string(),
                value: config.score_max.to_string(),
                message: format!("必须大于 {} ({})", config_keys::SCORE_MIN, config.score_min),
            });
        }

        if config.max_upload_bytes == 0 {
            return Err(ConfigError::ConfigValueError {
                key: config_keys::MAX_UPLOAD_BYTES.to_string(),
                value: "0".to_string(),
                message: "必须大于 0".to_string(),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manager(pairs: &[(&str, &str)]) -> ConfigManager {
        ConfigManager::from_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = manager(&[]).load().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.score_max, 100.0);
        assert!(config.cors_enabled);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_overrides() {
        let config = manager(&[
            (config_keys::PORT, "9090"),
            (config_keys::SCORE_MAX, "10"),
            (config_keys::CORS_ENABLED, "false"),
            (config_keys::LOCALE, "vi"),
        ])
        .load()
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.score_max, 10.0);
        assert!(!config.cors_enabled);
        assert_eq!(config.locale, "vi");
    }

    #[test]
    fn test_invalid_value() {
        let err = manager(&[(config_keys::PORT, "not-a-port")]).load().unwrap_err();
        match err {
            ConfigError::ConfigValueError { key, value, .. } => {
                assert_eq!(key, config_keys::PORT);
                assert_eq!(value, "not-a-port");
            }
            other => panic!("Expected ConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_score_range_must_be_ordered() {
        let result = manager(&[
            (config_keys::SCORE_MIN, "10"),
            (config_keys::SCORE_MAX, "5"),
        ])
        .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_read_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"CONTEST_PORT": 8088, "CONTEST_HOST": "0.0.0.0"}}"#).unwrap();

        let values = ConfigManager::read_config_file(file.path().to_str().unwrap()).unwrap();
        let config = ConfigManager::from_values(values).load().unwrap();

        assert_eq!(config.port, 8088);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_read_config_file_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let result = ConfigManager::read_config_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::FileFormatError { .. })));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"CONTEST_PORT": 8088, "CONTEST_HOST": "0.0.0.0"}}"#).unwrap();
        let file_values = ConfigManager::read_config_file(file.path().to_str().unwrap()).unwrap();

        let env_values = vec![
            (config_keys::PORT.to_string(), "9000".to_string()),
            (config_keys::LOCALE.to_string(), "en".to_string()),
        ];
        let config = ConfigManager::merge(file_values, env_values).load().unwrap();

        assert_eq!(config.port, 9000); // 两处都有，取环境变量
        assert_eq!(config.host, "0.0.0.0"); // 仅文件中有
        assert_eq!(config.locale, "en"); // 仅环境变量中有
    }
}
