//! 用户配置 `quantum.config.json` 以及按内容哈希缓存的重载

use crate::error::ConfigError;
use crate::theme::{Theme, ThemeExtend};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "quantum.config.json";

/// 用户配置
///
/// ```json
/// {
///   "content": ["./src/**/*.html"],
///   "theme": { "extend": { "spacing": { "4": "1.2rem" } } },
///   "componentPresets": { "card": "p-4 rounded-lg shadow" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 需要扫描的 glob 列表
    pub content: Vec<String>,
    pub theme: ThemeConfig,
    /// 组件预设：名字 → 空白分隔的类名列表
    pub component_presets: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub extend: ThemeExtend,
}

impl Config {
    pub fn from_json(path: &Path, source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 读取并解析配置文件
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = read_config(path)?;
        Self::from_json(path, &source)
    }

    /// 读取配置，失败时记录警告并回退到默认配置
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; falling back to default config", err);
                Self::default()
            }
        }
    }

    /// 默认主题 + `theme.extend`
    pub fn resolved_theme(&self) -> Theme {
        Theme::merged(Theme::defaults(), &self.theme.extend)
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

struct CachedConfig {
    digest: blake3::Hash,
    config: Config,
}

/// 配置缓存
///
/// 每次 `reload` 都重新读取文件，只有内容哈希变化时才重新解析。
/// 缓存由调用方持有，不存在全局状态。
#[derive(Default)]
pub struct ConfigCache {
    entries: HashMap<PathBuf, CachedConfig>,
    defaults: Config,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 重新读取配置
    ///
    /// 文件缺失或无法解析时返回默认配置，并丢弃该路径的旧缓存。
    pub fn reload(&mut self, path: impl AsRef<Path>) -> &Config {
        let path = path.as_ref();

        let source = match read_config(path) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("{}; falling back to default config", err);
                self.entries.remove(path);
                return &self.defaults;
            }
        };
        let digest = blake3::hash(source.as_bytes());

        let changed = self
            .entries
            .get(path)
            .map_or(true, |cached| cached.digest != digest);

        if changed {
            match Config::from_json(path, &source) {
                Ok(config) => {
                    log::debug!("config {} parsed", path.display());
                    self.entries
                        .insert(path.to_path_buf(), CachedConfig { digest, config });
                }
                Err(err) => {
                    log::warn!("{}; falling back to default config", err);
                    self.entries.remove(path);
                    return &self.defaults;
                }
            }
        } else {
            log::debug!("config {} unchanged", path.display());
        }

        self.entries
            .get(path)
            .map_or(&self.defaults, |cached| &cached.config)
    }

    /// 当前缓存内容的哈希（十六进制）
    pub fn digest(&self, path: impl AsRef<Path>) -> Option<String> {
        self.entries
            .get(path.as_ref())
            .map(|cached| cached.digest.to_hex().to_string())
    }

    pub fn invalidate(&mut self, path: impl AsRef<Path>) {
        self.entries.remove(path.as_ref());
    }
}
