use std::path::PathBuf;
use thiserror::Error;

/// 配置加载错误
///
/// 仅在调用方显式使用 [`crate::config::Config::load`] 时可见；
/// 构建路径上统一由 `load_or_default` 吸收并回退到默认值。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
