//! 内容扫描：按 glob 遍历根目录，提取 class token
//!
//! 路径按相对于根目录的形式匹配；遍历遵循 `.gitignore`。

use crate::collector::ClassCollector;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use quantum_core::Diagnostic;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("failed to build glob set: {0}")]
    GlobSet(#[source] globset::Error),
}

/// 一次扫描的结果
#[derive(Debug, Default)]
pub struct ScanReport {
    pub tokens: BTreeSet<String>,
    /// 成功读取的文件
    pub files: Vec<PathBuf>,
    /// 读取失败等非致命问题
    pub diagnostics: Vec<Diagnostic>,
}

/// 扫描 `root` 下匹配 `patterns` 的文件
///
/// 模式为空时不遍历目录。无法读取的文件记录警告后跳过。
pub fn scan(patterns: &[String], root: &Path) -> Result<ScanReport, ScanError> {
    if patterns.is_empty() {
        return Ok(ScanReport::default());
    }

    let globset = build_globset(patterns)?;
    let mut collector = ClassCollector::new();
    let mut diagnostics = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("walk error: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !globset.is_match(relative) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(source) => collector.add_source(path, &source),
            Err(err) => {
                log::warn!("skip unreadable file {}: {}", path.display(), err);
                diagnostics.push(Diagnostic::warning(format!(
                    "skipped unreadable file {}: {}",
                    path.display(),
                    err
                )));
            }
        }
    }

    let (tokens, files) = collector.into_parts();
    log::debug!(
        "scanned {} files under {}, {} unique tokens",
        files.len(),
        root.display(),
        tokens.len()
    );

    Ok(ScanReport {
        tokens,
        files,
        diagnostics,
    })
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
        // `*` 不跨越目录，`**` 才匹配多级
        let glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()
            .map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(ScanError::GlobSet)
}
