pub mod collector;
pub mod html;
pub mod scanner;

use quantum_core::{Config, ConfigCache, Diagnostic};
use quantum_index::{emit, RuleGroup};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-exports
pub use collector::ClassCollector;
pub use quantum_index::{EmitOptions, Resolver};
pub use scanner::{scan, ScanError, ScanReport};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to write stylesheet")]
    Emit(#[from] std::fmt::Error),
}

/// 生成结果
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    /// 生成的 CSS（不含横幅注释）
    pub css: String,
    /// 参与生成的全部 token（字典序）
    pub tokens: Vec<String>,
    /// 无法解析、未产生规则的 token
    pub unresolved: Vec<String>,
    /// 扫描过的文件
    pub files: Vec<PathBuf>,
    /// 非致命问题
    pub diagnostics: Vec<Diagnostic>,
}

/// 完整的一次生成：扫描 `root` 下的内容文件 → 解析 → 输出
///
/// # 示例
///
/// ```no_run
/// use quantum_core::Config;
/// use quantum_generator::{generate, EmitOptions};
/// use std::path::Path;
///
/// let config = Config::load_or_default("quantum.config.json");
/// let result = generate(&config, Path::new("."), &EmitOptions::default()).unwrap();
/// println!("{}", result.css);
/// ```
pub fn generate(
    config: &Config,
    root: &Path,
    options: &EmitOptions,
) -> Result<GenerationResult, GenerateError> {
    let report = scan(&config.content, root)?;

    let mut result = generate_from_tokens(config, &report.tokens, options)?;
    result.files = report.files;

    let mut diagnostics = report.diagnostics;
    diagnostics.append(&mut result.diagnostics);
    result.diagnostics = diagnostics;

    Ok(result)
}

/// 不做文件扫描，直接由 token 集合生成
pub fn generate_from_tokens(
    config: &Config,
    tokens: &BTreeSet<String>,
    options: &EmitOptions,
) -> Result<GenerationResult, GenerateError> {
    let resolver = Resolver::from_config(config);

    let resolved: Vec<(String, Vec<RuleGroup>)> = tokens
        .iter()
        .map(|token| (token.clone(), resolver.resolve(token)))
        .collect();

    let unresolved: Vec<String> = resolved
        .iter()
        .filter(|(_, groups)| groups.is_empty())
        .map(|(token, _)| token.clone())
        .collect();

    if !unresolved.is_empty() {
        log::debug!("unresolved tokens: {}", unresolved.join(" "));
    }

    let css = emit(resolver.theme(), &resolved, options)?;

    let mut diagnostics = Vec::new();
    diagnostics.push(Diagnostic::info(format!(
        "{} tokens, {} resolved",
        tokens.len(),
        tokens.len() - unresolved.len()
    )));
    if !unresolved.is_empty() {
        diagnostics.push(Diagnostic::info(format!(
            "{} tokens produced no rules",
            unresolved.len()
        )));
    }

    log::debug!(
        "generated {} bytes of css from {} tokens",
        css.len(),
        tokens.len()
    );

    Ok(GenerationResult {
        css,
        tokens: tokens.iter().cloned().collect(),
        unresolved,
        files: Vec::new(),
        diagnostics,
    })
}

/// 可重复执行的生成器
///
/// 持有配置缓存，每次 [`Generator::run`] 重新读取配置文件，
/// 内容未变时复用上次的解析结果。
pub struct Generator {
    config_path: PathBuf,
    root: PathBuf,
    cache: ConfigCache,
}

impl Generator {
    pub fn new(config_path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            root: root.into(),
            cache: ConfigCache::new(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 当前配置（重新读取文件）
    pub fn config(&mut self) -> &Config {
        self.cache.reload(&self.config_path)
    }

    pub fn run(&mut self, options: &EmitOptions) -> Result<GenerationResult, GenerateError> {
        let config = self.cache.reload(&self.config_path);
        generate(config, &self.root, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_core::normalize::normalize_tokens;

    fn compact(css: &str) -> String {
        css.split_whitespace().collect::<String>().replace(";}", "}")
    }

    #[test]
    fn test_generate_from_tokens() {
        let config = Config::default();
        let tokens = normalize_tokens(["flex totally-bogus-class"]);
        let result = generate_from_tokens(&config, &tokens, &EmitOptions::default()).unwrap();
        let css = compact(&result.css);

        assert!(css.starts_with(":root{"));
        assert!(css.contains("body{margin:0;line-height:inherit}"));
        assert!(css.contains(".flex{display:flex}"));
        assert!(css.find("body{").unwrap() < css.find(".flex{").unwrap());
        assert_eq!(result.unresolved, vec!["totally-bogus-class".to_string()]);
        assert_eq!(result.tokens.len(), 2);
    }

    #[test]
    fn test_empty_token_set_emits_root_only() {
        let options = EmitOptions {
            preflight: false,
            ..EmitOptions::default()
        };
        let result = generate_from_tokens(&Config::default(), &BTreeSet::new(), &options).unwrap();
        assert!(compact(&result.css).starts_with(":root{"));
        assert_eq!(result.css.matches('{').count(), 1);
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_user_presets_flow_through() {
        let mut config = Config::default();
        config
            .component_presets
            .insert("panel".to_string(), "p-4 rounded-lg".to_string());
        let tokens = normalize_tokens(["panel"]);
        let result = generate_from_tokens(&config, &tokens, &EmitOptions::default()).unwrap();

        assert!(compact(&result.css).contains(".panel{padding:1rem;border-radius:0.5rem}"));
    }
}
