use crate::html::extract_class_tokens;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// 类名收集器：汇总所有源文件中的 class token。
///
/// token 以 BTreeSet 保存，按字典序去重，保证输出可复现。
#[derive(Debug, Default)]
pub struct ClassCollector {
    tokens: BTreeSet<String>,
    files: Vec<PathBuf>,
}

impl ClassCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个源文件的内容
    pub fn add_source(&mut self, path: &Path, source: &str) {
        let before = self.tokens.len();
        extract_class_tokens(source, &mut self.tokens);
        log::trace!(
            "{}: {} new tokens",
            path.display(),
            self.tokens.len() - before
        );
        self.files.push(path.to_path_buf());
    }

    /// 直接加入一个 class 属性值
    pub fn add_class_value(&mut self, value: &str) {
        quantum_core::normalize::extend_tokens(&mut self.tokens, value);
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// 已处理的文件（按处理顺序）
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn into_parts(self) -> (BTreeSet<String>, Vec<PathBuf>) {
        (self.tokens, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_across_sources() {
        let mut collector = ClassCollector::new();
        collector.add_source(Path::new("a.html"), r#"<div class="p-4 flex">"#);
        collector.add_source(Path::new("b.html"), r#"<div class="flex m-2">"#);

        let tokens: Vec<_> = collector.tokens().iter().map(String::as_str).collect();
        assert_eq!(tokens, vec!["flex", "m-2", "p-4"]);
        assert_eq!(collector.files().len(), 2);
    }

    #[test]
    fn test_add_class_value() {
        let mut collector = ClassCollector::new();
        collector.add_class_value("  sm:hidden   flex ");
        let (tokens, files) = collector.into_parts();
        assert_eq!(tokens.len(), 2);
        assert!(files.is_empty());
    }
}
