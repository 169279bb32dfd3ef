//! 规则组 → 样式表
//!
//! 规则先组装成 SWC CSS AST，再交给 `swc_css_codegen` 输出。
//! 输出顺序固定：`:root` 变量、基础样式、无断点规则、按断点升序的 `@media` 块、
//! `prefers-color-scheme` 回退块。

use crate::context::ClassContext;
use crate::css::{create_class_rule, create_media_rule, create_qualified_rule, create_stylesheet, emit_css};
use crate::rule::RuleGroup;
use crate::variant::{breakpoint_condition, mode_fallback_selector, mode_media_query, mode_selector};
use quantum_core::naming::escape_class_name;
use quantum_core::{Declaration, Theme};
use quantum_parse::{Breakpoint, ThemeMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use swc_css_ast::{QualifiedRule, Rule};

/// 输出格式选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// 紧凑输出
    pub minify: bool,
    /// 每层缩进的空格数
    pub indent: usize,
    /// 在工具类之前输出基础样式
    pub preflight: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            minify: false,
            indent: 2,
            preflight: true,
        }
    }
}

/// 基础样式：盒模型、边框、字体与常见元素的重置
pub const PREFLIGHT: &[(&str, &[(&str, &str)])] = &[
    (
        "*, ::before, ::after",
        &[
            ("box-sizing", "border-box"),
            ("border-width", "0"),
            ("border-style", "solid"),
            ("border-color", "#e5e7eb"),
        ],
    ),
    (
        "html",
        &[
            ("line-height", "1.5"),
            ("-webkit-text-size-adjust", "100%"),
            ("font-family", "Inter, ui-sans-serif, system-ui, sans-serif"),
        ],
    ),
    ("body", &[("margin", "0"), ("line-height", "inherit")]),
    (
        "img",
        &[("display", "block"), ("max-width", "100%"), ("height", "auto")],
    ),
    (
        "button",
        &[
            ("cursor", "pointer"),
            ("background", "transparent"),
            ("padding", "0"),
            ("color", "inherit"),
            ("font", "inherit"),
        ],
    ),
];

#[derive(Debug, Clone)]
enum Selector {
    /// 单个类选择器
    Class(String),
    /// 带状态、主题模式或组合器的完整选择器
    Complex(String),
}

#[derive(Debug, Clone)]
struct CssRule {
    selector: Selector,
    declarations: Vec<Declaration>,
}

impl CssRule {
    fn build(&self, minify: bool) -> QualifiedRule {
        match &self.selector {
            Selector::Class(token) => {
                create_class_rule(token, &escape_class_name(token), &self.declarations)
            }
            Selector::Complex(selector) => {
                create_qualified_rule(selector, &self.declarations, minify)
            }
        }
    }
}

/// 按输出位置分桶的规则
#[derive(Debug, Default)]
struct Layout {
    base: Vec<CssRule>,
    responsive: BTreeMap<Breakpoint, Vec<CssRule>>,
    fallback: BTreeMap<(ThemeMode, Option<Breakpoint>), Vec<CssRule>>,
}

impl Layout {
    fn place(&mut self, ctx: &ClassContext) {
        for (key, declarations) in ctx.groups() {
            let plain = key.variant.is_none() && key.custom_selector.is_none();
            let selector = ctx.selector(key);

            if let Some(mode) = key.mode {
                self.fallback
                    .entry((mode, key.breakpoint))
                    .or_default()
                    .push(CssRule {
                        selector: Selector::Complex(mode_fallback_selector(&selector, mode)),
                        declarations: declarations.clone(),
                    });
            }

            let selector = match key.mode {
                Some(mode) => Selector::Complex(mode_selector(&selector, mode)),
                None if plain => Selector::Class(ctx.token.clone()),
                None => Selector::Complex(selector),
            };
            let rule = CssRule {
                selector,
                declarations,
            };

            match key.breakpoint {
                Some(bp) => self.responsive.entry(bp).or_default().push(rule),
                None => self.base.push(rule),
            }
        }
    }

    fn into_rules(self, theme: &Theme, options: &EmitOptions) -> Vec<Rule> {
        let minify = options.minify;
        let mut rules = Vec::new();

        let variables: Vec<Declaration> = theme
            .css_variables()
            .into_iter()
            .map(|(name, value)| Declaration::new(name, value))
            .collect();
        if !variables.is_empty() {
            rules.push(qualified(create_qualified_rule(":root", &variables, minify)));
        }

        if options.preflight {
            for (selector, pairs) in PREFLIGHT {
                let declarations: Vec<Declaration> = pairs
                    .iter()
                    .map(|(property, value)| Declaration::new(*property, *value))
                    .collect();
                rules.push(qualified(create_qualified_rule(selector, &declarations, minify)));
            }
        }

        rules.extend(self.base.iter().map(|rule| qualified(rule.build(minify))));

        for (bp, bucket) in &self.responsive {
            rules.push(media(&breakpoint_condition(*bp), bucket, minify));
        }

        for ((mode, bp), bucket) in &self.fallback {
            rules.push(media(&mode_media_query(*mode, *bp), bucket, minify));
        }

        rules
    }
}

fn qualified(rule: QualifiedRule) -> Rule {
    Rule::QualifiedRule(Box::new(rule))
}

fn media(query: &str, bucket: &[CssRule], minify: bool) -> Rule {
    let rules = bucket.iter().map(|rule| rule.build(minify)).collect();
    Rule::AtRule(Box::new(create_media_rule(query, rules, minify)))
}

/// 生成完整样式表
///
/// `tokens` 为 (类名, 规则组) 列表，按给定顺序输出；没有规则组的类名被跳过。
pub fn emit(
    theme: &Theme,
    tokens: &[(String, Vec<RuleGroup>)],
    options: &EmitOptions,
) -> Result<String, std::fmt::Error> {
    let mut layout = Layout::default();
    for (token, groups) in tokens {
        let ctx = ClassContext::from_groups(token.as_str(), groups);
        if !ctx.is_empty() {
            layout.place(&ctx);
        }
    }

    let rules = layout.into_rules(theme, options);
    log::trace!("emitting {} top-level rules", rules.len());
    emit_css(&create_stylesheet(rules), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    /// 折叠空白、去掉 `{ } ; :` 两侧的空白和块内最后一个分号，
    /// 使比较不依赖代码生成器的排版细节
    fn normalize(css: &str) -> String {
        let collapsed: Vec<char> = css.split_whitespace().collect::<Vec<_>>().join(" ").chars().collect();
        let mut out = String::with_capacity(collapsed.len());
        for (idx, &ch) in collapsed.iter().enumerate() {
            if ch == ' ' {
                let prev = if idx > 0 { collapsed[idx - 1] } else { ' ' };
                let next = collapsed.get(idx + 1).copied().unwrap_or(' ');
                if "{};:".contains(prev) || "{};:".contains(next) {
                    continue;
                }
            }
            out.push(ch);
        }
        out.replace(";}", "}")
    }

    fn empty_theme() -> Theme {
        Theme {
            colors: IndexMap::new(),
            spacing: IndexMap::new(),
            font_size: IndexMap::new(),
            border_radius: IndexMap::new(),
            shadows: IndexMap::new(),
            max_width: IndexMap::new(),
        }
    }

    fn bare() -> EmitOptions {
        EmitOptions {
            preflight: false,
            ..EmitOptions::default()
        }
    }

    fn emit_tokens(tokens: &[&str], options: &EmitOptions) -> String {
        let resolver = Resolver::new(Theme::defaults(), IndexMap::new());
        let resolved: Vec<_> = tokens
            .iter()
            .map(|t| (t.to_string(), resolver.resolve(t)))
            .collect();
        emit(&empty_theme(), &resolved, options).unwrap()
    }

    #[test]
    fn test_base_and_breakpoint_layout() {
        let css = emit_tokens(&["flex", "sm:block", "sm:hidden"], &bare());
        assert_eq!(
            normalize(&css),
            normalize(
                r#".flex { display: flex; }
                @media (min-width: 640px) {
                  .sm\:block { display: block; }
                  .sm\:hidden { display: none; }
                }"#
            )
        );
    }

    #[test]
    fn test_breakpoints_ascending() {
        let css = emit_tokens(&["2xl:flex", "md:flex", "sm:flex"], &bare());
        let sm = css.find("640px").unwrap();
        let md = css.find("768px").unwrap();
        let xxl = css.find("1536px").unwrap();
        assert!(sm < md && md < xxl);
        assert_eq!(css.matches("@media").count(), 3);
    }

    #[test]
    fn test_dark_mode_in_place_and_fallback() {
        let css = emit_tokens(&["dark:text-white"], &bare());
        assert_eq!(
            normalize(&css),
            normalize(
                r#"[data-theme="dark"] .dark\:text-white { color: #ffffff; }
                @media (prefers-color-scheme: dark) {
                  :root:not([data-theme="light"]) .dark\:text-white { color: #ffffff; }
                }"#
            )
        );
    }

    #[test]
    fn test_mode_with_breakpoint() {
        let css = normalize(&emit_tokens(&["md:light:hidden"], &bare()));
        assert!(css.contains(&normalize(
            r#"@media (min-width: 768px) { [data-theme="light"] .md\:light\:hidden {"#
        )));
        assert!(css.contains(&normalize(
            r#"@media (prefers-color-scheme: light) and (min-width: 768px) {
              :root:not([data-theme="dark"]) .md\:light\:hidden {"#
        )));
    }

    #[test]
    fn test_minified() {
        let options = EmitOptions {
            minify: true,
            ..bare()
        };
        let css = emit_tokens(&["p-4", "md:hover:p-2"], &options);
        assert!(!css.contains('\n'));
        assert!(css.contains(".p-4{padding:1rem"));
        assert_eq!(
            normalize(&css),
            normalize(r".p-4{padding:1rem}@media (min-width: 768px){.md\:hover\:p-2:hover{padding:0.5rem}}")
        );
    }

    #[test]
    fn test_indent_width() {
        let options = EmitOptions {
            indent: 4,
            ..bare()
        };
        let css = emit_tokens(&["flex"], &options);
        assert!(css.contains("\n    display: flex"));
    }

    #[test]
    fn test_root_variables_first() {
        let resolver = Resolver::new(Theme::defaults(), IndexMap::new());
        let css = emit(
            &Theme::defaults(),
            &[("flex".to_string(), resolver.resolve("flex"))],
            &EmitOptions::default(),
        )
        .unwrap();
        assert!(css.starts_with(":root"));
        assert!(normalize(&css).contains("--color-white:#ffffff"));
        assert!(css.find(":root").unwrap() < css.find(".flex").unwrap());
    }

    #[test]
    fn test_preflight_between_root_and_utilities() {
        let resolver = Resolver::new(Theme::defaults(), IndexMap::new());
        let css = emit(
            &Theme::defaults(),
            &[("flex".to_string(), resolver.resolve("flex"))],
            &EmitOptions::default(),
        )
        .unwrap();

        let root = css.find(":root").unwrap();
        let reset = css.find("*, ::before, ::after").unwrap();
        let button = css.find("button").unwrap();
        let flex = css.find(".flex").unwrap();
        assert!(root < reset && reset < button && button < flex);
        assert!(normalize(&css).contains("box-sizing:border-box"));
        assert!(normalize(&css).contains("font-family:Inter, ui-sans-serif, system-ui, sans-serif"));
    }

    #[test]
    fn test_preflight_can_be_disabled() {
        let css = emit_tokens(&["flex"], &bare());
        assert!(!css.contains("box-sizing"));

        let css = emit_tokens(&[], &EmitOptions::default());
        assert!(css.contains("box-sizing"));
    }

    #[test]
    fn test_unresolved_tokens_skipped() {
        let css = emit_tokens(&["totally-bogus-class"], &bare());
        assert_eq!(css.trim(), "");
    }

    #[test]
    fn test_malformed_token_does_not_break_stylesheet() {
        let css = emit_tokens(&["w-[1px;}body{display:none]", "flex"], &bare());
        assert!(!css.contains("body"));
        assert_eq!(normalize(&css), normalize(".flex { display: flex; }"));
    }

    #[test]
    fn test_pinned_variants_emit_each_selector() {
        let css = normalize(&emit_tokens(&["ring-starlight"], &bare()));
        assert!(css.contains(".ring-starlight:focus{"));
        assert!(css.contains(".ring-starlight:focus-visible{"));
    }

    #[test]
    fn test_group_hover_selector() {
        let css = normalize(&emit_tokens(&["group-hover:text-white"], &bare()));
        assert!(css.starts_with(r".group:hover .group-hover\:text-white{"));
    }

    #[test]
    fn test_space_selector() {
        let css = normalize(&emit_tokens(&["space-y-4"], &bare()));
        assert_eq!(css, ".space-y-4 > * + *{margin-top:1rem}");
    }

    #[test]
    fn test_idempotent() {
        let tokens = ["flex", "sm:hidden", "-mt-4", "bg-blue-500/50", "hover:bg-blue-600"];
        let a = emit_tokens(&tokens, &EmitOptions::default());
        let b = emit_tokens(&tokens, &EmitOptions::default());
        assert_eq!(a, b);
    }
}
