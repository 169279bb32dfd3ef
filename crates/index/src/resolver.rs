//! 类名 → 规则组
//!
//! 解析顺序：前缀剥离 → 预设展开 → 固定条目 → 动态前缀类族 → 取负。

use crate::family::{FamilyContext, FamilyRegistry};
use crate::rule::RuleGroup;
use crate::utility_map::{lookup, UtilityEntry};
use crate::variant::apply_variant;
use indexmap::IndexMap;
use quantum_core::naming::class_selector;
use quantum_core::{ColorTable, Config, Declaration, Theme};
use quantum_parse::{parse_class, ParsedClass};
use std::collections::HashSet;

/// 类名解析器
///
/// 持有一次生成所需的主题、颜色表、组件预设和类族注册表。
pub struct Resolver {
    theme: Theme,
    colors: ColorTable,
    presets: IndexMap<String, String>,
    families: FamilyRegistry,
}

impl Resolver {
    pub fn new(theme: Theme, presets: IndexMap<String, String>) -> Self {
        let colors = ColorTable::from_theme(&theme);
        Self {
            theme,
            colors,
            presets,
            families: FamilyRegistry::with_defaults(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolved_theme(), config.component_presets.clone())
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// 注册自定义类族
    pub fn families_mut(&mut self) -> &mut FamilyRegistry {
        &mut self.families
    }

    /// 解析单个类名；无法识别时返回空
    pub fn resolve(&self, token: &str) -> Vec<RuleGroup> {
        let mut seen = HashSet::new();
        self.resolve_chain(token, &mut seen)
            .into_iter()
            .map(|group| attach_custom_selector(group, token))
            .collect()
    }

    /// 预设展开：用户预设优先于内置预设
    fn preset(&self, name: &str) -> Option<&str> {
        if let Some(expansion) = self.presets.get(name) {
            return Some(expansion.as_str());
        }
        match lookup(name)? {
            UtilityEntry::Preset(expansion) => Some(*expansion),
            _ => None,
        }
    }

    fn resolve_chain(&self, token: &str, seen: &mut HashSet<String>) -> Vec<RuleGroup> {
        let parsed = match parse_class(token) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("skip token '{}': {}", token, err);
                return Vec::new();
            }
        };

        if let Some(expansion) = self.preset(&parsed.base) {
            if parsed.negative {
                return Vec::new();
            }
            if !seen.insert(parsed.base.clone()) {
                log::debug!("preset cycle at '{}'", parsed.base);
                return Vec::new();
            }
            let groups: Vec<RuleGroup> = expansion
                .split_whitespace()
                .flat_map(|sub| self.resolve_chain(sub, seen))
                .collect();
            seen.remove(&parsed.base);
            return inherit_outer(groups, &parsed);
        }

        match lookup(&parsed.base) {
            Some(UtilityEntry::Decl(pairs)) if !parsed.negative => {
                vec![RuleGroup::for_class(&parsed, static_declarations(pairs))]
            }
            Some(UtilityEntry::Pinned(pairs, variants)) if !parsed.negative => {
                let base = RuleGroup::for_class(&parsed, static_declarations(pairs));
                if parsed.variant.is_some() {
                    vec![base]
                } else {
                    variants
                        .iter()
                        .map(|variant| base.clone().with_variant(Some(*variant)))
                        .collect()
                }
            }
            _ => self.resolve_dynamic(&parsed).into_iter().collect(),
        }
    }

    fn resolve_dynamic(&self, parsed: &ParsedClass) -> Option<RuleGroup> {
        let (prefix, value) = self.families.split(&parsed.base)?;
        let family = self.families.get(prefix)?;
        let ctx = FamilyContext {
            theme: &self.theme,
            colors: &self.colors,
        };
        let resolution = family.resolve(&ctx, prefix, value)?;

        let declarations = if parsed.negative {
            if !resolution.negatable {
                return None;
            }
            resolution
                .declarations
                .into_iter()
                .map(|decl| Declaration::new(decl.property, negate_value(&decl.value)))
                .collect()
        } else {
            resolution.declarations
        };

        Some(RuleGroup::for_class(parsed, declarations).with_tail(resolution.selector_tail))
    }
}

/// 外层修饰符只补到子规则组未指定的维度上
///
/// `md:card` 展开后，`hover:bg-x` 保留自身的 hover，断点取外层的 md。
pub fn inherit_outer(groups: Vec<RuleGroup>, outer: &ParsedClass) -> Vec<RuleGroup> {
    groups
        .into_iter()
        .map(|mut group| {
            group.breakpoint = group.breakpoint.or(outer.breakpoint);
            group.mode = group.mode.or(outer.mode);
            group.variant = group.variant.or(outer.variant);
            group
        })
        .collect()
}

/// 数值与长度取负；颜色和关键字保持不变
///
/// - `1rem` → `-1rem`，`-4px` → `4px`
/// - `calc()`、`var()` 等数学函数 → `calc(-1 * <值>)`
/// - 单个数值参数的函数 → 参数取负，如 `scale(0.5)` → `scale(-0.5)`
pub fn negate_value(value: &str) -> String {
    if starts_numeric(value) {
        return format!("-{}", value);
    }
    if let Some(rest) = value.strip_prefix('-').filter(|rest| starts_numeric(rest)) {
        return rest.to_string();
    }
    if let Some((name, args)) = split_function(value) {
        if MATH_FUNCTIONS.contains(&name) {
            return format!("calc(-1 * {})", value);
        }
        let single = !args.contains(',') && !args.contains(char::is_whitespace);
        if single && (starts_numeric(args) || args.starts_with('-')) {
            return format!("{}({})", name, negate_value(args));
        }
    }
    value.to_string()
}

/// 结果仍是数值的函数，整体乘以 -1
const MATH_FUNCTIONS: &[&str] = &["calc", "var", "min", "max", "clamp", "env"];

fn starts_numeric(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

/// `name(args)` → (name, args)
fn split_function(value: &str) -> Option<(&str, &str)> {
    let open = value.find('(')?;
    let args = value[open + 1..].strip_suffix(')')?;
    let name = &value[..open];
    let is_name = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    is_name.then_some((name, args))
}

fn static_declarations(pairs: &[(&str, &str)]) -> Vec<Declaration> {
    pairs
        .iter()
        .map(|(property, value)| Declaration::new(*property, *value))
        .collect()
}

/// 带组合器的规则组由最外层类名生成完整选择器
fn attach_custom_selector(mut group: RuleGroup, token: &str) -> RuleGroup {
    if group.custom_selector.is_some() {
        return group;
    }
    if let Some(tail) = group.selector_tail {
        let selector = class_selector(token);
        let selector = match group.variant {
            Some(variant) => apply_variant(&selector, variant),
            None => selector,
        };
        group.custom_selector = Some(format!("{}{}", selector, tail));
    }
    group
}
