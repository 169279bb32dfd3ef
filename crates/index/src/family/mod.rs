//! 动态前缀类族
//!
//! 每个类族负责一组前缀（如 `bg`、`rounded-t`），把值部分解析为声明。
//! 解析器按前缀在 [`FamilyRegistry`] 中分发。

use quantum_core::{ColorTable, Declaration, Theme};
use std::collections::HashMap;

mod background;
mod border;
mod effects;
mod layout;
mod spacing;
mod typography;

pub use background::{BackgroundFamily, GradientStopFamily};
pub use border::{BorderFamily, RoundedFamily};
pub use effects::{
    BackdropBlurFamily, DurationFamily, OpacityFamily, ScaleFamily, ShadowFamily,
    TransitionFamily,
};
pub use layout::{AspectFamily, ColSpanFamily, GridColsFamily, ZIndexFamily};
pub use spacing::{SpaceFamily, SpacingFamily};
pub use typography::{FontFamily, LeadingFamily, TextFamily, TrackingFamily};

/// 类族解析时可用的主题数据
#[derive(Debug, Clone, Copy)]
pub struct FamilyContext<'a> {
    pub theme: &'a Theme,
    pub colors: &'a ColorTable,
}

/// 类族的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub declarations: Vec<Declaration>,
    /// 是否接受 `-` 前缀取负
    pub negatable: bool,
    /// 附加在类选择器之后的组合器（如 ` > * + *`）
    pub selector_tail: Option<&'static str>,
}

impl Resolution {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            negatable: false,
            selector_tail: None,
        }
    }

    pub fn single(property: &str, value: impl Into<String>) -> Self {
        Self::new(vec![Declaration::new(property, value)])
    }

    /// 同一个值写入多个属性
    pub fn spread(properties: &[&str], value: &str) -> Self {
        Self::new(
            properties
                .iter()
                .map(|prop| Declaration::new(*prop, value))
                .collect(),
        )
    }

    pub fn negatable(mut self) -> Self {
        self.negatable = true;
        self
    }

    pub fn with_tail(mut self, tail: &'static str) -> Self {
        self.selector_tail = Some(tail);
        self
    }
}

/// 动态前缀类族
pub trait UtilityFamily {
    /// 该类族负责的前缀
    fn prefixes(&self) -> Vec<&'static str>;

    /// 解析值部分；`value` 可能为空（如裸 `shadow`）
    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution>;
}

/// 前缀 → 类族
pub struct FamilyRegistry {
    families: Vec<Box<dyn UtilityFamily>>,
    by_prefix: HashMap<&'static str, usize>,
}

impl FamilyRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self {
            families: Vec::new(),
            by_prefix: HashMap::new(),
        }
    }

    /// 注册全部内置类族
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextFamily));
        registry.register(Box::new(BackgroundFamily));
        registry.register(Box::new(GradientStopFamily));
        registry.register(Box::new(ZIndexFamily));
        registry.register(Box::new(AspectFamily));
        registry.register(Box::new(GridColsFamily));
        registry.register(Box::new(ColSpanFamily));
        registry.register(Box::new(SpaceFamily));
        registry.register(Box::new(RoundedFamily));
        registry.register(Box::new(ScaleFamily));
        registry.register(Box::new(TransitionFamily));
        registry.register(Box::new(DurationFamily));
        registry.register(Box::new(OpacityFamily));
        registry.register(Box::new(BackdropBlurFamily));
        registry.register(Box::new(SpacingFamily));
        registry.register(Box::new(ShadowFamily));
        registry.register(Box::new(BorderFamily));
        registry.register(Box::new(FontFamily));
        registry.register(Box::new(LeadingFamily));
        registry.register(Box::new(TrackingFamily));
        registry
    }

    /// 注册类族；前缀冲突时后注册者覆盖
    pub fn register(&mut self, family: Box<dyn UtilityFamily>) {
        let index = self.families.len();
        for prefix in family.prefixes() {
            if self.by_prefix.insert(prefix, index).is_some() {
                log::debug!("prefix '{}' re-registered", prefix);
            }
        }
        self.families.push(family);
    }

    pub fn get(&self, prefix: &str) -> Option<&dyn UtilityFamily> {
        let index = *self.by_prefix.get(prefix)?;
        self.families.get(index).map(|family| family.as_ref())
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.by_prefix.contains_key(prefix)
    }

    /// 把类名拆成 `(前缀, 值)`
    ///
    /// 依次尝试：任意值 `-[`、两段前缀（`max-w`、`space-x`）、整个类名作为前缀、
    /// 第一个 `-` 之前的单段前缀。
    pub fn split<'t>(&self, base: &'t str) -> Option<(&'t str, &'t str)> {
        if let Some(pos) = base.find("-[") {
            let prefix = &base[..pos];
            return self.contains(prefix).then(|| (prefix, &base[pos + 1..]));
        }

        let first = base.find('-');

        if let Some(first) = first {
            if let Some(second) = base[first + 1..].find('-') {
                let end = first + 1 + second;
                let prefix = &base[..end];
                if self.contains(prefix) {
                    return Some((prefix, &base[end + 1..]));
                }
            }
        }

        if self.contains(base) {
            return Some((base, ""));
        }

        let first = first?;
        let prefix = &base[..first];
        self.contains(prefix).then(|| (prefix, &base[first + 1..]))
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// 任意值是否看起来是颜色
pub(crate) fn looks_like_color(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("oklch")
        || value == "transparent"
        || value == "currentColor"
}

/// 纯数字（无符号整数）
pub(crate) fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
