use serde::{Deserialize, Serialize};
use std::fmt;

/// 解析后的类名 token
///
/// `md:hover:-mt-4` → breakpoint = Md, variant = Hover, negative = true, base = "mt-4"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 是否为负值（如 -mt-4）
    pub negative: bool,

    /// 响应式断点（多个时最后一个生效）
    pub breakpoint: Option<Breakpoint>,

    /// 主题模式（dark / light）
    pub mode: Option<ThemeMode>,

    /// 状态变体（多个时最后一个生效）
    pub variant: Option<Variant>,

    /// 去掉前缀和符号后的类名（如 bg-blue-500/50）
    pub base: String,
}

/// 响应式断点，按最小宽度升序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

/// 主题模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

/// 状态变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Hover,
    Focus,
    Active,
    FocusWithin,
    FocusVisible,
    Disabled,
    Placeholder,
    GroupHover,
    GroupFocus,
}

/// 前缀段的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Breakpoint(Breakpoint),
    Mode(ThemeMode),
    Variant(Variant),
}

impl ParsedClass {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            negative: false,
            breakpoint: None,
            mode: None,
            variant: None,
            base: base.into(),
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }

    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// 是否带有任何前缀
    pub fn has_modifiers(&self) -> bool {
        self.breakpoint.is_some() || self.mode.is_some() || self.variant.is_some()
    }

    /// 规范化的 token 字符串
    ///
    /// 顺序固定为 breakpoint → mode → variant → 符号 → base。
    pub fn to_normalized_string(&self) -> String {
        let mut result = String::new();

        if let Some(bp) = self.breakpoint {
            result.push_str(bp.name());
            result.push(':');
        }
        if let Some(mode) = self.mode {
            result.push_str(mode.name());
            result.push(':');
        }
        if let Some(variant) = self.variant {
            result.push_str(variant.name());
            result.push(':');
        }
        if self.negative {
            result.push('-');
        }
        result.push_str(&self.base);

        result
    }
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "2xl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl ThemeMode {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// 另一种模式（用于 `:root:not([data-theme="..."])` 回退）
    pub fn opposite(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl Variant {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "hover" => Some(Variant::Hover),
            "focus" => Some(Variant::Focus),
            "active" => Some(Variant::Active),
            "focus-within" => Some(Variant::FocusWithin),
            "focus-visible" => Some(Variant::FocusVisible),
            "disabled" => Some(Variant::Disabled),
            "placeholder" => Some(Variant::Placeholder),
            "group-hover" => Some(Variant::GroupHover),
            "group-focus" => Some(Variant::GroupFocus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Hover => "hover",
            Variant::Focus => "focus",
            Variant::Active => "active",
            Variant::FocusWithin => "focus-within",
            Variant::FocusVisible => "focus-visible",
            Variant::Disabled => "disabled",
            Variant::Placeholder => "placeholder",
            Variant::GroupHover => "group-hover",
            Variant::GroupFocus => "group-focus",
        }
    }

    /// 是否作用于祖先 `.group` 而非元素自身
    pub fn is_group(&self) -> bool {
        matches!(self, Variant::GroupHover | Variant::GroupFocus)
    }
}

impl Modifier {
    /// 从前缀段推断修饰符类型，不认识的段返回 None
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(bp) = Breakpoint::from_name(s) {
            return Some(Modifier::Breakpoint(bp));
        }
        if let Some(mode) = ThemeMode::from_name(s) {
            return Some(Modifier::Mode(mode));
        }
        Variant::from_name(s).map(Modifier::Variant)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ParsedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_normalized_string())
    }
}

/// 提取任意值 `[...]` 的内容
///
/// 任意值中的 `_` 会转换为空格，`\_` 保留为字面下划线。
/// 不是方括号包裹的输入返回 None；内容含 `;`、`{`、`}` 时同样返回 None，
/// 这些字符会截断声明块。
///
/// ```
/// use quantum_parse::arbitrary_value;
///
/// assert_eq!(arbitrary_value("[13px]").as_deref(), Some("13px"));
/// assert_eq!(arbitrary_value("[0_0_4px_red]").as_deref(), Some("0 0 4px red"));
/// assert_eq!(arbitrary_value("4"), None);
/// ```
pub fn arbitrary_value(raw: &str) -> Option<String> {
    let stripped = raw.strip_prefix('[')?.strip_suffix(']')?;
    if stripped.is_empty() || stripped.contains(&[';', '{', '}'][..]) {
        return None;
    }
    Some(convert_underscores(stripped))
}

/// 将任意值中的下划线转换为空格
fn convert_underscores(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'_') {
            chars.next();
            result.push('_');
        } else if ch == '_' {
            result.push(' ');
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_classification() {
        assert_eq!(
            Modifier::from_str("md"),
            Some(Modifier::Breakpoint(Breakpoint::Md))
        );
        assert_eq!(
            Modifier::from_str("2xl"),
            Some(Modifier::Breakpoint(Breakpoint::Xxl))
        );
        assert_eq!(
            Modifier::from_str("dark"),
            Some(Modifier::Mode(ThemeMode::Dark))
        );
        assert_eq!(
            Modifier::from_str("group-hover"),
            Some(Modifier::Variant(Variant::GroupHover))
        );
        assert_eq!(Modifier::from_str("visited"), None);
        assert_eq!(Modifier::from_str("bg-red-500"), None);
    }

    #[test]
    fn test_breakpoint_order() {
        let mut bps = vec![Breakpoint::Xl, Breakpoint::Sm, Breakpoint::Xxl, Breakpoint::Md];
        bps.sort();
        assert_eq!(
            bps,
            vec![Breakpoint::Sm, Breakpoint::Md, Breakpoint::Xl, Breakpoint::Xxl]
        );
    }

    #[test]
    fn test_names_round_trip() {
        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::from_name(bp.name()), Some(bp));
        }
        assert_eq!(Variant::FocusWithin.to_string(), "focus-within");
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
    }

    #[test]
    fn test_parsed_class_normalization() {
        let class = ParsedClass::new("mt-4")
            .with_breakpoint(Breakpoint::Md)
            .with_mode(ThemeMode::Dark)
            .with_variant(Variant::Hover)
            .with_negative(true);

        assert_eq!(class.to_normalized_string(), "md:dark:hover:-mt-4");
        assert!(class.has_modifiers());
        assert!(!ParsedClass::new("flex").has_modifiers());
    }

    #[test]
    fn test_arbitrary_value_underscores() {
        assert_eq!(arbitrary_value("[a_b\\_c_d]").as_deref(), Some("a b_c d"));
        assert_eq!(arbitrary_value("[#ff0000]").as_deref(), Some("#ff0000"));
        assert_eq!(arbitrary_value("[]"), None);
        assert_eq!(arbitrary_value("[13px"), None);
    }

    #[test]
    fn test_arbitrary_value_rejects_block_delimiters() {
        assert_eq!(arbitrary_value("[1px;}body{display:none]"), None);
        assert_eq!(arbitrary_value("[red;color:blue]"), None);
        assert_eq!(arbitrary_value("[{x}]"), None);
    }
}
