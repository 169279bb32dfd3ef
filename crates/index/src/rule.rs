use quantum_core::Declaration;
use quantum_parse::{Breakpoint, ParsedClass, ThemeMode, Variant};

/// 单个类名解析出的一组声明及其作用条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub breakpoint: Option<Breakpoint>,
    pub mode: Option<ThemeMode>,
    pub variant: Option<Variant>,
    /// 完整选择器，设置后原样输出
    pub custom_selector: Option<String>,
    /// 由外层类名拼接选择器时追加的组合器
    pub selector_tail: Option<&'static str>,
    pub declarations: Vec<Declaration>,
}

/// 规则组的合并键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub breakpoint: Option<Breakpoint>,
    pub mode: Option<ThemeMode>,
    pub variant: Option<Variant>,
    pub custom_selector: Option<String>,
}

impl RuleGroup {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            breakpoint: None,
            mode: None,
            variant: None,
            custom_selector: None,
            selector_tail: None,
            declarations,
        }
    }

    /// 继承类名自身的断点、主题模式和状态
    pub fn for_class(parsed: &ParsedClass, declarations: Vec<Declaration>) -> Self {
        Self {
            breakpoint: parsed.breakpoint,
            mode: parsed.mode,
            variant: parsed.variant,
            ..Self::new(declarations)
        }
    }

    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_tail(mut self, tail: Option<&'static str>) -> Self {
        self.selector_tail = tail;
        self
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            breakpoint: self.breakpoint,
            mode: self.mode,
            variant: self.variant,
            custom_selector: self.custom_selector.clone(),
        }
    }
}
