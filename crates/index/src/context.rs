use crate::rule::{GroupKey, RuleGroup};
use crate::variant::apply_variant;
use indexmap::IndexMap;
use quantum_core::merge::merge_declarations;
use quantum_core::naming::class_selector;
use quantum_core::Declaration;

/// CSS 类上下文 - 收集某个类名的所有规则组
///
/// 按 (断点, 主题模式, 状态, 自定义选择器) 分组，相同键的声明合并到一起，
/// 保持首次出现的顺序
#[derive(Debug, Clone)]
pub struct ClassContext {
    /// 原始类名（未转义）
    pub token: String,
    groups: IndexMap<GroupKey, Vec<Declaration>>,
}

impl ClassContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            groups: IndexMap::new(),
        }
    }

    /// 由解析结果构建上下文
    pub fn from_groups(token: impl Into<String>, groups: &[RuleGroup]) -> Self {
        let mut ctx = Self::new(token);
        for group in groups {
            ctx.write(group);
        }
        ctx
    }

    /// 写入规则组，同键的声明追加到已有组
    pub fn write(&mut self, group: &RuleGroup) {
        self.groups
            .entry(group.key())
            .or_default()
            .extend(group.declarations.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// 组内选择器（不含主题模式前缀）
    pub fn selector(&self, key: &GroupKey) -> String {
        if let Some(custom) = &key.custom_selector {
            return custom.clone();
        }
        let selector = class_selector(&self.token);
        match key.variant {
            Some(variant) => apply_variant(&selector, variant),
            None => selector,
        }
    }

    /// 按首次出现顺序遍历 (键, 合并后的声明)
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, Vec<Declaration>)> + '_ {
        self.groups
            .iter()
            .filter(|(_, decls)| !decls.is_empty())
            .map(|(key, decls)| (key, merge_declarations(decls.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_parse::{Breakpoint, Variant};

    #[test]
    fn test_context_basic() {
        let mut ctx = ClassContext::new("my-class");
        ctx.write(&RuleGroup::new(vec![Declaration::new("padding", "1rem")]));

        let groups: Vec<_> = ctx.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(ctx.selector(groups[0].0), ".my-class");
        assert_eq!(groups[0].1, vec![Declaration::new("padding", "1rem")]);
    }

    #[test]
    fn test_context_merge_same_key() {
        let hover = |decl| RuleGroup::new(vec![decl]).with_variant(Some(Variant::Hover));
        let mut ctx = ClassContext::new("my-class");
        ctx.write(&hover(Declaration::new("padding", "1rem")));
        ctx.write(&hover(Declaration::new("margin", "0.5rem")));
        ctx.write(&hover(Declaration::new("padding", "2rem")));

        let groups: Vec<_> = ctx.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(ctx.selector(groups[0].0), ".my-class:hover");
        assert_eq!(
            groups[0].1,
            vec![
                Declaration::new("padding", "2rem"),
                Declaration::new("margin", "0.5rem"),
            ]
        );
    }

    #[test]
    fn test_context_keeps_first_seen_order() {
        let mut md = RuleGroup::new(vec![Declaration::new("display", "block")]);
        md.breakpoint = Some(Breakpoint::Md);
        let base = RuleGroup::new(vec![Declaration::new("display", "flex")]);

        let ctx = ClassContext::from_groups("md:x", &[md, base]);
        let keys: Vec<_> = ctx.groups().map(|(key, _)| key.breakpoint).collect();
        assert_eq!(keys, vec![Some(Breakpoint::Md), None]);
    }

    #[test]
    fn test_custom_selector_verbatim() {
        let mut group = RuleGroup::new(vec![Declaration::new("margin-top", "1rem")]);
        group.custom_selector = Some(".space-y-4 > * + *".to_string());
        let ctx = ClassContext::from_groups("space-y-4", &[group]);

        let (key, _) = ctx.groups().next().unwrap();
        assert_eq!(ctx.selector(key), ".space-y-4 > * + *");
    }

    #[test]
    fn test_empty_context() {
        let ctx = ClassContext::from_groups("bogus", &[]);
        assert!(ctx.is_empty());
    }
}
