use quantum_core::Declaration;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    AtRule, AtRuleName, AtRulePrelude, ClassSelector, ComplexSelector, ComplexSelectorChildren,
    ComponentValue, CompoundSelector, Declaration as SwcDeclaration, DeclarationName, Ident,
    ListOfComponentValues, QualifiedRule, QualifiedRulePrelude, Rule, SelectorList, SimpleBlock,
    Stylesheet, SubclassSelector, Token, TokenAndSpan,
};

fn preserved(token: Token) -> ComponentValue {
    ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token,
    }))
}

/// 原样输出的文本片段
fn raw_text(text: &str) -> ComponentValue {
    preserved(Token::Ident {
        value: text.into(),
        raw: text.into(),
    })
}

fn whitespace() -> ComponentValue {
    preserved(Token::WhiteSpace { value: " ".into() })
}

fn brace_block(value: Vec<ComponentValue>) -> SimpleBlock {
    SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value,
    }
}

/// 解析 CSS 值字符串为组件值序列
///
/// 值由解析器和主题产生，已是合法的 CSS 文本：按空白切分，
/// 每段作为保留 token 原样输出，段间插入单个空格。
pub fn parse_css_value(value: &str) -> Vec<ComponentValue> {
    let mut values = Vec::new();
    for (idx, part) in value.split_whitespace().enumerate() {
        if idx > 0 {
            values.push(whitespace());
        }
        values.push(raw_text(part));
    }
    values
}

/// 去掉标识符中的反斜杠转义，得到标识符的值
fn unescape(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => value.extend(chars.next()),
            _ => value.push(ch),
        }
    }
    value
}

/// 从 quantum Declaration 创建 SWC CSS Declaration
///
/// 属性名可能已转义（如 `--spacing-0\.5`），原文写入 `raw`。
pub fn create_swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(Ident {
            span: DUMMY_SP,
            value: unescape(&decl.property).into(),
            raw: Some(decl.property.clone().into()),
        }),
        value: parse_css_value(&decl.value),
        important: None,
    }
}

fn declaration_block(declarations: &[Declaration]) -> SimpleBlock {
    brace_block(
        declarations
            .iter()
            .map(|decl| ComponentValue::Declaration(Box::new(create_swc_declaration(decl))))
            .collect(),
    )
}

/// 创建类选择器
///
/// `escaped` 为转义后的类名（不含 `.`）。
fn create_class_selector(token: &str, escaped: &str) -> ComplexSelector {
    let class_selector = ClassSelector {
        span: DUMMY_SP,
        text: Ident {
            span: DUMMY_SP,
            value: token.into(),
            raw: Some(escaped.into()),
        },
    };

    let compound_selector = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors: vec![SubclassSelector::Class(class_selector)],
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound_selector)],
    }
}

/// 单个类选择器的规则：`.<token> { ... }`
pub fn create_class_rule(token: &str, escaped: &str, declarations: &[Declaration]) -> QualifiedRule {
    let selector_list = SelectorList {
        span: DUMMY_SP,
        children: vec![create_class_selector(token, escaped)],
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(selector_list),
        block: declaration_block(declarations),
    }
}

/// 任意选择器文本的规则（状态、主题模式、组合选择器、`:root` 等）
pub fn create_qualified_rule(
    selector: &str,
    declarations: &[Declaration],
    minify: bool,
) -> QualifiedRule {
    let mut children = vec![raw_text(selector)];
    if !minify {
        children.push(whitespace());
    }

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::ListOfComponentValues(ListOfComponentValues {
            span: DUMMY_SP,
            children,
        }),
        block: declaration_block(declarations),
    }
}

/// `@media <query> { rules }`
pub fn create_media_rule(query: &str, rules: Vec<QualifiedRule>, minify: bool) -> AtRule {
    let mut prelude = vec![whitespace(), raw_text(query)];
    if !minify {
        prelude.push(whitespace());
    }

    AtRule {
        span: DUMMY_SP,
        name: AtRuleName::Ident(Ident {
            span: DUMMY_SP,
            value: "media".into(),
            raw: None,
        }),
        prelude: Some(Box::new(AtRulePrelude::ListOfComponentValues(
            ListOfComponentValues {
                span: DUMMY_SP,
                children: prelude,
            },
        ))),
        block: Some(brace_block(
            rules
                .into_iter()
                .map(|rule| ComponentValue::QualifiedRule(Box::new(rule)))
                .collect(),
        )),
    }
}

/// 由顶层规则构建样式表
pub fn create_stylesheet(rules: Vec<Rule>) -> Stylesheet {
    Stylesheet {
        span: DUMMY_SP,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_swc_declaration() {
        let decl = Declaration::new("padding", "1rem");
        let swc_decl = create_swc_declaration(&decl);

        match &swc_decl.name {
            DeclarationName::Ident(ident) => {
                assert_eq!(ident.value.as_ref(), "padding");
            }
            _ => panic!("Expected Ident"),
        }
        assert_eq!(swc_decl.value.len(), 1);
    }

    #[test]
    fn test_escaped_property_name() {
        let decl = Declaration::new("--spacing-0\\.5", "0.125rem");
        let swc_decl = create_swc_declaration(&decl);
        match &swc_decl.name {
            DeclarationName::Ident(ident) => {
                assert_eq!(ident.value.as_ref(), "--spacing-0.5");
                assert_eq!(ident.raw.as_deref(), Some("--spacing-0\\.5"));
            }
            _ => panic!("Expected Ident"),
        }
    }

    #[test]
    fn test_parse_css_value_keeps_spacing() {
        assert_eq!(parse_css_value("rgba(59, 130, 246, 0.5)").len(), 7);
        assert_eq!(parse_css_value("  flex ").len(), 1);
        assert!(parse_css_value("").is_empty());
    }

    #[test]
    fn test_class_rule() {
        let rule = create_class_rule("sm:flex", "sm\\:flex", &[Declaration::new("display", "flex")]);
        assert!(matches!(rule.prelude, QualifiedRulePrelude::SelectorList(_)));
        assert_eq!(rule.block.value.len(), 1);
    }

    #[test]
    fn test_media_rule_wraps_rules() {
        let inner = create_qualified_rule(".a:hover", &[Declaration::new("color", "red")], false);
        let media = create_media_rule("(min-width: 640px)", vec![inner], false);
        assert!(media.prelude.is_some());
        assert_eq!(media.block.map(|b| b.value.len()), Some(1));
    }

    #[test]
    fn test_create_stylesheet() {
        let a = create_qualified_rule(":root", &[Declaration::new("--x", "1")], true);
        let b = create_class_rule("p-4", "p-4", &[Declaration::new("padding", "1rem")]);
        let sheet = create_stylesheet(vec![
            Rule::QualifiedRule(Box::new(a)),
            Rule::QualifiedRule(Box::new(b)),
        ]);
        assert_eq!(sheet.rules.len(), 2);
    }
}
