use std::collections::BTreeSet;

/// HTML class 属性提取：扫描源码中的 class="..." 属性，
/// 返回每个属性的原始值。
///
/// 使用简单的状态机解析，避免引入正则依赖。
/// 支持双引号和单引号，单次线性扫描。
pub fn class_values(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut values = Vec::new();
    let mut i = 0;

    while i < len {
        if !matches_class_attr(bytes, i) {
            i += 1;
            continue;
        }

        // 跳过 "class"
        i += 5;

        // 跳过可选空白
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        // 期望 '='
        if i >= len || bytes[i] != b'=' {
            continue;
        }
        i += 1;

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        // 期望引号
        if i >= len || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }
        let quote = bytes[i];
        i += 1;
        let value_start = i;

        // 查找匹配的闭合引号
        while i < len && bytes[i] != quote {
            i += 1;
        }

        // 未闭合的属性值直接丢弃
        if i < len {
            values.push(&source[value_start..i]);
            i += 1;
        }
    }

    values
}

/// 把源码中所有 class 属性里的 token 加入集合
pub fn extract_class_tokens(source: &str, tokens: &mut BTreeSet<String>) {
    for value in class_values(source) {
        quantum_core::normalize::extend_tokens(tokens, value);
    }
}

/// 检查位置 i 是否为 class 属性开头
/// 匹配 "class" 后面跟空白或 '='（区别于 className、data-class 等）
fn matches_class_attr(bytes: &[u8], i: usize) -> bool {
    let len = bytes.len();

    // 前一个字符必须是空白或 '<'
    if i > 0 && !bytes[i - 1].is_ascii_whitespace() && bytes[i - 1] != b'<' {
        return false;
    }

    if i + 5 >= len || &bytes[i..i + 5] != b"class" {
        return false;
    }

    let next = bytes[i + 5];
    next == b'=' || next.is_ascii_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<String> {
        let mut set = BTreeSet::new();
        extract_class_tokens(source, &mut set);
        set.into_iter().collect()
    }

    #[test]
    fn test_html_basic() {
        let html = r#"<div class="p-4 m-2">Hello</div>"#;
        assert_eq!(class_values(html), vec!["p-4 m-2"]);
        assert_eq!(tokens(html), vec!["m-2", "p-4"]);
    }

    #[test]
    fn test_html_single_quotes_and_spacing() {
        let html = "<div class = 'p-4  hover:bg-blue-600'>Hello</div>";
        assert_eq!(tokens(html), vec!["hover:bg-blue-600", "p-4"]);
    }

    #[test]
    fn test_html_multiple_elements_dedup() {
        let html = r#"<div class="p-4"><span class="text-center p-4">text</span></div>"#;
        assert_eq!(tokens(html), vec!["p-4", "text-center"]);
    }

    #[test]
    fn test_html_preserves_brackets_and_slashes() {
        let html = r#"<div class="w-[calc(100%-1rem)] bg-blue-500/50 grid-cols-[200px_1fr]">"#;
        assert_eq!(
            tokens(html),
            vec!["bg-blue-500/50", "grid-cols-[200px_1fr]", "w-[calc(100%-1rem)]"]
        );
    }

    #[test]
    fn test_html_ignores_other_attributes() {
        let html = r#"<div id="main" data-class="x" className="p-4" class="flex">content</div>"#;
        assert_eq!(class_values(html), vec!["flex"]);
    }

    #[test]
    fn test_html_unterminated_value() {
        let html = r#"<div class="flex p-4"#;
        assert!(class_values(html).is_empty());
    }

    #[test]
    fn test_html_multiline_attribute() {
        let html = "<div\n  class=\"flex\n    items-center\"\n>";
        assert_eq!(tokens(html), vec!["flex", "items-center"]);
    }

    #[test]
    fn test_html_non_ascii_content() {
        let html = r#"<p class="text-lg">你好，世界</p><b class="font-bold">✓</b>"#;
        assert_eq!(tokens(html), vec!["font-bold", "text-lg"]);
    }
}
