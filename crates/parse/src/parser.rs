use crate::types::{Modifier, ParsedClass};
use thiserror::Error;

/// 解析类名 token
///
/// 支持的格式：
/// - 简单类：`flex`, `p-4`, `bg-red-500`
/// - 前缀：`hover:bg-blue-500`, `md:p-4`, `dark:text-white`
/// - 多前缀：`md:dark:hover:bg-blue-500`（同类前缀最后一个生效）
/// - 负值：`-mt-4`, `md:-top-1`
/// - 任意值：`w-[13px]`, `bg-[url(a:b)]`（方括号内的 `:` 不是分隔符）
///
/// # 示例
///
/// ```
/// use quantum_parse::{parse_class, Breakpoint, Variant};
///
/// let parsed = parse_class("md:hover:-mt-4").unwrap();
/// assert_eq!(parsed.breakpoint, Some(Breakpoint::Md));
/// assert_eq!(parsed.variant, Some(Variant::Hover));
/// assert!(parsed.negative);
/// assert_eq!(parsed.base, "mt-4");
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 批量解析空白分隔的类名，跳过无法解析的 token
pub fn parse_classes(input: &str) -> Vec<ParsedClass> {
    input
        .split_whitespace()
        .filter_map(|token| parse_class(token).ok())
        .collect()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("missing class name in '{0}'")]
    MissingBase(String),

    #[error("unmatched bracket in '{0}'")]
    UnmatchedBracket(String),
}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<ParsedClass, ParseError> {
        // 1. 前导负号
        let mut negative = self.consume_if('-');

        let mut parsed = ParsedClass::new(String::new());

        // 2. 前缀段（modifier:modifier:...）
        while let Some(end) = self.next_separator()? {
            let segment = &self.input[self.pos..end];
            match Modifier::from_str(segment) {
                Some(Modifier::Breakpoint(bp)) => parsed.breakpoint = Some(bp),
                Some(Modifier::Mode(mode)) => parsed.mode = Some(mode),
                Some(Modifier::Variant(variant)) => parsed.variant = Some(variant),
                // 第一个不认识的段开始类名，剩余部分原样保留
                None => break,
            }
            self.pos = end + 1;
        }

        // 3. 前缀之后的负号（md:-mt-4）
        if !negative {
            negative = self.consume_if('-');
        }

        let base = &self.input[self.pos..];
        if base.is_empty() {
            return Err(ParseError::MissingBase(self.input.to_string()));
        }

        parsed.negative = negative;
        parsed.base = base.to_string();
        Ok(parsed)
    }

    /// 找到下一个不在方括号内的 `:`
    ///
    /// 剩余部分没有分隔符时返回 None；方括号不配对时报错。
    fn next_separator(&self) -> Result<Option<usize>, ParseError> {
        let mut depth = 0usize;

        for (offset, ch) in self.input[self.pos..].char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => {
                    if depth == 0 {
                        return Err(ParseError::UnmatchedBracket(self.input.to_string()));
                    }
                    depth -= 1;
                }
                ':' if depth == 0 => return Ok(Some(self.pos + offset)),
                _ => {}
            }
        }

        if depth != 0 {
            return Err(ParseError::UnmatchedBracket(self.input.to_string()));
        }

        Ok(None)
    }

    /// 消费指定字符（如果存在）
    fn consume_if(&mut self, expected: char) -> bool {
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }
}
