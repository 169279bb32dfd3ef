/// 需要在 CSS 标识符中转义的字符
///
/// 类名 token 可以含有 `sm:`、`/50`、`[13px]`、`0.5` 等片段，
/// 这些字符直接写进选择器会被解析成伪类、属性选择器或下一个类。
const SPECIAL_CHARS: &[char] = &[
    ':', '[', ']', '/', '.', '\\', '#', '%', '(', ')', ',', '!', '\'', '"', '+', '*', '&', '>', '~',
    '=', '@', ';', '{', '}',
];

/// 转义原始 token，使其可以作为 CSS 类选择器或自定义属性名的一部分
///
/// # 示例
///
/// ```
/// use quantum_core::naming::escape_ident;
///
/// assert_eq!(escape_ident("sm:hidden"), "sm\\:hidden");
/// assert_eq!(escape_ident("bg-blue-500/50"), "bg-blue-500\\/50");
/// ```
pub fn escape_ident(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 4);

    for ch in raw.chars() {
        if SPECIAL_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    escaped
}

/// 转义后的类名（不带前导点）
///
/// 以数字开头的 token（如 `2xl:flex`）首字符写成十六进制转义 `\32 `。
pub fn escape_class_name(token: &str) -> String {
    let escaped = escape_ident(token);
    match token.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("\\3{} {}", first, &escaped[1..]),
        _ => escaped,
    }
}

/// 生成类选择器（带前导点）
pub fn class_selector(token: &str) -> String {
    format!(".{}", escape_class_name(token))
}

/// 生成 CSS 自定义属性名，如 `("--color-", "blue-500")` → `--color-blue-500`
pub fn custom_property_name(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, escape_ident(key))
}
