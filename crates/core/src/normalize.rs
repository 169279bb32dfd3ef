use std::collections::BTreeSet;

/// 规范化类名列表
///
/// 功能：
/// 1. 合并所有输入，按空白拆分
/// 2. 去除空字符串
/// 3. 去重
/// 4. 排序（字典序，保证输出可复现）
pub fn normalize_tokens<I, S>(inputs: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = BTreeSet::new();

    for input in inputs {
        extend_tokens(&mut unique, input.as_ref());
    }

    unique
}

/// 把一个 class 属性值中的 token 加入已有集合
pub fn extend_tokens(set: &mut BTreeSet<String>, class_value: &str) {
    for token in class_value.split_whitespace() {
        if !set.contains(token) {
            set.insert(token.to_string());
        }
    }
}
