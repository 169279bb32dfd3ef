use super::{FamilyContext, Resolution, UtilityFamily};
use crate::utility_map::{get_properties, property_prefixes};
use crate::value_map::{fraction_percent, is_css_length, numeric_spacing, size_keyword};
use quantum_parse::arbitrary_value;

/// 外边距、内边距、定位偏移、尺寸、间隙
///
/// 前缀与属性来自工具类表中的前缀形式条目。
/// 值的查找顺序：任意值 → 专用主题表 / 关键字 → 间距表 → 分数 → 长度透传。
pub struct SpacingFamily;

impl UtilityFamily for SpacingFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        property_prefixes().map(|(name, _)| name).collect()
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution> {
        let properties = get_properties(prefix)?;
        let resolved = size_value(ctx, prefix, value)?;
        Some(Resolution::spread(properties, &resolved).negatable())
    }
}

/// `space-x-*` / `space-y-*`：子元素间距
///
/// 选择器为 `.<token> > * + *`。
pub struct SpaceFamily;

impl UtilityFamily for SpaceFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["space-x", "space-y"]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution> {
        let property = match prefix {
            "space-x" => "margin-left",
            "space-y" => "margin-top",
            _ => return None,
        };
        let gap = spacing_value(ctx, value)?;
        Some(
            Resolution::single(property, gap)
                .negatable()
                .with_tail(" > * + *"),
        )
    }
}

/// 间距表查找，缺失时按 `n * 0.25rem` 计算
fn spacing_value(ctx: &FamilyContext<'_>, value: &str) -> Option<String> {
    if let Some(content) = arbitrary_value(value) {
        return Some(content);
    }
    ctx.theme
        .spacing
        .get(value)
        .cloned()
        .or_else(|| numeric_spacing(value))
}

fn size_value(ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    if let Some(content) = arbitrary_value(value) {
        return Some(content);
    }

    if prefix == "max-w" {
        if let Some(width) = ctx.theme.max_width.get(value) {
            return Some(width.clone());
        }
    }

    let vertical = matches!(prefix, "h" | "min-h" | "max-h");
    if let Some(keyword) = size_keyword(value, vertical) {
        // 主题中同名键（如 px）优先
        if let Some(themed) = ctx.theme.spacing.get(value) {
            return Some(themed.clone());
        }
        return Some(keyword.to_string());
    }

    if let Some(spacing) = spacing_value(ctx, value) {
        return Some(spacing);
    }

    if let Some(percent) = fraction_percent(value) {
        return Some(percent);
    }

    is_css_length(value).then(|| value.to_string())
}
