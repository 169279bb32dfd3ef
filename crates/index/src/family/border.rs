use super::{is_integer, looks_like_color, FamilyContext, Resolution, UtilityFamily};
use crate::value_map::{format_number, BORDER_STYLE};
use quantum_parse::arbitrary_value;

/// `rounded*` → border-radius
///
/// 值的查找顺序：任意值 → 主题 borderRadius → 数字 `n * 0.125rem`。
pub struct RoundedFamily;

impl RoundedFamily {
    fn properties(prefix: &str) -> Option<&'static [&'static str]> {
        let props: &'static [&'static str] = match prefix {
            "rounded" => &["border-radius"],
            "rounded-t" => &["border-top-left-radius", "border-top-right-radius"],
            "rounded-r" => &["border-top-right-radius", "border-bottom-right-radius"],
            "rounded-b" => &["border-bottom-right-radius", "border-bottom-left-radius"],
            "rounded-l" => &["border-top-left-radius", "border-bottom-left-radius"],
            "rounded-tl" => &["border-top-left-radius"],
            "rounded-tr" => &["border-top-right-radius"],
            "rounded-br" => &["border-bottom-right-radius"],
            "rounded-bl" => &["border-bottom-left-radius"],
            _ => return None,
        };
        Some(props)
    }
}

impl UtilityFamily for RoundedFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec![
            "rounded",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution> {
        let properties = Self::properties(prefix)?;

        let key = if value.is_empty() { "DEFAULT" } else { value };
        let radius = arbitrary_value(key)
            .or_else(|| ctx.theme.border_radius.get(key).cloned())
            .or_else(|| {
                let n = is_integer(key).then(|| key.parse::<u32>().ok())??;
                Some(format!("{}rem", format_number(n as f64 * 0.125)))
            })?;

        Some(Resolution::spread(properties, &radius))
    }
}

/// `border*`：颜色、宽度、样式
pub struct BorderFamily;

impl BorderFamily {
    fn sides(prefix: &str) -> Option<&'static [&'static str]> {
        let sides: &'static [&'static str] = match prefix {
            "border" => &[],
            "border-t" => &["top"],
            "border-r" => &["right"],
            "border-b" => &["bottom"],
            "border-l" => &["left"],
            "border-x" => &["left", "right"],
            "border-y" => &["top", "bottom"],
            _ => return None,
        };
        Some(sides)
    }
}

impl UtilityFamily for BorderFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec![
            "border", "border-t", "border-r", "border-b", "border-l", "border-x", "border-y",
        ]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution> {
        let sides = Self::sides(prefix)?;

        let property = |kind: &str| -> Vec<String> {
            if sides.is_empty() {
                vec![format!("border-{}", kind)]
            } else {
                sides
                    .iter()
                    .map(|side| format!("border-{}-{}", side, kind))
                    .collect()
            }
        };
        let build = |kind: &str, value: &str| {
            let props = property(kind);
            let refs: Vec<&str> = props.iter().map(String::as_str).collect();
            Resolution::spread(&refs, value)
        };

        if value.is_empty() {
            return Some(build("width", "1px"));
        }

        if let Some(color) = ctx.colors.resolve(value) {
            return Some(build("color", &color));
        }

        if is_integer(value) {
            return Some(build("width", &format!("{}px", value)));
        }

        if sides.is_empty() {
            if let Some(style) = BORDER_STYLE.get(value) {
                return Some(build("style", *style));
            }
        }

        let content = arbitrary_value(value)?;
        let kind = if looks_like_color(&content) {
            "color"
        } else {
            "width"
        };
        Some(build(kind, &content))
    }
}
