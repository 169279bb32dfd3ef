//! 颜色解析：展平色板、不透明度后缀、hex → rgba

use crate::theme::{ColorValue, Theme};
use indexmap::IndexMap;

/// 展平后的颜色表
///
/// 键为 `name` 或 `name-shade`；嵌套色板额外把裸名字指向 `DEFAULT` 或 `500` 色阶。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: IndexMap<String, String>,
}

impl ColorTable {
    pub fn from_theme(theme: &Theme) -> Self {
        let mut entries = IndexMap::new();

        for (name, value) in &theme.colors {
            match value {
                ColorValue::Flat(color) => {
                    entries.insert(name.clone(), color.clone());
                }
                ColorValue::Scale(shades) => {
                    for (shade, color) in shades {
                        entries.insert(format!("{}-{}", name, shade), color.clone());
                    }
                    let alias = shades.get("DEFAULT").or_else(|| shades.get("500"));
                    if let Some(color) = alias {
                        // 用户显式给出的平铺同名键优先
                        entries.entry(name.clone()).or_insert_with(|| color.clone());
                    }
                }
            }
        }

        Self { entries }
    }

    /// 精确查找，不处理不透明度
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 解析颜色引用
    ///
    /// - `blue-500` → 表中原值
    /// - `blue-500/50` → `rgba(59, 130, 246, 0.5)`（仅 hex 颜色可带不透明度）
    pub fn resolve(&self, key: &str) -> Option<String> {
        if let Some(color) = self.get(key) {
            return Some(color.to_string());
        }

        let (base, opacity) = key.split_once('/')?;
        let alpha = parse_opacity(opacity)?;
        let color = self
            .get(base)
            .or_else(|| self.get(&format!("{}-500", base)))?;

        hex_to_rgba(color, alpha)
    }

    /// 渐变停靠点使用的透明色：同一 hex 颜色的 alpha = 0 版本
    pub fn transparent_of(color: &str) -> String {
        hex_to_rgba(color, 0.0).unwrap_or_else(|| "transparent".to_string())
    }
}

/// 解析 `0..=100` 的百分比并换算为 `[0, 1]` 的 alpha
fn parse_opacity(raw: &str) -> Option<f64> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let percent: f64 = raw.parse().ok()?;
    if percent > 100.0 {
        return None;
    }
    Some(percent / 100.0)
}

/// 解析 `#rgb` / `#rrggbb`
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// hex 颜色转 `rgba(r, g, b, a)`，非 hex 输入返回 None
pub fn hex_to_rgba(color: &str, alpha: f64) -> Option<String> {
    let (r, g, b) = parse_hex(color)?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(alpha)))
}

/// alpha 输出不带多余的尾随零：`0.5`、`0.05`、`1`
pub fn format_alpha(alpha: f64) -> String {
    let clamped = alpha.clamp(0.0, 1.0);
    let rounded = (clamped * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}
