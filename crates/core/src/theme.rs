//! 主题存储：默认设计 token + 用户 `theme.extend` 合并
//!
//! 每个类别都是有序映射（IndexMap），保证 `:root` 变量块的输出顺序稳定。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 颜色值：平铺的单色，或按色阶嵌套的色板
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// `"primary": "#3b82f6"`
    Flat(String),
    /// `"gray": { "50": "#f9fafb", ... }`
    Scale(IndexMap<String, String>),
}

/// 合并后的主题
///
/// 所有类别始终存在（可能为空），解析器无需处理缺失类别。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: IndexMap<String, ColorValue>,
    pub spacing: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub max_width: IndexMap<String, String>,
}

/// 用户配置中的 `theme.extend`
///
/// 未识别的类别由 serde 直接忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeExtend {
    pub colors: IndexMap<String, ColorValue>,
    pub spacing: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub max_width: IndexMap<String, String>,
}

/// `:root` 变量前缀，顺序即输出顺序
pub const VARIABLE_PREFIXES: [(&str, &str); 6] = [
    ("colors", "--color-"),
    ("spacing", "--spacing-"),
    ("fontSize", "--font-size-"),
    ("borderRadius", "--radius-"),
    ("shadows", "--shadow-"),
    ("maxWidth", "--max-width-"),
];

impl Theme {
    /// 内置默认主题
    pub fn defaults() -> Self {
        let mut colors = IndexMap::new();
        for (name, value) in DEFAULT_FLAT_COLORS {
            colors.insert(name.to_string(), ColorValue::Flat(value.to_string()));
        }
        for (name, shades) in DEFAULT_COLOR_SCALES {
            colors.insert(name.to_string(), ColorValue::Scale(to_map(shades)));
        }

        Self {
            colors,
            spacing: to_map(DEFAULT_SPACING),
            font_size: to_map(DEFAULT_FONT_SIZE),
            border_radius: to_map(DEFAULT_BORDER_RADIUS),
            shadows: to_map(DEFAULT_SHADOWS),
            max_width: to_map(DEFAULT_MAX_WIDTH),
        }
    }

    /// 在默认主题之上合并用户扩展
    pub fn merged(defaults: Theme, extend: &ThemeExtend) -> Theme {
        let mut theme = defaults;
        merge_category(&mut theme.colors, &extend.colors);
        merge_category(&mut theme.spacing, &extend.spacing);
        merge_category(&mut theme.font_size, &extend.font_size);
        merge_category(&mut theme.border_radius, &extend.border_radius);
        merge_category(&mut theme.shadows, &extend.shadows);
        merge_category(&mut theme.max_width, &extend.max_width);
        theme
    }

    /// 把整个主题递归展平成 `(变量名, 值)` 列表，用于生成 `:root` 块
    ///
    /// 嵌套色板展开为 `--color-<name>-<shade>`。
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();

        for (category, prefix) in VARIABLE_PREFIXES {
            match category {
                "colors" => {
                    for (name, value) in &self.colors {
                        flatten_color(&mut vars, prefix, name, value);
                    }
                }
                _ => {
                    if let Some(map) = self.scalar_category(category) {
                        for (key, value) in map {
                            vars.push((
                                crate::naming::custom_property_name(prefix, key),
                                value.clone(),
                            ));
                        }
                    }
                }
            }
        }

        vars
    }

    /// 按 camelCase 类别名取非颜色类别
    pub fn scalar_category(&self, category: &str) -> Option<&IndexMap<String, String>> {
        match category {
            "spacing" => Some(&self.spacing),
            "fontSize" => Some(&self.font_size),
            "borderRadius" => Some(&self.border_radius),
            "shadows" => Some(&self.shadows),
            "maxWidth" => Some(&self.max_width),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::defaults()
    }
}

/// 按键合并：同名覆盖（保留原位置），新键追加到末尾
fn merge_category<V: Clone>(base: &mut IndexMap<String, V>, extend: &IndexMap<String, V>) {
    for (key, value) in extend {
        base.insert(key.clone(), value.clone());
    }
}

fn flatten_color(vars: &mut Vec<(String, String)>, prefix: &str, name: &str, value: &ColorValue) {
    match value {
        ColorValue::Flat(color) => {
            vars.push((crate::naming::custom_property_name(prefix, name), color.clone()));
        }
        ColorValue::Scale(shades) => {
            for (shade, color) in shades {
                let key = format!("{}-{}", name, shade);
                vars.push((crate::naming::custom_property_name(prefix, &key), color.clone()));
            }
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ── 默认 token ──────────────────────────────────────────────────────────────

const DEFAULT_FLAT_COLORS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("transparent", "transparent"),
    ("current", "currentColor"),
];

const DEFAULT_COLOR_SCALES: &[(&str, &[(&str, &str)])] = &[
    (
        "gray",
        &[
            ("50", "#f9fafb"),
            ("100", "#f3f4f6"),
            ("200", "#e5e7eb"),
            ("300", "#d1d5db"),
            ("400", "#9ca3af"),
            ("500", "#6b7280"),
            ("600", "#4b5563"),
            ("700", "#374151"),
            ("800", "#1f2937"),
            ("900", "#111827"),
        ],
    ),
    (
        "blue",
        &[
            ("50", "#eff6ff"),
            ("100", "#dbeafe"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
        ],
    ),
    ("red", &[("500", "#ef4444"), ("600", "#dc2626")]),
    ("green", &[("500", "#10b981"), ("600", "#059669")]),
    ("purple", &[("500", "#a855f7"), ("600", "#9333ea")]),
    (
        "starlight",
        &[
            ("blue", "#00d4ff"),
            ("peach", "#ffb38a"),
            ("orange", "#ff7e5f"),
            ("deep", "#08081a"),
        ],
    ),
];

const DEFAULT_SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("8", "2rem"),
    ("10", "2.5rem"),
    ("12", "3rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("32", "8rem"),
    ("64", "16rem"),
    ("128", "32rem"),
    ("144", "36rem"),
];

const DEFAULT_FONT_SIZE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "2rem"),
    ("4xl", "2.5rem"),
    ("5xl", "3.5rem"),
    ("6xl", "4.5rem"),
];

const DEFAULT_BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const DEFAULT_SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

const DEFAULT_MAX_WIDTH: &[(&str, &str)] = &[
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("prose", "65ch"),
    ("screen-sm", "640px"),
    ("screen-md", "768px"),
    ("screen-lg", "1024px"),
    ("screen-xl", "1280px"),
];
