use phf::phf_map;

/// 尺寸类关键字（非数字的特殊值）
///
/// 数字值（如 "7" → "1.75rem"）通过 `n * 0.25rem` 实时计算；
/// 分数（如 "1/3"）由 [`fraction_percent`] 计算。
static SIZE_KEYWORDS: phf::Map<&'static str, &'static str> = phf_map! {
    "px" => "1px",
    "auto" => "auto",
    "full" => "100%",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

/// 字重
pub static FONT_WEIGHT: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

/// `font-{family}` → font-family
pub static FONT_FAMILY: phf::Map<&'static str, &'static str> = phf_map! {
    "sans" => "Inter, ui-sans-serif, system-ui, sans-serif",
    "serif" => "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
    "mono" => "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace",
};

/// `leading-{key}` → line-height
pub static LEADING: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
};

/// `tracking-{key}` → letter-spacing
pub static TRACKING: phf::Map<&'static str, &'static str> = phf_map! {
    "tighter" => "-0.05em",
    "tight" => "-0.025em",
    "normal" => "0em",
    "wide" => "0.025em",
    "wider" => "0.05em",
    "widest" => "0.1em",
};

/// `backdrop-blur-{size}` → blur 半径，空键对应裸 `backdrop-blur`
pub static BLUR_SIZE: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "0",
    "sm" => "4px",
    "" => "8px",
    "md" => "12px",
    "lg" => "16px",
    "xl" => "24px",
    "2xl" => "40px",
    "3xl" => "64px",
};

/// `aspect-{key}` → aspect-ratio
pub static ASPECT_RATIO: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "auto",
    "square" => "1 / 1",
    "video" => "16 / 9",
};

/// `bg-gradient-to-{dir}` → linear-gradient 方向
pub static GRADIENT_DIRECTION: phf::Map<&'static str, &'static str> = phf_map! {
    "t" => "to top",
    "tr" => "to top right",
    "r" => "to right",
    "br" => "to bottom right",
    "b" => "to bottom",
    "bl" => "to bottom left",
    "l" => "to left",
    "tl" => "to top left",
};

/// `border-{style}` → border-style
pub static BORDER_STYLE: phf::Map<&'static str, &'static str> = phf_map! {
    "solid" => "solid",
    "dashed" => "dashed",
    "dotted" => "dotted",
    "double" => "double",
    "hidden" => "hidden",
    "none" => "none",
};

/// `transition-{key}` → transition-property
pub static TRANSITION_PROPERTY: phf::Map<&'static str, &'static str> = phf_map! {
    "all" => "all",
    "colors" => "color, background-color, border-color, text-decoration-color, fill, stroke",
    "opacity" => "opacity",
    "shadow" => "box-shadow",
    "transform" => "transform",
};

/// 过渡的默认时长与缓动
pub const TRANSITION_TIMING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const TRANSITION_DURATION: &str = "150ms";

/// 尺寸关键字；`screen` 依轴向取视口单位
pub fn size_keyword(key: &str, vertical: bool) -> Option<&'static str> {
    if key == "screen" {
        return Some(if vertical { "100vh" } else { "100vw" });
    }
    SIZE_KEYWORDS.get(key).copied()
}

/// 数字间距：`n * 0.25rem`，`0` 输出 `0px`
pub fn numeric_spacing(key: &str) -> Option<String> {
    let n = parse_non_negative(key)?;
    if n == 0.0 {
        return Some("0px".to_string());
    }
    Some(format!("{}rem", format_number(n * 0.25)))
}

/// 分数 → 百分比，保留两位小数（`1/3` → `33.33%`）
pub fn fraction_percent(key: &str) -> Option<String> {
    let (num, den) = key.split_once('/')?;
    let num: u32 = num.parse().ok()?;
    let den: u32 = den.parse().ok()?;
    if den == 0 {
        return None;
    }
    Some(format!("{:.2}%", num as f64 / den as f64 * 100.0))
}

/// 不透明度：0-100 的整数 → `n / 100`
pub fn opacity_value(key: &str) -> Option<String> {
    let n: u32 = key.parse().ok()?;
    if n > 100 {
        return None;
    }
    Some(format_number(n as f64 / 100.0))
}

/// 是否为可直接透传的 CSS 长度（数字 + 可选单位，如 `300px`、`50%`、`2.5em`）
pub fn is_css_length(value: &str) -> bool {
    let unit_start = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(unit_start);

    !number.is_empty()
        && number.parse::<f64>().is_ok()
        && (unit.is_empty() || unit == "%" || unit.chars().all(|c| c.is_ascii_lowercase()))
}

/// 去掉多余尾随零的数字格式化（`0.375`、`1.5`、`2`）
pub fn format_number(n: f64) -> String {
    let rounded = (n * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}

fn parse_non_negative(key: &str) -> Option<f64> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    key.parse().ok()
}
