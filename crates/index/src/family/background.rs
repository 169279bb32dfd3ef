use super::{FamilyContext, Resolution, UtilityFamily};
use crate::value_map::GRADIENT_DIRECTION;
use quantum_core::{ColorTable, Declaration};
use quantum_parse::arbitrary_value;

/// `bg-*`：背景色、`bg-gradient-to-*`、`bg-none`
pub struct BackgroundFamily;

impl UtilityFamily for BackgroundFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["bg"]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        if value == "none" {
            return Some(Resolution::single("background-image", "none"));
        }

        if let Some(dir) = value.strip_prefix("gradient-to-") {
            let direction = GRADIENT_DIRECTION.get(dir)?;
            return Some(Resolution::single(
                "background-image",
                format!("linear-gradient({}, var(--gradient-stops, {}))", direction, DEFAULT_STOPS),
            ));
        }

        let color = arbitrary_value(value).or_else(|| ctx.colors.resolve(value))?;
        Some(Resolution::single("background-color", color))
    }
}

/// 未写 `from-*` / `via-*` 时的停靠点列表，缺失的端点取透明
const DEFAULT_STOPS: &str = "var(--gradient-from, transparent), var(--gradient-to, transparent)";

/// 渐变停靠点 `from-*` / `via-*` / `to-*`
///
/// 写入 `--gradient-from` / `--gradient-to` / `--gradient-stops`，
/// 由 `bg-gradient-to-*` 组合成 linear-gradient。任意子集都能组合：
/// 引用的变量要么在同一规则中定义，要么带透明回退。
/// `via-*` 不写 `--gradient-to`，类名按字典序输出时 `to-*` 在它之前。
pub struct GradientStopFamily;

impl UtilityFamily for GradientStopFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["from", "via", "to"]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, prefix: &str, value: &str) -> Option<Resolution> {
        let color = arbitrary_value(value).or_else(|| ctx.colors.resolve(value))?;

        let declarations = match prefix {
            "from" => vec![
                Declaration::new("--gradient-from", color.as_str()),
                Declaration::new("--gradient-to", ColorTable::transparent_of(&color)),
                Declaration::new("--gradient-stops", "var(--gradient-from), var(--gradient-to)"),
            ],
            "via" => vec![Declaration::new(
                "--gradient-stops",
                format!(
                    "var(--gradient-from, transparent), {}, var(--gradient-to, transparent)",
                    color
                ),
            )],
            "to" => vec![Declaration::new("--gradient-to", color)],
            _ => return None,
        };

        Some(Resolution::new(declarations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::test_support::{pairs, Fixture};

    #[test]
    fn test_background_color() {
        let fx = Fixture::new();
        let r = BackgroundFamily.resolve(&fx.ctx(), "bg", "blue-500/50").unwrap();
        assert_eq!(
            pairs(&r),
            vec![("background-color", "rgba(59, 130, 246, 0.5)")]
        );
        let r = BackgroundFamily.resolve(&fx.ctx(), "bg", "starlight-deep").unwrap();
        assert_eq!(pairs(&r), vec![("background-color", "#08081a")]);
    }

    #[test]
    fn test_background_gradient_and_none() {
        let fx = Fixture::new();
        let r = BackgroundFamily
            .resolve(&fx.ctx(), "bg", "gradient-to-br")
            .unwrap();
        assert_eq!(
            pairs(&r),
            vec![(
                "background-image",
                "linear-gradient(to bottom right, var(--gradient-stops, \
                 var(--gradient-from, transparent), var(--gradient-to, transparent)))"
            )]
        );
        let r = BackgroundFamily.resolve(&fx.ctx(), "bg", "none").unwrap();
        assert_eq!(pairs(&r), vec![("background-image", "none")]);
        assert!(BackgroundFamily
            .resolve(&fx.ctx(), "bg", "gradient-to-nowhere")
            .is_none());
    }

    #[test]
    fn test_background_unknown_color() {
        let fx = Fixture::new();
        assert!(BackgroundFamily.resolve(&fx.ctx(), "bg", "bogus-500").is_none());
    }

    #[test]
    fn test_gradient_from() {
        let fx = Fixture::new();
        let r = GradientStopFamily
            .resolve(&fx.ctx(), "from", "blue-500")
            .unwrap();
        assert_eq!(
            pairs(&r),
            vec![
                ("--gradient-from", "#3b82f6"),
                ("--gradient-to", "rgba(59, 130, 246, 0)"),
                ("--gradient-stops", "var(--gradient-from), var(--gradient-to)"),
            ]
        );
    }

    #[test]
    fn test_gradient_via_and_to() {
        let fx = Fixture::new();
        let r = GradientStopFamily
            .resolve(&fx.ctx(), "via", "starlight-peach")
            .unwrap();
        assert_eq!(
            pairs(&r),
            vec![(
                "--gradient-stops",
                "var(--gradient-from, transparent), #ffb38a, var(--gradient-to, transparent)"
            )]
        );

        let r = GradientStopFamily.resolve(&fx.ctx(), "to", "current").unwrap();
        assert_eq!(pairs(&r), vec![("--gradient-to", "currentColor")]);
    }

    #[test]
    fn test_gradient_non_hex_stop_uses_transparent() {
        let fx = Fixture::new();
        let r = GradientStopFamily
            .resolve(&fx.ctx(), "from", "current")
            .unwrap();
        assert_eq!(r.declarations[1].value, "transparent");
    }

    /// `var(--x)` 引用：要么同一组声明里定义了 `--x`，要么带回退值
    fn undefined_references(declarations: &[Declaration]) -> Vec<String> {
        let mut missing = Vec::new();
        for decl in declarations {
            let mut rest = decl.value.as_str();
            while let Some(start) = rest.find("var(") {
                rest = &rest[start + 4..];
                let end = rest.find(&[',', ')'][..]).unwrap_or(rest.len());
                let name = &rest[..end];
                let has_fallback = rest[end..].starts_with(',');
                let defined = declarations.iter().any(|d| d.property == name);
                if !has_fallback && !defined {
                    missing.push(name.to_string());
                }
            }
        }
        missing
    }

    #[test]
    fn test_gradient_any_subset_composes() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        let bg = BackgroundFamily.resolve(&ctx, "bg", "gradient-to-r").unwrap();
        let stops = [
            GradientStopFamily.resolve(&ctx, "from", "blue-500").unwrap(),
            GradientStopFamily.resolve(&ctx, "via", "red-500").unwrap(),
            GradientStopFamily.resolve(&ctx, "to", "green-500").unwrap(),
        ];

        for mask in 0..8u8 {
            let mut declarations = bg.declarations.clone();
            for (idx, stop) in stops.iter().enumerate() {
                if mask & (1 << idx) != 0 {
                    declarations.extend(stop.declarations.iter().cloned());
                }
            }
            assert!(
                undefined_references(&declarations).is_empty(),
                "subset {:03b} leaves {:?} undefined",
                mask,
                undefined_references(&declarations)
            );
        }
    }

    #[test]
    fn test_gradient_via_keeps_to_color() {
        let fx = Fixture::new();
        let r = GradientStopFamily.resolve(&fx.ctx(), "via", "red-500").unwrap();
        assert!(r.declarations.iter().all(|d| d.property != "--gradient-to"));
    }
}
