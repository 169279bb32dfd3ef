use super::{is_integer, FamilyContext, Resolution, UtilityFamily};
use crate::value_map::{
    format_number, opacity_value, BLUR_SIZE, TRANSITION_DURATION, TRANSITION_PROPERTY,
    TRANSITION_TIMING,
};
use quantum_core::Declaration;
use quantum_parse::arbitrary_value;

/// `shadow*` → box-shadow
///
/// 裸 `shadow` 取 `DEFAULT`，未知键回退到 `md`。
pub struct ShadowFamily;

impl UtilityFamily for ShadowFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["shadow"]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        if let Some(content) = arbitrary_value(value) {
            return Some(Resolution::single("box-shadow", content));
        }

        let key = if value.is_empty() { "DEFAULT" } else { value };
        let shadows = &ctx.theme.shadows;
        let shadow = shadows.get(key).or_else(|| shadows.get("md"))?;
        Some(Resolution::single("box-shadow", shadow.clone()))
    }
}

/// `scale-*` → transform: scale(n / 100)，可取负
pub struct ScaleFamily;

impl UtilityFamily for ScaleFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["scale"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let factor = if is_integer(value) {
            let n: u32 = value.parse().ok()?;
            format_number(n as f64 / 100.0)
        } else {
            arbitrary_value(value)?
        };
        Some(Resolution::single("transform", format!("scale({})", factor)).negatable())
    }
}

/// `transition-*`：属性 + 默认缓动与时长
pub struct TransitionFamily;

impl UtilityFamily for TransitionFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["transition"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        if value == "none" {
            return Some(Resolution::single("transition-property", "none"));
        }

        let property = TRANSITION_PROPERTY
            .get(value)
            .map(|p| p.to_string())
            .or_else(|| arbitrary_value(value))?;

        Some(Resolution::new(vec![
            Declaration::new("transition-property", property),
            Declaration::new("transition-timing-function", TRANSITION_TIMING),
            Declaration::new("transition-duration", TRANSITION_DURATION),
        ]))
    }
}

/// `duration-*` → transition-duration（毫秒）
pub struct DurationFamily;

impl UtilityFamily for DurationFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["duration"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let duration = if is_integer(value) {
            format!("{}ms", value)
        } else {
            arbitrary_value(value)?
        };
        Some(Resolution::single("transition-duration", duration))
    }
}

/// `opacity-*` → opacity
pub struct OpacityFamily;

impl UtilityFamily for OpacityFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["opacity"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let opacity = opacity_value(value).or_else(|| arbitrary_value(value))?;
        Some(Resolution::single("opacity", opacity))
    }
}

/// `backdrop-blur*` → backdrop-filter（含 -webkit- 前缀）
pub struct BackdropBlurFamily;

impl UtilityFamily for BackdropBlurFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["backdrop-blur"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let radius = BLUR_SIZE
            .get(value)
            .map(|r| r.to_string())
            .or_else(|| arbitrary_value(value))?;
        let filter = format!("blur({})", radius);
        Some(Resolution::spread(
            &["-webkit-backdrop-filter", "backdrop-filter"],
            &filter,
        ))
    }
}
