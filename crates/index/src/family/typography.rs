use super::{is_integer, looks_like_color, FamilyContext, Resolution, UtilityFamily};
use crate::value_map::{numeric_spacing, FONT_FAMILY, FONT_WEIGHT, LEADING, TRACKING};
use quantum_parse::arbitrary_value;

/// `text-*`：先查字号，再查颜色
pub struct TextFamily;

impl UtilityFamily for TextFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["text"]
    }

    fn resolve(&self, ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        if let Some(content) = arbitrary_value(value) {
            let property = if looks_like_color(&content) {
                "color"
            } else {
                "font-size"
            };
            return Some(Resolution::single(property, content));
        }

        if let Some(size) = ctx.theme.font_size.get(value) {
            return Some(Resolution::single("font-size", size.clone()));
        }

        let color = ctx.colors.resolve(value)?;
        Some(Resolution::single("color", color))
    }
}

/// `font-*`：字重或字体族
pub struct FontFamily;

impl UtilityFamily for FontFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["font"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        if let Some(weight) = FONT_WEIGHT.get(value) {
            return Some(Resolution::single("font-weight", *weight));
        }
        if let Some(family) = FONT_FAMILY.get(value) {
            return Some(Resolution::single("font-family", *family));
        }

        let content = arbitrary_value(value)?;
        let property = if is_integer(&content) {
            "font-weight"
        } else {
            "font-family"
        };
        Some(Resolution::single(property, content))
    }
}

/// `leading-*` → line-height
pub struct LeadingFamily;

impl UtilityFamily for LeadingFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["leading"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let height = LEADING
            .get(value)
            .map(|v| v.to_string())
            .or_else(|| numeric_spacing(value))
            .or_else(|| arbitrary_value(value))?;
        Some(Resolution::single("line-height", height))
    }
}

/// `tracking-*` → letter-spacing
pub struct TrackingFamily;

impl UtilityFamily for TrackingFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["tracking"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let spacing = TRACKING
            .get(value)
            .map(|v| v.to_string())
            .or_else(|| arbitrary_value(value))?;
        Some(Resolution::single("letter-spacing", spacing).negatable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::test_support::{pairs, Fixture};

    #[test]
    fn test_text_font_size_before_color() {
        let fx = Fixture::new();
        let r = TextFamily.resolve(&fx.ctx(), "text", "lg").unwrap();
        assert_eq!(pairs(&r), vec![("font-size", "1.125rem")]);
    }

    #[test]
    fn test_text_color_and_opacity() {
        let fx = Fixture::new();
        let r = TextFamily.resolve(&fx.ctx(), "text", "gray-500").unwrap();
        assert_eq!(pairs(&r), vec![("color", "#6b7280")]);

        let r = TextFamily.resolve(&fx.ctx(), "text", "white/80").unwrap();
        assert_eq!(pairs(&r), vec![("color", "rgba(255, 255, 255, 0.8)")]);
        assert!(!r.negatable);
    }

    #[test]
    fn test_text_arbitrary() {
        let fx = Fixture::new();
        let r = TextFamily.resolve(&fx.ctx(), "text", "[#ff0000]").unwrap();
        assert_eq!(pairs(&r), vec![("color", "#ff0000")]);
        let r = TextFamily.resolve(&fx.ctx(), "text", "[13px]").unwrap();
        assert_eq!(pairs(&r), vec![("font-size", "13px")]);
    }

    #[test]
    fn test_text_unknown() {
        let fx = Fixture::new();
        assert!(TextFamily.resolve(&fx.ctx(), "text", "bogus").is_none());
    }

    #[test]
    fn test_font() {
        let fx = Fixture::new();
        let r = FontFamily.resolve(&fx.ctx(), "font", "semibold").unwrap();
        assert_eq!(pairs(&r), vec![("font-weight", "600")]);
        let r = FontFamily.resolve(&fx.ctx(), "font", "mono").unwrap();
        assert_eq!(r.declarations[0].property, "font-family");
        let r = FontFamily.resolve(&fx.ctx(), "font", "[650]").unwrap();
        assert_eq!(pairs(&r), vec![("font-weight", "650")]);
        assert!(FontFamily.resolve(&fx.ctx(), "font", "chunky").is_none());
    }

    #[test]
    fn test_leading_and_tracking() {
        let fx = Fixture::new();
        let r = LeadingFamily.resolve(&fx.ctx(), "leading", "tight").unwrap();
        assert_eq!(pairs(&r), vec![("line-height", "1.25")]);
        let r = LeadingFamily.resolve(&fx.ctx(), "leading", "6").unwrap();
        assert_eq!(pairs(&r), vec![("line-height", "1.5rem")]);

        let r = TrackingFamily.resolve(&fx.ctx(), "tracking", "wider").unwrap();
        assert_eq!(pairs(&r), vec![("letter-spacing", "0.05em")]);
        assert!(TrackingFamily.resolve(&fx.ctx(), "tracking", "7").is_none());
    }
}
