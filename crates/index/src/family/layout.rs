use super::{is_integer, FamilyContext, Resolution, UtilityFamily};
use crate::value_map::ASPECT_RATIO;
use quantum_parse::arbitrary_value;

/// `z-*` → z-index
pub struct ZIndexFamily;

impl UtilityFamily for ZIndexFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["z"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let z = if value == "auto" || is_integer(value) {
            value.to_string()
        } else {
            arbitrary_value(value)?
        };
        Some(Resolution::single("z-index", z).negatable())
    }
}

/// `aspect-*` → aspect-ratio
pub struct AspectFamily;

impl UtilityFamily for AspectFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["aspect"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let ratio = ASPECT_RATIO
            .get(value)
            .map(|v| v.to_string())
            .or_else(|| arbitrary_value(value).map(|v| v.replace('/', " / ")))?;
        Some(Resolution::single("aspect-ratio", ratio))
    }
}

/// `grid-cols-*` → grid-template-columns
pub struct GridColsFamily;

impl UtilityFamily for GridColsFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["grid-cols"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let columns = match value {
            "none" => "none".to_string(),
            n if is_integer(n) && n != "0" => format!("repeat({}, minmax(0, 1fr))", n),
            other => arbitrary_value(other)?,
        };
        Some(Resolution::single("grid-template-columns", columns))
    }
}

/// `col-span-*` → grid-column
pub struct ColSpanFamily;

impl UtilityFamily for ColSpanFamily {
    fn prefixes(&self) -> Vec<&'static str> {
        vec!["col-span"]
    }

    fn resolve(&self, _ctx: &FamilyContext<'_>, _prefix: &str, value: &str) -> Option<Resolution> {
        let span = match value {
            "full" => "1 / -1".to_string(),
            n if is_integer(n) && n != "0" => format!("span {} / span {}", n, n),
            _ => return None,
        };
        Some(Resolution::single("grid-column", span))
    }
}
