use phf::phf_map;
use quantum_parse::Variant;

/// 工具类表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityEntry {
    /// 前缀形式：值来自主题查找（如 `mx` → margin-left + margin-right）
    Property(&'static [&'static str]),
    /// 固定声明
    Decl(&'static [(&'static str, &'static str)]),
    /// 固定声明，且绑定到一组状态变体（类名本身未带变体时生效）
    Pinned(&'static [(&'static str, &'static str)], &'static [Variant]),
    /// 预设：空白分隔的类名列表，递归展开
    Preset(&'static str),
}

/// 类名 → 工具类定义
///
/// 使用 phf 在编译期生成完美哈希表
static UTILITY_MAP: phf::Map<&'static str, UtilityEntry> = phf_map! {
    // Display
    "flex" => UtilityEntry::Decl(&[("display", "flex")]),
    "inline-flex" => UtilityEntry::Decl(&[("display", "inline-flex")]),
    "grid" => UtilityEntry::Decl(&[("display", "grid")]),
    "hidden" => UtilityEntry::Decl(&[("display", "none")]),
    "block" => UtilityEntry::Decl(&[("display", "block")]),
    "inline-block" => UtilityEntry::Decl(&[("display", "inline-block")]),
    "inline" => UtilityEntry::Decl(&[("display", "inline")]),

    // Position
    "static" => UtilityEntry::Decl(&[("position", "static")]),
    "fixed" => UtilityEntry::Decl(&[("position", "fixed")]),
    "absolute" => UtilityEntry::Decl(&[("position", "absolute")]),
    "relative" => UtilityEntry::Decl(&[("position", "relative")]),
    "sticky" => UtilityEntry::Decl(&[("position", "sticky")]),

    // Alignment
    "items-center" => UtilityEntry::Decl(&[("align-items", "center")]),
    "items-start" => UtilityEntry::Decl(&[("align-items", "flex-start")]),
    "items-end" => UtilityEntry::Decl(&[("align-items", "flex-end")]),
    "items-stretch" => UtilityEntry::Decl(&[("align-items", "stretch")]),
    "justify-center" => UtilityEntry::Decl(&[("justify-content", "center")]),
    "justify-between" => UtilityEntry::Decl(&[("justify-content", "space-between")]),
    "justify-around" => UtilityEntry::Decl(&[("justify-content", "space-around")]),
    "justify-start" => UtilityEntry::Decl(&[("justify-content", "flex-start")]),
    "justify-end" => UtilityEntry::Decl(&[("justify-content", "flex-end")]),

    // Flex
    "flex-row" => UtilityEntry::Decl(&[("flex-direction", "row")]),
    "flex-col" => UtilityEntry::Decl(&[("flex-direction", "column")]),
    "flex-grow" => UtilityEntry::Decl(&[("flex-grow", "1")]),
    "flex-1" => UtilityEntry::Decl(&[("flex", "1 1 0%")]),
    "flex-wrap" => UtilityEntry::Decl(&[("flex-wrap", "wrap")]),
    "flex-nowrap" => UtilityEntry::Decl(&[("flex-wrap", "nowrap")]),
    "shrink-0" => UtilityEntry::Decl(&[("flex-shrink", "0")]),

    // Sizing
    "min-h-screen" => UtilityEntry::Decl(&[("min-height", "100vh")]),
    "max-w-prose" => UtilityEntry::Decl(&[("max-width", "65ch")]),
    "mx-auto" => UtilityEntry::Decl(&[("margin-left", "auto"), ("margin-right", "auto")]),

    // Typography
    "text-center" => UtilityEntry::Decl(&[("text-align", "center")]),
    "text-left" => UtilityEntry::Decl(&[("text-align", "left")]),
    "text-right" => UtilityEntry::Decl(&[("text-align", "right")]),
    "uppercase" => UtilityEntry::Decl(&[("text-transform", "uppercase")]),
    "lowercase" => UtilityEntry::Decl(&[("text-transform", "lowercase")]),
    "italic" => UtilityEntry::Decl(&[("font-style", "italic")]),
    "underline" => UtilityEntry::Decl(&[("text-decoration-line", "underline")]),
    "truncate" => UtilityEntry::Decl(&[
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ]),

    // Borders
    "border" => UtilityEntry::Decl(&[("border-width", "1px")]),
    "border-t" => UtilityEntry::Decl(&[("border-top-width", "1px")]),
    "border-r" => UtilityEntry::Decl(&[("border-right-width", "1px")]),
    "border-b" => UtilityEntry::Decl(&[("border-bottom-width", "1px")]),
    "border-l" => UtilityEntry::Decl(&[("border-left-width", "1px")]),

    // Interactivity & states
    "transition" => UtilityEntry::Decl(&[("transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)")]),
    "scale-105" => UtilityEntry::Decl(&[("transform", "scale(1.05)")]),
    "active-scale" => UtilityEntry::Pinned(&[("transform", "scale(0.96)")], &[Variant::Active]),
    "ring-starlight" => UtilityEntry::Pinned(
        &[("outline", "none"), ("box-shadow", "0 0 0 3px rgba(0, 212, 255, 0.35)")],
        &[Variant::Focus, Variant::FocusVisible],
    ),
    "cursor-pointer" => UtilityEntry::Decl(&[("cursor", "pointer")]),
    "cursor-not-allowed" => UtilityEntry::Decl(&[("cursor", "not-allowed")]),
    "pointer-events-none" => UtilityEntry::Decl(&[("pointer-events", "none")]),
    "select-none" => UtilityEntry::Decl(&[("user-select", "none")]),
    "overflow-hidden" => UtilityEntry::Decl(&[("overflow", "hidden")]),
    "overflow-auto" => UtilityEntry::Decl(&[("overflow", "auto")]),

    // Starlight primitives
    "glass" => UtilityEntry::Decl(&[
        ("background-color", "rgba(255, 255, 255, 0.03)"),
        ("backdrop-filter", "blur(16px)"),
        ("-webkit-backdrop-filter", "blur(16px)"),
        ("border", "1px solid rgba(255, 255, 255, 0.1)"),
        ("box-shadow", "0 8px 32px 0 rgba(0, 0, 0, 0.37)"),
    ]),
    "glow-blue" => UtilityEntry::Decl(&[("box-shadow", "0 0 30px rgba(0, 212, 255, 0.25)")]),
    "bg-starlight" => UtilityEntry::Decl(&[
        ("background", "linear-gradient(135deg, #ffb38a 0%, #00d4ff 100%)"),
    ]),
    "text-gradient-starlight" => UtilityEntry::Decl(&[
        ("background", "linear-gradient(to right, #ffb38a, #00d4ff)"),
        ("-webkit-background-clip", "text"),
        ("-webkit-text-fill-color", "transparent"),
        ("display", "inline-block"),
    ]),

    // Components
    "btn-starlight" => UtilityEntry::Decl(&[
        ("background", "linear-gradient(135deg, #ffb38a 0%, #00d4ff 100%)"),
        ("color", "#000"),
        ("border", "none"),
        ("box-shadow", "0 0 20px rgba(0, 212, 255, 0.3)"),
        ("font-weight", "700"),
        ("transition", "all 0.2s ease"),
        ("height", "3rem"),
        ("padding", "0 1.5rem"),
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("border-radius", "0.75rem"),
        ("cursor", "pointer"),
    ]),
    "btn-secondary" => UtilityEntry::Decl(&[
        ("background", "rgba(255, 255, 255, 0.05)"),
        ("color", "inherit"),
        ("border", "1px solid rgba(255, 255, 255, 0.15)"),
        ("font-weight", "700"),
        ("transition", "all 0.2s ease"),
        ("height", "3rem"),
        ("padding", "0 1.5rem"),
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("border-radius", "0.75rem"),
        ("cursor", "pointer"),
    ]),
    "input-starlight" => UtilityEntry::Decl(&[
        ("background-color", "rgba(255, 255, 255, 0.04)"),
        ("border", "1px solid rgba(255, 255, 255, 0.15)"),
        ("color", "inherit"),
        ("border-radius", "0.75rem"),
        ("padding", "0 1rem"),
        ("transition", "all 0.2s ease"),
        ("height", "3rem"),
    ]),
    "checkbox-starlight" => UtilityEntry::Decl(&[
        ("appearance", "none"),
        ("width", "1.25rem"),
        ("height", "1.25rem"),
        ("background", "rgba(255, 255, 255, 0.05)"),
        ("border", "1px solid rgba(255, 255, 255, 0.2)"),
        ("border-radius", "0.375rem"),
        ("cursor", "pointer"),
        ("transition", "all 0.2s ease"),
        ("position", "relative"),
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
    ]),
    "radio-starlight" => UtilityEntry::Decl(&[
        ("appearance", "none"),
        ("width", "1.25rem"),
        ("height", "1.25rem"),
        ("background", "rgba(255, 255, 255, 0.05)"),
        ("border", "1px solid rgba(255, 255, 255, 0.2)"),
        ("border-radius", "50%"),
        ("cursor", "pointer"),
        ("transition", "all 0.2s ease"),
        ("position", "relative"),
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
    ]),
    "dialog-overlay" => UtilityEntry::Decl(&[
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100vw"),
        ("height", "100vh"),
        ("background", "rgba(0, 0, 0, 0.6)"),
        ("backdrop-filter", "blur(12px)"),
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("z-index", "400"),
    ]),
    "dialog-content" => UtilityEntry::Decl(&[
        ("background-color", "rgba(10, 10, 20, 0.98)"),
        ("backdrop-filter", "blur(20px)"),
        ("border", "1px solid rgba(255, 255, 255, 0.1)"),
        ("border-radius", "1.5rem"),
        ("width", "90%"),
        ("max-width", "600px"),
        ("box-shadow", "0 25px 50px -12px rgba(0, 0, 0, 0.5)"),
        ("overflow", "hidden"),
        ("position", "relative"),
    ]),
    "dropdown-menu" => UtilityEntry::Decl(&[
        ("background-color", "rgba(15, 15, 30, 0.98)"),
        ("backdrop-filter", "blur(20px)"),
        ("border", "1px solid rgba(255, 255, 255, 0.1)"),
        ("border-radius", "1rem"),
        ("padding", "0.5rem"),
        ("box-shadow", "0 20px 40px rgba(0,0,0,0.4)"),
        ("min-width", "200px"),
        ("z-index", "600"),
        ("margin-top", "0.5rem"),
    ]),
    "dropdown-item" => UtilityEntry::Decl(&[
        ("padding", "0.625rem 1rem"),
        ("color", "rgba(255,255,255,0.7)"),
        ("border-radius", "0.625rem"),
        ("display", "block"),
        ("width", "100%"),
        ("text-align", "left"),
        ("transition", "all 0.2s"),
        ("cursor", "pointer"),
        ("font-size", "0.875rem"),
    ]),
    "tooltip" => UtilityEntry::Decl(&[
        ("position", "absolute"),
        ("bottom", "125%"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("padding", "0.5rem 0.75rem"),
        ("background-color", "rgba(10, 10, 30, 0.98)"),
        ("backdrop-filter", "blur(12px)"),
        ("border", "1px solid rgba(0, 212, 255, 0.3)"),
        ("border-radius", "0.5rem"),
        ("color", "#f1f5f9"),
        ("font-size", "0.75rem"),
        ("white-space", "nowrap"),
        ("pointer-events", "none"),
        ("opacity", "0"),
        ("transition", "all 0.2s ease"),
        ("z-index", "800"),
        ("box-shadow", "0 4px 15px rgba(0, 0, 0, 0.4)"),
    ]),
    "skeleton" => UtilityEntry::Decl(&[
        ("background-color", "rgba(255, 255, 255, 0.1)"),
        ("background-image", "linear-gradient(90deg, transparent, rgba(255,255,255,0.15), transparent)"),
        ("background-size", "200% 100%"),
        ("background-repeat", "no-repeat"),
        ("border-radius", "0.5rem"),
        ("width", "100%"),
        ("height", "1rem"),
    ]),

    // Presets
    "btn" => UtilityEntry::Preset("btn-starlight active-scale"),
    "card" => UtilityEntry::Preset("glass rounded-xl p-6"),
    "center" => UtilityEntry::Preset("flex items-center justify-center"),
    "stack" => UtilityEntry::Preset("flex flex-col space-y-4"),

    // Spacing
    "m" => UtilityEntry::Property(&["margin"]),
    "mt" => UtilityEntry::Property(&["margin-top"]),
    "mr" => UtilityEntry::Property(&["margin-right"]),
    "mb" => UtilityEntry::Property(&["margin-bottom"]),
    "ml" => UtilityEntry::Property(&["margin-left"]),
    "mx" => UtilityEntry::Property(&["margin-left", "margin-right"]),
    "my" => UtilityEntry::Property(&["margin-top", "margin-bottom"]),
    "p" => UtilityEntry::Property(&["padding"]),
    "pt" => UtilityEntry::Property(&["padding-top"]),
    "pr" => UtilityEntry::Property(&["padding-right"]),
    "pb" => UtilityEntry::Property(&["padding-bottom"]),
    "pl" => UtilityEntry::Property(&["padding-left"]),
    "px" => UtilityEntry::Property(&["padding-left", "padding-right"]),
    "py" => UtilityEntry::Property(&["padding-top", "padding-bottom"]),
    "gap" => UtilityEntry::Property(&["gap"]),
    "gap-x" => UtilityEntry::Property(&["column-gap"]),
    "gap-y" => UtilityEntry::Property(&["row-gap"]),

    // Position offsets
    "top" => UtilityEntry::Property(&["top"]),
    "right" => UtilityEntry::Property(&["right"]),
    "bottom" => UtilityEntry::Property(&["bottom"]),
    "left" => UtilityEntry::Property(&["left"]),
    "inset" => UtilityEntry::Property(&["inset"]),
    "inset-x" => UtilityEntry::Property(&["left", "right"]),
    "inset-y" => UtilityEntry::Property(&["top", "bottom"]),

    // Sizing
    "w" => UtilityEntry::Property(&["width"]),
    "h" => UtilityEntry::Property(&["height"]),
    "min-w" => UtilityEntry::Property(&["min-width"]),
    "min-h" => UtilityEntry::Property(&["min-height"]),
    "max-w" => UtilityEntry::Property(&["max-width"]),
    "max-h" => UtilityEntry::Property(&["max-height"]),
};

/// 查找工具类
pub fn lookup(name: &str) -> Option<&'static UtilityEntry> {
    UTILITY_MAP.get(name)
}

/// 所有前缀形式的条目（供尺寸类族注册前缀）
pub fn property_prefixes() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    UTILITY_MAP.entries().filter_map(|(name, entry)| match entry {
        UtilityEntry::Property(props) => Some((*name, *props)),
        _ => None,
    })
}

/// 前缀对应的 CSS 属性列表
pub fn get_properties(prefix: &str) -> Option<&'static [&'static str]> {
    match UTILITY_MAP.get(prefix)? {
        UtilityEntry::Property(props) => Some(*props),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_static() {
        assert_eq!(
            lookup("flex"),
            Some(&UtilityEntry::Decl(&[("display", "flex")]))
        );
        assert!(lookup("totally-bogus-class").is_none());
    }

    #[test]
    fn test_pinned_variants() {
        match lookup("ring-starlight") {
            Some(UtilityEntry::Pinned(decls, variants)) => {
                assert_eq!(decls.len(), 2);
                assert_eq!(*variants, &[Variant::Focus, Variant::FocusVisible][..]);
            }
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_presets_reference_known_classes() {
        assert!(matches!(lookup("card"), Some(UtilityEntry::Preset(_))));
        assert!(matches!(lookup("center"), Some(UtilityEntry::Preset(_))));
    }

    #[test]
    fn test_property_prefixes() {
        assert_eq!(get_properties("mx"), Some(&["margin-left", "margin-right"][..]));
        assert_eq!(get_properties("flex"), None);
        let prefixes: Vec<_> = property_prefixes().map(|(name, _)| name).collect();
        assert!(prefixes.contains(&"max-w"));
        assert!(prefixes.contains(&"inset-x"));
    }
}
