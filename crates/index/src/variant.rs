//! Variant name → CSS selector/at-rule resolver
//!
//! Breakpoints, state variants and theme modes each map to a different
//! piece of CSS. This module is the single source of truth for that mapping.

use phf::phf_map;
use quantum_parse::{Breakpoint, ThemeMode, Variant};

/// Minimum viewport width per responsive breakpoint.
static BREAKPOINT_MIN_WIDTH: phf::Map<&'static str, &'static str> = phf_map! {
    "sm" => "640px",
    "md" => "768px",
    "lg" => "1024px",
    "xl" => "1280px",
    "2xl" => "1536px",
};

/// Selector suffix appended to the element's own class selector.
static PSEUDO_SUFFIX: phf::Map<&'static str, &'static str> = phf_map! {
    "hover" => ":hover",
    "focus" => ":focus",
    "active" => ":active",
    "focus-within" => ":focus-within",
    "focus-visible" => ":focus-visible",
    "disabled" => ":disabled",
    "placeholder" => "::placeholder",
};

/// Pseudo-class applied to the `.group` ancestor.
static GROUP_PSEUDO: phf::Map<&'static str, &'static str> = phf_map! {
    "group-hover" => ":hover",
    "group-focus" => ":focus",
};

/// Returns the min-width value for a breakpoint, e.g. `Md` → `"768px"`.
pub fn breakpoint_width(bp: Breakpoint) -> &'static str {
    // every Breakpoint has an entry; fall back to the smallest one
    BREAKPOINT_MIN_WIDTH.get(bp.name()).copied().unwrap_or("640px")
}

/// Generates the media condition for a breakpoint.
///
/// - `Sm` → `"(min-width: 640px)"`
pub fn breakpoint_condition(bp: Breakpoint) -> String {
    format!("(min-width: {})", breakpoint_width(bp))
}

/// Applies a state variant to a class selector.
///
/// - `(".a", Hover)` → `".a:hover"`
/// - `(".a", Placeholder)` → `".a::placeholder"`
/// - `(".a", GroupHover)` → `".group:hover .a"`
pub fn apply_variant(selector: &str, variant: Variant) -> String {
    if let Some(pseudo) = GROUP_PSEUDO.get(variant.name()) {
        return format!(".group{} {}", pseudo, selector);
    }
    match PSEUDO_SUFFIX.get(variant.name()) {
        Some(suffix) => format!("{}{}", selector, suffix),
        None => selector.to_string(),
    }
}

/// Scopes a selector to an explicit theme attribute.
///
/// - `(".a", Dark)` → `"[data-theme=\"dark\"] .a"`
pub fn mode_selector(selector: &str, mode: ThemeMode) -> String {
    format!("[data-theme=\"{}\"] {}", mode.name(), selector)
}

/// Selector used inside the `prefers-color-scheme` fallback block.
///
/// The fallback must not fire when the page pins the opposite theme.
///
/// - `(".a", Dark)` → `":root:not([data-theme=\"light\"]) .a"`
pub fn mode_fallback_selector(selector: &str, mode: ThemeMode) -> String {
    format!(
        ":root:not([data-theme=\"{}\"]) {}",
        mode.opposite().name(),
        selector
    )
}

/// Media condition of the color-scheme fallback.
///
/// - `Dark` → `"(prefers-color-scheme: dark)"`
pub fn mode_condition(mode: ThemeMode) -> String {
    format!("(prefers-color-scheme: {})", mode.name())
}

/// Media query of the color-scheme fallback, optionally combined with a breakpoint.
///
/// - `(Dark, None)` → `"(prefers-color-scheme: dark)"`
/// - `(Dark, Some(Md))` → `"(prefers-color-scheme: dark) and (min-width: 768px)"`
pub fn mode_media_query(mode: ThemeMode, breakpoint: Option<Breakpoint>) -> String {
    match breakpoint {
        Some(bp) => format!("{} and {}", mode_condition(mode), breakpoint_condition(bp)),
        None => mode_condition(mode),
    }
}
