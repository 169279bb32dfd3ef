pub mod context;
pub mod css;
pub mod emitter;
pub mod family;
pub mod resolver;
pub mod rule;
pub mod utility_map;
pub mod value_map;
pub mod variant;

// Re-export main types
pub use context::ClassContext;
pub use emitter::{emit, EmitOptions};
pub use family::{FamilyContext, FamilyRegistry, Resolution, UtilityFamily};
pub use resolver::{inherit_outer, negate_value, Resolver};
pub use rule::{GroupKey, RuleGroup};
