//! SWC CSS AST 的构建与输出

pub mod emit;
pub mod ir;

pub use emit::emit_css;
pub use ir::{
    create_class_rule, create_media_rule, create_qualified_rule, create_swc_declaration,
    create_stylesheet,
};
