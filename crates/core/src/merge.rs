use crate::types::Declaration;
use indexmap::IndexMap;

/// 合并 CSS 声明
///
/// 功能：
/// - 同一属性出现多次时，后者覆盖前者（与浏览器层叠结果一致）
/// - 保持稳定输出顺序（使用 IndexMap，位置取首次出现处）
///
/// 预设展开后多个子类落到同一选择器时，由发射器调用。
pub fn merge_declarations(decls: Vec<Declaration>) -> Vec<Declaration> {
    let mut map: IndexMap<String, String> = IndexMap::new();

    for decl in decls {
        map.insert(decl.property, decl.value);
    }

    map.into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}
