/// 基本使用示例：类名 → 规则组 → 样式表
///
/// 运行示例：
/// ```bash
/// cargo run --example basic_usage -p quantum-index
/// ```
use indexmap::IndexMap;
use quantum_core::normalize::normalize_tokens;
use quantum_core::Theme;
use quantum_index::{emit, EmitOptions, Resolver};

fn main() -> Result<(), std::fmt::Error> {
    println!("=== Quantum 基本使用示例 ===\n");

    let mut presets = IndexMap::new();
    presets.insert(
        "hero".to_string(),
        "flex flex-col items-center p-8 md:p-16".to_string(),
    );
    let resolver = Resolver::new(Theme::defaults(), presets);

    let source = r#"hero sm:hidden -mt-4 bg-blue-500/50 hover:bg-blue-600
        dark:text-white space-y-4 totally-bogus-class"#;

    let tokens: Vec<_> = normalize_tokens([source])
        .into_iter()
        .map(|token| {
            let groups = resolver.resolve(&token);
            println!("{:<24} → {} 个规则组", token, groups.len());
            (token, groups)
        })
        .collect();

    let css = emit(resolver.theme(), &tokens, &EmitOptions::default())?;
    println!("\n{}", css);

    let minified = emit(
        resolver.theme(),
        &tokens,
        &EmitOptions {
            minify: true,
            ..EmitOptions::default()
        },
    )?;
    println!("压缩后 {} 字节（原 {} 字节）", minified.len(), css.len());
    Ok(())
}
