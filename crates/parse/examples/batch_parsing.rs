/// 演示批量解析
///
/// 一次性处理一个 class 属性值里的全部 token

use quantum_parse::{parse_class, parse_classes};

fn main() {
    println!("=== 类名解析示例 ===\n");

    // 示例 1: 单个 token
    println!("1. 单个 token:");
    match parse_class("md:hover:-mt-4") {
        Ok(single) => {
            println!("   token: md:hover:-mt-4");
            println!("   断点: {:?}", single.breakpoint);
            println!("   变体: {:?}", single.variant);
            println!("   负值: {}", single.negative);
            println!("   类名: {}", single.base);
        }
        Err(err) => println!("   解析失败: {}", err),
    }
    println!();

    // 示例 2: 整个 class 属性值
    println!("2. 批量解析:");
    let classes = "flex sm:hidden -mt-4 bg-blue-500/50 dark:hover:bg-blue-600 w-[13px] hover:";
    let parsed = parse_classes(classes);

    println!("   输入: {}", classes);
    println!("   解析出 {} 个 token（无效 token 已跳过）:\n", parsed.len());

    for (i, p) in parsed.iter().enumerate() {
        println!("   [{}] {}", i + 1, p.base);
        if let Some(bp) = p.breakpoint {
            println!("       断点: {}", bp);
        }
        if let Some(mode) = p.mode {
            println!("       模式: {}", mode);
        }
        if let Some(variant) = p.variant {
            println!("       变体: {}", variant);
        }
        if p.negative {
            println!("       负值: true");
        }
    }
}
