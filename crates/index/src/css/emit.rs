use crate::emitter::EmitOptions;
use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig, IndentType, LineFeed},
    CodeGenerator, CodegenConfig, Emit,
};

/// 使用 swc_css_codegen 生成 CSS 字符串
///
/// `minify` 交给代码生成器，缩进宽度交给写入器。
pub fn emit_css(stylesheet: &Stylesheet, options: &EmitOptions) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: IndentType::Space,
        indent_width: options.indent.try_into().unwrap_or(2),
        linefeed: LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(
        &mut wr,
        CodegenConfig {
            minify: options.minify,
        },
    );

    gen.emit(stylesheet)?;

    Ok(output)
}
