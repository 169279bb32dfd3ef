use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use quantum_core::{Config, DEFAULT_CONFIG_FILE};
use quantum_generator::{generate, scan, EmitOptions, GenerationResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 输出文件头部的横幅注释
pub const BANNER: &str = "/* Quantum CSS - High Performance Output */\n";

/// 默认输出路径
pub const DEFAULT_OUTPUT: &str = "dist/quantum.css";

/// Utility-first CSS generator
#[derive(Debug, Parser)]
#[command(name = "quantum", version, about)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan content files and write the stylesheet
    Build(BuildArgs),
    /// Print the class tokens found in content files
    Scan(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config file; content globs are matched relative to its directory
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output stylesheet path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Emit compact CSS
    #[arg(long)]
    pub minify: bool,

    /// Leave out the base reset rules
    #[arg(long)]
    pub no_preflight: bool,
}

impl Cli {
    /// `RUST_LOG` 未设置时使用的日志级别
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build(args) => {
            let result = build(&args)?;
            log::info!(
                "wrote {} ({} tokens, {} unresolved)",
                args.output.display(),
                result.tokens.len(),
                result.unresolved.len()
            );
            Ok(())
        }
        Command::Scan(args) => {
            let config = Config::load_or_default(&args.config);
            let report = scan(&config.content, content_root(&args.config))?;
            for token in &report.tokens {
                println!("{}", token);
            }
            Ok(())
        }
    }
}

/// 生成并写入样式表，必要时创建父目录
pub fn build(args: &BuildArgs) -> anyhow::Result<GenerationResult> {
    let config = Config::load_or_default(&args.config.config);
    let options = EmitOptions {
        minify: args.minify,
        preflight: !args.no_preflight,
        ..EmitOptions::default()
    };

    let result = generate(&config, content_root(&args.config.config), &options)?;
    for diagnostic in &result.diagnostics {
        log::debug!("{:?}: {}", diagnostic.level, diagnostic.message);
    }

    write_output(&args.output, &with_banner(&result.css))?;
    Ok(result)
}

pub fn with_banner(css: &str) -> String {
    format!("{}{}", BANNER, css)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// 内容 glob 的匹配根目录：配置文件所在目录
fn content_root(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(css: &str) -> String {
        css.split_whitespace().collect::<String>().replace(";}", "}")
    }

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["quantum", "build"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.config.config, PathBuf::from(DEFAULT_CONFIG_FILE));
                assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
                assert!(!args.minify);
                assert!(!args.no_preflight);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "quantum", "-vv", "build", "-c", "site/q.json", "-o", "out/app.css", "--minify",
            "--no-preflight",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Trace);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.config.config, PathBuf::from("site/q.json"));
                assert_eq!(args.output, PathBuf::from("out/app.css"));
                assert!(args.minify);
                assert!(args.no_preflight);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_content_root() {
        assert_eq!(content_root(Path::new("quantum.config.json")), Path::new("."));
        assert_eq!(content_root(Path::new("site/q.json")), Path::new("site"));
    }

    #[test]
    fn test_build_writes_banner_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("quantum.config.json");
        fs::write(&config, r#"{ "content": ["*.html"] }"#).unwrap();
        fs::write(dir.path().join("index.html"), r#"<div class="flex">"#).unwrap();

        let output = dir.path().join("dist/nested/quantum.css");
        let args = BuildArgs {
            config: ConfigArgs { config },
            output: output.clone(),
            minify: true,
            no_preflight: false,
        };
        let result = build(&args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with(BANNER));
        assert!(compact(&written).contains(".flex{display:flex}"));
        assert!(written.contains("box-sizing"));
        assert_eq!(result.tokens, vec!["flex".to_string()]);
    }

    #[test]
    fn test_build_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.css");
        let args = BuildArgs {
            config: ConfigArgs {
                config: dir.path().join("missing.json"),
            },
            output: output.clone(),
            minify: false,
            no_preflight: true,
        };
        build(&args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with(BANNER));
        let body = compact(&written[BANNER.len()..]);
        assert!(body.starts_with(":root{"));
        assert_eq!(body.matches('{').count(), 1);
    }
}
