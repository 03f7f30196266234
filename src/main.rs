mod app;
mod clipboard;
mod config;
mod gradient;
mod input;
mod tui;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gradient::{ColorStyle, GradientDescriptor, GradientType, PAGE_SIZE};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gradient-grid", version, about = "Random CSS / Tailwind gradient generator")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed the generator for reproducible batches.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print a batch of gradients to stdout (headless).
    Generate {
        /// linear, radial or conical.
        #[arg(short = 't', long = "type")]
        gradient_type: Option<GradientType>,
        /// pastel, vivid, unique or default.
        #[arg(short, long)]
        style: Option<ColorStyle>,
        #[arg(short = 'n', long, default_value_t = PAGE_SIZE)]
        count: usize,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Value)]
        format: OutputFormat,
    },
    /// Print the config file path.
    ConfigPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Bare CSS gradient value.
    Value,
    /// `background: ...;` declaration.
    Css,
    /// Tailwind arbitrary-value class.
    Tailwind,
    /// JSON array of descriptors.
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::ConfigPath) = cli.command {
        let path = match cli.config {
            Some(p) => p,
            None => config::default_config_path().context("default config path")?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&cfg).context("init logging")?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let clipboard = Box::new(clipboard::SystemClipboard::new());
            let mut app = app::App::new(cfg, cli.seed, clipboard);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate {
            gradient_type,
            style,
            count,
            format,
        } => {
            init_stderr_logging(&cfg);
            let ty = gradient_type.unwrap_or(cfg.generator.gradient_type);
            let style = style.unwrap_or(cfg.generator.color_style);
            let mut rng = match cli.seed.or(cfg.generator.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            tracing::debug!(%ty, %style, count, "generating");
            let batch = gradient::build_many(ty, style, count, &mut rng);
            print_batch(&batch, format)?;
        }
        Command::ConfigPath => {}
    }

    Ok(())
}

fn env_filter(cfg: &config::Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level))
}

/// The TUI owns the terminal, so logs go to a file in the data dir.
fn init_file_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let dir = &cfg.paths.data_dir;
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join("gradient-grid.log");
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn init_stderr_logging(cfg: &config::Config) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

fn print_batch(batch: &[GradientDescriptor], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(batch)?);
        return Ok(());
    }
    for d in batch {
        let line = match format {
            OutputFormat::Value | OutputFormat::Json => d.value(),
            OutputFormat::Css => d.css(),
            OutputFormat::Tailwind => d.tailwind(),
        };
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["gradient-grid", "generate", "--config", "x.toml", "-n", "3"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Command::Generate { count: 3, .. })));

        let cli = Cli::try_parse_from(["gradient-grid", "config-path", "--config", "y.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("y.toml")));
    }

    #[test]
    fn test_generate_parses_type_and_style() {
        let cli = Cli::try_parse_from([
            "gradient-grid", "--seed", "9", "generate", "-t", "conic", "-s", "default", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Some(Command::Generate { gradient_type, style, format, .. }) => {
                assert_eq!(gradient_type, Some(GradientType::Conical));
                assert_eq!(style, Some(ColorStyle::Fixed));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["gradient-grid", "generate", "-s", "neon"]).is_err());
    }
}
