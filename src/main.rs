use clap::Parser;
use ghdiff::config::validate_config;
use ghdiff::{input, loader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ghdiff",
    about = "Render a GitHub-style HTML diff of two text files",
    version
)]
struct Cli {
    /// Original file
    old: PathBuf,

    /// Modified file
    new: PathBuf,

    /// Don't include CSS in output
    #[arg(long)]
    no_css: bool,

    /// Number of context lines around each change
    #[arg(short = 'U', long)]
    context: Option<usize>,

    /// Config file (default: $XDG_CONFIG_HOME/ghdiff/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = loader::load_config(cli.config.as_deref())?;
    if let Some(context) = cli.context {
        config.context = context;
    }
    if cli.no_css {
        config.css = false;
    }

    let errors = validate_config(&config);
    if !errors.is_empty() {
        eprintln!("Configuration errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        std::process::exit(1);
    }

    let old = input::read_text(&cli.old)?;
    let new = input::read_text(&cli.new)?;
    let html = ghdiff::diff_html(old.as_str(), new.as_str(), &config)?;
    println!("{html}");

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "ghdiff=debug" } else { "ghdiff=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
