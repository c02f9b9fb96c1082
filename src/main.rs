use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reelsearch::config::ConfigManager;
use reelsearch::data::ReelSetLoader;
use reelsearch::engines::reconstruct_set;
use reelsearch::types::SearchMode;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Evolution,
    Hierarchical,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Evolution => SearchMode::Evolution,
            ModeArg::Hierarchical => SearchMode::Hierarchical,
        }
    }
}

/// Reconstruct reel strips from sampled chunks of them
#[derive(Debug, Parser)]
#[command(name = "reelsearch", version)]
struct Cli {
    /// JSON file with the reels to reconstruct
    #[arg(long)]
    reels: PathBuf,

    /// TOML configuration; REELSEARCH__* environment variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON report per line instead of text blocks
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut manager = ConfigManager::new();
    manager
        .load_layered(cli.config.as_deref())
        .context("failed to load configuration")?;
    manager.update(|config| {
        if let Some(mode) = cli.mode {
            config.mode = mode.into();
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }
    })?;
    let config = manager.get();
    log::info!("Configuration loaded ({} mode)", config.mode);

    let reels = ReelSetLoader::load(&cli.reels)
        .with_context(|| format!("failed to load reels from '{}'", cli.reels.display()))?;

    let mut current_machine = None;
    for report in reconstruct_set(&reels, &config)? {
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        if current_machine != Some(report.machine) {
            current_machine = Some(report.machine);
            println!("=== MACHINE {} ===", report.machine);
            println!();
        }
        println!("=== ORIGINAL (reel {}) ===", report.reel);
        println!("{}", report.original);
        println!();
        println!("=== BEST FOUND (reel {}) ===", report.reel);
        println!("{}", report.best);
        println!();
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
