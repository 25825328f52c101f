use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use video_catalogue::model::PlaylistStore;
use video_catalogue::player::config::DEFAULT_PROMPT;
use video_catalogue::{PlayerConfig, Shell, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-catalogue")]
#[command(about = "Interactive video catalogue player", long_about = None)]
struct Args {
    /// Path to a video catalogue file (`title | id | #tag , #tag` per line)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt shown before each command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new().with_prompt(args.prompt);

    // Expand ~ in paths
    if let Some(catalog) = &args.catalog {
        let path = shellexpand::tilde(catalog);
        config = config.with_catalog(PathBuf::from(path.as_ref()));
    }
    if let Some(seed) = args.seed {
        log::info!("Random play seeded with {}", seed);
        config = config.with_seed(seed);
    }

    let library = config.load_library()?;
    log::info!("Library loaded: {} videos", library.video_count());

    let player = VideoPlayer::new(
        library,
        PlaylistStore::new(),
        config.picker(),
        std::io::stdout().lock(),
    );
    let mut shell = Shell::new(player, config.prompt.clone());

    let stdin = std::io::stdin();
    shell.run(&mut stdin.lock())?;

    Ok(())
}
