use clap::Parser;
use deck::Deck;
use deck::core::config::{self, CliOverrides, DeckConfig};
use deck::core::deck_file;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "deck", about = "Keyboard-driven slide presentations in the terminal")]
struct Args {
    /// Deck file to present (TOML). Shows the built-in deck when omitted
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Jump between slides instead of easing
    #[arg(long)]
    no_animation: bool,

    /// Log level for ~/.deck/deck.log (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the deck as TOML and exit
    #[arg(long)]
    export: bool,
}

fn init_logging(level: LevelFilter) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let path = config::log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (DeckConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        deck: args.deck,
        no_animation: args.no_animation,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(resolved.log_level);
    if let Some(e) = config_error {
        warn!("{}; using defaults", e);
    }
    info!("Deck starting up: {:?}", resolved);

    let deck = match &resolved.deck_path {
        Some(path) => match deck_file::load_deck(path) {
            Ok(deck) => deck,
            Err(e) => {
                eprintln!("deck: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Deck::builtin(),
    };

    if args.export {
        return match deck_file::to_toml(&deck) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("deck: export failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match deck::tui::run(&resolved, deck) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("deck: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
