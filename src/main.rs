//! `color-recall`: play the language/color memory game in a terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use color_recall::logging::init_logging;
use color_recall::{BellCues, CuePlayer, GameConfig, GameEngine, GameRng, SilentCues, TerminalPresenter};

/// Memorize which color goes with each programming language, then recall them.
#[derive(Parser, Debug)]
#[command(name = "color-recall", version, about)]
struct Cli {
    /// Seed for the selection RNG. Random when omitted.
    #[arg(long, env = "COLOR_RECALL_SEED")]
    seed: Option<u64>,

    /// JSON config file. Missing fields use the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override how long the selection is shown, in milliseconds.
    #[arg(long)]
    reveal_ms: Option<u64>,

    /// Do not ring the terminal bell on each guess.
    #[arg(long)]
    quiet_cues: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(ms) = cli.reveal_ms {
        config.reveal_millis = ms;
    }

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "starting");

    let cues: Box<dyn CuePlayer> = if cli.quiet_cues {
        Box::new(SilentCues)
    } else {
        Box::new(BellCues::new(io::stdout(), config.cues.clone()))
    };

    let mut engine = GameEngine::new(config, rng, cues)?;

    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout(), std::thread::sleep);
    let sessions = presenter.run(&mut engine)?;
    tracing::info!(sessions, "goodbye");
    Ok(())
}
