//! tweet - Compose and post a tweet from the command line

use std::io;

use clap::Parser;
use libtweetcast::app::{self, Mode};
use libtweetcast::platforms::twitter::TwitterPlatform;
use libtweetcast::{logging, Config, Result};

#[derive(Parser, Debug)]
#[command(name = "tweet", version)]
#[command(about = "Compose and post a tweet from the command line", long_about = None)]
#[command(after_help = "Run without TEXT to open the interactive composer.\n\
Composer commands: /send, /clear, /quit (Ctrl+D also quits)")]
struct Cli {
    /// Tweet text, words joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_default();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let credentials = config.credentials();
    let mode = Mode::from_args(cli.text);
    tracing::debug!(
        ?config,
        credentials_complete = credentials.is_complete(),
        interactive = (mode == Mode::Interactive),
        "Starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();

    app::run(mode, stdin.lock(), stdout.lock(), move || {
        TwitterPlatform::new(&credentials)
    })
    .await
}
