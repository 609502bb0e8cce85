//! TriviaTalk - Daily trivia by voice
//!
//! Console driver: each input line is one spoken utterance.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use triviatalk::config::Config;
use triviatalk::intent;
use triviatalk::registry::SessionRegistry;
use triviatalk::response::{ResponseComposer, SsmlComposer};
use triviatalk::source::{DatasetSource, FileDatasetSource, HttpDatasetSource};
use triviatalk::tts::{self, SilentEngine, TtsEngine};

/// Session id used for the single console player
const CONSOLE_SESSION: &str = "console";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Play offline from a provider JSON file
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Override the provider URL
    #[arg(long)]
    url: Option<String>,

    /// Print the platform response envelope for every turn
    #[arg(long)]
    json: bool,

    /// Speak turns with the configured TTS engine
    #[arg(long)]
    speak: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;
    if let Some(url) = args.url {
        config.data_url = url;
    }

    // Setup logging; RUST_LOG wins over config
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.tracing_level()
    };
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    match EnvFilter::try_from_default_env() {
        Ok(filter) => tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())?,
        Err(_) => tracing::subscriber::set_global_default(builder.with_max_level(level).finish())?,
    }

    info!("🎲 TriviaTalk v{} starting...", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn DatasetSource> = match args.dataset {
        Some(path) => Arc::new(FileDatasetSource::new(path)),
        None => Arc::new(HttpDatasetSource::new(&config)),
    };
    let tts: Arc<dyn TtsEngine> = if args.speak {
        tts::create_engine(&config)
    } else {
        Arc::new(SilentEngine)
    };

    let registry = SessionRegistry::new(source, &config.game_name);
    let composer = SsmlComposer;

    info!("✅ Ready - type 'start' to play, 'stop' to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let intent = intent::classify(&line);
        let turn = registry.handle_turn(CONSOLE_SESSION, intent).await?;

        if args.json {
            let response = composer.emit_turn(&turn)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", turn.speech);
        }

        if let Err(e) = tts.speak(&turn.speech, turn.emphasis).await {
            warn!("Could not speak turn: {}", e);
        }

        if turn.should_end_session {
            break;
        }
    }

    Ok(())
}
