//! Chatbot Terminal UI.
//!
//! A single-screen chat with a bilingual (English/French) rule-based bot.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chatbot_core::{ChatConfig, Responder, ResponseTable};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod event;
mod render;

use app::App;
use event::{BackendCommand, UiEvent};

#[derive(Parser)]
#[command(name = "chatbot-tui")]
#[command(about = "Bilingual rule-based chatbot in the terminal")]
#[command(version)]
struct Cli {
    /// Delay before the bot replies, in milliseconds
    #[arg(long, default_value = "500")]
    reply_delay_ms: u64,

    /// Keep at most this many messages (oldest are dropped); unbounded if unset
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_messages: Option<u64>,

    /// JSON object of "trigger": "reply" entries replacing the built-in table
    #[arg(long)]
    responses: Option<PathBuf>,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "/tmp/chatbot-tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize tracing - write to file to avoid terminal interference
    let log_file = std::fs::File::create(&cli.log_file).ok();
    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chatbot_tui=debug,chatbot_core=debug"));
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }

    let responder = match &cli.responses {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let table = ResponseTable::from_json(&json)?;
            info!(path = %path.display(), triggers = ?table.triggers(), "Loaded response table");
            Responder::new(Arc::new(table))
        }
        None => Responder::default(),
    };

    let config = ChatConfig {
        reply_delay: Duration::from_millis(cli.reply_delay_ms),
        max_messages: cli.max_messages.map(|max| max as usize),
    };

    run_chat_tui(config, responder)
}

fn run_chat_tui(config: ChatConfig, responder: Responder) -> Result<(), Box<dyn Error>> {
    info!(
        reply_delay_ms = config.reply_delay.as_millis() as u64,
        max_messages = ?config.max_messages,
        triggers = responder.table().len(),
        "Starting chatbot TUI"
    );

    // Create channels for UI <-> scheduler communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Spawn background thread with its own tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    let bg_handle = std::thread::spawn(move || {
        rt.block_on(backend::run_backend(ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    // Run UI loop on main thread
    let mut app = App::new(&config, responder, ui_rx, cmd_tx);
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    // Release the remaining command senders so the scheduler loop ends
    drop(app);

    // Wait for background thread to finish
    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}
