mod broadcaster;
mod command;
mod config;
mod render;

use std::io::BufRead;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;

use tictactoe_engine::games::tictactoe::{GameMode, TicTacToeSession};
use tictactoe_engine::{debug_log, log, logger};

use broadcaster::TerminalBroadcaster;
use command::{ClientCommand, HELP_TEXT, parse_command};
use config::{get_config_manager, get_config_path};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the AI or a friend")]
struct Args {
    /// Opponent: "ai" or "pvp". Overrides the config file.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Pause before the AI answers. Overrides the config file.
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Path of the YAML config file.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.unwrap_or_else(get_config_path);
    let config = get_config_manager(&config_path).get_config()?;
    debug_log!("Loaded config from {}: {:?}", config_path, config);

    let mode = args.mode.unwrap_or(config.mode);
    let ai_delay = Duration::from_millis(args.ai_delay_ms.unwrap_or(config.ai_delay_ms));

    let session = TicTacToeSession::new(mode, ai_delay, TerminalBroadcaster::new(config.sound));

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || read_commands(command_tx));

    println!("{}", HELP_TEXT);
    session.publish().await;

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Place(index) => {
                if let Err(e) = session.submit_move(index).await {
                    debug_log!("Ignored cell {}: {}", index + 1, e);
                }
            }
            ClientCommand::Restart => session.restart_game().await,
            ClientCommand::ResetScores => session.reset_scores().await,
            ClientCommand::SetMode(mode) => session.set_mode(mode).await,
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => break,
        }
    }

    session.settle().await;
    log!("Bye");

    Ok(())
}

/// Blocking stdin reader, run on its own thread.
fn read_commands(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            Err(e) => println!("{}\n{}", e, HELP_TEXT),
        }
    }
}
