//! Terminal chat host.
//!
//! A small REPL around the session controller: prints bot messages and
//! quick-reply suggestions, reads user lines from stdin, and persists the
//! conversation through the file-backed history store. Type a suggestion
//! verbatim or free text; `/delete` clears the stored history and `/quit`
//! exits.

use std::io::{self, BufRead, Write as _};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::prelude::*;

use campus_assist::adapters::storage::JsonFileHistoryStore;
use campus_assist::application::{ControllerReply, SessionController};
use campus_assist::config::AppConfig;
use campus_assist::domain::foundation::ConversationTurn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they do not interleave with the chat itself.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_assist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()?;
    tracing::info!(path = %config.storage.history_path.display(), "using history file");

    let store = JsonFileHistoryStore::new(&config.storage.history_path);
    let mut controller = SessionController::new(Arc::new(store));
    let typing_delay = Duration::from_millis(config.chat.typing_delay_ms);

    let opening = controller.open().await?;
    render(&opening, typing_delay).await;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "/quit" | "/exit" => break,
            "/delete" => {
                let reply = controller.delete_history().await?;
                render(&reply, typing_delay).await;
            }
            _ => {
                if let Some(reply) = controller.handle_input(&line).await? {
                    render(&reply, typing_delay).await;
                }
            }
        }
    }

    Ok(())
}

async fn render(reply: &ControllerReply, typing_delay: Duration) {
    match reply {
        ControllerReply::Prompt(prompt) => {
            tokio::time::sleep(typing_delay).await;
            println!("\nAssistant: {}\n", prompt.text);
            print_options(prompt.options);
        }
        ControllerReply::Resumed { turns, options } => {
            println!();
            for turn in turns {
                print_turn(turn);
            }
            println!();
            print_options(options);
        }
    }
}

fn print_turn(turn: &ConversationTurn) {
    println!("{}: {}", turn.speaker().label(), turn.text());
}

fn print_options(options: &[&str]) {
    if options.is_empty() {
        return;
    }
    println!("Suggestions: {}", options.join(" | "));
}
