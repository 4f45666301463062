//! Interactive chat loop over stdin.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use parley_ai::{ChatClient, ChatSession};
use parley_core::Turn;

pub async fn run(session: &mut ChatSession, client: &dyn ChatClient) -> std::io::Result<()> {
    println!(
        "parley — model {}, persona {}, remembering {} turns",
        session.model(),
        session.persona(),
        session.window().capacity()
    );
    println!("Commands: /history, /new, /clear, /stats, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/history" => print_history(session),
            "/new" => {
                session.new_topic();
                println!("Memory cleared for a new topic.");
            }
            "/clear" => {
                session.clear_history();
                println!("Chat history cleared.");
            }
            "/stats" => print_stats(session),
            command if command.starts_with('/') => {
                println!("Unknown command: {command}");
            }
            input => match session.send(client, input).await {
                Ok(turn) => print_turn(&turn, session),
                Err(e) => eprintln!("error: {e}"),
            },
        }
    }

    Ok(())
}

fn print_turn(turn: &Turn, session: &ChatSession) {
    println!("assistant ({} mode)> {}", session.persona(), turn.ai);
}

/// Full transcript, most recent first — the window may have already
/// forgotten the older turns shown here.
fn print_history(session: &ChatSession) {
    if session.transcript().is_empty() {
        println!("No chat history yet.");
        return;
    }
    for turn in session.transcript().iter_recent() {
        println!("You: {}", turn.human);
        println!("Assistant: {}", turn.ai);
        println!();
    }
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("Messages: {}", stats.turns);
    match stats.started_at {
        Some(start) => {
            let elapsed = chrono::Utc::now().signed_duration_since(start);
            let seconds = elapsed.num_seconds().max(0);
            println!("Duration: {}m {}s", seconds / 60, seconds % 60);
        }
        None => println!("Duration: -"),
    }
    println!(
        "Tokens: {} over {} calls",
        stats.total_tokens, stats.calls
    );
}
