mod cli;
mod repl;

use tracing_subscriber::EnvFilter;

use parley_ai::{ChatSession, GroqClient, GroqConfig, ModelId};
use parley_core::Persona;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/parley-cli/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before reading any credentials
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("parley=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "parley=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("parley v{} starting...", env!("CARGO_PKG_VERSION"));

    // A missing credential is fatal: nothing works without it.
    let config = match GroqConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Set it in your environment or in a .env file.");
            std::process::exit(1);
        }
    };

    let model: ModelId = match args.model.parse() {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Available models:");
            for model in ModelId::ALL {
                eprintln!("  {model}");
            }
            std::process::exit(1);
        }
    };

    let persona: Persona = match args.persona.parse() {
        Ok(persona) => persona,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Available personas:");
            for persona in Persona::ALL {
                eprintln!("  {persona}");
            }
            std::process::exit(1);
        }
    };

    let client = GroqClient::new(config);
    let mut session = ChatSession::new(model)
        .with_persona(persona)
        .with_memory_turns(args.memory);

    if let Err(e) = repl::run(&mut session, &client).await {
        tracing::error!("I/O error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
