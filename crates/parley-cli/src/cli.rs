use clap::Parser;

/// Parley — a terminal chat client for Groq-hosted models.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Model to chat with.
    #[arg(short, long, default_value = "llama-3.1-8b-instant")]
    pub model: String,

    /// Conversation persona (default, expert, creative).
    #[arg(short, long, default_value = "default")]
    pub persona: String,

    /// How many previous turns to remember (1-10).
    #[arg(short = 'k', long, default_value_t = 5, value_parser = parse_memory)]
    pub memory: usize,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_memory(s: &str) -> Result<usize, String> {
    let turns: usize = s.parse().map_err(|_| "not a number".to_string())?;
    if (1..=10).contains(&turns) {
        Ok(turns)
    } else {
        Err("memory must be between 1 and 10 turns".to_string())
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["parley"]);
        assert_eq!(args.model, "llama-3.1-8b-instant");
        assert_eq!(args.persona, "default");
        assert_eq!(args.memory, 5);
    }

    #[test]
    fn memory_range_enforced() {
        assert!(Args::try_parse_from(["parley", "-k", "0"]).is_err());
        assert!(Args::try_parse_from(["parley", "-k", "11"]).is_err());
        assert!(Args::try_parse_from(["parley", "-k", "10"]).is_ok());
    }
}
