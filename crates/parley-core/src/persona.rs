//! Persona prompt templates.
//!
//! A persona is a closed set of prompt styles, each with its own template
//! taking the rendered conversation history and the new user input. Using
//! an enum instead of a string-keyed map means an unknown persona is a
//! parse-time error, not a silent fallback.

use std::fmt;
use std::str::FromStr;

use crate::ChatError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Default,
    Expert,
    Creative,
}

impl Persona {
    /// All personas, in display order.
    pub const ALL: [Persona; 3] = [Persona::Default, Persona::Expert, Persona::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Default => "default",
            Persona::Expert => "expert",
            Persona::Creative => "creative",
        }
    }

    /// Assemble the final prompt text: the persona preamble, the rendered
    /// memory-window history, and the new input. Pure — no side effects.
    pub fn render_prompt(&self, history: &str, input: &str) -> String {
        match self {
            Persona::Default => format!(
                "You are a helpful AI assistant.\n\
                 Current conversation:\n{history}\n\
                 Human: {input}\n\
                 AI:"
            ),
            Persona::Expert => format!(
                "You are an expert consultant with deep knowledge across multiple fields.\n\
                 Please provide detailed, technical responses when appropriate.\n\
                 Current conversation:\n{history}\n\
                 Human: {input}\n\
                 Expert:"
            ),
            Persona::Creative => format!(
                "You are a creative and imaginative AI that thinks outside the box.\n\
                 Feel free to use metaphors and analogies in your responses.\n\
                 Current conversation:\n{history}\n\
                 Human: {input}\n\
                 Creative AI:"
            ),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Persona::Default),
            "expert" => Ok(Persona::Expert),
            "creative" => Ok(Persona::Creative),
            other => Err(ChatError::UnknownPersona(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_contains_history_and_input() {
        let prompt = Persona::Default.render_prompt("Human: hi\nAI: hello", "Hello");
        assert!(prompt.contains("Human: hi\nAI: hello"));
        assert!(prompt.contains("Human: Hello"));
        assert!(prompt.ends_with("AI:"));
    }

    #[test]
    fn expert_and_creative_have_distinct_preambles() {
        let expert = Persona::Expert.render_prompt("", "q");
        let creative = Persona::Creative.render_prompt("", "q");
        assert!(expert.contains("expert consultant"));
        assert!(expert.ends_with("Expert:"));
        assert!(creative.contains("metaphors and analogies"));
        assert!(creative.ends_with("Creative AI:"));
    }

    #[test]
    fn parse_known_personas() {
        assert_eq!("default".parse::<Persona>().unwrap(), Persona::Default);
        assert_eq!("Expert".parse::<Persona>().unwrap(), Persona::Expert);
        assert_eq!(" creative ".parse::<Persona>().unwrap(), Persona::Creative);
    }

    #[test]
    fn parse_unknown_persona_fails() {
        let err = "nonexistent".parse::<Persona>().unwrap_err();
        assert!(matches!(err, ChatError::UnknownPersona(_)));
        assert_eq!(err.to_string(), "unknown persona: nonexistent");
    }

    #[test]
    fn display_round_trips() {
        for persona in Persona::ALL {
            assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
        }
    }
}
