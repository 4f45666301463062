//! The closed set of Groq-hosted models parley exposes.

use std::fmt;
use std::str::FromStr;

use parley_core::ChatError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModelId {
    #[default]
    Llama31_8bInstant,
    KimiK2Instruct,
    CompoundMini,
}

impl ModelId {
    /// All selectable models, in display order.
    pub const ALL: [ModelId; 3] = [
        ModelId::Llama31_8bInstant,
        ModelId::KimiK2Instruct,
        ModelId::CompoundMini,
    ];

    /// The provider-side model identifier sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Llama31_8bInstant => "llama-3.1-8b-instant",
            ModelId::KimiK2Instruct => "moonshotai/kimi-k2-instruct-0905",
            ModelId::CompoundMini => "groq/compound-mini",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "llama-3.1-8b-instant" => Ok(ModelId::Llama31_8bInstant),
            "moonshotai/kimi-k2-instruct-0905" => Ok(ModelId::KimiK2Instruct),
            "groq/compound-mini" => Ok(ModelId::CompoundMini),
            other => Err(ChatError::UnknownModel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_identifiers_round_trip() {
        for model in ModelId::ALL {
            assert_eq!(model.as_str().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn unknown_model_fails() {
        let err = "gpt-4".parse::<ModelId>().unwrap_err();
        assert!(matches!(err, ChatError::UnknownModel(_)));
    }
}
