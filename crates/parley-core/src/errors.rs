#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing credential: set the {0} environment variable")]
    MissingCredential(&'static str),
}

/// Failures of the external model provider call. The caller's state
/// (memory window, transcript) is never mutated when one of these is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),

    #[error("rate limited")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("request timed out")]
    Timeout,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("empty input")]
    EmptyInput,

    #[error("session is busy with another request")]
    Busy,
}
