use crate::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Unknown CSS property '{0}' (expected font-size, width, height, padding or gap)")]
    UnknownProperty(String),

    #[error("Unknown unit '{0}' (expected px or rem)")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
