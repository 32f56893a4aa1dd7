use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),

    #[error("Provider returned an empty response")]
    EmptyResponse,

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Unknown garment: {0}")]
    UnknownGarment(String),

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ForgeError>;
