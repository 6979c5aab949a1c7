use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiloopError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Failed to read PDF file: {0}")]
    Pdf(Box<pdf_extract::OutputError>),

    #[error("API key missing. Set GEMINI_API_KEY in the environment.")]
    MissingApiKey,

    #[error("Generation request failed with status {0}: {1}")]
    GenerationStatus(u16, String),

    #[error("LexiloopError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LexiloopError {
    fn from(error: std::io::Error) -> Self {
        LexiloopError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for LexiloopError {
    fn from(error: reqwest::Error) -> Self {
        LexiloopError::Reqwest(Box::new(error))
    }
}

impl From<pdf_extract::OutputError> for LexiloopError {
    fn from(error: pdf_extract::OutputError) -> Self {
        LexiloopError::Pdf(Box::new(error))
    }
}
