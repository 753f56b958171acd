use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Advisor error: {0}")]
    Advisor(String),

    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ExtractoError>;
