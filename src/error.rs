use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmqlError {
    #[error("Schema build error: {0}")]
    SchemaBuild(String),

    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FilmqlError {
    fn from(err: serde_json::Error) -> Self {
        FilmqlError::Serialization(format!("JSON encoding error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, FilmqlError>;
