use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt interrupted")]
    Interrupted,

    #[error("Input stream closed")]
    InputClosed,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Nothing to choose from: {0}")]
    NoChoices(String),

    #[error("Column missing from result: {0}")]
    MissingColumn(String),
}

impl TrackerError {
    /// Errors after which no further prompt can be answered.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            TrackerError::Interrupted | TrackerError::InputClosed | TrackerError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
