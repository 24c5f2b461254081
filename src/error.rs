use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error loading config file: {0}")]
    Config(String),

    #[error("Invalid interval: {0}. Please provide a positive integer.")]
    InvalidInterval(String),

    #[error("Error getting CPU info: {0}")]
    Cpu(String),

    #[error("Error getting memory info: {0}")]
    Memory(String),

    #[error("Error getting disk info: {0}")]
    Disk(String),

    #[error("Error getting network info: {0}")]
    Network(String),
}

impl Error {
    /// True for failures of one of the four per-tick metric queries.
    pub fn is_metric_query(&self) -> bool {
        matches!(
            self,
            Error::Cpu(_) | Error::Memory(_) | Error::Disk(_) | Error::Network(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
