use thiserror::Error;

#[derive(Error, Debug)]
/// Error raised while generating, encoding or emitting a batch of persons
pub enum BatchError {
    #[error("error parsing birthday: {0}")]
    Parse(#[from] time::error::Parse),

    #[error("invalid date: {0}")]
    Date(#[from] time::error::ComponentRange),

    #[error("error formatting birthday: {0}")]
    Format(#[from] time::error::Format),

    #[error("error generating person record: {0}")]
    Generation(#[source] Box<BatchError>),

    #[error("error marshalling JSON: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("error writing JSON: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[cfg(feature = "server")]
    #[error("generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
