use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Generation failures. Any of these aborts the whole run; output already
/// written to the sink stays there.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot render a descriptor with an empty name")]
    EmptyName,

    #[error("failed to write generated code")]
    Io(#[from] std::io::Error),
}
