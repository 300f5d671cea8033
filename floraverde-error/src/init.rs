use thiserror::Error;

/// Fatal startup errors. Any of these aborts the process before the
/// server starts listening.
#[derive(Error, Debug)]
pub enum InitError {
    /// Configuration could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(String),
    /// Database connection could not be established
    #[error("database error: {0}")]
    Database(String),
    /// Schema migration failed, the schema state is unknown
    #[error("migration error: {0}")]
    Migration(String),
    /// Seeding the initial dataset failed
    #[error("seed error: {0}")]
    Seed(String),
    /// The HTTP listener could not be bound
    #[error("bind error: {0}")]
    Bind(String),
}
