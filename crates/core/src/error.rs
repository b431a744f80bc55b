use thiserror::Error;

/// Result type for usergraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for usergraph operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or rejected request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The query ran but matched nothing it could act on
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the graph database layer
    #[error("{context}: {message}")]
    QueryExecution { context: String, message: String },

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Creates a query execution error from a driver failure
    ///
    /// The full cause chain of `source` is flattened into the message so that
    /// the caller sees the underlying driver detail, not only the outermost
    /// context.
    pub fn query_execution(context: impl Into<String>, source: &anyhow::Error) -> Self {
        Self::QueryExecution {
            context: context.into(),
            message: format!("{source:#}"),
        }
    }
}

/// Extension trait for mapping graph client failures into query errors
pub trait QueryResultExt<T> {
    /// Wrap an error as [`Error::QueryExecution`] with the given context
    fn query_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> QueryResultExt<T> for anyhow::Result<T> {
    fn query_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::query_execution(context, &e))
    }
}
