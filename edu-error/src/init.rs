use thiserror::Error;

/// Errors raised while wiring the application context together.
#[derive(Error, Debug)]
pub enum InitContextError {
    /// A component was requested before it was initialized
    #[error("component not initialized: {0}")]
    NotInitialized(String),
    /// A primitive error occurred while building a component
    #[error("primitive error: {0}")]
    Primitive(String),
}
