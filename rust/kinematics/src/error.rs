use thiserror::Error;

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a tool frame
#[derive(Error, Debug)]
pub enum Error {
    #[error("No component named '{name}' in the assembly")]
    ComponentNotFound { name: String },

    #[error("Component name '{name}' is ambiguous, matches: {paths:?}")]
    AmbiguousComponent { name: String, paths: Vec<String> },

    #[error("Parent chain from '{start}' exceeded {depth} links without reaching the root")]
    CycleDetected { start: String, depth: usize },

    #[error("Assembly error: {0}")]
    Core(#[from] toolframe_core::Error),
}
