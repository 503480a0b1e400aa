use thiserror::Error;

/// Result type for assembly model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an assembly snapshot
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parent id #{parent} does not exist (adding component '{name}')")]
    UnknownParent { name: String, parent: u32 },

    #[error("Non-rigid frame: {0}")]
    NonRigidFrame(String),
}
