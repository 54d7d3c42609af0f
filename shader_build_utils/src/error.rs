use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Please provide a target directory")]
    Usage,

    #[error("{} is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Shader compiler not found at {}", .0.display())]
    ToolchainNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
