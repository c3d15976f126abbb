use miette::Diagnostic;
use thiserror::Error;

/// Main error type for raster operations
#[derive(Error, Diagnostic, Debug)]
pub enum RasterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(raster::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(raster::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(raster::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(raster::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(raster::output))]
    Output { message: String },
}

impl RasterError {
    /// Shorthand for an `InvalidArgument` error without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        RasterError::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
