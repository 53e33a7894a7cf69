use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tailor operations
#[derive(Error, Diagnostic, Debug)]
pub enum TailorError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tailor::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tailor::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tailor::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Missing key '{key}' in {section}")]
    #[diagnostic(code(tailor::missing_key))]
    MissingKey {
        section: String,
        key: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parity error in semantic colours: {message}")]
    #[diagnostic(code(tailor::parity))]
    Parity {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(tailor::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TailorError>;
