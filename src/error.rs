use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum OrthoError {
    #[error("homology lookup returned status {status}: {message}")]
    #[diagnostic(help("check the species name and gene symbol"))]
    LookupStatus { status: u16, message: String },

    #[error("Ensembl request failed: {0}")]
    Http(String),

    #[error("malformed Ensembl response: {0}")]
    MalformedResponse(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
