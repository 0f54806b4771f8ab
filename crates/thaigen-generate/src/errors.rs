use thiserror::Error;

/// Coarse classification of [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DataUnavailable,
    MalformedReferenceLine,
    OutputSink,
    InvalidConfig,
}

/// Errors emitted while loading references or generating sentences.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("reference data unavailable: {0}")]
    DataUnavailable(String),
    #[error("malformed reference line {line} in {resource}: missing tab separator in {content:?}")]
    MalformedReferenceLine {
        resource: String,
        line: usize,
        content: String,
    },
    #[error("output sink error: {0}")]
    Sink(#[source] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::DataUnavailable(_) => ErrorKind::DataUnavailable,
            GenerationError::MalformedReferenceLine { .. } => ErrorKind::MalformedReferenceLine,
            GenerationError::Sink(_) => ErrorKind::OutputSink,
            GenerationError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

impl From<thaigen_core::Error> for GenerationError {
    fn from(err: thaigen_core::Error) -> Self {
        match err {
            thaigen_core::Error::InvalidConfig(message) => GenerationError::InvalidConfig(message),
        }
    }
}
