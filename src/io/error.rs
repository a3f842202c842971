use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("the '{0}' format is not supported for this write operation")]
    UnsupportedWriteFormat(Format),

    #[error("inconsistent fragment: {0}")]
    Inconsistent(String),
}

impl From<crate::template::Error> for Error {
    fn from(e: crate::template::Error) -> Self {
        Error::Inconsistent(e.to_string())
    }
}
