use peg::{error::ParseError, str::LineCol};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot parse kubeconfig path: {0:?}")]
    Malformed(String),
    #[error("cannot parse kubeconfig path {0:?}: {1}")]
    Grammar(String, #[source] ParseError<LineCol>),
}

impl Error {
    /// Offending token
    pub fn path(&self) -> &str {
        match self {
            Self::Malformed(path) => path,
            Self::Grammar(path, _) => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
