use thiserror::Error;

/// Errors raised while parsing a cut range list such as `1-3,5,9-`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid range list: empty")]
    Empty,

    #[error("invalid range: '{0}'")]
    Malformed(String),

    #[error("ranges are numbered from 1: '{0}'")]
    Zero(String),

    #[error("invalid decreasing range: '{0}'")]
    Decreasing(String),
}
