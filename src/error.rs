use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    Empty,
    Malformed,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("invalid input: {0:?}")]
    InvalidInput(InputProblem),
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    #[error("backend unreachable: {0}")]
    NetworkUnreachable(String),
    #[error("backend error ({status:?}): {message}")]
    BackendError { status: Option<u16>, message: String },
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}
