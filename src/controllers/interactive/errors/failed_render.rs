use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRender {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for FailedRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command {} failed: {}", self.generation, self.message)
    }
}

impl Error for FailedRender {}
