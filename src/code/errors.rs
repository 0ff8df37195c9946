use std::fmt;
use std::error::Error;

use crate::utils;


pub type AccessResult<T> = Result<T, AccessError>;

/// Out-of-range reads against a chunk's owned buffers. These indicate a
/// caller bug (the VM and compiler collaborators never index past what
/// they wrote), not data corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OffsetOutOfRange { offset: usize, len: usize },
    ConstOutOfRange { index: usize, len: usize },
    LineOutOfRange { offset: usize, len: usize },
}

#[derive(Debug)]
pub struct AccessError {
    kind: ErrorKind,
    cause: Option<Box<dyn Error>>,
}

impl AccessError {
    pub fn caused_by(mut self, cause: impl Error + 'static) -> Self {
        self.cause.replace(Box::new(cause)); self
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }
}

impl From<ErrorKind> for AccessError {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, cause: None }
    }
}

impl Error for AccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|o| o.as_ref())
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {

        let message = match self.kind() {
            ErrorKind::OffsetOutOfRange { offset, len } =>
                format!("code offset {} out of range (code length is {})", offset, len),
            ErrorKind::ConstOutOfRange { index, len } =>
                format!("constant index {} out of range (pool size is {})", index, len),
            ErrorKind::LineOutOfRange { offset, len } =>
                format!("line lookup offset {} out of range ({} recorded)", offset, len),
        };

        utils::format_error(fmt, "access error", Some(&message), self.source())
    }
}
