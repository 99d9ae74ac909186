use cfg_if::cfg_if;
use std::convert::From;
use std::io::Error as IoError;
use std::num::ParseIntError;
use thiserror::Error as ThisError;

cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::{Deserialize, Serialize};
    }
}

cfg_if! {
    if #[cfg(feature = "borsh")] {
        use borsh::{BorshDeserialize, BorshSerialize};
    }
}

#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
#[repr(u32)]
pub enum ErrorCode {
    #[error("error")]
    ErrorMessage,
    #[error("outcome carries neither a value nor an error")]
    MissingOutcome,
    #[error("I/O error")]
    IoError,
    #[error("JSON error")]
    JsonError,
    #[error("parse error")]
    ParseError,
}

/// Location where an [`Error`] was raised, captured by the
/// [`error!`](crate::error!) and [`error_code!`](crate::error_code!) macros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
pub struct Source {
    pub filename: String,
    pub line: u32,
}

/// Opaque error carrier. The container does not distinguish error
/// categories; `code` only records which conversion produced the error.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
pub struct Error {
    pub message: Option<String>,
    pub code: Option<ErrorCode>,
    pub source: Option<Source>,
}

impl Error {
    pub fn new() -> Error {
        Error {
            message: None,
            code: None,
            source: None,
        }
    }

    /// Human-readable message; falls back to the code description.
    pub fn message(&self) -> String {
        match self.message {
            Some(ref message) => message.clone(),
            None => match &self.code {
                Some(code) => code.to_string(),
                None => "no message".to_string(),
            },
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_source(mut self, filename: &str, line: u32) -> Self {
        self.source = Some(Source {
            filename: filename.to_string(),
            line,
        });
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Multi-line report including code and source location.
    pub fn format(&self) -> String {
        let source = match &self.source {
            None => "no source".to_string(),
            Some(source) => format!("{}:{}", source.filename, source.line),
        };

        match &self.code {
            Some(code) => format!(
                "\n+---\n|   error: {}\n| source: {}\n|   code: {:?}\n+---\n",
                self.message(),
                source,
                code
            ),
            None => format!(
                "\n+---\n|   error: {}\n| source: {}\n+---\n",
                self.message(),
                source
            ),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(string: String) -> Error {
        Error::new()
            .with_code(ErrorCode::ErrorMessage)
            .with_message(&string)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::new()
            .with_code(ErrorCode::ErrorMessage)
            .with_message(msg)
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Error {
        Error::new().with_code(code)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::new()
            .with_code(ErrorCode::IoError)
            .with_message(&error.to_string())
    }
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Error {
        Error::new()
            .with_code(ErrorCode::ParseError)
            .with_message(&error.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::new()
            .with_code(ErrorCode::JsonError)
            .with_message(&error.to_string())
    }
}

impl From<Error> for String {
    fn from(error: Error) -> String {
        error.message()
    }
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => (
        $crate::error::Error::new()
            .with_source(file!(),line!())
            .with_code($crate::error::ErrorCode::ErrorMessage)
            .with_message(&format_args!($($t)*).to_string())
    )
}
pub use error;

#[macro_export]
macro_rules! error_code {
    ($code:expr) => (
        $crate::error::Error::new()
            .with_source(file!(),line!())
            .with_code($code)
    )
}
pub use error_code;
