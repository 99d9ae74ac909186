//! [`Result`] type used by the fallible operations of this crate

pub type Result<T> = std::result::Result<T, crate::error::Error>;
