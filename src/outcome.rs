//!
//! [`Outcome`] value-or-error container.
//!
//! An [`Outcome`] is either a [`Success`](Outcome::Success) holding a value
//! or a [`Failure`](Outcome::Failure) holding an error. It is constructed
//! from the usual shapes returned by fallible code (a value paired with
//! an optional error, a [`std::result::Result`], optional parts) and
//! consumed through explicit accessors that never panic.
//!

use cfg_if::cfg_if;
use std::fmt;
use workflow_log::log_error;

use crate::attempt::{dispatch, Disposition, Handler};
use crate::error::{Error, ErrorCode};
use crate::result::Result;

cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::{de::DeserializeOwned, Deserialize, Serialize};
    }
}

cfg_if! {
    if #[cfg(feature = "borsh")] {
        use borsh::{BorshDeserialize, BorshSerialize};
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
pub enum Outcome<T, E = Error> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a value paired with an optional error. A present error
    /// wins and the paired value is discarded.
    pub fn from_outcome(value: T, err: Option<E>) -> Self {
        match err {
            Some(err) => Outcome::Failure(err),
            None => Outcome::Success(value),
        }
    }

    /// Same as [`Outcome::from_outcome`], cloning the value through a
    /// reference.
    pub fn from_reference(value: &T, err: Option<E>) -> Self
    where
        T: Clone,
    {
        Self::from_outcome(value.clone(), err)
    }

    /// Accepts a nullable reference. Fails with
    /// [`ErrorCode::MissingOutcome`] if neither a reference nor an
    /// error is supplied.
    pub fn try_from_reference(value: Option<&T>, err: Option<E>) -> Result<Self>
    where
        T: Clone,
    {
        Self::try_from_parts(value.cloned(), err)
    }

    pub fn try_from_parts(value: Option<T>, err: Option<E>) -> Result<Self> {
        match (value, err) {
            (_, Some(err)) => Ok(Outcome::Failure(err)),
            (Some(value), None) => Ok(Outcome::Success(value)),
            (None, None) => {
                log_error!("outcome constructed without a value or an error");
                Err(crate::error_code!(ErrorCode::MissingOutcome))
            }
        }
    }

    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(err: E) -> Self {
        Outcome::Failure(err)
    }

    /// Builds a failure from a plain message.
    pub fn failure_message<M>(message: M) -> Self
    where
        M: Into<String>,
        E: From<String>,
    {
        Outcome::Failure(E::from(message.into()))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the value and `true`, or `T::default()` and `false` when
    /// in the error state.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self {
            Outcome::Success(value) => (value.clone(), true),
            Outcome::Failure(_) => (T::default(), false),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn get_error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn error(&self) -> Option<&E> {
        self.get_error()
    }

    pub fn or_else(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fallback,
        }
    }

    /// `supplier` runs only in the error state.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => supplier(),
        }
    }

    pub fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = self {
            consumer(value)
        }
    }

    pub fn if_error<F>(&self, consumer: F)
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(err) = self {
            consumer(err)
        }
    }

    /// Runs `on_success` with the value, or offers the error to each
    /// handler in turn until one reports it handled.
    pub fn attempt<F>(&self, on_success: F, handlers: &[Handler<'_, E>]) -> Disposition
    where
        F: FnOnce(&T),
    {
        match self {
            Outcome::Success(value) => {
                on_success(value);
                Disposition::Succeeded
            }
            Outcome::Failure(err) => dispatch(err, handlers),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn map_err<R, F>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(err) => Outcome::Failure(f(err)),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E> fmt::Display for Outcome<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "{}", value),
            Outcome::Failure(err) => write!(f, "{}", err),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

cfg_if! {
    if #[cfg(feature = "serde")] {
        impl<T, E> Outcome<T, E>
        where
            T: Serialize,
            E: Serialize,
        {
            pub fn to_json(&self) -> Result<String> {
                Ok(serde_json::to_string(self)?)
            }
        }

        impl<T, E> Outcome<T, E>
        where
            T: DeserializeOwned,
            E: DeserializeOwned,
        {
            pub fn try_from_json(json: &str) -> Result<Self> {
                Ok(serde_json::from_str(json)?)
            }
        }
    }
}

#[cfg(test)]
mod tests;
