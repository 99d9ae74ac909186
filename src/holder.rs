//!
//! [`ResultHolder`] capability trait, implemented by [`Outcome`] and
//! [`std::result::Result`] so generic code can consume either.
//!

use crate::outcome::Outcome;

pub trait ResultHolder<T, E> {
    fn is_ok(&self) -> bool;

    fn is_error(&self) -> bool {
        !self.is_ok()
    }

    fn get(&self) -> (T, bool)
    where
        T: Clone + Default;

    fn get_error(&self) -> Option<&E>;

    fn or_else(self, fallback: T) -> T
    where
        Self: Sized;

    fn or_else_get<F>(self, supplier: F) -> T
    where
        Self: Sized,
        F: FnOnce() -> T;

    fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T);

    fn if_error<F>(&self, consumer: F)
    where
        F: FnOnce(&E);
}

impl<T, E> ResultHolder<T, E> for Outcome<T, E> {
    fn is_ok(&self) -> bool {
        Outcome::is_ok(self)
    }

    fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        Outcome::get(self)
    }

    fn get_error(&self) -> Option<&E> {
        Outcome::get_error(self)
    }

    fn or_else(self, fallback: T) -> T {
        Outcome::or_else(self, fallback)
    }

    fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        Outcome::or_else_get(self, supplier)
    }

    fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        Outcome::if_ok(self, consumer)
    }

    fn if_error<F>(&self, consumer: F)
    where
        F: FnOnce(&E),
    {
        Outcome::if_error(self, consumer)
    }
}

impl<T, E> ResultHolder<T, E> for std::result::Result<T, E> {
    fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self {
            Ok(value) => (value.clone(), true),
            Err(_) => (T::default(), false),
        }
    }

    fn get_error(&self) -> Option<&E> {
        self.as_ref().err()
    }

    fn or_else(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }

    fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(|_| supplier())
    }

    fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = self {
            consumer(value)
        }
    }

    fn if_error<F>(&self, consumer: F)
    where
        F: FnOnce(&E),
    {
        if let Err(err) = self {
            consumer(err)
        }
    }
}
