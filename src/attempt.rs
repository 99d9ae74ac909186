//!
//! Synchronous success/error branching with a chain of error handlers.
//!

use workflow_log::log_trace;

/// Error handler in an [`attempt`] chain. Returns `true` once the error
/// is considered handled, which stops the chain.
pub type Handler<'h, E> = &'h dyn Fn(&E) -> bool;

/// Which branch an [`attempt`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Succeeded,
    /// Index of the handler that returned `true`.
    Handled(usize),
    Unhandled,
}

impl Disposition {
    pub fn is_success(&self) -> bool {
        matches!(self, Disposition::Succeeded)
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Disposition::Handled(_))
    }
}

/// Invokes `on_success` if `err` is `None`; otherwise offers the error to
/// `handlers` in order and stops at the first one returning `true`.
/// With no handlers, or none claiming the error, nothing else happens.
pub fn attempt<E, F>(err: Option<&E>, on_success: F, handlers: &[Handler<'_, E>]) -> Disposition
where
    F: FnOnce(),
{
    match err {
        None => {
            on_success();
            Disposition::Succeeded
        }
        Some(err) => dispatch(err, handlers),
    }
}

pub(crate) fn dispatch<E>(err: &E, handlers: &[Handler<'_, E>]) -> Disposition {
    for (idx, handler) in handlers.iter().enumerate() {
        if handler(err) {
            return Disposition::Handled(idx);
        }
    }

    log_trace!("error passed through {} handler(s) unhandled", handlers.len());
    Disposition::Unhandled
}

/// Variadic form of [`attempt()`](crate::attempt::attempt):
/// `attempt!(err, on_success, handler_a, handler_b)`.
#[macro_export]
macro_rules! attempt {
    ($err:expr, $on_success:expr $(, $handler:expr)* $(,)?) => (
        $crate::attempt::attempt($err, $on_success, &[$(&$handler),*])
    )
}
