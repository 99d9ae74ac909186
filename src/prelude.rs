//!
//! Application prelude containing general-purpose imports.
//!

pub use cfg_if::cfg_if;

pub use crate::attempt::{attempt, Disposition, Handler};
pub use crate::error::{Error, ErrorCode};
pub use crate::holder::ResultHolder;
pub use crate::outcome::Outcome;
pub use crate::{error, error_code};

pub use workflow_log;
pub use workflow_log::{log_debug, log_error, log_info, log_trace};
