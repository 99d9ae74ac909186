//!
//! Value-or-error container with explicit, non-panicking inspection,
//! fallbacks and chain-of-responsibility error handling.
//!
//! ```
//! use kaizen_outcome::prelude::*;
//!
//! let outcome: Outcome<u32> = "42".parse::<u32>().map_err(Error::from).into();
//! assert_eq!(outcome.get(), (42, true));
//! assert_eq!(outcome.to_string(), "42");
//! ```
//!

pub mod error;
pub mod result;
pub mod outcome;
pub mod holder;
pub mod attempt;
pub mod prelude;

pub use outcome::Outcome;
pub use holder::ResultHolder;
pub use attempt::Disposition;
