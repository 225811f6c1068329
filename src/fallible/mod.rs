//! Short-circuiting composition of fallible computations.
//!
//! This module is the error-handling half of the library. Failures are
//! ordinary values - the `Err` variant of `std::result::Result` - and
//! everything here is about composing such values without exceptions,
//! panics or logging:
//!
//! - [`Chainable`]: sequential composition where each step consumes the
//!   previous success value and the first failure aborts the rest
//! - [`sequence_results`]: turn a sequence of `Result`s into a `Result` of
//!   a sequence, keeping the first error in input order
//! - [`fold_map_results`]: parse every item, sequence the outcomes, then
//!   reduce the successes with a [`Monoid`](crate::typeclass::Monoid)
//! - [`parse_int`] / [`div_int`]: small illustrative fallible operations a
//!   driver can chain together
//!
//! Every operation is pure and stateless; callers decide how a failure is
//! presented.
//!
//! # Examples
//!
//! ```rust
//! use combinars::fallible::{Chainable, parse_int, div_int, ArithError};
//!
//! let quotient = parse_int("10").chain(|n| parse_int("2").chain(|d| div_int(n, d)));
//! assert_eq!(quotient, Ok(5));
//!
//! let by_zero = parse_int("5").chain(|n| parse_int("0").chain(|d| div_int(n, d)));
//! assert_eq!(by_zero, Err(ArithError::DivideByZero));
//! ```

mod arith;
mod chain;
mod error;
mod sequence;

pub use arith::{div_int, parse_int};
pub use chain::Chainable;
pub use error::ArithError;
pub use sequence::{fold_map_results, sequence_results};
