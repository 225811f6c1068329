//! # combinars
//!
//! A small teaching library demonstrating two algebra patterns that come up
//! constantly in functional programming:
//!
//! - **Monoids**: types with an associative `combine` operation and an
//!   identity element, which together make it safe to reduce any sequence
//!   (including the empty one) to a single value.
//! - **Short-circuiting Result composition**: sequencing fallible steps so
//!   that the first failure aborts the rest, and collapsing a sequence of
//!   independently-fallible values into one fallible aggregate.
//!
//! ## Overview
//!
//! The crate is split into two halves:
//!
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid) and the operation-selecting wrappers
//!   [`Sum`](typeclass::Sum), [`Product`](typeclass::Product),
//!   [`Max`](typeclass::Max), [`Min`](typeclass::Min)
//! - **Fallible Composition**: the [`Chainable`](fallible::Chainable) bind
//!   combinator, [`sequence_results`](fallible::sequence_results),
//!   [`fold_map_results`](fallible::fold_map_results) and the sample
//!   operations [`parse_int`](fallible::parse_int) /
//!   [`div_int`](fallible::div_int)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup/Monoid traits and the numeric wrappers
//! - `fallible`: Result composition (implies `typeclass`)
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! // Multiply a list of parsed integers, failing on the first bad literal.
//! let product = fold_map_results(["2", "3", "7"], |s| parse_int(s).map(Product::new));
//! assert_eq!(product, Ok(Product(42)));
//!
//! let failed = fold_map_results(["2", "x", "7"], |s| parse_int(s).map(Product::new));
//! assert_eq!(failed, Err(ArithError::Parse { input: String::from("x") }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "fallible")]
pub mod fallible;
