//! Type class traits for the combining half of the library.
//!
//! This module provides the two algebraic structures the crate teaches:
//!
//! - [`Semigroup`]: types with an associative binary `combine` operation
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! The distinction matters for one concrete reason: an associative operation
//! alone cannot reduce an *empty* sequence, so [`Semigroup::reduce_all`]
//! returns `Option<Self>`, while [`Monoid::combine_all`] always produces a
//! value by starting the fold from the identity element.
//!
//! ## Choosing an operation
//!
//! A type such as `i64` supports several lawful combine operations (addition,
//! multiplication, maximum, ...). Rust resolves trait implementations by
//! type, so the operation is selected explicitly with a newtype wrapper
//! rather than through any ambient lookup:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`] / [`Min`]: maximum/minimum, identities from [`Bounded`]
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::{Semigroup, Monoid, Product};
//!
//! // String concatenation: associative, identity "".
//! let greeting = String::from("Hello, ").combine(String::from("World!"));
//! assert_eq!(greeting, "Hello, World!");
//!
//! // Integer multiplication via the Product wrapper: identity 1.
//! let factors = vec![Product::new(2), Product::new(3), Product::new(4)];
//! assert_eq!(Product::combine_all(factors), Product::new(24));
//!
//! // The empty sequence reduces to the identity element.
//! assert_eq!(Product::<i64>::combine_all(vec![]), Product::new(1));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
