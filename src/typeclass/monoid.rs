//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds one thing to a semigroup: a distinguished value `empty`
//! that is neutral on both sides of `combine`. That single extra value is
//! what makes [`Monoid::combine_all`] total - a fold over an empty sequence
//! has somewhere honest to start, where [`Semigroup::reduce_all`] can only
//! answer `None`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::{Semigroup, Monoid, Product};
//!
//! // "" is neutral for concatenation.
//! assert_eq!(String::empty().combine(String::from("hi")), "hi");
//!
//! // 1 is neutral for multiplication.
//! assert_eq!(Product::new(7).combine(Product::empty()), Product::new(7));
//!
//! // Which is exactly what reducing an empty sequence returns.
//! assert_eq!(Product::<i64>::combine_all(vec![]), Product::new(1));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to the Semigroup law):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use combinars::typeclass::{Semigroup, Monoid};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(String::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// Instances are stateless constants; calling `empty` twice yields equal
    /// values, and nothing ever mutates them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::{Monoid, Product};
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Product::<i64>::empty(), Product(1));
    /// ```
    fn empty() -> Self;

    /// Combines every element of an iterator, left to right, starting from
    /// the identity element.
    ///
    /// This is definitionally `iterator.fold(Self::empty(), combine)`. The
    /// empty iterator therefore yields exactly [`empty`](Monoid::empty) -
    /// the whole reason the identity element is required rather than
    /// optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::{Monoid, Product};
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(words), "abc");
    ///
    /// let factors = vec![Product::new(2), Product::new(3)];
    /// assert_eq!(Product::combine_all(factors), Product::new(6));
    ///
    /// let none: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(none), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// String Implementation
// =============================================================================

/// The empty string is neutral for concatenation.
impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option upgrades any semigroup to a monoid: `None` is the missing
/// identity element.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Product forms a monoid under multiplication with 1 as the identity.
///
/// `Default` would hand us 0, which is absorbing rather than neutral, so the
/// implementations are written out per numeric type.
impl Monoid for Product<i8> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<i16> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<i32> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<i64> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<i128> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<isize> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<u8> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<u16> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<u32> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<u64> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<u128> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<usize> {
    fn empty() -> Self {
        Self(1)
    }
}

/// Max forms a monoid with the type's minimum as the identity.
impl<A: Ord + Bounded + Clone> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the type's maximum as the identity.
impl<A: Ord + Bounded + Clone> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

/// Tuples form a monoid when all their components are monoids.
impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================
