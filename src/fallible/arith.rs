//! Sample fallible operations for drivers to chain.
//!
//! These two functions exist so the composition machinery has something
//! concrete to compose: a parser that can reject its input and a division
//! that can reject its denominator. Each covers one variant of
//! [`ArithError`].

use super::error::ArithError;

/// Parses a string as a signed integer.
///
/// # Errors
///
/// Returns [`ArithError::Parse`] carrying the offending input when the
/// string is not a valid integer literal.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::{parse_int, ArithError};
///
/// assert_eq!(parse_int("42"), Ok(42));
/// assert_eq!(parse_int("-7"), Ok(-7));
/// assert_eq!(
///     parse_int("foo"),
///     Err(ArithError::Parse { input: String::from("foo") })
/// );
/// ```
pub fn parse_int(input: &str) -> Result<i64, ArithError> {
    input.parse::<i64>().map_err(|_| ArithError::Parse {
        input: input.to_string(),
    })
}

/// Divides `numerator` by `denominator`.
///
/// # Errors
///
/// Returns [`ArithError::DivideByZero`] when `denominator` is zero.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::{div_int, ArithError};
///
/// assert_eq!(div_int(10, 2), Ok(5));
/// assert_eq!(div_int(4, 0), Err(ArithError::DivideByZero));
/// ```
pub fn div_int(numerator: i64, denominator: i64) -> Result<i64, ArithError> {
    if denominator == 0 {
        Err(ArithError::DivideByZero)
    } else {
        Ok(numerator / denominator)
    }
}
