//! Error types for the fallible sample operations.
//!
//! Both variants are recoverable data, never panics: callers receive them
//! inside the `Err` variant of a `Result` and inspect them like any other
//! value. Presentation (printing, exit codes) belongs to the caller.

use static_assertions::assert_impl_all;

/// An error produced by the sample arithmetic operations.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::ArithError;
///
/// let error = ArithError::Parse { input: String::from("foo") };
/// assert_eq!(format!("{error}"), "\"foo\" is not a valid integer literal");
///
/// assert_eq!(format!("{}", ArithError::DivideByZero), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// The input string is not a valid integer literal.
    ///
    /// Carries the offending input so a caller can report it.
    Parse {
        /// The string that failed to parse.
        input: String,
    },
    /// The denominator of a division was zero.
    DivideByZero,
}

impl std::fmt::Display for ArithError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { input } => {
                write!(formatter, "\"{input}\" is not a valid integer literal")
            }
            Self::DivideByZero => write!(formatter, "division by zero"),
        }
    }
}

impl std::error::Error for ArithError {}

// Errors cross thread boundaries freely; keep that guarantee visible.
assert_impl_all!(ArithError: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_input() {
        let error = ArithError::Parse {
            input: String::from("12a"),
        };
        assert_eq!(format!("{error}"), "\"12a\" is not a valid integer literal");
    }

    #[test]
    fn divide_by_zero_display() {
        assert_eq!(format!("{}", ArithError::DivideByZero), "division by zero");
    }

    #[test]
    fn errors_compare_by_content() {
        let left = ArithError::Parse {
            input: String::from("x"),
        };
        let right = ArithError::Parse {
            input: String::from("x"),
        };
        assert_eq!(left, right);
        assert_ne!(left, ArithError::DivideByZero);
    }

    #[test]
    fn error_trait_object_is_constructible() {
        let error: Box<dyn std::error::Error> = Box::new(ArithError::DivideByZero);
        assert_eq!(error.to_string(), "division by zero");
    }
}
