//! Turning selected errors into fallback values.
//!
//! A handler looks at an error and either supplies a replacement value
//! (`Some`) or lets the error through (`None`). Every recovered error is
//! logged at warn level.
//!
//! ```
//! use morefunc_foundation::{Error, ErrorKind, Value};
//! use morefunc_functools::Recover;
//!
//! let missing: Result<Value, Error> = Err(Error::missing_value(Value::from("k")));
//! let value = missing
//!     .recover(|err| matches!(err.kind, ErrorKind::MissingValue { .. }).then_some(Value::Nil))
//!     .unwrap();
//! assert_eq!(value, Value::Nil);
//! ```

use std::fmt;

/// Extension trait for recovering from selected errors.
pub trait Recover<T, E> {
    /// Replaces the error with the handler's value when it returns `Some`.
    ///
    /// # Errors
    ///
    /// Returns the original error when the handler returns `None`.
    fn recover<H>(self, handler: H) -> Result<T, E>
    where
        H: FnOnce(&E) -> Option<T>;
}

impl<T, E: fmt::Display> Recover<T, E> for Result<T, E> {
    fn recover<H>(self, handler: H) -> Result<T, E>
    where
        H: FnOnce(&E) -> Option<T>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => match handler(&err) {
                Some(value) => {
                    log::warn!("recovered from error: {err}");
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }
}

/// Wraps a fallible function so that errors `fallback` handles become values.
///
/// ```
/// use morefunc_functools::or_default;
///
/// let parse = or_default(
///     |s: &str| s.parse::<i32>(),
///     |_| Some(0),
/// );
/// assert_eq!(parse("12"), Ok(12));
/// assert_eq!(parse("twelve"), Ok(0));
/// ```
#[must_use]
pub fn or_default<A, T, E, F, H>(f: F, fallback: H) -> impl Fn(A) -> Result<T, E>
where
    E: fmt::Display,
    F: Fn(A) -> Result<T, E>,
    H: Fn(&E) -> Option<T>,
{
    move |arg| f(arg).recover(&fallback)
}
