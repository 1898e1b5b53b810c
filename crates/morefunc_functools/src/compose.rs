//! Function composition, currying, and argument unpacking.
//!
//! - [`compose!`](crate::compose!) chains functions right to left
//! - [`curry2!`](crate::curry2!) / [`curry3!`](crate::curry3!) turn an
//!   n-ary function into a chain of unary ones
//! - [`unpack2`] / [`unpack3`] adapt an n-ary function to take one tuple
//!
//! ```
//! use morefunc_functools::{compose, curry2};
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let add_five = curry2!(add)(5);
//! let f = compose!(add_five, double);
//! assert_eq!(f(10), 25);
//! ```

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// `compose!()` is [`identity`](crate::identity).
#[macro_export]
macro_rules! compose {
    () => {
        $crate::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}

/// Curries a binary function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// Arity is fixed. Each application returns the next closure, and partially
/// applied closures can be called repeatedly, so captured arguments must be
/// `Clone`.
#[macro_export]
macro_rules! curry2 {
    ($f:expr) => {{
        let f = $f;
        move |a| {
            let f = ::std::clone::Clone::clone(&f);
            move |b| f(::std::clone::Clone::clone(&a), b)
        }
    }};
}

/// Curries a ternary function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// See [`curry2!`](crate::curry2!) for the contract.
#[macro_export]
macro_rules! curry3 {
    ($f:expr) => {{
        let f = $f;
        move |a| {
            let f = ::std::clone::Clone::clone(&f);
            move |b| {
                let f = ::std::clone::Clone::clone(&f);
                let a = ::std::clone::Clone::clone(&a);
                move |c| {
                    f(
                        ::std::clone::Clone::clone(&a),
                        ::std::clone::Clone::clone(&b),
                        c,
                    )
                }
            }
        }
    }};
}

/// Returns its argument.
#[must_use]
#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/// Composes two functions: `compose2(f, g)(x) == f(g(x))`.
#[must_use]
pub fn compose2<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Adapts a binary function to take a pair.
#[must_use]
pub fn unpack2<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn((A, B)) -> R {
    move |(a, b)| f(a, b)
}

/// Adapts a ternary function to take a triple.
#[must_use]
pub fn unpack3<A, B, C, R>(f: impl Fn(A, B, C) -> R) -> impl Fn((A, B, C)) -> R {
    move |(a, b, c)| f(a, b, c)
}
