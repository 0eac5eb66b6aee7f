//! Arithmetic capability: a named, reusable bound over `+` and `*`.
//!
//! Generic code in Rust is type-checked at its definition, before any
//! substitution, so a host that adds and multiplies its payload must say so
//! in its bounds. [`Arithmetic`] names that requirement once and every host
//! reuses it.

use std::any::type_name;
use std::marker::PhantomData;
use std::ops::{Add, Mul};

use tracing::trace;

/// Payload types that support addition and multiplication with themselves.
///
/// Implemented automatically for every type with `Add<Output = Self>` and
/// `Mul<Output = Self>`. Overflow and other failures belong to the payload
/// type's own operators.
pub trait Arithmetic: Add<Output = Self> + Mul<Output = Self> + Sized {
    fn sum(self, rhs: Self) -> Self {
        self + rhs
    }

    fn product(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl<T> Arithmetic for T where T: Add<Output = T> + Mul<Output = T> {}

/// Stateless host performing `plus` and `times` over any [`Arithmetic`] payload.
///
/// ```
/// use dep_inversion::ArithHost;
///
/// assert_eq!(ArithHost::<i32>::new().plus(40, 2), 42);
/// assert_eq!(ArithHost::<f64>::new().times(42.5, 2.0), 85.0);
/// ```
///
/// Payloads without both operators are rejected at compile time. `String`
/// only adds a `&str`, and has no `*`:
///
/// ```compile_fail
/// use dep_inversion::ArithHost;
///
/// let host = ArithHost::<String>::new();
/// ```
///
/// ```compile_fail
/// use dep_inversion::ArithHost;
///
/// let host = ArithHost::<&'static str>::new();
/// ```
///
/// ```compile_fail
/// use dep_inversion::ArithHost;
///
/// struct Label;
/// let host = ArithHost::<Label>::new();
/// ```
///
/// Addition alone is not enough:
///
/// ```compile_fail
/// use std::ops::Add;
/// use dep_inversion::ArithHost;
///
/// #[derive(Clone, Copy)]
/// struct Meters(u32);
///
/// impl Add for Meters {
///     type Output = Meters;
///     fn add(self, rhs: Meters) -> Meters {
///         Meters(self.0 + rhs.0)
///     }
/// }
///
/// let host = ArithHost::<Meters>::new();
/// ```
pub struct ArithHost<T: Arithmetic> {
    payload: PhantomData<T>,
}

impl<T: Arithmetic> ArithHost<T> {
    pub fn new() -> Self {
        Self {
            payload: PhantomData,
        }
    }

    pub fn plus(&self, a: T, b: T) -> T {
        trace!(payload = type_name::<T>(), "plus");
        a.sum(b)
    }

    pub fn times(&self, a: T, b: T) -> T {
        trace!(payload = type_name::<T>(), "times");
        a.product(b)
    }
}

impl<T: Arithmetic> Default for ArithHost<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic> Clone for ArithHost<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Arithmetic> Copy for ArithHost<T> {}

impl<T: Arithmetic> std::fmt::Debug for ArithHost<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArithHost")
            .field("payload", &type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::num::Wrapping;

    // User-defined payload: componentwise vector arithmetic.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Vec2 {
        x: i64,
        y: i64,
    }

    impl Add for Vec2 {
        type Output = Vec2;
        fn add(self, rhs: Vec2) -> Vec2 {
            Vec2 {
                x: self.x + rhs.x,
                y: self.y + rhs.y,
            }
        }
    }

    impl Mul for Vec2 {
        type Output = Vec2;
        fn mul(self, rhs: Vec2) -> Vec2 {
            Vec2 {
                x: self.x * rhs.x,
                y: self.y * rhs.y,
            }
        }
    }

    #[test]
    fn integer_payload() {
        let host = ArithHost::<i32>::new();
        assert_eq!(host.plus(40, 2), 42);
        assert_eq!(host.times(6, 7), 42);
    }

    #[test]
    fn float_payload() {
        let host = ArithHost::<f64>::default();
        assert_eq!(host.plus(42.5, 2.0), 44.5);
        assert_eq!(host.times(42.5, 2.0), 85.0);
    }

    #[test]
    fn identity_elements() {
        let host = ArithHost::<i64>::new();
        assert_eq!(host.plus(-17, 0), -17);
        assert_eq!(host.times(-17, 1), -17);
        assert_eq!(host.times(-17, 0), 0);

        let v = Vec2 { x: 3, y: -4 };
        let vhost = ArithHost::<Vec2>::new();
        assert_eq!(vhost.plus(v, Vec2 { x: 0, y: 0 }), v);
        assert_eq!(vhost.times(v, Vec2 { x: 1, y: 1 }), v);
    }

    #[test]
    fn user_defined_payload() {
        let host = ArithHost::<Vec2>::new();
        let a = Vec2 { x: 1, y: 2 };
        let b = Vec2 { x: 3, y: 4 };
        assert_eq!(host.plus(a, b), Vec2 { x: 4, y: 6 });
        assert_eq!(host.times(a, b), Vec2 { x: 3, y: 8 });
    }

    #[test]
    fn wrapping_payload_keeps_its_own_overflow_rules() {
        let host = ArithHost::<Wrapping<u8>>::new();
        assert_eq!(host.plus(Wrapping(200), Wrapping(100)), Wrapping(44));
        assert_eq!(host.times(Wrapping(16), Wrapping(16)), Wrapping(0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "overflow")]
    fn integer_overflow_is_not_masked() {
        let host = ArithHost::<i32>::new();
        let _ = host.plus(i32::MAX, 1);
    }

    #[test]
    fn debug_names_payload() {
        let text = format!("{:?}", ArithHost::<u16>::new());
        assert!(text.contains("u16"));
    }

    proptest! {
        #[test]
        fn plus_matches_operator(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let host = ArithHost::<i64>::new();
            prop_assert_eq!(host.plus(a, b), a + b);
            prop_assert_eq!(host.times(a, b), a * b);
        }

        #[test]
        fn float_ops_match_operator(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let host = ArithHost::<f64>::new();
            prop_assert_eq!(host.plus(a, b), a + b);
            prop_assert_eq!(host.times(a, b), a * b);
        }

        #[test]
        fn wrapping_ops_match_operator(a: u32, b: u32) {
            let host = ArithHost::<Wrapping<u32>>::new();
            prop_assert_eq!(host.plus(Wrapping(a), Wrapping(b)), Wrapping(a.wrapping_add(b)));
            prop_assert_eq!(host.times(Wrapping(a), Wrapping(b)), Wrapping(a.wrapping_mul(b)));
        }
    }
}
