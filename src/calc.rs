//! Calculator demo: the host is bound to an operation strategy and a payload.
//!
//! - High level part: `CalcDemo<U, T>`
//! - Low level parts: `Plus<T>`, `Times<T>`
//! - Abstraction: `Calc<T>`

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::arith::Arithmetic;

/// A binary operation over payload `T`.
pub trait Calc<T> {
    fn calc(&self, lhs: T, rhs: T) -> T;
}

// ============================================================================
// Strategies
// ============================================================================

pub struct Plus<T> {
    payload: PhantomData<T>,
}

pub struct Times<T> {
    payload: PhantomData<T>,
}

impl<T: Arithmetic> Calc<T> for Plus<T> {
    fn calc(&self, lhs: T, rhs: T) -> T {
        lhs.sum(rhs)
    }
}

impl<T: Arithmetic> Calc<T> for Times<T> {
    fn calc(&self, lhs: T, rhs: T) -> T {
        lhs.product(rhs)
    }
}

// Manual impls: deriving would put a needless bound on `T`.
macro_rules! stateless_strategy {
    ($name:ident) => {
        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self {
                    payload: PhantomData,
                }
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), type_name::<T>())
            }
        }
    };
}

stateless_strategy!(Plus);
stateless_strategy!(Times);

// ============================================================================
// Host
// ============================================================================

/// Owns one default-constructed strategy and remembers the last result.
///
/// ```
/// use dep_inversion::{CalcDemo, Plus, Times};
///
/// let mut demo = CalcDemo::<Plus<i32>, i32>::new();
/// assert_eq!(demo.do_calc(40, 2), 42);
/// assert_eq!(demo.get_result(), 42);
///
/// let mut demo = CalcDemo::<Times<f64>, f64>::new();
/// assert_eq!(demo.do_calc(42.5, 2.0), 85.0);
/// ```
///
/// A strategy over a payload without `+` is rejected at compile time:
///
/// ```compile_fail
/// use dep_inversion::{CalcDemo, Plus};
///
/// let demo = CalcDemo::<Plus<String>, String>::new();
/// ```
#[derive(Debug, Clone)]
pub struct CalcDemo<U, T>
where
    U: Calc<T> + Default,
    T: Arithmetic + Clone + Default,
{
    oper: U,
    result: T,
}

impl<U, T> CalcDemo<U, T>
where
    U: Calc<T> + Default,
    T: Arithmetic + Clone + Default,
{
    pub fn new() -> Self {
        debug!(
            strategy = type_name::<U>(),
            payload = type_name::<T>(),
            "binding calc host"
        );
        Self {
            oper: U::default(),
            result: T::default(),
        }
    }

    /// Runs the bound strategy and saves the result.
    pub fn do_calc(&mut self, arg1: T, arg2: T) -> T {
        let rslt = self.oper.calc(arg1, arg2);
        trace!(strategy = type_name::<U>(), "calculated");
        self.result = rslt.clone();
        rslt
    }

    /// Last result from `do_calc`, or `T::default()` before the first call.
    pub fn get_result(&self) -> T {
        self.result.clone()
    }
}

impl<U, T> Default for CalcDemo<U, T>
where
    U: Calc<T> + Default,
    T: Arithmetic + Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::Wrapping;

    // A strategy defined outside the crate's own pair.
    #[derive(Default)]
    struct Square;

    impl Calc<i64> for Square {
        fn calc(&self, lhs: i64, rhs: i64) -> i64 {
            (lhs + rhs) * (lhs + rhs)
        }
    }

    #[test]
    fn result_defaults_before_first_calc() {
        assert_eq!(CalcDemo::<Plus<i32>, i32>::new().get_result(), 0);
        assert_eq!(CalcDemo::<Times<f64>, f64>::default().get_result(), 0.0);
    }

    #[test]
    fn plus_saves_result() {
        let mut demo = CalcDemo::<Plus<i32>, i32>::new();
        let tmou = demo.do_calc(40, 2);
        assert_eq!(tmou, 42);
        assert_eq!(demo.get_result(), 42);
    }

    #[test]
    fn times_saves_result() {
        let mut demo = CalcDemo::<Times<f64>, f64>::new();
        assert_eq!(demo.do_calc(42.5, 2.0), 85.0);
        assert_eq!(demo.get_result(), 85.0);
    }

    #[test]
    fn later_calc_overwrites_saved_result() {
        let mut demo = CalcDemo::<Times<Wrapping<u8>>, Wrapping<u8>>::new();
        demo.do_calc(Wrapping(3), Wrapping(5));
        demo.do_calc(Wrapping(16), Wrapping(17));
        assert_eq!(demo.get_result(), Wrapping(16));
    }

    #[test]
    fn strategies_agree_with_operators() {
        let plus = Plus::<i64>::default();
        let times = Times::<i64>::default();
        for (a, b) in [(0, 9), (1, 9), (-3, 4), (12, 12)] {
            assert_eq!(plus.calc(a, b), a + b);
            assert_eq!(times.calc(a, b), a * b);
        }
    }

    #[test]
    fn host_accepts_other_strategies() {
        let mut demo = CalcDemo::<Square, i64>::new();
        assert_eq!(demo.do_calc(2, 3), 25);
        assert_eq!(demo.get_result(), 25);
    }

    #[test]
    fn strategy_debug_names_payload() {
        assert_eq!(format!("{:?}", Plus::<u8>::default()), "Plus<u8>");
        assert_eq!(format!("{:?}", Times::<i32>::default()), "Times<i32>");
    }
}
