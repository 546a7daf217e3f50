use num_traits::{Bounded, CheckedAdd, CheckedSub, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Numeric edge weight usable by every algorithm in the crate.
///
/// The maximum representable value doubles as "infinity": a distance equal to
/// [`Weight::infinity`] means "unreachable" and must never be used as an
/// operand. Implemented for the signed integers and, for IEEE floats, for
/// `ordered_float::OrderedFloat`, which supplies the total order the Dijkstra
/// heap needs.
pub trait Weight:
    Copy
    + Debug
    + Ord
    + Zero
    + Bounded
    + Add<Output = Self>
    + Sub<Output = Self>
    + FromStr
    + Send
    + Sync
    + 'static
{
    /// The unreachable sentinel
    #[inline]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the unreachable sentinel
    #[inline]
    fn is_infinite(&self) -> bool {
        *self == Self::max_value()
    }

    /// `self + rhs`, or `None` if the result is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if the result is not representable
    fn checked_difference(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                #[inline]
                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    CheckedSub::checked_sub(&self, &rhs)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    if sum.0.is_finite() { Some(sum) } else { None }
                }

                #[inline]
                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    let difference = self - rhs;
                    if difference.0.is_finite() { Some(difference) } else { None }
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Adds two weights unless either of them is infinity or the sum overflows.
///
/// Every relaxation in the crate goes through here, so no arithmetic is ever
/// performed on the sentinel.
#[inline]
pub fn add_finite<W: Weight>(a: W, b: W) -> Option<W> {
    if a.is_infinite() || b.is_infinite() {
        None
    } else {
        a.checked_sum(b)
    }
}

/// Computes `value + plus - minus` unless `value` is infinity or the result is
/// not representable.
pub fn shift_finite<W: Weight>(value: W, plus: W, minus: W) -> Option<W> {
    if value.is_infinite() {
        None
    } else {
        checked_shift(value, plus, minus)
    }
}

/// Computes `value + plus - minus` with no sentinel check.
///
/// Both evaluation orders are tried, so an intermediate overflow alone never
/// turns a representable result into `None`.
pub fn checked_shift<W: Weight>(value: W, plus: W, minus: W) -> Option<W> {
    value
        .checked_sum(plus)
        .and_then(|partial| partial.checked_difference(minus))
        .or_else(|| {
            value
                .checked_difference(minus)
                .and_then(|partial| partial.checked_sum(plus))
        })
}
