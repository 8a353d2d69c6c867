use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::bigdecimal::{pow10, shift_mantissa};
use crate::BigDecimal;

/// Conversion out of a [`BigDecimal`], under the three failure policies.
///
/// Implemented for every fixed-width integer, [`BigInt`], and
/// [`Decimal`]. All three modes return `None` rather than failing loudly:
/// an unconvertible value is an expected outcome, not an error.
///
/// - **checked** rejects both out-of-range magnitude and any fractional
///   part the target cannot represent exactly.
/// - **saturating** clamps out-of-range magnitude to the target's
///   MIN/MAX, but still rejects unrepresentable fractional parts --
///   saturation governs magnitude overflow only, never precision loss.
/// - **truncating** rejects out-of-range magnitude, and for in-range
///   values silently drops fractional digits (toward zero).
///
/// For any value the target represents exactly, the three modes agree.
pub trait FromBigDecimal: Sized {
    fn from_checked(value: &BigDecimal) -> Option<Self>;
    fn from_saturating(value: &BigDecimal) -> Option<Self>;
    fn from_truncating(value: &BigDecimal) -> Option<Self>;
}

impl BigDecimal {
    /// Converts to `T`, rejecting out-of-range or fractional values.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn to_checked<T: FromBigDecimal>(&self) -> Option<T> {
        T::from_checked(self)
    }

    /// Converts to `T`, clamping out-of-range magnitude to `T`'s extremes.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn to_saturating<T: FromBigDecimal>(&self) -> Option<T> {
        T::from_saturating(self)
    }

    /// Converts to `T`, dropping fractional digits toward zero.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn to_truncating<T: FromBigDecimal>(&self) -> Option<T> {
        T::from_truncating(self)
    }
}

// ============================================================================
// Conversions From Native Types
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigDecimal {
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<Decimal> for BigDecimal {
    /// Exact: the coefficient/scale pair of a `Decimal` embeds losslessly.
    fn from(value: Decimal) -> Self {
        Self::new(BigInt::from(value.mantissa()), -(value.scale() as i32))
    }
}

// ============================================================================
// Conversions To Fixed-Width Integers
// ============================================================================

macro_rules! impl_to_integer {
    ($t:ty, $range:ident, $to:ident) => {
        static $range: LazyLock<(BigDecimal, BigDecimal)> = LazyLock::new(|| {
            (BigDecimal::from(<$t>::MIN), BigDecimal::from(<$t>::MAX))
        });

        impl FromBigDecimal for $t {
            fn from_checked(value: &BigDecimal) -> Option<Self> {
                if value.exponent() < 0 {
                    return None;
                }
                let (min, max) = &*$range;
                if value > max || value < min {
                    return None;
                }
                shift_mantissa(value.mantissa(), i64::from(value.exponent())).$to()
            }

            fn from_saturating(value: &BigDecimal) -> Option<Self> {
                if value.exponent() < 0 {
                    return None;
                }
                let (min, max) = &*$range;
                if value > max {
                    return Some(<$t>::MAX);
                }
                if value < min {
                    return Some(<$t>::MIN);
                }
                shift_mantissa(value.mantissa(), i64::from(value.exponent())).$to()
            }

            fn from_truncating(value: &BigDecimal) -> Option<Self> {
                let (min, max) = &*$range;
                if value > max || value < min {
                    return None;
                }
                shift_mantissa(value.mantissa(), i64::from(value.exponent())).$to()
            }
        }
    };
}

impl_to_integer!(i8, I8_RANGE, to_i8);
impl_to_integer!(i16, I16_RANGE, to_i16);
impl_to_integer!(i32, I32_RANGE, to_i32);
impl_to_integer!(i64, I64_RANGE, to_i64);
impl_to_integer!(i128, I128_RANGE, to_i128);
impl_to_integer!(u8, U8_RANGE, to_u8);
impl_to_integer!(u16, U16_RANGE, to_u16);
impl_to_integer!(u32, U32_RANGE, to_u32);
impl_to_integer!(u64, U64_RANGE, to_u64);
impl_to_integer!(u128, U128_RANGE, to_u128);

// ============================================================================
// Conversions To BigInt
// ============================================================================

impl FromBigDecimal for BigInt {
    /// No magnitude bound; only a fractional part can fail.
    fn from_checked(value: &BigDecimal) -> Option<Self> {
        if value.exponent() < 0 {
            return None;
        }
        Some(shift_mantissa(value.mantissa(), i64::from(value.exponent())))
    }

    fn from_saturating(value: &BigDecimal) -> Option<Self> {
        Self::from_checked(value)
    }

    fn from_truncating(value: &BigDecimal) -> Option<Self> {
        Some(shift_mantissa(value.mantissa(), i64::from(value.exponent())))
    }
}

// ============================================================================
// Conversions To Decimal
// ============================================================================

/// `Decimal`'s hard scale ceiling: 28 fractional digits.
const DECIMAL_MAX_SCALE: i32 = 28;

static DECIMAL_RANGE: LazyLock<(BigDecimal, BigDecimal)> = LazyLock::new(|| {
    (BigDecimal::from(Decimal::MIN), BigDecimal::from(Decimal::MAX))
});

static DECIMAL_MAX_MANTISSA: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(Decimal::MAX.mantissa()));

impl FromBigDecimal for Decimal {
    fn from_checked(value: &BigDecimal) -> Option<Self> {
        let (min, max) = &*DECIMAL_RANGE;
        if value > max || value < min {
            return None;
        }
        if value.exponent() < -DECIMAL_MAX_SCALE {
            return None;
        }
        Some(to_decimal_lossy(value))
    }

    fn from_saturating(value: &BigDecimal) -> Option<Self> {
        if value.exponent() < -DECIMAL_MAX_SCALE {
            return None;
        }
        let (min, max) = &*DECIMAL_RANGE;
        if value > max {
            return Some(Decimal::MAX);
        }
        if value < min {
            return Some(Decimal::MIN);
        }
        Some(to_decimal_lossy(value))
    }

    fn from_truncating(value: &BigDecimal) -> Option<Self> {
        let (min, max) = &*DECIMAL_RANGE;
        if value > max || value < min {
            return None;
        }
        if value.exponent() < -DECIMAL_MAX_SCALE {
            let shift = i64::from(value.exponent()) + i64::from(DECIMAL_MAX_SCALE);
            let mantissa = shift_mantissa(value.mantissa(), shift);
            return Some(to_decimal_lossy(&BigDecimal::new(mantissa, -DECIMAL_MAX_SCALE)));
        }
        Some(to_decimal_lossy(value))
    }
}

/// Converts a value already known to be within `Decimal`'s range and scale
/// ceiling.
///
/// A mantissa wider than the 96-bit coefficient sheds digits one at a
/// time, lowering the scale; the last shed digit rounds half-up (ties away
/// from zero). That reduction is the one place in the crate where rounding
/// rather than truncation occurs.
fn to_decimal_lossy(value: &BigDecimal) -> Decimal {
    let negative = value.is_negative();
    let mut mantissa = value.mantissa().abs();
    let mut scale: u32 = 0;

    if value.exponent() > 0 {
        mantissa *= pow10(value.exponent() as u32);
    } else if value.exponent() < 0 {
        scale = value.exponent().unsigned_abs();
        let max = &*DECIMAL_MAX_MANTISSA;
        let ten = BigInt::from(10);
        let five = BigInt::from(5);

        let mut remainder = BigInt::zero();
        while &mantissa > max {
            let (quotient, digit) = mantissa.div_rem(&ten);
            mantissa = quotient;
            remainder = digit;
            scale -= 1;
        }
        if remainder >= five {
            mantissa += 1;
            if &mantissa > max {
                // The carry overflowed the coefficient; shed one more
                // digit and round it in turn.
                let (quotient, digit) = mantissa.div_rem(&ten);
                mantissa = if digit >= five { quotient + 1 } else { quotient };
                scale -= 1;
            }
        }
    }

    let coefficient = mantissa
        .to_i128()
        .expect("mantissa fits the 96-bit coefficient after reduction");
    let coefficient = if negative { -coefficient } else { coefficient };
    Decimal::from_i128_with_scale(coefficient, scale)
}
