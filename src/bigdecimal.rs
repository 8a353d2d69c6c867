use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Context, DecimalError};

/// Arbitrary-precision signed decimal, stored as `mantissa × 10^exponent`.
///
/// The mantissa is an arbitrary-precision integer; the exponent is a
/// bounded `i32` whose arithmetic is overflow-checked. Every value is kept
/// in canonical form: a nonzero mantissa never ends in a zero digit, and
/// zero is always `(0, 0)`. Canonical form makes structural equality
/// identical to numeric equality, so `PartialEq`/`Hash` derive directly
/// from the fields while `Ord` compares numerically.
///
/// Addition, subtraction, and multiplication are exact. Division,
/// remainder-with-quotient, and square roots truncate their expansion at a
/// caller-chosen number of fractional digits (see [`Context`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    mantissa: BigInt,
    exponent: i32,
}

// ============================================================================
// Construction and Accessors
// ============================================================================

impl BigDecimal {
    /// Creates a decimal from a mantissa and a power-of-ten exponent,
    /// normalizing immediately.
    ///
    /// # Panics
    /// Panics if stripping trailing zero digits pushes the exponent out of
    /// `i32` range. Use [`try_new`](Self::try_new) to handle that case.
    pub fn new(mantissa: impl Into<BigInt>, exponent: i32) -> Self {
        match Self::try_new(mantissa, exponent) {
            Ok(value) => value,
            Err(_) => panic!("overflow in BigDecimal::new: exponent out of range"),
        }
    }

    /// Creates a decimal from a mantissa and a power-of-ten exponent,
    /// normalizing immediately.
    pub fn try_new(mantissa: impl Into<BigInt>, exponent: i32) -> crate::Result<Self> {
        let (mantissa, exponent) = normalize(mantissa.into(), exponent)?;
        Ok(Self { mantissa, exponent })
    }

    /// The additive identity, `(0, 0)`.
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    /// The multiplicative identity, `(1, 0)`.
    pub fn one() -> Self {
        Self {
            mantissa: BigInt::one(),
            exponent: 0,
        }
    }

    /// Negative one, `(-1, 0)`.
    pub fn negative_one() -> Self {
        Self {
            mantissa: -BigInt::one(),
            exponent: 0,
        }
    }

    /// Returns the canonical mantissa.
    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Returns the canonical exponent.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Consumes the value, returning its canonical `(mantissa, exponent)`.
    pub fn into_parts(self) -> (BigInt, i32) {
        (self.mantissa, self.exponent)
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Sign and Classification
// ============================================================================

impl BigDecimal {
    /// Returns the sign of the value as -1, 0, or 1.
    #[inline]
    pub fn sign(&self) -> i32 {
        match self.mantissa.sign() {
            num_bigint::Sign::Minus => -1,
            num_bigint::Sign::NoSign => 0,
            num_bigint::Sign::Plus => 1,
        }
    }

    /// Returns the absolute value.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns `true` if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Returns `true` if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Returns `true` if the value has no fractional part.
    ///
    /// In canonical form this is exactly `exponent >= 0`.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    /// Returns `true` if the value is an even integer.
    ///
    /// A positive exponent means the value is a multiple of ten, hence
    /// even; only at exponent zero does the mantissa's parity decide.
    pub fn is_even_integer(&self) -> bool {
        self.is_integer() && (self.exponent > 0 || self.mantissa.is_even())
    }

    /// Returns `true` if the value is an odd integer.
    pub fn is_odd_integer(&self) -> bool {
        self.is_integer() && self.exponent == 0 && self.mantissa.is_odd()
    }
}

// ============================================================================
// Comparison Utilities
// ============================================================================

impl BigDecimal {
    /// Returns the smaller of two values.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    /// Returns the larger of two values.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }

    /// Restricts the value to a closed interval.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        assert!(min <= max, "min must be less than or equal to max");
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Returns the operand with the larger absolute value, preferring
    /// `self` on ties.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn max_magnitude(self, other: Self) -> Self {
        if self.abs() >= other.abs() { self } else { other }
    }

    /// Returns the operand with the smaller absolute value, preferring
    /// `other` on ties.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn min_magnitude(self, other: Self) -> Self {
        if self.abs() < other.abs() { self } else { other }
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => {
                let diff = exponent_diff(other.exponent, self.exponent);
                self.mantissa.cmp(&(&other.mantissa * pow10(diff)))
            }
            Ordering::Greater => {
                let diff = exponent_diff(self.exponent, other.exponent);
                (&self.mantissa * pow10(diff)).cmp(&other.mantissa)
            }
        }
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Alignment
// ============================================================================

impl BigDecimal {
    /// Rescales both operands to a shared exponent.
    ///
    /// The common exponent is the smaller of the two; the mantissa
    /// belonging to the larger exponent is multiplied up by the
    /// difference, so no information is lost.
    fn align(&self, other: &Self) -> (BigInt, BigInt, i32) {
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => (
                self.mantissa.clone(),
                other.mantissa.clone(),
                self.exponent,
            ),
            Ordering::Less => {
                let diff = exponent_diff(other.exponent, self.exponent);
                (
                    self.mantissa.clone(),
                    &other.mantissa * pow10(diff),
                    self.exponent,
                )
            }
            Ordering::Greater => {
                let diff = exponent_diff(self.exponent, other.exponent);
                (
                    &self.mantissa * pow10(diff),
                    other.mantissa.clone(),
                    other.exponent,
                )
            }
        }
    }
}

// ============================================================================
// Arithmetic Operations - Addition and Subtraction
// ============================================================================

impl BigDecimal {
    /// Exact addition. Returns an error only if normalizing the sum pushes
    /// the exponent out of range.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_add(&self, rhs: &Self) -> crate::Result<Self> {
        let (m1, m2, exponent) = self.align(rhs);
        Self::try_new(m1 + m2, exponent)
    }

    /// Exact addition. Returns `None` on exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }

    /// Exact subtraction. Returns an error only if normalizing the
    /// difference pushes the exponent out of range.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_sub(&self, rhs: &Self) -> crate::Result<Self> {
        let (m1, m2, exponent) = self.align(rhs);
        Self::try_new(m1 - m2, exponent)
    }

    /// Exact subtraction. Returns `None` on exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }

    /// Returns `self + 1`.
    ///
    /// # Panics
    /// Panics on exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn increment(&self) -> Self {
        self + &Self::one()
    }

    /// Returns `self - 1`.
    ///
    /// # Panics
    /// Panics on exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn decrement(&self) -> Self {
        self - &Self::one()
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl BigDecimal {
    /// Exact multiplication: mantissas multiply, exponents add (checked).
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_mul(&self, rhs: &Self) -> crate::Result<Self> {
        let exponent = self
            .exponent
            .checked_add(rhs.exponent)
            .ok_or(DecimalError::Overflow)?;
        Self::try_new(&self.mantissa * &rhs.mantissa, exponent)
    }

    /// Exact multiplication. Returns `None` on exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }
}

// ============================================================================
// Arithmetic Operations - Division and Remainder
// ============================================================================

impl BigDecimal {
    /// Division truncated at the context's precision.
    ///
    /// The quotient carries exactly `cx.precision()` fractional digits,
    /// truncated toward zero at that digit.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div(&self, divisor: &Self, cx: &Context) -> crate::Result<Self> {
        self.try_div_with(divisor, cx.precision())
    }

    /// Division truncated at an explicit precision.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div_with(&self, divisor: &Self, precision: u64) -> crate::Result<Self> {
        if divisor.mantissa.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let (scale, exponent) = precision_parts(precision)?;
        let (m1, m2, _) = self.align(divisor);
        Self::try_new(m1 * pow10(scale) / m2, exponent)
    }

    /// Division truncated at the context's precision. Returns `None` on a
    /// zero divisor or exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div(&self, divisor: &Self, cx: &Context) -> Option<Self> {
        self.try_div(divisor, cx).ok()
    }

    /// Division truncated at an explicit precision. Returns `None` on a
    /// zero divisor or exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div_with(&self, divisor: &Self, precision: u64) -> Option<Self> {
        self.try_div_with(divisor, precision).ok()
    }

    /// Remainder at the operands' natural common exponent.
    ///
    /// The remainder of the truncating mantissa division after alignment;
    /// its sign follows the dividend.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_rem(&self, divisor: &Self) -> crate::Result<Self> {
        if divisor.mantissa.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let (m1, m2, exponent) = self.align(divisor);
        Self::try_new(m1 % m2, exponent)
    }

    /// Remainder at the operands' natural common exponent. Returns `None`
    /// on a zero divisor.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.try_rem(divisor).ok()
    }

    /// Quotient and remainder in one pass, at the context's precision.
    ///
    /// The quotient is truncated at the requested precision; the remainder
    /// is always computed at the operands' natural common exponent,
    /// independent of that precision. `a == q*d + r` therefore does not
    /// hold in general -- `r` equals `a % d` exactly, while `q` is the
    /// precision-truncated expansion of `a/d`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div_rem(&self, divisor: &Self, cx: &Context) -> crate::Result<(Self, Self)> {
        self.try_div_rem_with(divisor, cx.precision())
    }

    /// Quotient and remainder in one pass, at an explicit precision.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div_rem_with(&self, divisor: &Self, precision: u64) -> crate::Result<(Self, Self)> {
        if divisor.mantissa.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let (scale, quotient_exponent) = precision_parts(precision)?;
        let (m1, m2, exponent) = self.align(divisor);
        let remainder = Self::try_new(&m1 % &m2, exponent)?;
        let quotient = Self::try_new(m1 * pow10(scale) / m2, quotient_exponent)?;
        Ok((quotient, remainder))
    }

    /// Quotient and remainder at the context's precision. Returns `None`
    /// on a zero divisor or exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div_rem(&self, divisor: &Self, cx: &Context) -> Option<(Self, Self)> {
        self.try_div_rem(divisor, cx).ok()
    }

    /// Quotient and remainder at an explicit precision. Returns `None` on
    /// a zero divisor or exponent overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div_rem_with(&self, divisor: &Self, precision: u64) -> Option<(Self, Self)> {
        self.try_div_rem_with(divisor, precision).ok()
    }
}

// ============================================================================
// Arithmetic Operations - Shift
// ============================================================================

impl BigDecimal {
    fn shift_by(&self, shift: i64) -> crate::Result<Self> {
        let exponent = i64::from(self.exponent)
            .checked_add(shift)
            .and_then(|e| i32::try_from(e).ok())
            .ok_or(DecimalError::Overflow)?;
        Self::try_new(self.mantissa.clone(), exponent)
    }

    /// Multiplies the value by `10^shift` by adjusting the exponent only.
    ///
    /// A negative `shift` divides. The mantissa is untouched; the
    /// operation fails if the exponent leaves `i32` range.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_shift(&self, shift: i32) -> crate::Result<Self> {
        self.shift_by(i64::from(shift))
    }

    /// Multiplies the value by `10^shift`. Returns `None` on exponent
    /// overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_shift(&self, shift: i32) -> Option<Self> {
        self.try_shift(shift).ok()
    }
}

// ============================================================================
// Arithmetic Operations - Square Root
// ============================================================================

impl BigDecimal {
    /// Square root truncated at the context's precision.
    ///
    /// Fails on negative values; the square root of zero is zero.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_sqrt(&self, cx: &Context) -> crate::Result<Self> {
        self.try_sqrt_with(cx.precision())
    }

    /// Square root truncated at an explicit number of fractional digits.
    ///
    /// An odd exponent is first made even (`mantissa × 10`, exponent - 1)
    /// so halving the exponent stays exact; the mantissa is then scaled up
    /// with guard digits beyond the requested precision, rooted with
    /// Newton's method, and shifted back down.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_sqrt_with(&self, precision: u64) -> crate::Result<Self> {
        if self.mantissa.is_negative() {
            return Err(DecimalError::NegativeSquareRoot);
        }

        let (_, result_exponent) = precision_parts(precision)?;

        let mut mantissa = self.mantissa.clone();
        let mut exponent = i64::from(self.exponent);
        if exponent & 1 == 1 {
            mantissa *= 10;
            exponent -= 1;
        }
        exponent >>= 1;

        // Guard digits: enough that shifting the root back by the halved
        // exponent cannot eat into the requested precision.
        let buffer = exponent.unsigned_abs() + 1;
        let scale_up = precision
            .checked_add(buffer)
            .and_then(|digits| digits.checked_mul(2))
            .and_then(|digits| u32::try_from(digits).ok())
            .ok_or(DecimalError::Overflow)?;

        let root = integer_sqrt(&(mantissa * pow10(scale_up)));
        Self::try_new(shift_mantissa(&root, exponent - buffer as i64), result_exponent)
    }

    /// Square root truncated at the context's precision. Returns `None`
    /// for negative values.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sqrt(&self, cx: &Context) -> Option<Self> {
        self.try_sqrt(cx).ok()
    }

    /// Square root truncated at an explicit precision. Returns `None` for
    /// negative values.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sqrt_with(&self, precision: u64) -> Option<Self> {
        self.try_sqrt_with(precision).ok()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl BigDecimal {
    /// Parses the canonical exponential form.
    ///
    /// Accepted grammar: `"<mantissa>"` or `"<mantissa> E<exponent>"`,
    /// where both parts are optionally signed decimal integers and exactly
    /// one ASCII space precedes the `E`. There is no decimal point and no
    /// whitespace tolerance.
    pub fn from_str_exact(s: &str) -> crate::Result<Self> {
        let bytes = s.as_bytes();
        match bytes.iter().position(|&b| b == b'E') {
            None => {
                let mantissa: BigInt = s.parse().map_err(|_| DecimalError::InvalidFormat)?;
                Self::try_new(mantissa, 0)
            }
            Some(pos) => {
                if pos < 2 || pos + 1 >= bytes.len() || bytes[pos - 1] != b' ' {
                    return Err(DecimalError::InvalidFormat);
                }
                let mantissa: BigInt = s[..pos - 1]
                    .parse()
                    .map_err(|_| DecimalError::InvalidFormat)?;
                let exponent: i32 = s[pos + 1..]
                    .parse()
                    .map_err(|_| DecimalError::InvalidFormat)?;
                Self::try_new(mantissa, exponent)
            }
        }
    }
}

impl FromStr for BigDecimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_exact(s)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            write!(f, "{}", self.mantissa)
        } else {
            write!(f, "{} E{}", self.mantissa, self.exponent)
        }
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("BigDecimal")
                .field("mantissa", &self.mantissa)
                .field("exponent", &self.exponent)
                .finish()
        } else {
            write!(f, "BigDecimal({})", self)
        }
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Add for BigDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> Self::Output {
        self.checked_add(rhs).expect("attempt to add with overflow")
    }
}

impl Sub for BigDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> Self::Output {
        self.checked_sub(rhs)
            .expect("attempt to subtract with overflow")
    }
}

impl Mul for BigDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: &BigDecimal) -> Self::Output {
        self.checked_mul(rhs)
            .expect("attempt to multiply with overflow")
    }
}

impl Div for BigDecimal {
    type Output = Self;

    /// Divides at the default precision of [`Context`].
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn div(self, rhs: &BigDecimal) -> Self::Output {
        self.checked_div(rhs, &Context::default())
            .expect("attempt to divide by zero or overflow")
    }
}

impl Rem for BigDecimal {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn rem(self, rhs: &BigDecimal) -> Self::Output {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Neg for BigDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> Self::Output {
        BigDecimal {
            mantissa: -&self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Shl<i32> for BigDecimal {
    type Output = Self;

    /// Multiplies by `10^shift`; a negative shift divides.
    fn shl(self, shift: i32) -> Self::Output {
        self.shift_by(i64::from(shift))
            .expect("attempt to shift with overflow")
    }
}

impl Shr<i32> for BigDecimal {
    type Output = Self;

    /// Divides by `10^shift`; a negative shift multiplies.
    fn shr(self, shift: i32) -> Self::Output {
        self.shift_by(-i64::from(shift))
            .expect("attempt to shift with overflow")
    }
}

impl AddAssign for BigDecimal {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl SubAssign for BigDecimal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl MulAssign for BigDecimal {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl DivAssign for BigDecimal {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl RemAssign for BigDecimal {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

// ============================================================================
// Numeric Trait Implementations
// ============================================================================

impl Zero for BigDecimal {
    fn zero() -> Self {
        BigDecimal::zero()
    }

    fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }
}

impl One for BigDecimal {
    fn one() -> Self {
        BigDecimal::one()
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for BigDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigDecimal> for BigDecimal {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + x)
    }
}

impl Product for BigDecimal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigDecimal> for BigDecimal {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| &acc * x)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for BigDecimal {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - use the canonical string form
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - raw mantissa/exponent pair
            (&self.mantissa, self.exponent).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        } else {
            let (mantissa, exponent) = <(BigInt, i32)>::deserialize(deserializer)?;
            Self::try_new(mantissa, exponent).map_err(de::Error::custom)
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Strips trailing zero digits from the mantissa, raising the exponent for
/// each, and collapses zero to `(0, 0)`.
fn normalize(mut mantissa: BigInt, mut exponent: i32) -> crate::Result<(BigInt, i32)> {
    if mantissa.is_zero() {
        return Ok((mantissa, 0));
    }

    let ten = BigInt::from(10);
    loop {
        let (quotient, remainder) = mantissa.div_rem(&ten);
        if !remainder.is_zero() {
            return Ok((mantissa, exponent));
        }
        mantissa = quotient;
        exponent = exponent.checked_add(1).ok_or(DecimalError::Overflow)?;
    }
}

/// Computes `10^exponent`.
pub(crate) fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10).pow(exponent)
}

/// Multiplies (non-negative shift) or truncating-divides (negative shift)
/// a mantissa by a power of ten.
pub(crate) fn shift_mantissa(mantissa: &BigInt, shift: i64) -> BigInt {
    if shift < 0 {
        let magnitude = shift.unsigned_abs();
        // 10^k exceeds any k-bit magnitude, so the quotient is zero.
        if magnitude >= mantissa.bits() {
            return BigInt::zero();
        }
        mantissa / pow10(magnitude as u32)
    } else {
        mantissa * pow10(shift as u32)
    }
}

/// The difference between two exponents, which always fits `u32`.
fn exponent_diff(high: i32, low: i32) -> u32 {
    (i64::from(high) - i64::from(low)) as u32
}

/// Splits a requested precision into a power-of-ten scale and the
/// resulting (negated) exponent, failing if either is out of range.
fn precision_parts(precision: u64) -> crate::Result<(u32, i32)> {
    let scale = u32::try_from(precision).map_err(|_| DecimalError::Overflow)?;
    let exponent = i32::try_from(precision).map_err(|_| DecimalError::Overflow)?;
    Ok((scale, -exponent))
}

/// Floor of the square root of a non-negative integer, by Newton's method.
///
/// Starts from a power-of-two overestimate of the root and descends
/// monotonically; the loop exits at the first non-decrease, which is the
/// floor fixed point. (Descending from an overestimate avoids the
/// two-cycle Newton exhibits around `n` when `n + 1` is a perfect square.)
fn integer_sqrt(value: &BigInt) -> BigInt {
    debug_assert!(!value.is_negative());
    if value.is_zero() {
        return BigInt::zero();
    }

    let mut x0: BigInt = BigInt::one() << ((value.bits() / 2 + 1) as usize);
    let mut x1: BigInt = (&x0 + value / &x0) >> 1usize;
    while x1 < x0 {
        x0 = x1;
        x1 = (&x0 + value / &x0) >> 1usize;
    }

    x0
}
