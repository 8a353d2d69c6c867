//! Arbitrary-precision base-10 decimal arithmetic
//!
//! This library provides a single decimal type, [`BigDecimal`], storing a
//! value exactly as `mantissa × 10^exponent`:
//!
//! - **Arbitrary precision**: the mantissa is a [`BigInt`]; only the
//!   exponent is bounded (to a machine word), and exponent overflow is an
//!   error, never a silent wrap
//! - **Exact decimal math**: addition, subtraction, and multiplication
//!   carry no rounding error at all
//! - **Bounded expansion**: division, remainder, and square roots truncate
//!   at a caller-chosen number of fractional digits (28 by default, see
//!   [`Context`])
//! - **Three-mode conversions**: checked, saturating, and truncating
//!   conversions to every fixed-width integer, [`BigInt`], and
//!   [`rust_decimal::Decimal`]
//! - **Canonical text form**: `"MANTISSA"` or `"MANTISSA E<EXP>"`, with a
//!   guaranteed parse/format round trip
//! - **Serde support**: strings for human-readable formats, raw
//!   mantissa/exponent pairs for binary formats
//!
//! ## Example
//!
//! ```rust
//! use bigdec::{BigDecimal, Context};
//!
//! let price: BigDecimal = "123456 E-2".parse().unwrap(); // 1234.56
//! let quantity = BigDecimal::from(3);
//! let total = price * quantity;
//! assert_eq!(total.to_string(), "370368 E-2"); // 3703.68, exactly
//!
//! let third = BigDecimal::from(1)
//!     .try_div(&BigDecimal::from(3), &Context::new(4))
//!     .unwrap();
//! assert_eq!(third.to_string(), "3333 E-4");
//! ```

mod bigdecimal;
mod context;
mod convert;

pub use bigdecimal::BigDecimal;
pub use context::Context;
pub use convert::FromBigDecimal;

pub use num_bigint::BigInt;
pub use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("overflow: exponent out of range")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative value")]
    NegativeSquareRoot,

    #[error("invalid decimal format")]
    InvalidFormat,
}

pub type Result<T> = core::result::Result<T, DecimalError>;
