/// Precision configuration for expansion-bearing operations.
///
/// Division, remainder-with-quotient, and square roots have infinite
/// decimal expansions in general; a `Context` caps the expansion at
/// `precision` fractional digits (the result is truncated there, not
/// rounded). Entry points that omit an explicit precision argument take a
/// `&Context` instead; `Context::default()` uses
/// [`DEFAULT_PRECISION`](Self::DEFAULT_PRECISION).
///
/// The context only affects newly computed results, never existing values.
/// No bounds are imposed on the precision itself beyond the exponent-range
/// checks the operations already perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    precision: u64,
}

impl Context {
    /// The precision used when none is specified: 28 fractional digits.
    pub const DEFAULT_PRECISION: u64 = 28;

    /// Creates a context truncating expansions at `precision` fractional
    /// digits.
    #[inline]
    pub const fn new(precision: u64) -> Self {
        Self { precision }
    }

    /// Returns the number of fractional digits expansions are truncated at.
    #[inline]
    pub const fn precision(&self) -> u64 {
        self.precision
    }

    /// Replaces the precision.
    #[inline]
    pub fn set_precision(&mut self, precision: u64) {
        self.precision = precision;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}
