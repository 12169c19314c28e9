// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic and float comparison helpers
// ============================================================================
//
// This module provides:
// - BigDecimal: an immutable mantissa × 10^exponent decimal value
// - NumericError: error types for parsing and conversions
// - NearlyEqual and friends: relative-epsilon float comparison
//
// Design principles:
// - Values are normalized on construction and never mutated afterward
// - Fallible operations return Result; the only panicking path is division
//   by zero, which propagates the big-integer fault unchanged
// - Division precision is an explicit parameter, not process state

mod big_decimal;
mod errors;
mod float_cmp;

pub use big_decimal::{BigDecimal, DEFAULT_DIVISION_PRECISION};
pub use errors::{NumericError, NumericResult};
pub use float_cmp::{between_inclusive, correct_precision, NearlyEqual};
