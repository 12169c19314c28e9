// ============================================================================
// bigdec Library
// Arbitrary-precision decimal arithmetic and supporting utilities
// ============================================================================

//! # bigdec
//!
//! Arbitrary-precision decimal arithmetic built on a big-integer mantissa
//! scaled by a power of ten, together with the utility helpers that grew up
//! around it.
//!
//! ## Features
//!
//! - **BigDecimal** — immutable, normalized `mantissa × 10^exponent` values
//!   with exact addition, subtraction, and multiplication, and
//!   precision-bounded division
//! - **Exact float decimalization** — doubles convert to the shortest
//!   decimal they round-trip through
//! - **Fluent validation** — every failed argument check reported at once
//! - **Size formatting** — file sizes with SI, power-of-two, and IEC
//!   prefixes, pixel counts
//! - **Bit scanning and float comparison** helpers
//!
//! ## Example
//!
//! ```rust
//! use bigdec::prelude::*;
//!
//! let balance: BigDecimal = "538437127.68856241285349106412".parse().unwrap();
//! let cost: BigDecimal = "665606408.78719159452260744238".parse().unwrap();
//! assert!(balance < cost);
//!
//! let shortfall = &cost - &balance;
//! assert_eq!(shortfall.to_string(), "127169281.09862918166911637826");
//! ```

pub mod bits;
pub mod format;
pub mod numeric;
pub mod text;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bits::HighestSetBit;
    pub use crate::format::{
        file_size, file_size_with, pixel_count, pluralize, FileSizeDivisor, FileSizeUnit,
        FormatError,
    };
    pub use crate::numeric::{
        between_inclusive, correct_precision, BigDecimal, NearlyEqual, NumericError,
        NumericResult, DEFAULT_DIVISION_PRECISION,
    };
    pub use crate::text::{Codepage, CodepageConverter};
    pub use crate::validation::{Validation, ValidationError, ValidationFailed};
    pub use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
}
