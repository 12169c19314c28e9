// ============================================================================
// Format
// File-size and count rendering with SI, power-of-two, and IEC prefixes
// ============================================================================

use crate::validation::{Validation, ValidationFailed};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit a formatted file size is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileSizeUnit {
    /// Render the size in bits
    Bit,
    /// Render the size in bytes
    Byte,
}

/// Divisor stepping between size prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileSizeDivisor {
    /// Steps of 1,000 with SI prefix names (kilo-, mega-, ...)
    Si,
    /// Steps of 1,024, still displayed with the SI prefix names
    PowerOfTwo,
    /// Steps of 1,024 with the IEC prefix names (kibi-, mebi-, ...)
    IecPowerOfTwo,
}

/// Errors produced by the size formatters.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The magnitude cannot be expressed in the requested unit
    SizeOutOfRange(String),
    /// One or more arguments failed validation
    InvalidArguments(ValidationFailed),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::SizeOutOfRange(message) => write!(f, "{message}"),
            FormatError::InvalidArguments(failed) => write!(f, "invalid arguments: {failed}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::SizeOutOfRange(_) => None,
            FormatError::InvalidArguments(failed) => Some(failed),
        }
    }
}

const SI_DIVISOR: f32 = 1000.0;
const POWER_OF_TWO_DIVISOR: f32 = 1024.0;
const PREFIX_COUNT: usize = 8;

const PREFIXES: [&str; 9] = ["", "kilo", "mega", "giga", "tera", "peta", "exa", "zetta", "yotta"];
const IEC_PREFIXES: [&str; 9] = ["", "kibi", "mebi", "gibi", "tebi", "pebi", "exbi", "zebi", "yobi"];
const ABBREVIATED_PREFIXES: [&str; 9] = ["", "k", "m", "g", "t", "p", "e", "z", "y"];
const ABBREVIATED_CAPITAL_PREFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Render a byte count with the default settings: bytes, power-of-two
/// divisor, abbreviated prefix, two decimal places.
///
/// # Errors
/// Fails only for `i64::MIN`, whose magnitude cannot be flipped positive.
pub fn file_size(bytes: i64) -> Result<String, FormatError> {
    file_size_with(bytes, FileSizeUnit::Byte, FileSizeDivisor::PowerOfTwo, true, 2)
}

/// Render a byte count in the given unit and prefix system.
///
/// Given a file of 1,048,576 bytes at 2 decimal places:
/// - SI bits:              `8.39 megabits`  / `8.39 mb`
/// - SI bytes:             `1.05 megabytes` / `1.05 mB`
/// - Power of 2 bits:      `8 megabits`     / `8 Mb`
/// - Power of 2 bytes:     `1 megabytes`    / `1 MB`
/// - IEC power of 2 bits:  `8 mebibits`     / `8 Mb`
/// - IEC power of 2 bytes: `1 mebibytes`    / `1 MB`
///
/// # Errors
/// - `InvalidArguments` if `decimal_places` is outside 0..=28.
/// - `SizeOutOfRange` if the size cannot be expressed in bits (beyond
///   ±`i64::MAX / 8` bytes), or is `i64::MIN`.
pub fn file_size_with(
    bytes: i64,
    unit: FileSizeUnit,
    divisor: FileSizeDivisor,
    abbreviated: bool,
    decimal_places: u32,
) -> Result<String, FormatError> {
    Validation::begin()
        .in_range_inclusive(0, 28, decimal_places as i64, "decimal_places")
        .check()
        .map_err(FormatError::InvalidArguments)?;

    let mut size = bytes;

    // Expressed as bits, only sizes up to +/-1 exabyte fit in an i64.
    if unit == FileSizeUnit::Bit && (size > i64::MAX / 8 || size < i64::MIN / 8) {
        return Err(FormatError::SizeOutOfRange(format!(
            "the file size {size} is too large to express as bits (maximum {} bytes)",
            i64::MAX / 8
        )));
    }
    if unit == FileSizeUnit::Bit {
        size *= 8;
    }

    // Flip negative sizes positive for the division loop and remember to
    // put the dash back at the end.
    let negative = size < 0;
    if negative && size == i64::MIN {
        return Err(FormatError::SizeOutOfRange(
            "the file size is too low to express".to_string(),
        ));
    }
    if negative {
        size = -size;
    }

    let suffix = unit_suffix(unit, abbreviated);
    let divisor_value = if divisor == FileSizeDivisor::Si {
        SI_DIVISOR
    } else {
        POWER_OF_TWO_DIVISOR
    };

    let mut mantissa = size as f32;
    let mut division_count = 0usize;
    while mantissa >= divisor_value && division_count <= PREFIX_COUNT {
        mantissa /= divisor_value;
        division_count += 1;
    }

    let prefixes = match (divisor, abbreviated) {
        (FileSizeDivisor::Si, true) => &ABBREVIATED_PREFIXES,
        (FileSizeDivisor::Si, false) => &PREFIXES,
        (FileSizeDivisor::PowerOfTwo, true) => &ABBREVIATED_CAPITAL_PREFIXES,
        (FileSizeDivisor::PowerOfTwo, false) => &PREFIXES,
        (FileSizeDivisor::IecPowerOfTwo, true) => &ABBREVIATED_CAPITAL_PREFIXES,
        (FileSizeDivisor::IecPowerOfTwo, false) => &IEC_PREFIXES,
    };

    let sign = if negative { "-" } else { "" };
    Ok(format!(
        "{sign}{} {}{suffix}",
        round_for_display(mantissa, decimal_places),
        prefixes[division_count]
    ))
}

/// Render a pixel count with SI prefixes: `12.3 megapixels`.
pub fn pixel_count(count: u64, decimal_places: u32) -> String {
    let mut mantissa = count as f32;
    let mut division_count = 0usize;

    while mantissa >= 1000.0 && division_count < PREFIX_COUNT {
        mantissa /= 1000.0;
        division_count += 1;
    }

    format!(
        "{} {}pixels",
        round_for_display(mantissa, decimal_places),
        PREFIXES[division_count]
    )
}

/// Pick the singular or plural form for a count.
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

fn unit_suffix(unit: FileSizeUnit, abbreviated: bool) -> &'static str {
    match (unit, abbreviated) {
        (FileSizeUnit::Bit, true) => "b",
        (FileSizeUnit::Bit, false) => "bits",
        (FileSizeUnit::Byte, true) => "B",
        (FileSizeUnit::Byte, false) => "bytes",
    }
}

// Banker's rounding at the requested scale, with trailing zeros dropped, to
// match decimal display rounding.
fn round_for_display(mantissa: f32, decimal_places: u32) -> String {
    let rounded = Decimal::from_f32(mantissa)
        .expect("reduced mantissa fits in Decimal")
        .round_dp(decimal_places)
        .normalize();
    rounded.to_string()
}
