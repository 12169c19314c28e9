// ============================================================================
// BigDecimal
// Arbitrary-precision decimal arithmetic over a big-integer mantissa
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// The number of significant digits computed for an inexact division when no
/// explicit precision is given.
pub const DEFAULT_DIVISION_PRECISION: u32 = 50;

/// Upper bound on the scaling steps taken when decimalizing an `f64`. Every
/// finite double converges well inside this bound; hitting it means the
/// binary expansion never lined up at any representable scale.
const MAX_F64_SCALE_STEPS: u32 = 325;

/// Arbitrary-precision decimal number stored as `mantissa × 10^exponent`.
///
/// The representation is kept in normalized form: a non-zero mantissa never
/// carries a trailing zero digit, and a zero mantissa forces the exponent to
/// zero. Every constructor restores this invariant, so two values that are
/// numerically equal always have identical `(mantissa, exponent)` pairs —
/// equality, ordering, and hashing all rely on it.
///
/// Values are immutable: all operations produce new instances.
///
/// # Example
/// ```
/// use bigdec::numeric::BigDecimal;
///
/// let a: BigDecimal = "3.14159".parse().unwrap();
/// let b: BigDecimal = "0.02".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "3.16159");
/// ```
#[derive(Clone)]
pub struct BigDecimal {
    mantissa: BigInt,
    exponent: i32,
}

// ============================================================================
// Construction
// ============================================================================

impl BigDecimal {
    /// Create a value equal to `mantissa × 10^exponent`, normalized.
    pub fn new(mantissa: BigInt, exponent: i32) -> Self {
        let mut value = Self { mantissa, exponent };
        value.normalize();
        value
    }

    /// -1 as a BigDecimal.
    pub fn minus_one() -> Self {
        Self::from(-1i64)
    }

    /// Pi to 50 decimal places.
    pub fn pi() -> Self {
        let digits = b"314159265358979323846264338327950288419716939937510";
        Self::new(
            BigInt::parse_bytes(digits, 10).expect("valid literal"),
            -50,
        )
    }

    /// E to 50 decimal places.
    pub fn e() -> Self {
        let digits = b"271828182845904523536028747135266249775724709369995";
        Self::new(
            BigInt::parse_bytes(digits, 10).expect("valid literal"),
            -50,
        )
    }

    /// Removes trailing zero digits from the mantissa; a zero mantissa resets
    /// the exponent.
    fn normalize(&mut self) {
        if self.mantissa.is_zero() {
            self.exponent = 0;
            return;
        }

        let ten = BigInt::from(10u32);
        while (&self.mantissa % &ten).is_zero() {
            self.mantissa = &self.mantissa / &ten;
            self.exponent += 1;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The significant digits of the number, sign included.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// The power of ten the mantissa is scaled by.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Render the raw `(mantissa, exponent)` pair as `"<mantissa>e<exponent>"`.
    pub fn to_internal_string(&self) -> String {
        format!("{}e{}", self.mantissa, self.exponent)
    }
}

/// 10^exponent as a big integer.
fn pow10(exponent: u32) -> BigInt {
    num_traits::Pow::pow(BigInt::from(10u32), exponent)
}

/// Number of decimal digits in the magnitude of `value`. Zero counts as one
/// digit.
fn decimal_digit_count(value: &BigInt) -> i64 {
    value.magnitude().to_string().len() as i64
}

/// log10 of `value`. Negative values yield NaN, zero yields -inf.
fn big_log10(value: &BigInt) -> f64 {
    match value.sign() {
        Sign::Minus => f64::NAN,
        Sign::NoSign => f64::NEG_INFINITY,
        Sign::Plus => {
            let digits = value.magnitude().to_string();
            let lead_len = digits.len().min(15);
            let lead: f64 = digits[..lead_len].parse().expect("digit prefix");
            lead.log10() + (digits.len() - lead_len) as f64
        },
    }
}

/// Mantissa of `a` rescaled to `b`'s smaller exponent.
fn align_mantissa(a: &BigDecimal, b: &BigDecimal) -> BigInt {
    &a.mantissa * pow10((a.exponent - b.exponent) as u32)
}

// ============================================================================
// Arithmetic
// ============================================================================

impl BigDecimal {
    /// Divide, computing at most `precision` significant digits.
    ///
    /// Integer division is truncating, so the dividend mantissa is scaled up
    /// by enough powers of ten for the quotient to carry `precision`
    /// significant digits before the truncation happens. Non-terminating
    /// quotients (1/3 and friends) are therefore approximate.
    ///
    /// # Panics
    /// Dividing by a zero-valued operand propagates the division-by-zero
    /// fault from the underlying big-integer division.
    pub fn div_with_precision(&self, divisor: &BigDecimal, precision: u32) -> BigDecimal {
        let digit_difference =
            decimal_digit_count(&self.mantissa) - decimal_digit_count(&divisor.mantissa);
        let mut digit_budget = precision as i64 - digit_difference;
        if digit_budget < 0 {
            tracing::trace!("division digit budget {} clamped to zero", digit_budget);
            digit_budget = 0;
        }

        let scaled = &self.mantissa * pow10(digit_budget as u32);
        BigDecimal::new(
            scaled / &divisor.mantissa,
            self.exponent - divisor.exponent - digit_budget as i32,
        )
    }

    /// `base` raised to `power`, both native floats, accumulated into an
    /// arbitrary-precision value.
    ///
    /// Exponentiation runs in chunks of at most 100 so the intermediate
    /// native results stay finite; the final precision is bounded by native
    /// float exponentiation, not exact.
    ///
    /// # Errors
    /// Returns `NonFinite` if a native exponentiation step overflows or the
    /// inputs produce NaN.
    pub fn pow(base: f64, power: f64) -> NumericResult<BigDecimal> {
        let mut accumulator = BigDecimal::one();
        let mut power = power;
        while power.abs() > 100.0 {
            let chunk = if power > 0.0 { 100.0 } else { -100.0 };
            accumulator = &accumulator * &BigDecimal::try_from_f64(base.powf(chunk))?;
            power -= chunk;
        }
        Ok(&accumulator * &BigDecimal::try_from_f64(base.powf(power))?)
    }

    /// `value` raised to the power of Euler's number.
    pub fn exp(value: f64) -> NumericResult<BigDecimal> {
        Self::pow(value, std::f64::consts::E)
    }

    /// The value plus one.
    pub fn increment(&self) -> BigDecimal {
        self + &BigDecimal::one()
    }

    /// The value minus one.
    pub fn decrement(&self) -> BigDecimal {
        self - &BigDecimal::one()
    }

    /// Factorial by repeated multiply-and-decrement while the value is
    /// greater than zero.
    ///
    /// Only meaningful for non-negative integral values: a fractional input
    /// walks down past zero and stops there, a negative or zero input
    /// returns one. Callers are expected to pass whole numbers.
    pub fn factorial(value: BigDecimal) -> BigDecimal {
        let mut result = BigDecimal::one();
        let mut value = value;
        while value.mantissa.is_positive() {
            result = &result * &value;
            value = value.decrement();
        }
        result
    }

    /// Absolute value.
    pub fn abs(&self) -> BigDecimal {
        BigDecimal {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Approximate base-10 logarithm as `log10(mantissa) + exponent`.
    ///
    /// Lossy: intended for magnitude estimates, not high-precision
    /// logarithms. Negative values yield NaN, zero yields -inf.
    pub fn log10(&self) -> f64 {
        big_log10(&self.mantissa) + self.exponent as f64
    }

    /// Approximate logarithm in an arbitrary base, via [`BigDecimal::log10`].
    pub fn log(&self, base: f64) -> f64 {
        self.log10() / base.log10()
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: Self) -> BigDecimal {
        // Align both mantissas at the smaller exponent, then sum.
        if self.exponent > rhs.exponent {
            BigDecimal::new(align_mantissa(self, rhs) + &rhs.mantissa, rhs.exponent)
        } else {
            BigDecimal::new(align_mantissa(rhs, self) + &self.mantissa, self.exponent)
        }
    }
}

impl Add for BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: Self) -> BigDecimal {
        &self + &rhs
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: Self) -> BigDecimal {
        self + &(-rhs)
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: Self) -> BigDecimal {
        &self - &rhs
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: Self) -> BigDecimal {
        // Exact: mantissas multiply, exponents add.
        BigDecimal::new(&self.mantissa * &rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl Mul for BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: Self) -> BigDecimal {
        &self * &rhs
    }
}

impl Div for &BigDecimal {
    type Output = BigDecimal;

    /// Division at [`DEFAULT_DIVISION_PRECISION`] significant digits.
    ///
    /// # Panics
    /// Panics when `rhs` is zero; see [`BigDecimal::div_with_precision`].
    fn div(self, rhs: Self) -> BigDecimal {
        self.div_with_precision(rhs, DEFAULT_DIVISION_PRECISION)
    }
}

impl Div for BigDecimal {
    type Output = BigDecimal;

    fn div(self, rhs: Self) -> BigDecimal {
        &self / &rhs
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal {
            mantissa: -&self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

// ============================================================================
// Identity Traits
// ============================================================================

impl Zero for BigDecimal {
    fn zero() -> Self {
        BigDecimal {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }
}

impl One for BigDecimal {
    fn one() -> Self {
        BigDecimal {
            mantissa: BigInt::one(),
            exponent: 0,
        }
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Comparison
// ============================================================================

fn sign_value(value: &BigInt) -> i8 {
    match value.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_sign = sign_value(&self.mantissa);
        let other_sign = sign_value(&other.mantissa);
        if self_sign != other_sign {
            return self_sign.cmp(&other_sign);
        }

        if self.exponent != other.exponent {
            // Digit count plus exponent is monotonic with the magnitude of a
            // normalized non-zero value, so the estimate decides most
            // cross-exponent comparisons without aligning mantissas.
            let self_estimate = decimal_digit_count(&self.mantissa) + self.exponent as i64;
            let other_estimate = decimal_digit_count(&other.mantissa) + other.exponent as i64;
            let magnitude_order = self_estimate.cmp(&other_estimate);
            let order = if self_sign < 0 {
                magnitude_order.reverse()
            } else {
                magnitude_order
            };
            if order != Ordering::Equal {
                return order;
            }

            // Estimates tie across different exponents (e.g. 99 vs 10);
            // settle it exactly at the common smaller exponent.
            let common = self.exponent.min(other.exponent);
            let self_mantissa = &self.mantissa * pow10((self.exponent - common) as u32);
            let other_mantissa = &other.mantissa * pow10((other.exponent - common) as u32);
            return self_mantissa.cmp(&other_mantissa);
        }

        self.mantissa.cmp(&other.mantissa)
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Normalized values are equal iff both components are equal, so
        // hashing the pair agrees with Eq.
        self.mantissa.hash(state);
        self.exponent.hash(state);
    }
}

// ============================================================================
// Parsing and Display
// ============================================================================

fn valid_decimal_literal(s: &str) -> bool {
    if s.is_empty() || s == "." {
        return false;
    }

    // A minus sign may only appear once, at the front.
    if let Some(index) = s.rfind('-') {
        if index != 0 {
            return false;
        }
    }

    let mut seen_point = false;
    for c in s.chars() {
        if !c.is_ascii_digit() && c != '.' && c != '-' {
            return false;
        }
        if c == '.' {
            if seen_point {
                return false;
            }
            seen_point = true;
        }
    }

    true
}

impl FromStr for BigDecimal {
    type Err = NumericError;

    /// Parse a plain decimal literal.
    ///
    /// Accepted forms: `"321"`, `"321."`, `"321.987"`, `".00993922"`,
    /// `"-247.246"`. Anything containing other characters, a second `.` or
    /// `-`, or consisting of a lone `.` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !valid_decimal_literal(s) {
            return Err(NumericError::InvalidFormat(s.to_string()));
        }

        let digits: String = s.chars().filter(|&c| c != '.').collect();
        let mantissa =
            BigInt::from_str(&digits).map_err(|_| NumericError::InvalidFormat(s.to_string()))?;

        // Each digit to the right of the decimal point lowers the exponent
        // by one; a trailing point counts for nothing.
        let exponent = match s.find('.') {
            None => 0,
            Some(index) if index == s.len() - 1 => 0,
            Some(index) => -((s.len() - 1 - index) as i32),
        };

        Ok(BigDecimal::new(mantissa, exponent))
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            return write!(f, "{}", self.mantissa);
        }
        if self.exponent > 0 {
            return write!(
                f,
                "{}{}",
                self.mantissa,
                "0".repeat(self.exponent as usize)
            );
        }

        // Place a decimal point so exactly -exponent digits sit to its
        // right, zero-padding the digits when the mantissa is too short.
        // Values below one render without a leading zero: ".00001".
        let sign = if self.mantissa.sign() == Sign::Minus { "-" } else { "" };
        let mut digits = self.mantissa.magnitude().to_string();
        let places = -(self.exponent as i64) as usize;
        if digits.len() < places {
            digits = format!("{}{}", "0".repeat(places - digits.len()), digits);
        }
        let point_at = digits.len() - places;
        write!(f, "{}{}.{}", sign, &digits[..point_at], &digits[point_at..])
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({})", self.to_internal_string())
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for BigDecimal {
            fn from(value: $t) -> Self {
                BigDecimal::new(BigInt::from(value), 0)
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        BigDecimal::new(value, 0)
    }
}

impl BigDecimal {
    /// Exact decimalization of a finite double.
    ///
    /// Scales the value by successive powers of ten until the truncated
    /// mantissa reproduces the scaled double exactly, which recovers the
    /// shortest decimal the double round-trips through.
    ///
    /// # Errors
    /// `NonFinite` for NaN or infinite input; `PrecisionLoss` if no
    /// representable scale reproduces the value.
    pub fn try_from_f64(value: f64) -> NumericResult<BigDecimal> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }

        let mut mantissa = BigInt::from_f64(value.trunc()).ok_or(NumericError::NonFinite)?;
        let mut exponent = 0i32;
        let mut scale_factor = 1f64;
        let mut steps = 0u32;

        loop {
            if let Some(approximated) = mantissa.to_f64() {
                if approximated.is_finite() && (value * scale_factor - approximated).abs() == 0.0 {
                    break;
                }
            }

            steps += 1;
            if steps > MAX_F64_SCALE_STEPS {
                return Err(NumericError::PrecisionLoss);
            }
            exponent -= 1;
            scale_factor *= 10.0;
            mantissa = BigInt::from_f64((value * scale_factor).trunc())
                .ok_or(NumericError::PrecisionLoss)?;
        }

        Ok(BigDecimal::new(mantissa, exponent))
    }

    /// Integral part of the value as a big integer, truncated toward zero.
    fn to_integral(&self) -> BigInt {
        if self.exponent >= 0 {
            &self.mantissa * pow10(self.exponent as u32)
        } else {
            &self.mantissa / pow10(-(self.exponent as i64) as u32)
        }
    }
}

impl TryFrom<f64> for BigDecimal {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_f64(value)
    }
}

impl FromPrimitive for BigDecimal {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigDecimal::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigDecimal::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        BigDecimal::try_from_f64(n).ok()
    }
}

impl ToPrimitive for BigDecimal {
    fn to_i64(&self) -> Option<i64> {
        self.to_integral().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integral().to_u64()
    }

    /// Lossy conversion to a double.
    ///
    /// Magnitudes whose base-10 logarithm falls outside roughly ±308
    /// saturate to zero or a signed infinity instead of producing NaN
    /// artifacts.
    fn to_f64(&self) -> Option<f64> {
        let finite_mantissa = self.mantissa.to_f64().filter(|d| d.is_finite());
        if let Some(mantissa_double) = finite_mantissa {
            return Some(mantissa_double * 10f64.powi(self.exponent));
        }

        // The mantissa alone overflows a double. Trim digits off the
        // mantissa, guided by a log10 estimate, until it fits.
        let sign = if self.mantissa.sign() == Sign::Minus { -1f64 } else { 1f64 };
        let mantissa_log10 = big_log10(&self.mantissa.abs());
        let result_log10 = mantissa_log10 + self.exponent as f64;
        if result_log10 < -308.0 {
            return Some(0.0);
        }
        if result_log10 > 308.0 {
            return Some(sign * f64::INFINITY);
        }

        let places_to_trim = mantissa_log10 as i32 - 300;
        tracing::debug!("mantissa exceeds f64 range, trimming {} digits", places_to_trim);
        let trimmed = &self.mantissa / pow10(places_to_trim as u32);
        let mantissa_double = trimmed.to_f64().unwrap_or(sign * f64::INFINITY);
        Some(mantissa_double * 10f64.powi(self.exponent + places_to_trim))
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
