//! Arbitrary-precision unsigned integer over base-10^9 limbs.
//!
//! Values are always kept in canonical form (see [`crate::limbs`]), so the
//! derived equality and hash agree with the numeric value.

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{BigUintError, Result};
use crate::limbs::{self, BASE, CHUNK_DIGITS};

/// Arbitrary-precision unsigned integer.
///
/// Limbs are stored in little-endian order (limbs[0] is least significant),
/// each holding nine decimal digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<i32>,
}

// ============================================================================
// Construction
// ============================================================================

impl BigUint {
    /// The canonical zero.
    ///
    /// ```
    /// use decbig::BigUint;
    ///
    /// let z = BigUint::zero();
    /// assert!(z.is_zero());
    /// assert_eq!(z.limbs(), &[0]);
    /// ```
    pub fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    /// The value 1.
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Construct from raw limbs (LE order).
    ///
    /// Returns `None` if any limb lies outside `[0, BASE)`. Zero limbs at the
    /// top are trimmed; an empty vector yields zero.
    pub fn from_limbs(mut limbs: Vec<i32>) -> Option<Self> {
        if limbs.iter().any(|l| !(0..BASE).contains(l)) {
            return None;
        }
        limbs::trim(&mut limbs);
        Some(Self { limbs })
    }

    /// Parse from a string of ASCII decimal digits.
    ///
    /// Leading zeros are accepted and normalized away. The empty string
    /// parses to zero. Any other character fails with
    /// [`BigUintError::InvalidDigit`].
    ///
    /// ```
    /// use decbig::BigUint;
    ///
    /// let b = BigUint::from_decimal_str("0001234567890").unwrap();
    /// assert_eq!(b.limbs(), &[234_567_890, 1]);
    /// assert!(BigUint::from_decimal_str("12a").is_err());
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        if let Some((index, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            tracing::debug!(index, ?found, "rejected decimal input");
            return Err(BigUintError::InvalidDigit { index, found });
        }

        // Walk right to left in nine-digit windows; the short prefix, if any,
        // comes out last as the top limb.
        let mut limbs: Vec<i32> = s
            .as_bytes()
            .rchunks(CHUNK_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0i32, |acc, &d| acc * 10 + i32::from(d - b'0'))
            })
            .collect();
        limbs::trim(&mut limbs);
        Ok(Self { limbs })
    }

    fn from_u128(mut n: u128) -> Self {
        let base = BASE as u128;
        let mut limbs = Vec::with_capacity(5);
        loop {
            limbs.push((n % base) as i32);
            n /= base;
            if n == 0 {
                break;
            }
        }
        Self { limbs }
    }

    /// Number of limbs in the canonical representation.
    #[inline]
    pub fn num_limbs(&self) -> usize {
        self.limbs.len()
    }

    /// Get limbs slice (LE order).
    #[inline]
    pub fn limbs(&self) -> &[i32] {
        &self.limbs
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Format as decimal string.
    ///
    /// The top limb is written as is; every lower limb is zero-padded to nine
    /// digits.
    ///
    /// ```
    /// use decbig::BigUint;
    ///
    /// let b = BigUint::from_limbs(vec![7, 1]).unwrap();
    /// assert_eq!(b.to_decimal_string(), "1000000007");
    /// assert_eq!(BigUint::zero().to_decimal_string(), "0");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let mut out = String::with_capacity(self.limbs.len() * CHUNK_DIGITS);
        let mut iter = self.limbs.iter().rev();
        // Writes into a String cannot fail.
        if let Some(top) = iter.next() {
            let _ = write!(out, "{top}");
        }
        for limb in iter {
            let _ = write!(out, "{limb:0width$}", width = CHUNK_DIGITS);
        }
        out
    }

    /// Narrow to `u32`, wrapping modulo 2^32.
    ///
    /// Exact for values below 2^32. Use `u32::try_from` for a checked
    /// conversion.
    ///
    /// ```
    /// use decbig::BigUint;
    ///
    /// let b: BigUint = "4294967296".parse().unwrap();
    /// assert_eq!(b.to_u32_wrapping(), 0);
    /// ```
    pub fn to_u32_wrapping(&self) -> u32 {
        self.limbs.iter().rev().fold(0u32, |acc, &limb| {
            acc.wrapping_mul(BASE as u32).wrapping_add(limb as u32)
        })
    }

    fn to_u64_checked(&self) -> Option<u64> {
        self.limbs.iter().rev().try_fold(0u64, |acc, &limb| {
            acc.checked_mul(BASE as u64)?.checked_add(limb as u64)
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Signed three-way comparison; only the sign of the result is meaningful.
    #[inline]
    pub fn compare(&self, other: &Self) -> i64 {
        limbs::compare(&self.limbs, &other.limbs)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// In-place subtraction with underflow error.
    ///
    /// On error `self` is left unchanged.
    ///
    /// ```
    /// use decbig::{BigUint, BigUintError};
    ///
    /// let mut a = BigUint::from(300u32);
    /// a.try_sub_assign(&BigUint::from(100u32)).unwrap();
    /// assert_eq!(a, BigUint::from(200u32));
    /// assert_eq!(a.try_sub_assign(&BigUint::from(201u32)), Err(BigUintError::Underflow));
    /// assert_eq!(a, BigUint::from(200u32));
    /// ```
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.sub_limbs(&other.limbs)
    }

    /// Subtraction with underflow error.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    fn sub_limbs(&mut self, other: &[i32]) -> Result<()> {
        let result = limbs::sub_assign(&mut self.limbs, other);
        if result.is_err() {
            tracing::debug!(
                minuend_limbs = self.limbs.len(),
                subtrahend_limbs = other.len(),
                "subtraction underflow"
            );
        }
        result
    }

    /// Prefix increment: add one and return the updated value.
    pub fn increment(&mut self) -> &mut Self {
        limbs::add_assign(&mut self.limbs, &[1]);
        self
    }

    /// Postfix increment: add one and return the value held before.
    pub fn post_increment(&mut self) -> Self {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Prefix decrement. Fails with [`BigUintError::Underflow`] at zero.
    pub fn decrement(&mut self) -> Result<&mut Self> {
        self.sub_limbs(&[1])?;
        Ok(self)
    }

    /// Postfix decrement: subtract one and return the value held before.
    pub fn post_decrement(&mut self) -> Result<Self> {
        let prev = self.clone();
        self.decrement()?;
        Ok(prev)
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u32> for BigUint {
    fn from(n: u32) -> Self {
        Self::from_u128(n.into())
    }
}

impl From<u64> for BigUint {
    fn from(n: u64) -> Self {
        Self::from_u128(n.into())
    }
}

impl From<u128> for BigUint {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl FromStr for BigUint {
    type Err = BigUintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<&BigUint> for u64 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<u64> {
        value.to_u64_checked().ok_or_else(|| {
            tracing::debug!(limbs = value.limbs.len(), "narrowing overflow");
            BigUintError::Overflow("u64")
        })
    }
}

impl TryFrom<&BigUint> for u32 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<u32> {
        value
            .to_u64_checked()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                tracing::debug!(limbs = value.limbs.len(), "narrowing overflow");
                BigUintError::Overflow("u32")
            })
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self.to_decimal_string())
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, other: &BigUint) {
        limbs::add_assign(&mut self.limbs, &other.limbs);
    }
}

impl AddAssign<BigUint> for BigUint {
    fn add_assign(&mut self, other: BigUint) {
        *self += &other;
    }
}

impl AddAssign<u32> for BigUint {
    fn add_assign(&mut self, other: u32) {
        *self += &BigUint::from(other);
    }
}

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    fn add(mut self, other: &BigUint) -> BigUint {
        self += other;
        self
    }
}

impl Add<BigUint> for BigUint {
    type Output = BigUint;

    fn add(mut self, other: BigUint) -> BigUint {
        self += &other;
        self
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        self.clone() + other
    }
}

impl Add<BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, other: BigUint) -> BigUint {
        self.clone() + &other
    }
}

impl Add<u32> for BigUint {
    type Output = BigUint;

    fn add(mut self, other: u32) -> BigUint {
        self += other;
        self
    }
}

/// # Panics
///
/// Panics if `other > self`, like the primitive unsigned operators. Use
/// [`BigUint::try_sub_assign`] to handle underflow.
impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, other: &BigUint) {
        if self.try_sub_assign(other).is_err() {
            panic!("attempt to subtract with underflow");
        }
    }
}

impl SubAssign<BigUint> for BigUint {
    fn sub_assign(&mut self, other: BigUint) {
        *self -= &other;
    }
}

impl SubAssign<u32> for BigUint {
    fn sub_assign(&mut self, other: u32) {
        *self -= &BigUint::from(other);
    }
}

/// # Panics
///
/// Panics if `other > self`. Use [`BigUint::checked_sub`] to handle underflow.
impl Sub<&BigUint> for BigUint {
    type Output = BigUint;

    fn sub(mut self, other: &BigUint) -> BigUint {
        self -= other;
        self
    }
}

impl Sub<BigUint> for BigUint {
    type Output = BigUint;

    fn sub(mut self, other: BigUint) -> BigUint {
        self -= &other;
        self
    }
}

impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, other: &BigUint) -> BigUint {
        self.clone() - other
    }
}

impl Sub<BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, other: BigUint) -> BigUint {
        self.clone() - &other
    }
}

impl Sub<u32> for BigUint {
    type Output = BigUint;

    fn sub(mut self, other: u32) -> BigUint {
        self -= other;
        self
    }
}

impl Sum for BigUint {
    fn sum<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc + &x)
    }
}

impl<'a> Sum<&'a BigUint> for BigUint {
    fn sum<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc + x)
    }
}
