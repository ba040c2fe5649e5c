//! Digit-array engine: base-10^9 limb vectors and the kernels that operate on them.
//!
//! Limbs are stored in little-endian order (limbs[0] is least significant).
//! A canonical vector is non-empty, every limb lies in `[0, BASE)`, and the
//! top limb is non-zero unless the vector is exactly `[0]`.
//!
//! Limbs are `i32`: the add kernel parks sums up to `2 * (BASE - 1) + 1` in a
//! slot and the subtract kernel parks transiently negative values, and both
//! fit without overflow checks inside the loops.

use std::cmp::Ordering;

use crate::error::{BigUintError, Result};

/// Radix of the limb representation.
pub const BASE: i32 = 1_000_000_000;

/// Number of decimal digits held by one limb.
pub const CHUNK_DIGITS: usize = 9;

// ============================================================================
// Normalization
// ============================================================================

/// Drop zero limbs from the most significant end, stopping at length 1.
///
/// An empty vector becomes `[0]`.
pub fn trim(limbs: &mut Vec<i32>) {
    let mut len = limbs.len();
    while len > 1 && limbs[len - 1] == 0 {
        len -= 1;
    }
    limbs.truncate(len);
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Whether `limbs` satisfies the canonical-form invariant.
pub fn is_canonical(limbs: &[i32]) -> bool {
    match limbs.split_last() {
        None => false,
        Some((&top, rest)) => {
            (rest.is_empty() || top != 0) && limbs.iter().all(|&l| (0..BASE).contains(&l))
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Signed three-way comparison of two canonical limb vectors.
///
/// The sign of the result orders `a` against `b`. When the lengths differ the
/// magnitude is the length difference, otherwise it is the difference of the
/// first unequal limb scanning from the top.
pub fn compare(a: &[i32], b: &[i32]) -> i64 {
    if a.len() != b.len() {
        return a.len() as i64 - b.len() as i64;
    }
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x as i64 - y as i64;
        }
    }
    0
}

/// [`compare`] folded to an [`Ordering`].
#[inline]
pub fn cmp(a: &[i32], b: &[i32]) -> Ordering {
    compare(a, b).cmp(&0)
}

// ============================================================================
// Additive kernels
// ============================================================================

/// In-place `a += b` on canonical vectors.
///
/// The receiver grows to `max(|a|, |b|) + 1` limbs so the final carry always
/// has a slot; the componentwise sum leaves every limb below `2 * BASE`, so a
/// single forward carry pass restores the limb range.
pub fn add_assign(a: &mut Vec<i32>, b: &[i32]) {
    let len = a.len().max(b.len()) + 1;
    a.resize(len, 0);

    for (x, &y) in a.iter_mut().zip(b) {
        *x += y;
    }

    for i in 0..len - 1 {
        if a[i] >= BASE {
            a[i] -= BASE;
            a[i + 1] += 1;
        }
    }

    trim(a);
}

/// In-place `a -= b`.
///
/// Fails with [`BigUintError::Underflow`] when `a < b`, leaving `a` untouched.
/// Zero limbs at the top of either operand are ignored by the check. Limbs
/// may go negative after the componentwise pass; a single forward borrow pass
/// restores the range.
pub fn sub_assign(a: &mut Vec<i32>, b: &[i32]) -> Result<()> {
    let b = significant(b);
    if compare(significant(a), b) < 0 {
        return Err(BigUintError::Underflow);
    }
    if a.is_empty() {
        a.push(0);
        return Ok(());
    }

    for (x, &y) in a.iter_mut().zip(b) {
        *x -= y;
    }

    let len = a.len();
    for i in 0..len - 1 {
        if a[i] < 0 {
            a[i] += BASE;
            a[i + 1] -= 1;
        }
    }

    debug_assert!(a[len - 1] >= 0, "borrow escaped the top limb");
    trim(a);
    Ok(())
}

/// `limbs` without its zero limbs at the most significant end.
fn significant(limbs: &[i32]) -> &[i32] {
    let len = limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
    &limbs[..len]
}

// ============================================================================
// Tests
// ============================================================================
