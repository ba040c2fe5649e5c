//! End-to-end scenarios over the public API.

use decbig::{BigUint, BigUintError};

fn big(s: &str) -> BigUint {
    BigUint::from_decimal_str(s).unwrap()
}

#[test]
fn test_small_carry() {
    let sum = big("999999999") + big("1");
    assert_eq!(sum.to_string(), "1000000000");
    assert_eq!(sum.limbs(), &[0, 1]);
}

#[test]
fn test_multi_limb_add() {
    let sum = big("12345678901234567890") + big("98765432109876543210");
    assert_eq!(sum.to_string(), "111111111011111111100");
}

#[test]
fn test_borrow_cascade() {
    let diff = big("1000000000000000000") - big("1");
    assert_eq!(diff.to_string(), "999999999999999999");
    assert_eq!(diff.num_limbs(), 2);
}

#[test]
fn test_trim_to_zero() {
    let diff = big("42") - big("42");
    assert_eq!(diff.to_string(), "0");
    assert_eq!(diff.limbs(), &[0]);
}

#[test]
fn test_ordering() {
    assert!(big("10000000000") > big("9999999999"));
    assert!(big("00123") == big("123"));
}

#[test]
fn test_narrowing_wrap() {
    assert_eq!(big("4294967296").to_u32_wrapping(), 0);
}

#[test]
fn test_compound_matches_binary() {
    let a = big("73786976294838206464");
    let b = big("18446744073709551616");

    let mut c = a.clone();
    c += &b;
    assert_eq!(c, &a + &b);
    assert_eq!(c.limbs(), (&a + &b).limbs());

    let mut d = a.clone();
    d.try_sub_assign(&b).unwrap();
    assert_eq!(d, &a - &b);
    assert_eq!(d.to_string(), "55340232221128654848");
}

#[test]
fn test_underflow_surfaces_and_preserves_value() {
    let mut a = big("1000000000");
    assert_eq!(
        a.try_sub_assign(&big("1000000001")),
        Err(BigUintError::Underflow)
    );
    assert_eq!(a.to_string(), "1000000000");
}

#[test]
fn test_counting_across_limb_boundary() {
    let mut n = big("999999997");
    for _ in 0..5 {
        n.increment();
    }
    assert_eq!(n.to_string(), "1000000002");
    for _ in 0..5 {
        n.decrement().unwrap();
    }
    assert_eq!(n.to_string(), "999999997");
}

#[test]
fn test_factorial_digits_via_repeated_addition() {
    // 25! built by repeated addition, checked against its known value.
    let mut acc = BigUint::one();
    for k in 2u32..=25 {
        let step = acc.clone();
        for _ in 1..k {
            acc += &step;
        }
    }
    assert_eq!(acc.to_string(), "15511210043330985984000000");
}
