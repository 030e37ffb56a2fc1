use std::cmp::Ordering;

use bignum::BigNum;
use rand::Rng;

fn random_bignum(rng: &mut impl Rng, max_digits: usize) -> BigNum {
    let len = rng.random_range(1..=max_digits);
    let mut digits = vec![0u8; len];
    rng.fill(&mut digits[..]);
    BigNum::from_digits_be(&digits)
}

#[test]
fn test_trichotomy() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let a = random_bignum(&mut rng, 16);
        let b = random_bignum(&mut rng, 16);

        let outcomes = [a < b, a == b, a > b];
        assert_eq!(
            outcomes.iter().filter(|&&held| held).count(),
            1,
            "exactly one ordering must hold for {:?} and {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_equality_ignores_construction_route() {
    // Same value through every constructor compares equal
    let from_native = BigNum::from_u64(769);
    let from_literal = BigNum::from_digits_be(&[3, 1]);
    let from_padded_literal = BigNum::from_digits_be(&[0, 3, 1]);
    let copied = from_native.clone();

    assert_eq!(from_native, from_literal);
    assert_eq!(from_native, from_padded_literal);
    assert_eq!(from_native, copied);
}

#[test]
fn test_digit_count_is_a_magnitude_proxy() {
    // The smallest two-digit value still beats the largest one-digit value
    let one_digit_max = BigNum::from_digits_be(&[BigNum::MAX_DIGIT]);
    let two_digit_min = BigNum::from_digits_be(&[1, 0]);
    assert!(one_digit_max < two_digit_min);

    let mut rng = rand::rng();
    for _ in 0..200 {
        let shorter = random_bignum(&mut rng, 4);
        let mut longer_digits = vec![0u8; shorter.len() + rng.random_range(1..4)];
        rng.fill(&mut longer_digits[..]);
        longer_digits[0] = longer_digits[0].max(1);
        let longer = BigNum::from_digits_be(&longer_digits);
        assert!(shorter < longer);
    }
}

#[test]
fn test_equal_length_compares_most_significant_first() {
    let a = BigNum::from_digits_be(&[5, 0, 0]);
    let b = BigNum::from_digits_be(&[4, 200, 200]);
    assert!(a > b);

    let c = BigNum::from_digits_be(&[5, 0, 1]);
    assert!(a < c);
}

#[test]
fn test_comparison_agrees_with_native_values() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let a: u64 = rng.random();
        let b: u64 = rng.random();
        assert_eq!(
            BigNum::from_u64(a).cmp(&BigNum::from_u64(b)),
            a.cmp(&b)
        );
    }
}

#[test]
fn test_native_equality_requires_single_digit() {
    assert_eq!(BigNum::from_u64(7), 7u64);
    assert_ne!(BigNum::from_u64(7), 8u64);

    // A multi-digit value never equals a native operand, even numerically
    assert_ne!(BigNum::from_u64(300), 300u64);
}

#[test]
fn test_native_ordering_partiality() {
    let single = BigNum::from_u64(42);
    assert_eq!(single.partial_cmp(&50u64), Some(Ordering::Less));
    assert_eq!(single.partial_cmp(&42u64), Some(Ordering::Equal));
    assert_eq!(single.partial_cmp(&7u64), Some(Ordering::Greater));

    // Ordering against a native integer is undefined for multi-digit values
    let multi = BigNum::from_u64(0x0102);
    assert_eq!(multi.partial_cmp(&5u64), None);
    assert_eq!(multi.partial_cmp(&u64::MAX), None);
}

#[test]
fn test_ordering_survives_arithmetic() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let a = random_bignum(&mut rng, 12);
        let b = random_bignum(&mut rng, 12);
        // Adding a non-negative value never decreases the sum's order
        let sum = &a + &b;
        assert!(sum >= a);
        assert!(sum >= b);
    }
}
