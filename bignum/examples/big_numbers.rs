//! Example: Arbitrary-Precision Arithmetic
//!
//! Walks through construction, carry propagation with storage growth,
//! checked subtraction, and comparisons

use bignum::{BigNum, BigNumError};

fn main() {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║  Arbitrary-Precision Unsigned Integers                        ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n  Construction (digits shown most significant first):\n");

    let a = BigNum::from_digits_be(&[1, 0, 3]);
    let b = BigNum::from_digits_be(&[2, 3]);
    println!("    a = {:?}", a);
    println!("    b = {:?}", b);
    println!("    from_u64(769) = {:?}", BigNum::from_u64(769));

    println!("\n  Addition grows storage when the carry outruns the top digit:\n");

    let max = BigNum::from_digits_be(&[BigNum::MAX_DIGIT]);
    println!("    before: {:?} ({} digit)", max, max.len());
    let grown = &max + 1;
    println!("    after increment: {:?} ({} digits)", grown, grown.len());

    let sum = &a + &b;
    println!("    a + b = {:?}", sum);

    println!("\n  Subtraction underflow is a recoverable error:\n");

    let mut small = BigNum::from_digits_be(&[3, 1]);
    match small.try_sub_assign(&BigNum::from_digits_be(&[200, 0])) {
        Ok(()) => println!("    unexpected success: {:?}", small),
        Err(BigNumError::MagnitudeUnderflow) => {
            println!("    [3, 1] - [200, 0] -> error: magnitude underflow")
        }
    }

    println!("\n  Comparison uses digit count first, then digits from the top:\n");

    println!("    {:?} < {:?} -> {}", b, a, b < a);
    println!(
        "    {:?} == from_u64(769) -> {}",
        BigNum::from_digits_be(&[3, 1]),
        BigNum::from_digits_be(&[3, 1]) == BigNum::from_u64(769)
    );

    println!("\n  ✓ Values grow one digit at a time, as far as memory allows\n");
}
