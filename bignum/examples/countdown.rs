//! Example: Countdown
//!
//! Decrements a two-digit value across the digit boundary, printing each
//! step, until decrement reports underflow at zero

use bignum::BigNum;

fn main() {
    let mut num = BigNum::from_digits_be(&[1, 2]);

    loop {
        println!("{:?}", num);
        if num.decrement().is_err() {
            println!("reached zero, stopping");
            break;
        }
    }
}
