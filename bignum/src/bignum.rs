use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::BigNumError;

/// One fixed-width unsigned unit of storage in the base-2^8 positional
/// representation. All arithmetic is written against this alias, so widening
/// the digit only changes this definition.
pub type Digit = u8;

/// Arbitrary-precision unsigned integer
///
/// Digits are stored in little-endian order (least significant digit first)
/// in an owned, exclusively-held buffer. The buffer always holds at least one
/// digit, and the most significant digit is non-zero unless the value is zero
/// (the normalization invariant); comparison relies on both.
///
/// The four arithmetic operators mutate in place and may reallocate the digit
/// buffer. Subtraction has a checked form returning
/// [`BigNumError::MagnitudeUnderflow`] when the subtrahend is larger; the
/// operator form panics instead.
///
/// # Examples
/// ```
/// use bignum::BigNum;
///
/// let mut a = BigNum::from_u64(0x0102);
/// a += &BigNum::from_u64(0x00FE);
/// assert_eq!(a, BigNum::from_u64(0x0200));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BigNum {
    // Little-endian digit buffer; len() is the digit count, always >= 1
    digits: Vec<Digit>,
}

impl BigNum {
    /// Largest value a single digit can hold
    pub const MAX_DIGIT: Digit = Digit::MAX;

    // Digits needed to cover one u64
    const NATIVE_DIGITS: usize = (u64::BITS / Digit::BITS) as usize;

    /// Create the value zero (a single zero digit)
    pub fn zero() -> Self {
        BigNum { digits: vec![0] }
    }

    /// Create the value one
    pub fn one() -> Self {
        BigNum { digits: vec![1] }
    }

    /// Create from a u64 value
    ///
    /// The value's little-endian bytes become the initial digit sequence,
    /// then redundant leading zeros are trimmed.
    pub fn from_u64(value: u64) -> Self {
        let mut num = BigNum {
            digits: value.to_le_bytes().to_vec(),
        };
        num.normalize();
        num
    }

    /// Create from an explicit digit sequence, most significant digit first
    ///
    /// The slice is reversed into little-endian storage and trimmed to the
    /// normalization invariant, so a literal with leading zeros compares
    /// equal to its trimmed form.
    ///
    /// # Panics
    /// Panics if the slice is empty; the value zero still needs one digit.
    ///
    /// # Examples
    /// ```
    /// use bignum::BigNum;
    ///
    /// // 3 * 256 + 1 = 769
    /// let num = BigNum::from_digits_be(&[3, 1]);
    /// assert_eq!(num.to_u64(), 769);
    /// ```
    pub fn from_digits_be(digits: &[Digit]) -> Self {
        assert!(!digits.is_empty(), "a BigNum needs at least one digit");
        let mut num = BigNum {
            digits: digits.iter().rev().copied().collect(),
        };
        num.normalize();
        num
    }

    /// Extract the low-order bits as a u64
    ///
    /// Rebuilds a native value from the lowest `min(len, 8)` digits. Digit
    /// positions beyond the stored length contribute zero, so a short value
    /// never picks up garbage in the high bytes.
    pub fn to_u64(&self) -> u64 {
        let mut bytes = [0u8; Self::NATIVE_DIGITS];
        for (byte, &digit) in bytes.iter_mut().zip(&self.digits) {
            *byte = digit;
        }
        u64::from_le_bytes(bytes)
    }

    /// Number of digits currently stored (always >= 1)
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Set the value back to zero, shrinking storage to a single digit
    pub fn reset(&mut self) {
        self.shrink(self.digits.len() - 1);
        self.digits[0] = 0;
    }

    /// Iterate over the digits, most significant first
    ///
    /// This is the rendering primitive: callers that want a human-readable
    /// form own the formatting entirely. The crate's `Debug` impl is built on
    /// it. The iterator borrows the buffer, so it cannot outlive a mutating
    /// call.
    pub fn digits_be(&self) -> impl DoubleEndedIterator<Item = Digit> + '_ {
        self.digits.iter().rev().copied()
    }

    /// Append `extra` zeroed digit slots above the current most significant
    /// digit, returning the window of new slots. Existing digits are
    /// unchanged. Allocation failure aborts the process.
    fn grow(&mut self, extra: usize) -> &mut [Digit] {
        let old_len = self.digits.len();
        self.digits.resize(old_len + extra, 0);
        &mut self.digits[old_len..]
    }

    /// Discard the top `count` digits and release the excess allocation.
    /// Callers only ever discard digits already known to be redundant.
    fn shrink(&mut self, count: usize) {
        debug_assert!(count < self.digits.len(), "cannot shrink below one digit");
        let new_len = self.digits.len() - count;
        self.digits.truncate(new_len);
        self.digits.shrink_to_fit();
    }

    /// Trim leading zero digits down to the normalization invariant,
    /// never below length 1
    fn normalize(&mut self) {
        let mut top = self.digits.len();
        while top > 1 && self.digits[top - 1] == 0 {
            top -= 1;
        }
        let excess = self.digits.len() - top;
        if excess > 0 {
            self.shrink(excess);
        }
    }

    /// Ripple an incoming carry-of-one upward from `start`. A new carry
    /// occurs exactly when the digit wraps; the walk stops at the first digit
    /// that absorbs it. Returns true if the carry survives past the top
    /// digit, in which case the caller grows by one digit set to 1.
    fn ripple_carry(digits: &mut [Digit], start: usize) -> bool {
        for digit in &mut digits[start..] {
            let (sum, carry) = digit.overflowing_add(1);
            *digit = sum;
            if !carry {
                return false;
            }
        }
        true
    }

    /// Ripple an incoming borrow downward from `start`. A new borrow occurs
    /// exactly when the digit wraps; the walk stops at the first digit that
    /// covers it. A borrow surviving past the top digit means the subtrahend
    /// exceeded the minuend.
    fn ripple_borrow(digits: &mut [Digit], start: usize) -> Result<(), BigNumError> {
        for digit in &mut digits[start..] {
            let (diff, borrow) = digit.overflowing_sub(1);
            *digit = diff;
            if !borrow {
                return Ok(());
            }
        }
        Err(BigNumError::MagnitudeUnderflow)
    }

    /// Add one to the value in place; always succeeds
    pub fn increment(&mut self) {
        *self += 1;
    }

    /// Subtract one from the value in place
    ///
    /// Fails with [`BigNumError::MagnitudeUnderflow`] only when the value was
    /// already zero.
    pub fn decrement(&mut self) -> Result<(), BigNumError> {
        self.try_sub_digit(1)
    }

    /// Checked in-place subtraction of another BigNum
    ///
    /// On underflow the target is left in an unspecified intermediate state;
    /// no rollback is performed, so the previous value must not be relied on
    /// after an `Err`.
    ///
    /// # Panics
    /// Panics if `other` has more digits than `self`: the operand is then
    /// statically known to be larger before any digit-by-digit check, which
    /// is a caller error rather than a recoverable condition.
    pub fn try_sub_assign(&mut self, other: &BigNum) -> Result<(), BigNumError> {
        assert!(
            self.digits.len() >= other.digits.len(),
            "subtrahend has more digits than minuend"
        );

        let mut borrow = false;
        for i in 0..other.digits.len() {
            let (diff1, borrow1) = self.digits[i].overflowing_sub(other.digits[i]);
            let (diff2, borrow2) = diff1.overflowing_sub(borrow as Digit);
            self.digits[i] = diff2;
            borrow = borrow1 || borrow2;
        }

        if borrow {
            Self::ripple_borrow(&mut self.digits, other.digits.len())?;
        }

        self.normalize();
        Ok(())
    }

    /// Checked in-place subtraction of a single digit
    pub fn try_sub_digit(&mut self, num: Digit) -> Result<(), BigNumError> {
        let (diff, borrow) = self.digits[0].overflowing_sub(num);
        self.digits[0] = diff;
        if borrow {
            Self::ripple_borrow(&mut self.digits, 1)?;
        }
        self.normalize();
        Ok(())
    }
}

// Addition
//
// Never normalizes: an addend >= 0 can only grow the top digit, so no
// spurious leading zero can appear.
impl AddAssign<&BigNum> for BigNum {
    fn add_assign(&mut self, other: &BigNum) {
        let shared = self.digits.len().min(other.digits.len());

        let mut carry = false;
        for i in 0..shared {
            let (sum1, carry1) = self.digits[i].overflowing_add(other.digits[i]);
            let (sum2, carry2) = sum1.overflowing_add(carry as Digit);
            self.digits[i] = sum2;
            carry = carry1 || carry2;
        }

        // The longer operand's high digits carry over verbatim
        if other.digits.len() > shared {
            let high = &other.digits[shared..];
            self.grow(high.len()).copy_from_slice(high);
        }

        if carry && Self::ripple_carry(&mut self.digits, shared) {
            self.grow(1)[0] = 1;
        }
    }
}

// The native addend is restricted to a single digit, so it can never be
// silently truncated: it lands in digit 0 and the carry ripples through the
// value's own digits. Wider native values go through `from_u64` and the
// BigNum path.
impl AddAssign<Digit> for BigNum {
    fn add_assign(&mut self, num: Digit) {
        let (sum, carry) = self.digits[0].overflowing_add(num);
        self.digits[0] = sum;
        if carry && Self::ripple_carry(&mut self.digits, 1) {
            self.grow(1)[0] = 1;
        }
    }
}

impl Add for &BigNum {
    type Output = BigNum;

    fn add(self, other: &BigNum) -> BigNum {
        let mut num = self.clone();
        num += other;
        num
    }
}

impl Add<Digit> for &BigNum {
    type Output = BigNum;

    fn add(self, num: Digit) -> BigNum {
        let mut result = self.clone();
        result += num;
        result
    }
}

// Subtraction operator sugar over the checked methods
impl SubAssign<&BigNum> for BigNum {
    fn sub_assign(&mut self, other: &BigNum) {
        if self.try_sub_assign(other).is_err() {
            panic!("attempt to subtract with underflow");
        }
    }
}

impl SubAssign<Digit> for BigNum {
    fn sub_assign(&mut self, num: Digit) {
        if self.try_sub_digit(num).is_err() {
            panic!("attempt to subtract with underflow");
        }
    }
}

impl Sub for &BigNum {
    type Output = BigNum;

    fn sub(self, other: &BigNum) -> BigNum {
        let mut num = self.clone();
        num -= other;
        num
    }
}

impl Sub<Digit> for &BigNum {
    type Output = BigNum;

    fn sub(self, num: Digit) -> BigNum {
        let mut result = self.clone();
        result -= num;
        result
    }
}

// Comparison
//
// Normalization makes digit count a valid magnitude proxy; equal counts
// compare digits most significant first.
impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.digits.len() != other.digits.len() {
            return self.digits.len().cmp(&other.digits.len());
        }

        for i in (0..self.digits.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for BigNum {
    fn eq(&self, num: &u64) -> bool {
        self.digits.len() == 1 && self.to_u64() == *num
    }
}

// Ordering against a native integer is only defined for single-digit values;
// for anything longer the answer is `None` rather than a fake ordering.
impl PartialOrd<u64> for BigNum {
    fn partial_cmp(&self, num: &u64) -> Option<Ordering> {
        if self.digits.len() != 1 {
            return None;
        }
        Some(self.to_u64().cmp(num))
    }
}

// Diagnostic rendering: digits most significant first, e.g. [2, 1, 0].
// A debug aid, not a numeral; it does not parse back into a BigNum.
impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut digits = self.digits_be();
        if let Some(first) = digits.next() {
            write!(f, "{}", first)?;
            for digit in digits {
                write!(f, ", {}", digit)?;
            }
        }
        write!(f, "]")
    }
}
