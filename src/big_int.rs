//! # BigInt
//! Arbitrary-precision signed integers stored as two's-complement words.
//!
//! A value is a sequence of [`Word`]s, least significant first, plus a sign
//! flag that stands for every word beyond the stored ones: all zero bits when
//! clear, all one bits when set. Values are kept condensed, so the top stored
//! word never equals that implied extension word. The empty sequence is a
//! valid value: `0` with a clear sign and `-1` with a set sign.
//!
//! # Example
//! ```
//! use twos_bigint::BigInt;
//!
//! let a = BigInt::from(0x8000_0000_u32) << 1_u32;
//! let b = &a >> 8_u32;
//! assert_eq!(a.to_hex(), "0x100000000");
//! assert_eq!(b.to_hex(), "0x1000000");
//! assert_eq!((-BigInt::from(1)).to_hex(), "-0x1");
//! ```

use std::fmt::{self, Display, LowerHex, UpperHex};
use std::hash::{Hash, Hasher};

use crate::big_int_constants::*;

pub const ZERO: BigInt = BigInt { sign: false, words: Vec::new() };

/// Arbitrary-precision two's-complement integer.
///
/// # Panics
/// Left shifts allocate one word per `WORD_BITS` of the shift amount.
/// `x << n` panics when that word count does not fit in a `usize`, and an
/// amount that fits but cannot be allocated aborts like any other failed
/// allocation. Right shifts never allocate and accept any amount.
#[derive(Debug, Clone, Default)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) words: Vec<Word>,
}

/// The word every position past the stored sequence holds.
#[inline(always)]
pub(crate) fn extension_of(sign: bool) -> Word {
    if sign { ALL_ONES } else { 0 }
}

// 实现表示与归一化
impl BigInt {
    /// Builds a value from a raw sign flag and words (least significant
    /// first). The result is condensed.
    pub fn from_raw(sign: bool, words: Vec<Word>) -> BigInt {
        let mut val = BigInt { sign, words };
        val.normalize();
        val
    }
    pub fn into_raw(self) -> (bool, Vec<Word>) {
        (self.sign, self.words)
    }
    pub fn sign(&self) -> bool {
        self.sign
    }
    pub fn words(&self) -> &[Word] {
        &self.words
    }
    /// Replaces the sign flag. The stored words are kept, so the value
    /// changes by the difference in the implied extension.
    pub fn set_sign(&mut self, sign: bool) {
        self.sign = sign;
        self.normalize();
    }
    pub fn set_words(&mut self, words: Vec<Word>) {
        self.words = words;
        self.normalize();
    }

    #[inline(always)]
    pub(crate) fn extension(&self) -> Word {
        extension_of(self.sign)
    }
    /// Word at position `i`, sign-extended past the stored sequence.
    #[inline(always)]
    pub(crate) fn word_at(&self, i: usize) -> Word {
        match self.words.get(i) {
            Some(w) => *w,
            None => self.extension(),
        }
    }
    /// Drops high words equal to the sign extension, down to the empty
    /// sequence.
    pub(crate) fn normalize(&mut self) {
        let ext = self.extension();
        while self.words.last() == Some(&ext) {
            self.words.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        !self.sign && self.words.is_empty()
    }
    pub fn is_negative(&self) -> bool {
        self.sign
    }
    pub fn signum(&self) -> i8 {
        if self.sign {
            -1
        } else if self.words.is_empty() {
            0
        } else {
            1
        }
    }
}

// 实现打印
impl BigInt {
    /// Hexadecimal rendering of the value, e.g. `0x1F` or `-0x1`.
    pub fn to_hex(&self) -> String {
        let digits = self.magnitude_hex();
        let mut s = String::with_capacity(digits.len() + 3);
        if self.sign {
            s.push('-');
        }
        s.push_str("0x");
        s.push_str(&digits);
        s
    }
    /// Uppercase hex digits of `|self|` without leading zeros.
    fn magnitude_hex(&self) -> String {
        let magnitude = self.abs();
        let mut digits = String::with_capacity(magnitude.words.len() * NYBBLES_PER_WORD as usize);
        for word in magnitude.words.iter().rev() {
            for j in (0..NYBBLES_PER_WORD).rev() {
                digits.push(HEX_DIGITS[((word >> (4 * j)) & 0xf) as usize]);
            }
        }
        match digits.trim_start_matches('0') {
            "" => String::from("0"),
            trimmed => trimmed.to_string(),
        }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0x", &self.magnitude_hex())
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0x", &self.magnitude_hex().to_ascii_lowercase())
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.words.hash(state);
    }
}

#[test]
fn test_normalize() {
    let a = BigInt::from_raw(false, vec![5, 0, 0]);
    assert_eq!(a.words(), &[5]);

    let b = BigInt::from_raw(true, vec![ALL_BUT_LSB, ALL_ONES, ALL_ONES]);
    assert_eq!(b.words(), &[ALL_BUT_LSB]);
    assert!(b.sign());

    let minus_one = BigInt::from_raw(true, vec![ALL_ONES]);
    assert!(minus_one.words().is_empty());
    assert_eq!(minus_one.signum(), -1);

    let zero = BigInt::from_raw(false, vec![0]);
    assert!(zero.is_zero());

    // a positive value whose top bit is set keeps its words
    let c = BigInt::from_raw(false, vec![MSB]);
    assert_eq!(c.words(), &[MSB]);

    let mut d = c.clone();
    d.normalize();
    assert_eq!(d.words(), c.words());
}

#[test]
fn test_set_raw() {
    let mut a = BigInt::from(7);
    a.set_words(vec![ALL_ONES, 0]);
    assert_eq!(a.words(), &[ALL_ONES]);
    a.set_sign(true);
    assert!(a.words().is_empty());
    assert_eq!(a, BigInt::from(-1));
    assert_eq!(a.into_raw(), (true, vec![]));
}

#[test]
fn test_hash_agrees_with_eq() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BigInt::from(-1));
    set.insert(BigInt::from_raw(true, vec![ALL_ONES, ALL_ONES]));
    set.insert(BigInt::from(5) - BigInt::from(6));
    set.insert(BigInt::from_raw(false, vec![0x42, 0, 0]));
    set.insert(BigInt::from(0x42));
    set.insert(ZERO);
    set.insert(BigInt::from(-7) + BigInt::from(7));
    set.insert(!BigInt::from(-1));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&BigInt::from(-1_i64)));
    assert!(set.contains(&(BigInt::from(0x21) << 1_u32)));
}

#[test]
fn test_to_hex() {
    assert_eq!(ZERO.to_hex(), "0x0");
    assert_eq!(BigInt::from(-1).to_hex(), "-0x1");
    assert_eq!(BigInt::from(255).to_hex(), "0xFF");
    assert_eq!(BigInt::from(-256).to_hex(), "-0x100");
    assert_eq!(BigInt::from(0x1234_5678_9ABC_DEF0_u64).to_hex(), "0x123456789ABCDEF0");
    assert_eq!(BigInt::from(i64::MIN).to_hex(), "-0x8000000000000000");
}

#[test]
fn test_fmt() {
    let a = BigInt::from(-0xBEEF);
    assert_eq!(format!("{}", a), "-0xBEEF");
    assert_eq!(format!("{:x}", a), "-beef");
    assert_eq!(format!("{:#X}", a), "-0xBEEF");
    assert_eq!(format!("{:#010x}", BigInt::from(0xbeef)), "0x0000beef");
}
