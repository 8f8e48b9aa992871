use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};

use crate::big_int::{BigInt, ZERO};
use crate::big_int_constants::*;

// 实现自增与自减
impl BigInt {
    /// Prefix increment.
    pub fn inc(&mut self) -> &mut Self {
        // -1 is the only value whose carry runs off the sign-extended top
        if self.sign && self.words.iter().all(|w| *w == ALL_ONES) {
            *self = ZERO;
            return self;
        }

        let mut carry = true;
        for w in self.words.iter_mut() {
            if *w != ALL_ONES {
                *w += 1;
                carry = false;
                break;
            }
            *w = 0;
        }
        if carry {
            self.words.push(LSB);
        }
        if self.sign {
            self.normalize();
        }
        self
    }
    /// Postfix increment, returns the value before incrementing.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }
    /// Prefix decrement, `!(!x + 1)`.
    pub fn dec(&mut self) -> &mut Self {
        let mut flipped = !std::mem::take(self);
        flipped.inc();
        *self = !flipped;
        self
    }
    /// Postfix decrement, returns the value before decrementing.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let mut val = !self;
        val.inc();
        val
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl BigInt {
    pub fn abs(&self) -> BigInt {
        if self.sign {
            -self
        } else {
            self.clone()
        }
    }

    /// Number of magnitude bits, `floor(log2(x)) + 1` for positive `x` and
    /// `0` for every `x <= 0`.
    pub fn bit_length(&self) -> BigInt {
        match self.words.last() {
            Some(top) if !self.sign => {
                let len = (self.words.len() - 1) as u128 * WORD_BITS as u128
                    + (WORD_BITS - top.leading_zeros()) as u128;
                BigInt::from(len)
            },
            _ => ZERO,
        }
    }
}

// 实现加法与减法
impl BigInt {
    pub(crate) fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let len = lhs.words.len().max(rhs.words.len());
        let mut words: Vec<Word> = Vec::with_capacity(len + 1);
        let mut carry: DoubleWord = 0;
        for i in 0..len {
            let sum = lhs.word_at(i) as DoubleWord + rhs.word_at(i) as DoubleWord + carry;
            words.push(sum as Word);
            carry = sum >> WORD_BITS;
        }

        // the word past `len` is ext(lhs) + ext(rhs) + carry
        let sign = match (carry != 0, lhs.sign, rhs.sign) {
            (true, false, false) => {
                words.push(LSB);
                false
            },
            (false, true, true) => {
                words.push(ALL_BUT_LSB);
                true
            },
            (false, true, false) | (false, false, true) | (true, true, true) => true,
            (true, true, false) | (true, false, true) | (false, false, false) => false,
        };
        BigInt::from_raw(sign, words)
    }

    pub(crate) fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        BigInt::add(lhs, &-rhs)
    }
}

// 实现乘法
impl BigInt {
    pub(crate) fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let negate = lhs.sign != rhs.sign;
        let x = lhs.abs();
        let y = rhs.abs();
        if x.is_zero() || y.is_zero() {
            return ZERO;
        }

        let product = BigInt::from_raw(false, BigInt::mul_to_len(&x.words, &y.words));
        if negate {
            -product
        } else {
            product
        }
    }

    /// Schoolbook product of two magnitudes, least significant word first.
    fn mul_to_len(x: &[Word], y: &[Word]) -> Vec<Word> {
        let mut z = vec![0 as Word; x.len() + y.len()];
        for (i, &xi) in x.iter().enumerate() {
            let mut carry: DoubleWord = 0;
            for (j, &yj) in y.iter().enumerate() {
                let product = xi as DoubleWord * yj as DoubleWord
                    + z[i + j] as DoubleWord
                    + carry;
                z[i + j] = product as Word;
                carry = product >> WORD_BITS;
            }
            z[i + y.len()] = carry as Word;
        }
        z
    }
}

impl_binop_by_ref!(Add, add, AddAssign, add_assign, BigInt::add);
impl_binop_by_ref!(Sub, sub, SubAssign, sub_assign, BigInt::sub);
impl_binop_by_ref!(Mul, mul, MulAssign, mul_assign, BigInt::mul);

#[cfg(test)]
mod tests {
    use crate::big_int::ZERO;
    use crate::big_int_constants::*;
    use crate::BigInt;

    #[test]
    fn test_inc() {
        let mut a = BigInt::from(-1);
        a.inc();
        assert_eq!(a, ZERO);
        a.inc();
        assert_eq!(a, BigInt::from(1));

        // carry into a new word
        let mut b = BigInt::from_raw(false, vec![ALL_ONES, ALL_ONES]);
        b.inc();
        assert_eq!(b.words(), &[0, 0, 1]);

        // a negative value whose top word becomes the extension
        let mut c = BigInt::from_raw(true, vec![ALL_ONES, ALL_BUT_LSB]);
        c.inc();
        assert_eq!(c.words(), &[0]);
        assert!(c.sign());

        let mut d = BigInt::from(41);
        assert_eq!(d.post_inc(), BigInt::from(41));
        assert_eq!(d, BigInt::from(42));
    }

    #[test]
    fn test_dec() {
        let mut a = BigInt::from(1);
        a.dec();
        assert_eq!(a, ZERO);
        a.dec();
        assert_eq!(a, BigInt::from(-1));
        a.dec();
        assert_eq!(a, BigInt::from(-2));

        let mut b = BigInt::from_raw(false, vec![0, 0, 1]);
        b.dec();
        assert_eq!(b.words(), &[ALL_ONES, ALL_ONES]);
        assert!(!b.sign());

        let mut c = BigInt::from(0);
        assert_eq!(c.post_dec(), ZERO);
        assert_eq!(c, BigInt::from(-1));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-ZERO, ZERO);
        assert_eq!(-BigInt::from(1), BigInt::from(-1));
        assert_eq!(-BigInt::from(i64::MIN), BigInt::from(1_u64 << 63));

        // -(2^128 - 1) keeps its low word of 1 under a run of zero words
        let a = -&BigInt::from(u128::MAX);
        assert!(a.sign());
        assert_eq!(a.words().len(), WORDS_PER_128);
        assert_eq!(a.words()[0], 1);
        assert_eq!(-a, BigInt::from(u128::MAX));
    }

    #[test]
    fn test_add() {
        let a = BigInt::from(0x8000_0000_u32);
        let b = BigInt::from(0x8100_0000_u32);
        let c = &a + &b;
        assert_eq!(c, BigInt::from(0x1_0100_0000_u64));
        assert_eq!(c.to_hex(), "0x101000000");

        assert_eq!(BigInt::from(-1) + BigInt::from(-1), BigInt::from(-2));
        assert_eq!(BigInt::from(-1) + BigInt::from(1), ZERO);
        assert_eq!(BigInt::from(u128::MAX) + BigInt::from(1), BigInt::from(1) << 128_u32);
        assert_eq!(BigInt::from(i128::MIN) + BigInt::from(i128::MIN), BigInt::from(-1) << 128_u32);
        assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));

        let mut d = BigInt::from(10);
        d += BigInt::from(-20);
        d += &BigInt::from(3);
        assert_eq!(d, BigInt::from(-7));
    }

    #[test]
    fn test_sub() {
        assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(-2));
        assert_eq!(BigInt::from(i64::MIN) - BigInt::from(1), BigInt::from(i64::MIN as i128 - 1));
        let big = BigInt::from(1) << 200_u32;
        assert_eq!(&big - &big, ZERO);

        let mut e = BigInt::from(0);
        e -= BigInt::from(u64::MAX);
        assert_eq!(e, BigInt::from(-(u64::MAX as i128)));
    }

    #[test]
    fn test_mul() {
        assert_eq!(BigInt::from(3) * BigInt::from(5), BigInt::from(15));
        assert_eq!(BigInt::from(-3) * BigInt::from(5), BigInt::from(-15));
        assert_eq!(BigInt::from(3) * BigInt::from(-5), BigInt::from(-15));
        assert_eq!(BigInt::from(-3) * BigInt::from(-5), BigInt::from(15));
        assert_eq!(BigInt::from(-3) * ZERO, ZERO);

        let a = BigInt::from(u64::MAX);
        assert_eq!(&a * &a, BigInt::from(u64::MAX as u128 * u64::MAX as u128));

        let b = BigInt::from(i64::MIN);
        assert_eq!(&b * &b, BigInt::from(1) << 126_u32);

        let mut c = BigInt::from(7);
        c *= BigInt::from(-6);
        assert_eq!(c, BigInt::from(-42));
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(ZERO.bit_length(), ZERO);
        assert_eq!(BigInt::from(-5).bit_length(), ZERO);
        assert_eq!(BigInt::from(1).bit_length(), BigInt::from(1));
        assert_eq!(BigInt::from(255).bit_length(), BigInt::from(8));
        assert_eq!(BigInt::from(0x8000_0000_u32).bit_length(), BigInt::from(32));
        assert_eq!((BigInt::from(1) << 100_u32).bit_length(), BigInt::from(101));
    }
}
