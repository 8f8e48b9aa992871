use std::ops::{
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Not,
};

use crate::big_int::BigInt;
use crate::big_int_constants::*;

// 实现按位取反
impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.words.iter_mut().for_each(|w| *w = !*w);
        self.sign = !self.sign;
        self.normalize();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl BigInt {
    /// Past the shorter operand, an all-ones extension lets the longer
    /// operand's words through unchanged; a zero extension clears them.
    pub(crate) fn bit_and(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let common = lhs.words.len().min(rhs.words.len());
        let mut words: Vec<Word> = lhs.words.iter()
            .zip(&rhs.words)
            .map(|(a, b)| a & b)
            .collect();
        if lhs.sign && lhs.words.len() == common {
            words.extend_from_slice(&rhs.words[common..]);
        } else if rhs.sign && rhs.words.len() == common {
            words.extend_from_slice(&lhs.words[common..]);
        }
        BigInt::from_raw(lhs.sign && rhs.sign, words)
    }

    /// Dual of [`BigInt::bit_and`]: a zero extension passes the longer
    /// operand through, an all-ones extension saturates it.
    pub(crate) fn bit_or(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let common = lhs.words.len().min(rhs.words.len());
        let mut words: Vec<Word> = lhs.words.iter()
            .zip(&rhs.words)
            .map(|(a, b)| a | b)
            .collect();
        if !lhs.sign && lhs.words.len() == common {
            words.extend_from_slice(&rhs.words[common..]);
        } else if !rhs.sign && rhs.words.len() == common {
            words.extend_from_slice(&lhs.words[common..]);
        }
        BigInt::from_raw(lhs.sign || rhs.sign, words)
    }

    pub(crate) fn bit_xor(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let len = lhs.words.len().max(rhs.words.len());
        let words = (0..len)
            .map(|i| lhs.word_at(i) ^ rhs.word_at(i))
            .collect();
        BigInt::from_raw(lhs.sign != rhs.sign, words)
    }
}

impl_binop_by_ref!(BitAnd, bitand, BitAndAssign, bitand_assign, BigInt::bit_and);
impl_binop_by_ref!(BitOr, bitor, BitOrAssign, bitor_assign, BigInt::bit_or);
impl_binop_by_ref!(BitXor, bitxor, BitXorAssign, bitxor_assign, BigInt::bit_xor);
