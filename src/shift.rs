use std::ops::{
    Shl, ShlAssign,
    Shr, ShrAssign,
};

use crate::big_int::{BigInt, ZERO};
use crate::big_int_constants::*;

impl BigInt {
    /// Splits a non-negative shift amount into whole words and the remaining
    /// `0..WORD_BITS` bits. The word count is `None` when it does not fit in
    /// a `usize`.
    fn split_shift(n: &BigInt) -> (Option<usize>, u32) {
        let bits = (n.word_at(0) & (WORD_BITS - 1) as Word) as u32;
        let whole = u128::try_from(n)
            .ok()
            .and_then(|n| usize::try_from(n >> WORD_SHIFT).ok());
        (whole, bits)
    }

    /// # Panics
    /// When the whole-word part of `n` does not fit in a `usize`.
    pub(crate) fn shift_left(mut self, n: &BigInt) -> BigInt {
        if n.sign {
            log::debug!("left shift by negative amount {} yields zero", n);
            return ZERO;
        }
        if self.is_zero() {
            return self;
        }
        let (whole, bits) = BigInt::split_shift(n);
        let whole = whole.unwrap_or_else(|| panic!("left shift by {} overflows the word capacity", n));

        if bits != 0 {
            let ext = self.extension();
            let mut carry: Word = 0;
            for w in self.words.iter_mut() {
                let out = *w >> (WORD_BITS - bits);
                *w = (*w << bits) | carry;
                carry = out;
            }
            // bits pushed out of the top word sit under the shifted extension
            self.words.push((ext << bits) | carry);
        }
        if whole != 0 {
            let mut words = vec![0; whole];
            words.append(&mut self.words);
            self.words = words;
        }
        self.normalize();
        self
    }

    pub(crate) fn shift_right(mut self, n: &BigInt) -> BigInt {
        if n.sign {
            log::debug!("right shift by negative amount {} yields zero", n);
            return ZERO;
        }
        let (whole, bits) = BigInt::split_shift(n);
        let whole = whole.unwrap_or(usize::MAX);

        if whole >= self.words.len() {
            // only the sign extension is left
            self.words.clear();
            return self;
        }
        self.words.drain(..whole);

        if bits != 0 {
            let ext = self.extension();
            let len = self.words.len();
            for i in 0..len {
                let next = if i + 1 < len { self.words[i + 1] } else { ext };
                self.words[i] = (self.words[i] >> bits) | (next << (WORD_BITS - bits));
            }
        }
        self.normalize();
        self
    }
}

impl_shift!(Shl, shl, ShlAssign, shl_assign, BigInt::shift_left);
impl_shift!(Shl, shl, ShlAssign, shl_assign, BigInt::shift_left; u32, usize, i32, i64);
impl_shift!(Shr, shr, ShrAssign, shr_assign, BigInt::shift_right);
impl_shift!(Shr, shr, ShrAssign, shr_assign, BigInt::shift_right; u32, usize, i32, i64);
