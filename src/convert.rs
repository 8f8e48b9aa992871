use crate::big_int::BigInt;
use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::TryFromBigIntError;

// 实现构造
impl BigInt {
    fn value_of_i128(val: i128) -> BigInt {
        let abs = val.unsigned_abs();
        if abs <= MAX_CONSTANT as u128 {
            return if val < 0 {
                NEG_CACHE[abs as usize].clone()
            } else {
                POS_CACHE[abs as usize].clone()
            };
        }

        let sign = val < 0;
        let ext: i128 = if sign { -1 } else { 0 };
        let mut words = Vec::with_capacity(WORDS_PER_128);
        let mut rest = val;
        while rest != ext {
            words.push(rest as Word);
            rest >>= WORD_BITS;
        }
        BigInt::from_raw(sign, words)
    }

    fn value_of_u128(val: u128) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return POS_CACHE[val as usize].clone();
        }

        let mut words = Vec::with_capacity(WORDS_PER_128);
        let mut rest = val;
        while rest != 0 {
            words.push(rest as Word);
            rest >>= WORD_BITS;
        }
        BigInt::from_raw(false, words)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of_u128(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of_i128(val as i128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

impl From<bool> for BigInt {
    fn from(val: bool) -> Self {
        BigInt::from(val as u8)
    }
}

// 实现转换为原生整数
impl BigInt {
    /// The value as an `i128`, if it fits.
    fn to_i128(&self) -> Option<i128> {
        match self.words.len() {
            len if len > WORDS_PER_128 => return None,
            // a full-width value must carry its own sign in the top bit
            len if len == WORDS_PER_128 => match self.words.last() {
                Some(top) if ((top & MSB) != 0) != self.sign => return None,
                _ => {},
            },
            _ => {},
        }
        let mut bits: u128 = if self.sign { !0 } else { 0 };
        for (i, w) in self.words.iter().enumerate() {
            let shift = i as u32 * WORD_BITS;
            bits &= !((ALL_ONES as u128) << shift);
            bits |= (*w as u128) << shift;
        }
        Some(bits as i128)
    }

    /// The magnitude as a `u128`, if the value is non-negative and fits.
    fn to_u128(&self) -> Option<u128> {
        if self.sign || self.words.len() > WORDS_PER_128 {
            return None;
        }
        Some(self.words.iter()
            .enumerate()
            .fold(0, |acc, (i, w)| acc | (*w as u128) << (i as u32 * WORD_BITS)))
    }
}

macro_rules! impl_big_int_to_signed {
    ($($i: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $i {
        type Error = TryFromBigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            val.to_i128()
                .and_then(|v| <$i>::try_from(v).ok())
                .ok_or(TryFromBigIntError::Overflow(stringify!($i)))
        }
    }

    impl TryFrom<BigInt> for $i {
        type Error = TryFromBigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$i>::try_from(&val)
        }
    }
    )*
    };
}

macro_rules! impl_big_int_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $u {
        type Error = TryFromBigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            if val.sign {
                return Err(TryFromBigIntError::Negative(stringify!($u)));
            }
            val.to_u128()
                .and_then(|v| <$u>::try_from(v).ok())
                .ok_or(TryFromBigIntError::Overflow(stringify!($u)))
        }
    }

    impl TryFrom<BigInt> for $u {
        type Error = TryFromBigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$u>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_unsigned!(u8, u16, u32, u64, u128, usize);
impl_big_int_to_signed!(i8, i16, i32, i64, i128, isize);

#[test]
fn test_from() {
    let big = BigInt::from(12_i8);
    assert_eq!(big.words(), &[12]);
    assert!(!big.sign());

    let big = BigInt::from(-100_i16);
    assert_eq!(big.words(), &[(-100_i16) as Word]);
    assert!(big.sign());

    let big = BigInt::from(-1_i64);
    assert!(big.words().is_empty() && big.sign());

    let big = BigInt::from(u64::MAX);
    assert!(!big.sign());
    assert_eq!(big.words().len(), 64 / WORD_BITS as usize);

    let big = BigInt::from(i128::MIN);
    assert_eq!(big.words().len(), WORDS_PER_128);
    assert_eq!(big.words().last(), Some(&MSB));

    let big = BigInt::from(0x8000_0000_u32);
    assert!(!big.sign());
    assert_eq!(big.words()[0] as u64, 0x8000_0000);

    assert_eq!(BigInt::from(true), BigInt::from(1));
    assert!(BigInt::from(false).is_zero());
}

#[test]
fn test_try_from() {
    assert_eq!(i8::try_from(BigInt::from(-128)), Ok(-128));
    assert_eq!(i8::try_from(BigInt::from(128)), Err(TryFromBigIntError::Overflow("i8")));
    assert_eq!(u8::try_from(&BigInt::from(-1)), Err(TryFromBigIntError::Negative("u8")));
    assert_eq!(u128::try_from(BigInt::from(u128::MAX)), Ok(u128::MAX));
    assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(i128::try_from(BigInt::from(u128::MAX)), Err(TryFromBigIntError::Overflow("i128")));
    assert_eq!(i128::try_from(BigInt::from(i128::MAX) + BigInt::from(1)), Err(TryFromBigIntError::Overflow("i128")));
    assert_eq!(i128::try_from(BigInt::from(i128::MIN) - BigInt::from(1)), Err(TryFromBigIntError::Overflow("i128")));
    assert_eq!(i128::try_from(BigInt::from(i128::MAX)), Ok(i128::MAX));
    // -2^128: full width, but the top bit disagrees with the sign
    assert_eq!(i128::try_from(BigInt::from_raw(true, vec![0; WORDS_PER_128])), Err(TryFromBigIntError::Overflow("i128")));
    assert_eq!(i64::try_from(BigInt::from(1) << 64_u32), Err(TryFromBigIntError::Overflow("i64")));
    assert_eq!(u32::try_from(BigInt::from(1) << 200_u32), Err(TryFromBigIntError::Overflow("u32")));
    assert_eq!(usize::try_from(BigInt::from(42)), Ok(42));
    assert_eq!(
        TryFromBigIntError::Negative("u8").to_string(),
        "negative value cannot be converted to `u8`"
    );
}
