use lazy_static::*;

use crate::big_int::BigInt;
use crate::big_int_constants::*;

macro_rules! small_table {
    ($sign: expr, $make: expr) => {
        {
            let mut table: [BigInt; MAX_CONSTANT + 1] = Default::default();
            for (i, slot) in table.iter_mut().enumerate().skip(1) {
                *slot = BigInt::from_raw($sign, vec![$make(i)]);
            }
            table
        }
    };
}

lazy_static! {
    /// `0..=MAX_CONSTANT`
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        small_table!(false, |i: usize| i as Word);
    /// `0, -1, ..., -MAX_CONSTANT`; `-1` condenses to the empty word sequence.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        small_table!(true, |i: usize| (i as Word).wrapping_neg());
}

#[test]
fn test_cache_is_condensed() {
    assert!(POS_CACHE[0].is_zero());
    assert!(NEG_CACHE[0].is_zero());
    assert!(NEG_CACHE[1].words().is_empty() && NEG_CACHE[1].sign());
    assert_eq!(NEG_CACHE[2].words(), &[ALL_BUT_LSB]);
    assert_eq!(POS_CACHE[16].words(), &[16]);
}
