use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};

use crate::big_int::BigInt;

// 实现相等比较：异或结果归一后为零即相等
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        BigInt::bit_xor(self, other).is_zero()
    }
}
impl Eq for BigInt {}

// 实现大小比较：取 `self - other` 的符号
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {},
        }
        let diff = BigInt::sub(self, other);
        if diff.is_zero() {
            Ordering::Equal
        } else if diff.sign {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[test]
fn test_eq() {
    use crate::big_int_constants::*;

    assert_eq!(BigInt::from(7_u8), BigInt::from(7_i64));
    assert_ne!(BigInt::from(7), BigInt::from(-7));
    assert_eq!(BigInt::from(-1), BigInt::from_raw(true, vec![ALL_ONES, ALL_ONES]));
    assert_ne!(BigInt::from_raw(false, vec![1]), BigInt::from_raw(true, vec![1]));
}

#[test]
fn test_cmp() {
    let values: Vec<BigInt> = [
        -(1_i128 << 100), -(1 << 40), -256, -2, -1, 0, 1, 2, 255, 1 << 40, 1 << 100,
    ].iter().map(|v| BigInt::from(*v)).collect();

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }

    assert!(BigInt::from(3) >= BigInt::from(3));
    assert!(BigInt::from(-3) <= BigInt::from(3));
    assert!(BigInt::from(u64::MAX) > BigInt::from(i64::MAX));
    assert_eq!(BigInt::from(-9).max(BigInt::from(-10)), BigInt::from(-9));
}
