//! Differential tests against `num-bigint`, seeded for reproducibility.

use num_bigint::{BigInt as NumBigInt, RandomBits, Sign};
use num_traits::{One, Signed, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use twos_bigint::{BigInt, Word, WORD_BITS};

/// Reads the raw words back as a two's-complement number.
fn to_num(x: &BigInt) -> NumBigInt {
    let mut v = NumBigInt::zero();
    for (i, w) in x.words().iter().enumerate() {
        v += NumBigInt::from(*w) << (i * WORD_BITS as usize);
    }
    if x.sign() {
        v -= NumBigInt::one() << (x.words().len() * WORD_BITS as usize);
    }
    v
}

fn from_num(n: &NumBigInt) -> BigInt {
    let (sign, digits) = n.to_u64_digits();
    let magnitude = digits.iter()
        .rev()
        .fold(BigInt::from(0), |acc, d| (acc << 64_u32) + BigInt::from(*d));
    if sign == Sign::Minus {
        -magnitude
    } else {
        magnitude
    }
}

fn random_big_int(prng: &mut ChaCha20Rng) -> BigInt {
    let len = prng.gen_range(0..6);
    let words: Vec<Word> = (0..len).map(|_| prng.gen()).collect();
    BigInt::from_raw(prng.gen(), words)
}

#[test]
fn test_conversions_agree() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..200 {
        let n: NumBigInt = prng.sample(RandomBits::new(300));
        let x = from_num(&n);
        assert_eq!(to_num(&x), n);

        let v: i128 = prng.gen();
        assert_eq!(to_num(&BigInt::from(v)), NumBigInt::from(v));
        assert_eq!(i128::try_from(&BigInt::from(v)), Ok(v));
    }
}

#[test]
fn test_bitwise() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..500 {
        let x = random_big_int(&mut prng);
        let y = random_big_int(&mut prng);
        let (a, b) = (to_num(&x), to_num(&y));

        assert_eq!(to_num(&!&x), !&a);
        assert_eq!(to_num(&(&x & &y)), &a & &b);
        assert_eq!(to_num(&(&x | &y)), &a | &b);
        assert_eq!(to_num(&(&x ^ &y)), &a ^ &b);
    }
}

#[test]
fn test_arithmetic() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..500 {
        let x = random_big_int(&mut prng);
        let y = random_big_int(&mut prng);
        let (a, b) = (to_num(&x), to_num(&y));

        assert_eq!(to_num(&-&x), -&a);
        assert_eq!(to_num(&(&x + &y)), &a + &b, "{} + {}", x, y);
        assert_eq!(to_num(&(&x - &y)), &a - &b, "{} - {}", x, y);
        assert_eq!(to_num(&(&x * &y)), &a * &b, "{} * {}", x, y);

        let mut z = x.clone();
        z.inc();
        assert_eq!(to_num(&z), &a + 1);
        z.dec();
        z.dec();
        assert_eq!(to_num(&z), &a - 1);
    }
}

#[test]
fn test_shift() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..500 {
        let x = random_big_int(&mut prng);
        let n: usize = prng.gen_range(0..200);
        let a = to_num(&x);

        assert_eq!(to_num(&(&x << n)), &a << n, "{} << {}", x, n);
        assert_eq!(to_num(&(&x >> n)), &a >> n, "{} >> {}", x, n);
    }
}

#[test]
fn test_compare_and_render() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..500 {
        let x = random_big_int(&mut prng);
        let y = random_big_int(&mut prng);
        let (a, b) = (to_num(&x), to_num(&y));

        assert_eq!(x.cmp(&y), a.cmp(&b));
        assert_eq!(x == y, a == b);

        let hex = format!("{:X}", a.abs());
        let expected = if a.is_negative() { format!("-0x{}", hex) } else { format!("0x{}", hex) };
        assert_eq!(x.to_hex(), expected);

        let bits = if a.is_positive() { a.bits() } else { 0 };
        assert_eq!(x.bit_length(), BigInt::from(bits));
    }
}

#[test]
fn test_small_products_match_native() {
    let mut prng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..1000 {
        let a: i64 = prng.gen_range(-(1 << 20)..(1 << 20));
        let b: i64 = prng.gen_range(-(1 << 20)..(1 << 20));
        assert_eq!(BigInt::from(a) * BigInt::from(b), BigInt::from(a * b), "{} * {}", a, b);
    }
}
