/// Storage unit of a [`BigInt`](crate::BigInt).
#[cfg(not(feature = "u64-words"))]
pub type Word = u32;
/// Intermediate wide enough to hold a word product plus two carries.
#[cfg(not(feature = "u64-words"))]
pub type DoubleWord = u64;

/// Storage unit of a [`BigInt`](crate::BigInt).
#[cfg(feature = "u64-words")]
pub type Word = u64;
/// Intermediate wide enough to hold a word product plus two carries.
#[cfg(feature = "u64-words")]
pub type DoubleWord = u128;

pub const WORD_BITS: u32 = Word::BITS;

pub const ALL_ONES: Word = !0;
pub const ALL_BUT_MSB: Word = ALL_ONES >> 1;
pub const MSB: Word = !ALL_BUT_MSB;
pub const LSB: Word = 1;
pub const ALL_BUT_LSB: Word = !LSB;

pub const NYBBLES_PER_WORD: u32 = WORD_BITS / 4;

/// log2 of `WORD_BITS`, used to split a shift amount into words and bits.
pub const WORD_SHIFT: u32 = WORD_BITS.trailing_zeros();

/// Words of a native `i128`/`u128`.
pub const WORDS_PER_128: usize = (128 / WORD_BITS) as usize;

pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

pub const MAX_CONSTANT: usize = 16;
