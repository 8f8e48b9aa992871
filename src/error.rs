/// Failure to narrow a [`BigInt`](crate::BigInt) into a native integer type.
/// Carries the name of the target type.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryFromBigIntError {
    #[error("negative value cannot be converted to `{0}`")]
    Negative(&'static str),
    #[error("value out of range for `{0}`")]
    Overflow(&'static str),
}
