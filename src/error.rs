// SDK Error Taxonomy
//
// One shared tagged error type across the whole core. Every fallible entry
// point returns `SdkResult<T>`; callers match on the variant to decide
// whether to recover or surface. Nothing in here carries heap data, so
// errors are Copy and cheap to pass around.

use thiserror::Error;

/// Result alias used by every fallible SDK entry point
pub type SdkResult<T> = Result<T, SdkError>;

/// All failure modes of the codec, math engine, and address derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SdkError {
    /// Account blob is shorter than the 8-byte discriminator prefix
    #[error("account data too short to contain a discriminator")]
    InsufficientData,

    /// Account blob is shorter than the declared size for its kind,
    /// or a byte-level decode failed past the discriminator
    #[error("account data does not match the declared layout")]
    InvalidFormat,

    /// Leading 8 bytes do not match the expected account discriminator
    #[error("account discriminator mismatch")]
    InvalidDiscriminator,

    /// A public key was not exactly 32 bytes after decoding
    #[error("public key must decode to exactly 32 bytes")]
    InvalidLength,

    /// A balance or amount that must be nonzero was zero
    #[error("zero amount or balance where a positive value is required")]
    ZeroInput,

    /// Amplification coefficient of zero makes the invariant undefined
    #[error("amplification coefficient is zero")]
    ZeroAmp,

    /// Newton iteration produced a zero (or negative) denominator
    #[error("zero denominator in invariant iteration")]
    ZeroDenom,

    /// Liquidity calculation against a pool whose invariant is zero
    #[error("pool invariant is zero")]
    ZeroInvariant,

    /// Per-share calculation against a zero LP supply
    #[error("LP token supply is zero")]
    ZeroSupply,

    /// Newton iteration did not converge within the iteration cap
    #[error("invariant iteration failed to converge")]
    FailedToConverge,

    /// A token index was out of range for the pool, or input and
    /// output indices were equal
    #[error("invalid token index for this pool")]
    InvalidTokenIndex,

    /// An intermediate product exceeded 128 bits; mirrors the on-chain
    /// math_overflow error (code 6002)
    #[error("arithmetic overflow in math engine")]
    MathOverflow,

    /// No bump in 255..=0 produced an off-curve digest
    #[error("no valid bump seed found")]
    NoValidBump,

    /// The hashed candidate landed on the Ed25519 curve
    #[error("derived address lies on the Ed25519 curve")]
    OnCurve,
}
