// Protocol Constants
//
// Program identifiers and the numeric protocol limits baked into the
// on-chain program. Everything in this module is compile-time read-only
// data; the SDK never mutates or registers anything at runtime.

pub mod discriminator;
pub mod error_code;

use crate::pubkey::Pubkey;

/// Canonical base-58 program identifier of the AMM program
pub const PROGRAM_ID: &str = "3AMM53MsJZy2Jvf7PeHHga3bsGjWV4TSaYz29WUtcdje";

/// Raw 32-byte decoding of [`PROGRAM_ID`], pinned by test against bs58
pub const PROGRAM_ID_BYTES: [u8; 32] = [
    32, 28, 155, 65, 31, 4, 196, 101, 155, 48, 199, 207, 164, 63, 151, 131,
    72, 30, 240, 16, 170, 240, 145, 176, 53, 207, 60, 226, 18, 242, 64, 129,
];

/// SPL token program (legacy)
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
pub const TOKEN_PROGRAM_ID_BYTES: [u8; 32] = [
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172,
    28, 180, 133, 237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
];

/// SPL token-2022 program
pub const TOKEN_2022_PROGRAM_ID: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";
pub const TOKEN_2022_PROGRAM_ID_BYTES: [u8; 32] = [
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218,
    182, 26, 252, 77, 131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
];

/// Default derivation anchor as a typed key
pub fn program_id() -> Pubkey {
    Pubkey(PROGRAM_ID_BYTES)
}

// Amp bounds enforced by the program
pub const MIN_AMP: u64 = 1;
pub const MAX_AMP: u64 = 100_000;

// Fee configuration
pub const DEFAULT_FEE_BPS: u64 = 30;
pub const ADMIN_FEE_PCT: u64 = 50;
pub const MIGRATION_FEE_BPS: u64 = 1_337;
pub const FEE_DENOMINATOR: u64 = 10_000;

// Trade and deposit floors
pub const MIN_SWAP_AMOUNT: u64 = 100_000;
pub const MIN_DEPOSIT: u64 = 100_000_000;

/// Newton iteration cap shared by every invariant solver
pub const MAX_ITERATIONS: u32 = 255;

// Amp ramp timing (seconds)
pub const MIN_RAMP_DURATION: i64 = 86_400;
pub const COMMIT_DELAY: i64 = 3_600;

// N-token pool bounds
pub const MAX_TOKENS: usize = 8;

// Analytics geometry
pub const BLOOM_SIZE: usize = 128;
pub const HOURLY_CANDLES: usize = 24;
pub const DAILY_CANDLES: usize = 7;
pub const SLOTS_PER_HOUR: u64 = 9_000;
pub const SLOTS_PER_DAY: u64 = 216_000;

// Fixed account blob sizes
pub const POOL_SIZE: usize = 1_024;
pub const NPOOL_SIZE: usize = 2_048;

// Fixed-point scales
pub const PRICE_SCALE: u64 = 1_000_000;
pub const VOLUME_SCALE: u64 = 1_000_000_000;
pub const VIRTUAL_PRICE_SCALE: u128 = 1_000_000_000_000_000_000;
pub const REWARD_PRECISION: u128 = 1_000_000_000_000;
