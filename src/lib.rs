// AEX-402 Client SDK
//
// Off-chain companion to the AEX-402 hybrid AMM program. This library
// provides components for building clients against the deployed program:
// - Account codecs for pool, farm, lottery, and registry blobs
// - Instruction payload builders matching the on-chain wire format
// - Bit-faithful StableSwap math for quoting and slippage bounds
// - Program-derived address search with the precise Ed25519 curve test
//
// The SDK never talks to an RPC endpoint, never signs, and holds no
// state: every entry point is a pure function of its arguments.

pub mod constants;
pub mod error;
pub mod instruction;
pub mod math;
pub mod pda;
pub mod pubkey;
pub mod state;

// Flat re-exports of the common surface
pub use constants::error_code::error_message;
pub use constants::{program_id, PROGRAM_ID, PROGRAM_ID_BYTES};
pub use error::{SdkError, SdkResult};
pub use math::{
    calc_d, calc_d_n, calc_lp_tokens, calc_virtual_price, calc_withdraw, calc_y, calc_y_n,
    get_current_amp, isqrt, quote_swap, simulate_swap, simulate_swap_n, AmpRampState, SwapQuote,
};
pub use pda::{create_program_address, find_program_address, is_on_curve};
pub use pubkey::{decode_pubkey, encode_pubkey, Pubkey};
pub use state::{
    AccountState, Candle, Farm, Lottery, LotteryEntry, NPool, Pool, Registry, TwapResult, UserFarm,
};
