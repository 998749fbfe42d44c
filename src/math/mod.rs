// StableSwap Math Engine
//
// Integer-only simulation of the on-chain swap and liquidity math. All
// intermediates run in u128 with truncating division; the iteration
// grouping and rounding mirror the program bit-for-bit, because the
// convergence test is an equality within one unit and rounding drift
// compounds through iterations. The only floating point lives in the
// explicitly display-only price helpers.

pub mod amp;
pub mod isqrt;
pub mod ntoken;
pub mod stable_swap;


pub use amp::{get_current_amp, ramp_state, AmpRampState};
pub use isqrt::isqrt;
pub use ntoken::{calc_d_n, calc_y_n, simulate_swap_n};
pub use stable_swap::{
    calc_d, calc_lp_tokens, calc_price_impact, calc_spot_price, calc_virtual_price, calc_withdraw,
    calc_y, quote_swap, simulate_swap, SwapQuote,
};
