// Two-Token StableSwap Solver
//
// Computes the invariant D and output balance Y by the same iterated
// fixed-point procedure the program runs on-chain. Division truncates
// everywhere, every product is overflow-checked into u128, and the
// iteration grouping is preserved verbatim: `(d*d / (x*2)) * d / (y*2)`
// is NOT the same sequence of truncations as `d^3 / (4*x*y)`, and
// swapping them desynchronizes convergence from the chain.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{FEE_DENOMINATOR, MAX_ITERATIONS, VIRTUAL_PRICE_SCALE};
use crate::error::{SdkError, SdkResult};
use crate::math::isqrt::isqrt;

/// Swap preview with fee breakdown and display-only price impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub amount_out: u64,
    pub fee: u64,
    /// Fraction of the naive spot quote lost to curvature and fees.
    /// Display only; never feed this back into consensus-sensitive math.
    pub price_impact: f64,
}

/// StableSwap invariant D for a two-token pool.
///
/// Returns Ok(0) when either balance is zero: an empty pool has no
/// invariant, and the program treats that as a distinct condition
/// rather than an error.
pub fn calc_d(bal0: u64, bal1: u64, amp: u64) -> SdkResult<u64> {
    if bal0 == 0 || bal1 == 0 {
        return Ok(0);
    }
    let x = bal0 as u128;
    let y = bal1 as u128;
    let s = x + y;
    let ann = (amp as u128) * 4;
    if ann == 0 {
        return Err(SdkError::ZeroAmp);
    }

    let mut d = s;
    for iter in 0..MAX_ITERATIONS {
        let d_p = d.checked_mul(d).ok_or(SdkError::MathOverflow)? / (x * 2);
        let d_p = d_p.checked_mul(d).ok_or(SdkError::MathOverflow)? / (y * 2);

        let num = ann
            .checked_mul(s)
            .and_then(|t| t.checked_add(d_p.checked_mul(2)?))
            .and_then(|t| t.checked_mul(d))
            .ok_or(SdkError::MathOverflow)?;
        let den = (ann - 1)
            .checked_mul(d)
            .and_then(|t| t.checked_add(d_p.checked_mul(3)?))
            .ok_or(SdkError::MathOverflow)?;
        if den == 0 {
            return Err(SdkError::ZeroDenom);
        }

        let d_new = num / den;
        if d_new.abs_diff(d) <= 1 {
            trace!(iterations = iter + 1, "invariant converged");
            return u64::try_from(d_new).map_err(|_| SdkError::MathOverflow);
        }
        d = d_new;
    }
    Err(SdkError::FailedToConverge)
}

/// Output-side balance Y satisfying the invariant after the input side
/// moved to `x_new`.
pub fn calc_y(x_new: u64, d: u64, amp: u64) -> SdkResult<u64> {
    if x_new == 0 {
        return Err(SdkError::ZeroInput);
    }
    let x = x_new as u128;
    let d = d as u128;
    let ann = (amp as u128) * 4;
    if ann == 0 {
        return Err(SdkError::ZeroAmp);
    }

    let c = d.checked_mul(d).ok_or(SdkError::MathOverflow)? / (x * 2);
    let c = c.checked_mul(d).ok_or(SdkError::MathOverflow)? / (ann * 2);
    let b = x + d / ann;

    let mut y = d;
    for iter in 0..MAX_ITERATIONS {
        // 2y + b - d; a non-positive denominator cannot host a root
        let den = (2u128)
            .checked_mul(y)
            .and_then(|t| t.checked_add(b))
            .ok_or(SdkError::MathOverflow)?
            .checked_sub(d)
            .ok_or(SdkError::ZeroDenom)?;
        if den == 0 {
            return Err(SdkError::ZeroDenom);
        }
        let y_new = y
            .checked_mul(y)
            .and_then(|t| t.checked_add(c))
            .ok_or(SdkError::MathOverflow)?
            / den;
        if y_new.abs_diff(y) <= 1 {
            trace!(iterations = iter + 1, "output balance converged");
            return u64::try_from(y_new).map_err(|_| SdkError::MathOverflow);
        }
        y = y_new;
    }
    Err(SdkError::FailedToConverge)
}

fn swap_parts(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> SdkResult<(u64, u64)> {
    if bal_in == 0 || bal_out == 0 || amount_in == 0 {
        return Err(SdkError::ZeroInput);
    }
    let d = calc_d(bal_in, bal_out, amp)?;
    let x_new = bal_in.checked_add(amount_in).ok_or(SdkError::MathOverflow)?;
    let y = calc_y(x_new, d, amp)?;
    let gross = bal_out.saturating_sub(y);
    let fee = (gross as u128 * fee_bps as u128 / FEE_DENOMINATOR as u128) as u64;
    Ok((gross, fee))
}

/// Net output of swapping `amount_in` against the pool: gross output by
/// the invariant, minus the floored basis-point fee.
pub fn simulate_swap(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> SdkResult<u64> {
    let (gross, fee) = swap_parts(bal_in, bal_out, amount_in, amp, fee_bps)?;
    Ok(gross - fee)
}

/// Swap preview including fee and display price impact
pub fn quote_swap(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> SdkResult<SwapQuote> {
    let (gross, fee) = swap_parts(bal_in, bal_out, amount_in, amp, fee_bps)?;
    let amount_out = gross - fee;
    let expected = amount_in as u128 * bal_out as u128 / bal_in as u128;
    let price_impact = if expected == 0 {
        0.0
    } else {
        (expected as f64 - amount_out as f64) / expected as f64
    };
    Ok(SwapQuote {
        amount_out,
        fee,
        price_impact,
    })
}

/// LP tokens minted for a deposit. The first deposit bootstraps supply
/// at the geometric mean of the amounts; later deposits mint pro rata
/// with invariant growth.
pub fn calc_lp_tokens(
    bal0: u64,
    bal1: u64,
    amount0: u64,
    amount1: u64,
    lp_supply: u64,
    amp: u64,
) -> SdkResult<u64> {
    if lp_supply == 0 {
        let minted = isqrt(amount0 as u128 * amount1 as u128);
        return u64::try_from(minted).map_err(|_| SdkError::MathOverflow);
    }
    let d0 = calc_d(bal0, bal1, amp)?;
    if d0 == 0 {
        return Err(SdkError::ZeroInvariant);
    }
    let new0 = bal0.checked_add(amount0).ok_or(SdkError::MathOverflow)?;
    let new1 = bal1.checked_add(amount1).ok_or(SdkError::MathOverflow)?;
    let d1 = calc_d(new0, new1, amp)?;
    let growth = (d1 as u128).saturating_sub(d0 as u128);
    let minted = (lp_supply as u128)
        .checked_mul(growth)
        .ok_or(SdkError::MathOverflow)?
        / d0 as u128;
    u64::try_from(minted).map_err(|_| SdkError::MathOverflow)
}

/// Proportional withdrawal amounts for burning `lp_amount`
pub fn calc_withdraw(
    bal0: u64,
    bal1: u64,
    lp_amount: u64,
    lp_supply: u64,
) -> SdkResult<(u64, u64)> {
    if lp_supply == 0 {
        return Err(SdkError::ZeroSupply);
    }
    let share0 = bal0 as u128 * lp_amount as u128 / lp_supply as u128;
    let share1 = bal1 as u128 * lp_amount as u128 / lp_supply as u128;
    Ok((
        u64::try_from(share0).map_err(|_| SdkError::MathOverflow)?,
        u64::try_from(share1).map_err(|_| SdkError::MathOverflow)?,
    ))
}

/// Invariant per LP token, scaled 1e18
pub fn calc_virtual_price(d: u64, lp_supply: u64) -> SdkResult<u128> {
    if lp_supply == 0 {
        return Err(SdkError::ZeroSupply);
    }
    Ok(d as u128 * VIRTUAL_PRICE_SCALE / lp_supply as u128)
}

/// Naive spot price of the output token in input tokens. Display only.
pub fn calc_spot_price(bal_in: u64, bal_out: u64) -> f64 {
    if bal_in == 0 {
        return 0.0;
    }
    bal_out as f64 / bal_in as f64
}

/// Display price impact of a swap as a fraction of the spot quote
pub fn calc_price_impact(
    bal_in: u64,
    bal_out: u64,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> SdkResult<f64> {
    Ok(quote_swap(bal_in, bal_out, amount_in, amp, fee_bps)?.price_impact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_pool_collapses_to_sum() {
        assert_eq!(calc_d(1_000_000_000, 1_000_000_000, 100).unwrap(), 2_000_000_000);
    }

    #[test]
    fn test_zero_balance_gives_zero_invariant() {
        assert_eq!(calc_d(0, 1_000_000, 100).unwrap(), 0);
        assert_eq!(calc_d(1_000_000, 0, 100).unwrap(), 0);
    }

    #[test]
    fn test_zero_amp_rejected() {
        assert_eq!(calc_d(1_000, 1_000, 0).unwrap_err(), SdkError::ZeroAmp);
        assert_eq!(calc_y(1_000, 2_000, 0).unwrap_err(), SdkError::ZeroAmp);
    }

    #[test]
    fn test_imbalanced_invariants_pinned() {
        assert_eq!(calc_d(2_000_000_000, 1_000_000_000, 50).unwrap(), 2_998_146_985);
        assert_eq!(calc_d(1_000_000, 500_000_000, 1).unwrap(), 146_283_478);
    }

    #[test]
    fn test_extreme_imbalance_surfaces_nonconvergence() {
        // At 1000:1 with amp 1 the truncating fixed point oscillates and
        // the iteration cap reports it instead of returning a bad root
        assert_eq!(
            calc_d(1_000_000_000, 1_000_000, 1).unwrap_err(),
            SdkError::FailedToConverge
        );
    }

    #[test]
    fn test_swap_golden() {
        // ~0.35% total drag: curvature plus the 30 bps fee
        let out = simulate_swap(1_000_000_000, 1_000_000_000, 100_000_000, 100, 30).unwrap();
        assert_eq!(out, 99_649_928);
        // Without the fee the drag is curvature alone
        let gross = simulate_swap(1_000_000_000, 1_000_000_000, 100_000_000, 100, 0).unwrap();
        assert_eq!(gross, 99_949_777);
    }

    #[test]
    fn test_fee_applied_to_gross_then_subtracted() {
        let (gross, fee) =
            swap_parts(1_000_000_000, 1_000_000_000, 100_000_000, 100, 30).unwrap();
        assert_eq!(gross, 99_949_777);
        assert_eq!(fee, 299_849);
        assert_eq!(gross - fee, 99_649_928);
        assert_eq!(fee, gross * 30 / 10_000);
    }

    #[test]
    fn test_swap_rejects_zero_inputs() {
        assert_eq!(
            simulate_swap(0, 1_000, 10, 100, 30).unwrap_err(),
            SdkError::ZeroInput
        );
        assert_eq!(
            simulate_swap(1_000, 0, 10, 100, 30).unwrap_err(),
            SdkError::ZeroInput
        );
        assert_eq!(
            simulate_swap(1_000, 1_000, 0, 100, 30).unwrap_err(),
            SdkError::ZeroInput
        );
    }

    #[test]
    fn test_quote_includes_impact() {
        let quote = quote_swap(1_000_000_000, 1_000_000_000, 100_000_000, 100, 30).unwrap();
        assert_eq!(quote.amount_out, 99_649_928);
        assert_eq!(quote.fee, 299_849);
        assert!(quote.price_impact > 0.0 && quote.price_impact < 0.01);
    }

    #[test]
    fn test_first_deposit_is_geometric_mean() {
        assert_eq!(
            calc_lp_tokens(0, 0, 1_000_000_000, 1_000_000_000, 0, 100).unwrap(),
            1_000_000_000
        );
    }

    #[test]
    fn test_later_deposit_golden() {
        let minted = calc_lp_tokens(
            1_000_000_000,
            1_000_000_000,
            100_000_000,
            100_000_000,
            2_000_000_000,
            100,
        )
        .unwrap();
        assert_eq!(minted, 200_000_000);

        // One-sided deposit mints less than the balanced equivalent
        let uneven = calc_lp_tokens(
            1_000_000_000,
            1_000_000_000,
            100_000_000,
            0,
            2_000_000_000,
            100,
        )
        .unwrap();
        assert_eq!(uneven, 99_988_127);
    }

    #[test]
    fn test_deposit_into_empty_nonzero_supply_pool_fails() {
        assert_eq!(
            calc_lp_tokens(0, 0, 1_000, 1_000, 5_000, 100).unwrap_err(),
            SdkError::ZeroInvariant
        );
    }

    #[test]
    fn test_withdraw_proportional() {
        let (a0, a1) = calc_withdraw(1_000_000, 2_000_000, 500, 1_000).unwrap();
        assert_eq!(a0, 500_000);
        assert_eq!(a1, 1_000_000);
        assert_eq!(
            calc_withdraw(1_000, 1_000, 10, 0).unwrap_err(),
            SdkError::ZeroSupply
        );
    }

    #[test]
    fn test_virtual_price() {
        let d = calc_d(1_000_000_000, 1_000_000_000, 100).unwrap();
        assert_eq!(
            calc_virtual_price(d, 2_000_000_000).unwrap(),
            1_000_000_000_000_000_000
        );
        let d = calc_d(1_500_000_000, 900_000_000, 200).unwrap();
        assert_eq!(
            calc_virtual_price(d, 2_345_678_901).unwrap(),
            1_023_072_913_763_655_838
        );
        assert_eq!(
            calc_virtual_price(1_000, 0).unwrap_err(),
            SdkError::ZeroSupply
        );
    }

    #[test]
    fn test_spot_helpers_are_floats() {
        assert_eq!(calc_spot_price(0, 500), 0.0);
        assert!((calc_spot_price(1_000, 2_000) - 2.0).abs() < 1e-12);
        let impact =
            calc_price_impact(1_000_000_000, 1_000_000_000, 100_000_000, 100, 0).unwrap();
        assert!(impact > 0.0 && impact < 0.001);
    }
}
