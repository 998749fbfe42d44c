// N-Token StableSwap Generalization
//
// The same fixed-point forms as the two-token solver, generalized to
// n = 2..=8 balances with ann = amp * n^n. The product chain for d_p
// folds one truncating division per balance, in slot order; that order
// is part of the wire contract with the program.

use tracing::trace;

use crate::constants::{FEE_DENOMINATOR, MAX_ITERATIONS, MAX_TOKENS};
use crate::error::{SdkError, SdkResult};

fn ann_for(n: usize, amp: u64) -> SdkResult<u128> {
    if !(2..=MAX_TOKENS).contains(&n) {
        return Err(SdkError::InvalidTokenIndex);
    }
    let ann = (amp as u128) * (n as u128).pow(n as u32);
    if ann == 0 {
        return Err(SdkError::ZeroAmp);
    }
    Ok(ann)
}

/// StableSwap invariant D over 2..=8 balances.
///
/// Any zero balance yields Ok(0), matching the two-token convention.
pub fn calc_d_n(balances: &[u64], amp: u64) -> SdkResult<u64> {
    let n = balances.len();
    if !(2..=MAX_TOKENS).contains(&n) {
        return Err(SdkError::InvalidTokenIndex);
    }
    if balances.iter().any(|&b| b == 0) {
        return Ok(0);
    }
    let ann = ann_for(n, amp)?;
    let s: u128 = balances.iter().map(|&b| b as u128).sum();

    let mut d = s;
    for iter in 0..MAX_ITERATIONS {
        let mut d_p = d;
        for &b in balances {
            d_p = d_p.checked_mul(d).ok_or(SdkError::MathOverflow)?
                / (b as u128 * n as u128);
        }

        let num = ann
            .checked_mul(s)
            .and_then(|t| t.checked_add(d_p.checked_mul(n as u128)?))
            .and_then(|t| t.checked_mul(d))
            .ok_or(SdkError::MathOverflow)?;
        let den = (ann - 1)
            .checked_mul(d)
            .and_then(|t| t.checked_add(d_p.checked_mul(n as u128 + 1)?))
            .ok_or(SdkError::MathOverflow)?;
        if den == 0 {
            return Err(SdkError::ZeroDenom);
        }

        let d_new = num / den;
        if d_new.abs_diff(d) <= 1 {
            trace!(iterations = iter + 1, n, "n-token invariant converged");
            return u64::try_from(d_new).map_err(|_| SdkError::MathOverflow);
        }
        d = d_new;
    }
    Err(SdkError::FailedToConverge)
}

/// Balance of slot `out_index` satisfying invariant `d` given every
/// other slot's balance.
pub fn calc_y_n(balances: &[u64], out_index: usize, d: u64, amp: u64) -> SdkResult<u64> {
    let n = balances.len();
    let ann = ann_for(n, amp)?;
    if out_index >= n {
        return Err(SdkError::InvalidTokenIndex);
    }
    let d = d as u128;

    let mut c = d;
    let mut s = 0u128;
    for (i, &b) in balances.iter().enumerate() {
        if i == out_index {
            continue;
        }
        if b == 0 {
            return Err(SdkError::ZeroInput);
        }
        s += b as u128;
        c = c.checked_mul(d).ok_or(SdkError::MathOverflow)? / (b as u128 * n as u128);
    }
    let c = c.checked_mul(d).ok_or(SdkError::MathOverflow)? / (ann * n as u128);
    let b = s + d / ann;

    let mut y = d;
    for iter in 0..MAX_ITERATIONS {
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
            trace!(iterations = iter + 1, n, "n-token output converged");
            return u64::try_from(y_new).map_err(|_| SdkError::MathOverflow);
        }
        y = y_new;
    }
    Err(SdkError::FailedToConverge)
}

/// Net output of swapping `amount_in` of slot `from` into slot `to`
pub fn simulate_swap_n(
    balances: &[u64],
    from: usize,
    to: usize,
    amount_in: u64,
    amp: u64,
    fee_bps: u64,
) -> SdkResult<u64> {
    let n = balances.len();
    if from >= n || to >= n || from == to {
        return Err(SdkError::InvalidTokenIndex);
    }
    if amount_in == 0 || balances[from] == 0 || balances[to] == 0 {
        return Err(SdkError::ZeroInput);
    }

    let d = calc_d_n(balances, amp)?;
    let mut shifted = balances.to_vec();
    shifted[from] = balances[from]
        .checked_add(amount_in)
        .ok_or(SdkError::MathOverflow)?;
    let y = calc_y_n(&shifted, to, d, amp)?;

    let gross = balances[to].saturating_sub(y);
    let fee = (gross as u128 * fee_bps as u128 / FEE_DENOMINATOR as u128) as u64;
    Ok(gross - fee)
}
