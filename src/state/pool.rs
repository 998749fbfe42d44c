// Two-Token Pool Account
//
// Fixed 1024-byte blob. The header carries the key set and swap
// parameters, followed by the amp ramp anchors, balances, fee
// accumulators, pending admin state, trade analytics, a 128-byte bloom
// filter of recent traders, and the delta-encoded candle history
// (24 hourly + 7 daily). Fields end at byte 917; the rest is reserved.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::discriminator::account;
use crate::constants::{
    BLOOM_SIZE, DAILY_CANDLES, HOURLY_CANDLES, MAX_AMP, MIN_AMP, POOL_SIZE,
};
use crate::error::{SdkError, SdkResult};
use crate::math;
use crate::pubkey::Pubkey;
use crate::state::{AccountState, Candle};

/// On-chain state of a two-token StableSwap pool (1024 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Pool {
    pub disc: [u8; 8],
    pub authority: Pubkey,
    pub mint0: Pubkey,
    pub mint1: Pubkey,
    pub vault0: Pubkey,
    pub vault1: Pubkey,
    pub lp_mint: Pubkey,
    /// Effective amp at the last on-chain update
    pub amp: u64,
    /// Ramp anchors; the live value interpolates between these
    pub init_amp: u64,
    pub target_amp: u64,
    pub ramp_start: i64,
    pub ramp_stop: i64,
    pub fee_bps: u64,
    pub admin_fee_pct: u64,
    pub bal0: u64,
    pub bal1: u64,
    pub lp_supply: u64,
    pub admin_fee0: u64,
    pub admin_fee1: u64,
    pub volume0: u64,
    pub volume1: u64,
    pub paused: u8,
    /// pool, vault0, vault1, lp mint, authority bump seeds
    pub bumps: [u8; 5],
    pub _pad0: [u8; 3],
    pub pending_authority: Pubkey,
    pub pending_authority_ts: i64,
    pub pending_amp: u64,
    pub pending_amp_ts: i64,
    pub trade_count: u64,
    pub trade_sum: u64,
    pub max_price: u32,
    pub min_price: u32,
    pub hour_anchor_slot: u32,
    pub day_anchor_slot: u32,
    pub hour_idx: u8,
    pub day_idx: u8,
    pub _pad1: [u8; 6],
    /// Membership filter over recent trader keys
    pub bloom: [u8; BLOOM_SIZE],
    pub hourly: [Candle; HOURLY_CANDLES],
    pub daily: [Candle; DAILY_CANDLES],
}

impl AccountState for Pool {
    const DISCRIMINATOR: [u8; 8] = account::POOL;
    const SIZE: usize = POOL_SIZE;
}

impl Default for Pool {
    fn default() -> Self {
        Self {
            disc: account::POOL,
            authority: Pubkey::ZERO,
            mint0: Pubkey::ZERO,
            mint1: Pubkey::ZERO,
            vault0: Pubkey::ZERO,
            vault1: Pubkey::ZERO,
            lp_mint: Pubkey::ZERO,
            amp: MIN_AMP,
            init_amp: MIN_AMP,
            target_amp: MIN_AMP,
            ramp_start: 0,
            ramp_stop: 0,
            fee_bps: 0,
            admin_fee_pct: 0,
            bal0: 0,
            bal1: 0,
            lp_supply: 0,
            admin_fee0: 0,
            admin_fee1: 0,
            volume0: 0,
            volume1: 0,
            paused: 0,
            bumps: [0; 5],
            _pad0: [0; 3],
            pending_authority: Pubkey::ZERO,
            pending_authority_ts: 0,
            pending_amp: 0,
            pending_amp_ts: 0,
            trade_count: 0,
            trade_sum: 0,
            max_price: 0,
            min_price: 0,
            hour_anchor_slot: 0,
            day_anchor_slot: 0,
            hour_idx: 0,
            day_idx: 0,
            _pad1: [0; 6],
            bloom: [0; BLOOM_SIZE],
            hourly: [Candle::default(); HOURLY_CANDLES],
            daily: [Candle::default(); DAILY_CANDLES],
        }
    }
}

impl Pool {
    pub fn is_paused(&self) -> bool {
        self.paused != 0
    }

    /// Live amp at `now`, interpolated along the ramp anchors
    pub fn current_amp(&self, now: i64) -> u64 {
        math::get_current_amp(self.init_amp, self.target_amp, self.ramp_start, self.ramp_stop, now)
    }

    /// Quote a token0 -> token1 swap against current balances
    pub fn quote_t0_t1(&self, amount_in: u64, now: i64) -> SdkResult<u64> {
        math::simulate_swap(self.bal0, self.bal1, amount_in, self.current_amp(now), self.fee_bps)
    }

    /// Quote a token1 -> token0 swap against current balances
    pub fn quote_t1_t0(&self, amount_in: u64, now: i64) -> SdkResult<u64> {
        math::simulate_swap(self.bal1, self.bal0, amount_in, self.current_amp(now), self.fee_bps)
    }

    /// Validate the structural invariants the program maintains.
    /// A violation means the blob is not a well-formed pool.
    pub fn check_invariants(&self) -> SdkResult<()> {
        if self.lp_supply > 0 && self.bal0 == 0 && self.bal1 == 0 {
            return Err(SdkError::InvalidFormat);
        }
        if self.amp < MIN_AMP || self.amp > MAX_AMP {
            return Err(SdkError::InvalidFormat);
        }
        if self.hour_idx as usize >= HOURLY_CANDLES || self.day_idx as usize >= DAILY_CANDLES {
            return Err(SdkError::InvalidFormat);
        }
        Ok(())
    }

    /// Candle currently being written in the hourly ring
    pub fn current_hourly(&self) -> &Candle {
        &self.hourly[self.hour_idx as usize % HOURLY_CANDLES]
    }

    /// Candle currently being written in the daily ring
    pub fn current_daily(&self) -> &Candle {
        &self.daily[self.day_idx as usize % DAILY_CANDLES]
    }

    /// Probe the trader bloom filter for a key. False positives are
    /// possible by construction; false negatives are not.
    pub fn bloom_contains(&self, key: &Pubkey) -> bool {
        let bytes = key.to_bytes();
        let mut h1b = [0u8; 8];
        let mut h2b = [0u8; 8];
        h1b.copy_from_slice(&bytes[0..8]);
        h2b.copy_from_slice(&bytes[8..16]);
        let h1 = u64::from_le_bytes(h1b);
        let h2 = u64::from_le_bytes(h2b);
        let bits = (BLOOM_SIZE * 8) as u64;
        (0..3u64).all(|i| {
            let bit = h1.wrapping_add(i.wrapping_mul(h2)) % bits;
            self.bloom[(bit / 8) as usize] & (1 << (bit % 8)) != 0
        })
    }
}
