// Farm Accounts
//
// LP staking with a MasterChef-style accumulator: the farm tracks
// accumulated reward per staked share (scaled 1e12) and each user
// position carries a reward debt snapshot. The SDK can preview pending
// rewards without touching the chain.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::discriminator::account;
use crate::constants::REWARD_PRECISION;
use crate::pubkey::Pubkey;
use crate::state::AccountState;

/// Farm state header (232 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Farm {
    pub disc: [u8; 8],
    pub bump: u8,
    pub _pad0: [u8; 7],
    pub authority: Pubkey,
    pub pool: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub lp_vault: Pubkey,
    /// Reward tokens emitted per second
    pub reward_rate: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub last_update: i64,
    /// Accumulated reward per staked share, scaled 1e12
    pub acc_reward_per_share: u128,
    pub total_staked: u64,
}

impl AccountState for Farm {
    const DISCRIMINATOR: [u8; 8] = account::FARM;
    const SIZE: usize = 232;
}

impl Default for Farm {
    fn default() -> Self {
        Self {
            disc: account::FARM,
            bump: 0,
            _pad0: [0; 7],
            authority: Pubkey::ZERO,
            pool: Pubkey::ZERO,
            reward_mint: Pubkey::ZERO,
            reward_vault: Pubkey::ZERO,
            lp_vault: Pubkey::ZERO,
            reward_rate: 0,
            start_time: 0,
            end_time: 0,
            last_update: 0,
            acc_reward_per_share: 0,
            total_staked: 0,
        }
    }
}

impl Farm {
    pub fn is_active(&self, now: i64) -> bool {
        now >= self.start_time && now < self.end_time
    }

    /// Accumulator value as of `now`, accruing rewards since the last
    /// on-chain update and capping at the farm's end time
    pub fn acc_reward_at(&self, now: i64) -> u128 {
        if self.total_staked == 0 {
            return self.acc_reward_per_share;
        }
        let until = now.min(self.end_time);
        if until <= self.last_update {
            return self.acc_reward_per_share;
        }
        let elapsed = (until - self.last_update) as u128;
        let accrued = elapsed
            .saturating_mul(self.reward_rate as u128)
            .saturating_mul(REWARD_PRECISION)
            / self.total_staked as u128;
        self.acc_reward_per_share.saturating_add(accrued)
    }
}

/// Per-user staking position (120 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UserFarm {
    pub disc: [u8; 8],
    pub bump: u8,
    pub _pad0: [u8; 7],
    pub owner: Pubkey,
    pub farm: Pubkey,
    pub staked: u64,
    /// Snapshot of staked * acc_reward_per_share at the last claim
    pub reward_debt: u128,
    pub locked_amount: u64,
    pub unlock_time: i64,
}

impl AccountState for UserFarm {
    const DISCRIMINATOR: [u8; 8] = account::USER_FARM;
    const SIZE: usize = 120;
}

impl Default for UserFarm {
    fn default() -> Self {
        Self {
            disc: account::USER_FARM,
            bump: 0,
            _pad0: [0; 7],
            owner: Pubkey::ZERO,
            farm: Pubkey::ZERO,
            staked: 0,
            reward_debt: 0,
            locked_amount: 0,
            unlock_time: 0,
        }
    }
}

impl UserFarm {
    pub fn is_locked(&self, now: i64) -> bool {
        self.locked_amount > 0 && now < self.unlock_time
    }

    /// Claimable rewards as of `now`, previewed off-chain
    pub fn pending_rewards(&self, farm: &Farm, now: i64) -> u64 {
        let acc = farm.acc_reward_at(now);
        let gross = self.staked as u128 * acc / REWARD_PRECISION;
        gross.saturating_sub(self.reward_debt).min(u64::MAX as u128) as u64
    }
}
