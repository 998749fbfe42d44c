// N-Token Pool Account
//
// Fixed 2048-byte blob generalizing the two-token pool to 2..=8 tokens.
// Mint, vault, balance, and admin-fee tables are fixed eight-slot
// arrays; slots past `n_tokens` are zero. Fields end at byte 776.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::discriminator::account;
use crate::constants::{MAX_TOKENS, NPOOL_SIZE};
use crate::error::{SdkError, SdkResult};
use crate::math;
use crate::pubkey::Pubkey;
use crate::state::AccountState;

/// On-chain state of an N-token StableSwap pool (2048 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct NPool {
    pub disc: [u8; 8],
    pub authority: Pubkey,
    /// Number of live token slots, 2..=8
    pub n_tokens: u8,
    pub paused: u8,
    pub bump: u8,
    pub _pad0: [u8; 5],
    pub amp: u64,
    pub fee_bps: u64,
    pub admin_fee_pct: u64,
    pub lp_supply: u64,
    pub mints: [Pubkey; MAX_TOKENS],
    pub vaults: [Pubkey; MAX_TOKENS],
    pub lp_mint: Pubkey,
    pub balances: [u64; MAX_TOKENS],
    pub admin_fees: [u64; MAX_TOKENS],
    pub total_volume: u64,
    pub trade_count: u64,
    pub last_trade_slot: u64,
}

impl AccountState for NPool {
    const DISCRIMINATOR: [u8; 8] = account::NPOOL;
    const SIZE: usize = NPOOL_SIZE;
}

impl Default for NPool {
    fn default() -> Self {
        Self {
            disc: account::NPOOL,
            authority: Pubkey::ZERO,
            n_tokens: 2,
            paused: 0,
            bump: 0,
            _pad0: [0; 5],
            amp: 1,
            fee_bps: 0,
            admin_fee_pct: 0,
            lp_supply: 0,
            mints: [Pubkey::ZERO; MAX_TOKENS],
            vaults: [Pubkey::ZERO; MAX_TOKENS],
            lp_mint: Pubkey::ZERO,
            balances: [0; MAX_TOKENS],
            admin_fees: [0; MAX_TOKENS],
            total_volume: 0,
            trade_count: 0,
            last_trade_slot: 0,
        }
    }
}

impl NPool {
    pub fn is_paused(&self) -> bool {
        self.paused != 0
    }

    /// Balances of the live token slots only
    pub fn active_balances(&self) -> &[u64] {
        &self.balances[..self.n_tokens.min(MAX_TOKENS as u8) as usize]
    }

    /// Mint key of a live slot
    pub fn mint_at(&self, index: usize) -> SdkResult<&Pubkey> {
        if index >= self.n_tokens as usize || index >= MAX_TOKENS {
            return Err(SdkError::InvalidTokenIndex);
        }
        Ok(&self.mints[index])
    }

    /// Vault key of a live slot
    pub fn vault_at(&self, index: usize) -> SdkResult<&Pubkey> {
        if index >= self.n_tokens as usize || index >= MAX_TOKENS {
            return Err(SdkError::InvalidTokenIndex);
        }
        Ok(&self.vaults[index])
    }

    /// Quote a swap between two live slots against current balances
    pub fn quote_swap(&self, from: usize, to: usize, amount_in: u64) -> SdkResult<u64> {
        if from >= self.n_tokens as usize || to >= self.n_tokens as usize {
            return Err(SdkError::InvalidTokenIndex);
        }
        math::simulate_swap_n(self.active_balances(), from, to, amount_in, self.amp, self.fee_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_npool() -> NPool {
        let mut npool = NPool {
            authority: Pubkey([1; 32]),
            n_tokens: 3,
            amp: 100,
            fee_bps: 30,
            lp_supply: 3_000_000_000,
            lp_mint: Pubkey([9; 32]),
            ..NPool::default()
        };
        for i in 0..3 {
            npool.mints[i] = Pubkey([10 + i as u8; 32]);
            npool.vaults[i] = Pubkey([20 + i as u8; 32]);
            npool.balances[i] = 1_000_000_000;
        }
        npool
    }

    #[test]
    fn test_round_trip() {
        let npool = test_npool();
        let bytes = npool.to_bytes().unwrap();
        assert_eq!(bytes.len(), NPool::SIZE);
        assert_eq!(NPool::parse(&bytes).unwrap(), npool);
    }

    #[test]
    fn test_field_offsets() {
        let npool = test_npool();
        let bytes = npool.to_bytes().unwrap();
        // n_tokens right after the 32-byte authority
        assert_eq!(bytes[40], 3);
        // amp at 48 after the 5-byte pad
        assert_eq!(&bytes[48..56], &100u64.to_le_bytes());
        // first mint slot at 80, vault table at 336, lp mint at 592
        assert_eq!(&bytes[80..112], &[10u8; 32]);
        assert_eq!(&bytes[336..368], &[20u8; 32]);
        assert_eq!(&bytes[592..624], &[9u8; 32]);
        // balance table at 624
        assert_eq!(&bytes[624..632], &1_000_000_000u64.to_le_bytes());
        // fields end at 776; reserved tail is zero
        assert!(bytes[776..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_unused_slots_are_zero() {
        let npool = test_npool();
        assert_eq!(npool.active_balances(), &[1_000_000_000; 3]);
        assert_eq!(npool.mints[3], Pubkey::ZERO);
        assert_eq!(npool.balances[7], 0);
    }

    #[test]
    fn test_slot_accessors_check_range() {
        let npool = test_npool();
        assert_eq!(npool.mint_at(0).unwrap(), &Pubkey([10; 32]));
        assert_eq!(npool.mint_at(3).unwrap_err(), SdkError::InvalidTokenIndex);
        assert_eq!(npool.vault_at(7).unwrap_err(), SdkError::InvalidTokenIndex);
    }

    #[test]
    fn test_quote_swap_between_live_slots() {
        let npool = test_npool();
        let out = npool.quote_swap(0, 2, 100_000_000).unwrap();
        assert_eq!(out, 99_688_825);
        assert_eq!(
            npool.quote_swap(0, 3, 100_000_000).unwrap_err(),
            SdkError::InvalidTokenIndex
        );
    }
}
