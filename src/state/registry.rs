// Registry Account
//
// Singleton header tracking protocol-wide counters. Derived at the
// fixed "registry" seed, one per program deployment.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::discriminator::account;
use crate::pubkey::Pubkey;
use crate::state::AccountState;

/// Protocol registry header (88 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Registry {
    pub disc: [u8; 8],
    pub bump: u8,
    pub _pad0: [u8; 7],
    pub authority: Pubkey,
    pub pool_count: u64,
    pub npool_count: u64,
    pub farm_count: u64,
    pub lottery_count: u64,
    pub total_volume: u64,
}

impl AccountState for Registry {
    const DISCRIMINATOR: [u8; 8] = account::REGISTRY;
    const SIZE: usize = 88;
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            disc: account::REGISTRY,
            bump: 0,
            _pad0: [0; 7],
            authority: Pubkey::ZERO,
            pool_count: 0,
            npool_count: 0,
            farm_count: 0,
            lottery_count: 0,
            total_volume: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let registry = Registry {
            authority: Pubkey([1; 32]),
            pool_count: 12,
            npool_count: 3,
            farm_count: 7,
            lottery_count: 2,
            total_volume: 987_654_321,
            ..Registry::default()
        };
        let bytes = registry.to_bytes().unwrap();
        assert_eq!(bytes.len(), Registry::SIZE);
        assert_eq!(Registry::parse(&bytes).unwrap(), registry);
    }

    #[test]
    fn test_counter_offsets() {
        let registry = Registry {
            pool_count: 0xDEAD,
            ..Registry::default()
        };
        let bytes = registry.to_bytes().unwrap();
        // disc(8) + bump(1) + pad(7) + authority(32) = 48
        assert_eq!(&bytes[48..56], &0xDEADu64.to_le_bytes());
    }
}
