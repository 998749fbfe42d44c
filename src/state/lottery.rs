// Lottery Accounts
//
// LP-funded lottery rounds. Each round sells tickets at a fixed price;
// entries record contiguous ticket ranges, and the draw writes the
// winning ticket into the round state.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::discriminator::account;
use crate::pubkey::Pubkey;
use crate::state::AccountState;

/// Lottery round state (184 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Lottery {
    pub disc: [u8; 8],
    pub bump: u8,
    pub drawn: u8,
    pub _pad0: [u8; 6],
    pub authority: Pubkey,
    pub pool: Pubkey,
    pub lp_vault: Pubkey,
    pub ticket_price: u64,
    pub total_tickets: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub winner: Pubkey,
    pub winning_ticket: u64,
}

impl AccountState for Lottery {
    const DISCRIMINATOR: [u8; 8] = account::LOTTERY;
    const SIZE: usize = 184;
}

impl Default for Lottery {
    fn default() -> Self {
        Self {
            disc: account::LOTTERY,
            bump: 0,
            drawn: 0,
            _pad0: [0; 6],
            authority: Pubkey::ZERO,
            pool: Pubkey::ZERO,
            lp_vault: Pubkey::ZERO,
            ticket_price: 0,
            total_tickets: 0,
            start_time: 0,
            end_time: 0,
            winner: Pubkey::ZERO,
            winning_ticket: 0,
        }
    }
}

impl Lottery {
    pub fn is_drawn(&self) -> bool {
        self.drawn != 0
    }

    /// Tickets can be bought while the round is open and undrawn
    pub fn is_open(&self, now: i64) -> bool {
        !self.is_drawn() && now >= self.start_time && now < self.end_time
    }
}

/// A user's ticket range in one round (96 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct LotteryEntry {
    pub disc: [u8; 8],
    pub bump: u8,
    pub claimed: u8,
    pub _pad0: [u8; 6],
    pub owner: Pubkey,
    pub lottery: Pubkey,
    pub ticket_start: u64,
    pub ticket_count: u64,
}

impl AccountState for LotteryEntry {
    const DISCRIMINATOR: [u8; 8] = account::LOTTERY_ENTRY;
    const SIZE: usize = 96;
}

impl Default for LotteryEntry {
    fn default() -> Self {
        Self {
            disc: account::LOTTERY_ENTRY,
            bump: 0,
            claimed: 0,
            _pad0: [0; 6],
            owner: Pubkey::ZERO,
            lottery: Pubkey::ZERO,
            ticket_start: 0,
            ticket_count: 0,
        }
    }
}

impl LotteryEntry {
    pub fn is_claimed(&self) -> bool {
        self.claimed != 0
    }

    /// Does this entry's ticket range cover the winning ticket?
    pub fn is_winner(&self, winning_ticket: u64) -> bool {
        winning_ticket >= self.ticket_start
            && winning_ticket < self.ticket_start.saturating_add(self.ticket_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lottery_round_trip() {
        let lottery = Lottery {
            authority: Pubkey([1; 32]),
            pool: Pubkey([2; 32]),
            lp_vault: Pubkey([3; 32]),
            ticket_price: 1_000_000,
            total_tickets: 500,
            start_time: 100,
            end_time: 200,
            ..Lottery::default()
        };
        let bytes = lottery.to_bytes().unwrap();
        assert_eq!(bytes.len(), Lottery::SIZE);
        assert_eq!(Lottery::parse(&bytes).unwrap(), lottery);
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = LotteryEntry {
            owner: Pubkey([4; 32]),
            lottery: Pubkey([5; 32]),
            ticket_start: 100,
            ticket_count: 10,
            ..LotteryEntry::default()
        };
        let bytes = entry.to_bytes().unwrap();
        assert_eq!(bytes.len(), LotteryEntry::SIZE);
        assert_eq!(LotteryEntry::parse(&bytes).unwrap(), entry);
    }

    #[test]
    fn test_open_window() {
        let lottery = Lottery {
            start_time: 100,
            end_time: 200,
            ..Lottery::default()
        };
        assert!(!lottery.is_open(99));
        assert!(lottery.is_open(100));
        assert!(!lottery.is_open(200));

        let drawn = Lottery { drawn: 1, ..lottery };
        assert!(!drawn.is_open(150));
    }

    #[test]
    fn test_winning_range() {
        let entry = LotteryEntry {
            ticket_start: 100,
            ticket_count: 10,
            ..LotteryEntry::default()
        };
        assert!(!entry.is_winner(99));
        assert!(entry.is_winner(100));
        assert!(entry.is_winner(109));
        assert!(!entry.is_winner(110));
    }
}
