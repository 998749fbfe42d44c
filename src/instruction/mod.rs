// Instruction Payload Builders
//
// One lightweight args record per instruction kind. `data()` produces
// the exact wire payload: the 8-byte discriminator followed by the arg
// fields in declared order, little-endian. Payload lengths are fixed
// per kind and pinned by tests; account metas and signing are the
// transport layer's concern, not ours.

use crate::constants::discriminator::instruction as disc;

/// Free-text field length in governance proposals
pub const GOV_DESCRIPTION_LEN: usize = 64;

fn payload(discriminator: &[u8; 8], capacity: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(capacity);
    data.extend_from_slice(discriminator);
    data
}

/// Bootstrap a two-token pool (17 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePoolArgs {
    pub amp: u64,
    pub bump: u8,
}

impl CreatePoolArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::CREATE_POOL, 17);
        data.extend_from_slice(&self.amp.to_le_bytes());
        data.push(self.bump);
        data
    }
}

/// Fixed-direction swap on a two-token pool (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapArgs {
    pub amount_in: u64,
    pub min_out: u64,
}

impl SwapArgs {
    /// token0 -> token1
    pub fn data_t0_t1(&self) -> Vec<u8> {
        self.data_with(&disc::SWAP_T0_T1)
    }

    /// token1 -> token0
    pub fn data_t1_t0(&self) -> Vec<u8> {
        self.data_with(&disc::SWAP_T1_T0)
    }

    fn data_with(&self, discriminator: &[u8; 8]) -> Vec<u8> {
        let mut data = payload(discriminator, 24);
        data.extend_from_slice(&self.amount_in.to_le_bytes());
        data.extend_from_slice(&self.min_out.to_le_bytes());
        data
    }
}

/// Index-addressed swap on an N-token pool (34 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIndexedArgs {
    pub from_index: u8,
    pub to_index: u8,
    pub amount_in: u64,
    pub min_out: u64,
    pub deadline: i64,
}

impl SwapIndexedArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::SWAP_N, 34);
        data.push(self.from_index);
        data.push(self.to_index);
        data.extend_from_slice(&self.amount_in.to_le_bytes());
        data.extend_from_slice(&self.min_out.to_le_bytes());
        data.extend_from_slice(&self.deadline.to_le_bytes());
        data
    }
}

/// Balanced two-sided deposit (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityArgs {
    pub amount0: u64,
    pub amount1: u64,
    pub min_lp: u64,
}

impl AddLiquidityArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::ADD_LIQUIDITY, 32);
        data.extend_from_slice(&self.amount0.to_le_bytes());
        data.extend_from_slice(&self.amount1.to_le_bytes());
        data.extend_from_slice(&self.min_lp.to_le_bytes());
        data
    }
}

/// One-sided deposit (25 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquiditySingleArgs {
    pub token_index: u8,
    pub amount: u64,
    pub min_lp: u64,
}

impl AddLiquiditySingleArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::ADD_LIQUIDITY_SINGLE, 25);
        data.push(self.token_index);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.min_lp.to_le_bytes());
        data
    }
}

/// Proportional withdrawal (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityArgs {
    pub lp_amount: u64,
    pub min_amount0: u64,
    pub min_amount1: u64,
}

impl RemoveLiquidityArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::REMOVE_LIQUIDITY, 32);
        data.extend_from_slice(&self.lp_amount.to_le_bytes());
        data.extend_from_slice(&self.min_amount0.to_le_bytes());
        data.extend_from_slice(&self.min_amount1.to_le_bytes());
        data
    }
}

/// Swap-fee update (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateFeeArgs {
    pub fee_bps: u64,
}

impl UpdateFeeArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::UPDATE_FEE, 16);
        data.extend_from_slice(&self.fee_bps.to_le_bytes());
        data
    }
}

/// Pause toggle (9 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPauseArgs {
    pub paused: bool,
}

impl SetPauseArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::SET_PAUSE, 9);
        data.push(self.paused as u8);
        data
    }
}

/// Stage an amp change behind the commit delay (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitAmpArgs {
    pub amp: u64,
}

impl CommitAmpArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::COMMIT_AMP, 16);
        data.extend_from_slice(&self.amp.to_le_bytes());
        data
    }
}

/// Begin a linear amp ramp (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampAmpArgs {
    pub target_amp: u64,
    pub ramp_stop: i64,
}

impl RampAmpArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::RAMP_AMP, 24);
        data.extend_from_slice(&self.target_amp.to_le_bytes());
        data.extend_from_slice(&self.ramp_stop.to_le_bytes());
        data
    }
}

/// Open a reward farm over a pool's LP token (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateFarmArgs {
    pub reward_rate: u64,
    pub start_time: i64,
    pub end_time: i64,
}

impl CreateFarmArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::CREATE_FARM, 32);
        data.extend_from_slice(&self.reward_rate.to_le_bytes());
        data.extend_from_slice(&self.start_time.to_le_bytes());
        data.extend_from_slice(&self.end_time.to_le_bytes());
        data
    }
}

/// Stake LP tokens into a farm (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeArgs {
    pub amount: u64,
}

impl StakeArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::STAKE, 16);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data
    }
}

/// Lock staked LP for a boost period (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockStakeArgs {
    pub amount: u64,
    pub duration: i64,
}

impl LockStakeArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::LOCK_STAKE, 24);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.duration.to_le_bytes());
        data
    }
}

/// Open a lottery round (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateLotteryArgs {
    pub ticket_price: u64,
    pub end_time: i64,
}

impl CreateLotteryArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::CREATE_LOTTERY, 24);
        data.extend_from_slice(&self.ticket_price.to_le_bytes());
        data.extend_from_slice(&self.end_time.to_le_bytes());
        data
    }
}

/// Buy tickets in an open round (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterLotteryArgs {
    pub ticket_count: u64,
}

impl EnterLotteryArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::ENTER_LOTTERY, 16);
        data.extend_from_slice(&self.ticket_count.to_le_bytes());
        data
    }
}

/// Draw a finished round; no args beyond the discriminator (8 bytes)
pub fn draw_lottery_data() -> Vec<u8> {
    disc::DRAW_LOTTERY.to_vec()
}

/// Governance proposal (89 bytes; description NUL-padded to 64)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovProposeArgs {
    pub proposal_id: u64,
    pub kind: u8,
    pub value: u64,
    pub description: String,
}

impl GovProposeArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::GOV_PROPOSE, 89);
        data.extend_from_slice(&self.proposal_id.to_le_bytes());
        data.push(self.kind);
        data.extend_from_slice(&self.value.to_le_bytes());

        let mut text = [0u8; GOV_DESCRIPTION_LEN];
        let bytes = self.description.as_bytes();
        let mut cut = bytes.len().min(GOV_DESCRIPTION_LEN);
        // Truncate on a char boundary so the payload stays valid UTF-8
        while cut > 0 && !self.description.is_char_boundary(cut) {
            cut -= 1;
        }
        text[..cut].copy_from_slice(&bytes[..cut]);
        data.extend_from_slice(&text);
        data
    }
}

/// Governance vote (17 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovVoteArgs {
    pub proposal_id: u64,
    pub support: bool,
}

impl GovVoteArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = payload(&disc::GOV_VOTE, 17);
        data.extend_from_slice(&self.proposal_id.to_le_bytes());
        data.push(self.support as u8);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_lengths_are_pinned() {
        assert_eq!(CreatePoolArgs { amp: 100, bump: 254 }.data().len(), 17);
        assert_eq!(SwapArgs { amount_in: 1, min_out: 1 }.data_t0_t1().len(), 24);
        assert_eq!(SwapArgs { amount_in: 1, min_out: 1 }.data_t1_t0().len(), 24);
        assert_eq!(
            SwapIndexedArgs {
                from_index: 0,
                to_index: 1,
                amount_in: 1,
                min_out: 1,
                deadline: 0,
            }
            .data()
            .len(),
            34
        );
        assert_eq!(
            AddLiquidityArgs { amount0: 1, amount1: 1, min_lp: 1 }.data().len(),
            32
        );
        assert_eq!(
            AddLiquiditySingleArgs { token_index: 0, amount: 1, min_lp: 1 }.data().len(),
            25
        );
        assert_eq!(
            RemoveLiquidityArgs { lp_amount: 1, min_amount0: 1, min_amount1: 1 }
                .data()
                .len(),
            32
        );
        assert_eq!(UpdateFeeArgs { fee_bps: 25 }.data().len(), 16);
        assert_eq!(SetPauseArgs { paused: true }.data().len(), 9);
        assert_eq!(CommitAmpArgs { amp: 200 }.data().len(), 16);
        assert_eq!(RampAmpArgs { target_amp: 200, ramp_stop: 0 }.data().len(), 24);
        assert_eq!(
            CreateFarmArgs { reward_rate: 1, start_time: 0, end_time: 1 }.data().len(),
            32
        );
        assert_eq!(StakeArgs { amount: 1 }.data().len(), 16);
        assert_eq!(LockStakeArgs { amount: 1, duration: 1 }.data().len(), 24);
        assert_eq!(CreateLotteryArgs { ticket_price: 1, end_time: 1 }.data().len(), 24);
        assert_eq!(EnterLotteryArgs { ticket_count: 1 }.data().len(), 16);
        assert_eq!(draw_lottery_data().len(), 8);
        assert_eq!(
            GovProposeArgs {
                proposal_id: 1,
                kind: 0,
                value: 0,
                description: String::new(),
            }
            .data()
            .len(),
            89
        );
        assert_eq!(GovVoteArgs { proposal_id: 1, support: true }.data().len(), 17);
    }

    #[test]
    fn test_swap_payload_golden() {
        let data = SwapArgs { amount_in: 1_000, min_out: 990 }.data_t0_t1();
        let mut expected = disc::SWAP_T0_T1.to_vec();
        expected.extend_from_slice(&1_000u64.to_le_bytes());
        expected.extend_from_slice(&990u64.to_le_bytes());
        assert_eq!(data, expected);
    }

    #[test]
    fn test_swap_directions_differ_only_in_discriminator() {
        let args = SwapArgs { amount_in: 5, min_out: 3 };
        let a = args.data_t0_t1();
        let b = args.data_t1_t0();
        assert_ne!(a[..8], b[..8]);
        assert_eq!(a[8..], b[8..]);
    }

    #[test]
    fn test_indexed_swap_field_order() {
        let data = SwapIndexedArgs {
            from_index: 2,
            to_index: 5,
            amount_in: 0x1111,
            min_out: 0x2222,
            deadline: -1,
        }
        .data();
        assert_eq!(data[8], 2);
        assert_eq!(data[9], 5);
        assert_eq!(&data[10..18], &0x1111u64.to_le_bytes());
        assert_eq!(&data[18..26], &0x2222u64.to_le_bytes());
        assert_eq!(&data[26..34], &(-1i64).to_le_bytes());
    }

    #[test]
    fn test_gov_description_padding() {
        let data = GovProposeArgs {
            proposal_id: 7,
            kind: 1,
            value: 500,
            description: "raise fee".into(),
        }
        .data();
        assert_eq!(&data[25..34], b"raise fee");
        assert!(data[34..89].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_gov_description_truncation() {
        let long = "x".repeat(100);
        let data = GovProposeArgs {
            proposal_id: 1,
            kind: 0,
            value: 0,
            description: long,
        }
        .data();
        assert_eq!(data.len(), 89);
        assert!(data[25..89].iter().all(|b| *b == b'x'));
    }

    #[test]
    fn test_gov_description_truncates_on_char_boundary() {
        // 63 ASCII bytes then a two-byte char straddling the limit
        let tricky = format!("{}é", "a".repeat(63));
        let data = GovProposeArgs {
            proposal_id: 1,
            kind: 0,
            value: 0,
            description: tricky,
        }
        .data();
        assert_eq!(data.len(), 89);
        // The straddling char is dropped whole, leaving a NUL
        assert_eq!(data[25 + 62], b'a');
        assert_eq!(data[25 + 63], 0);
    }

    #[test]
    fn test_bool_encoding() {
        assert_eq!(SetPauseArgs { paused: true }.data()[8], 1);
        assert_eq!(SetPauseArgs { paused: false }.data()[8], 0);
        assert_eq!(GovVoteArgs { proposal_id: 0, support: false }.data()[16], 0);
    }
}
