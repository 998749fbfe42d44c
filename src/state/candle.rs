// Delta-Encoded OHLCV Candle
//
// The program stores price history as 12-byte records: a full open price
// plus unsigned high/low deltas and a signed close delta. Prices are
// integer-scaled by 1e6, volumes by 1e9.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::constants::{PRICE_SCALE, VOLUME_SCALE};

/// One OHLCV record over a fixed time window (12 bytes on the wire)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Candle {
    /// Base price, scaled 1e6
    pub open: u32,
    /// High delta above open
    pub high_d: u16,
    /// Low delta below open
    pub low_d: u16,
    /// Signed close delta from open
    pub close_d: i16,
    /// Volume in 1e9 units
    pub volume: u16,
}

impl Candle {
    /// Wire size of one candle
    pub const SIZE: usize = 12;

    pub fn high(&self) -> u32 {
        self.open.saturating_add(self.high_d as u32)
    }

    pub fn low(&self) -> u32 {
        self.open.saturating_sub(self.low_d as u32)
    }

    pub fn close(&self) -> u32 {
        (self.open as i64 + self.close_d as i64).max(0) as u32
    }

    /// A slot that has never recorded a trade is all zeros
    pub fn is_empty(&self) -> bool {
        self.open == 0 && self.volume == 0
    }

    // Display-only float accessors; not for consensus-sensitive use.

    pub fn open_price(&self) -> f64 {
        self.open as f64 / PRICE_SCALE as f64
    }

    pub fn close_price(&self) -> f64 {
        self.close() as f64 / PRICE_SCALE as f64
    }

    pub fn volume_tokens(&self) -> f64 {
        self.volume as f64 * VOLUME_SCALE as f64
    }
}
