// Packed TWAP Result
//
// The program returns its time-weighted average price as a single u64:
// price in the low 32 bits (scaled 1e6), sample count in the next 16,
// and a confidence percentage (x100) in the top 16.

use serde::{Deserialize, Serialize};

use crate::constants::PRICE_SCALE;

/// Decoded time-weighted average price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwapResult {
    /// Average price, scaled 1e6
    pub price: u32,
    /// Number of candles that contributed
    pub samples: u16,
    /// Confidence, 0..=10000 meaning 0..=100%
    pub confidence: u16,
}

impl TwapResult {
    /// Unpack a program return value
    pub fn decode(encoded: u64) -> Self {
        Self {
            price: (encoded & 0xFFFF_FFFF) as u32,
            samples: ((encoded >> 32) & 0xFFFF) as u16,
            confidence: ((encoded >> 48) & 0xFFFF) as u16,
        }
    }

    /// Inverse of [`decode`](Self::decode), used for fixtures
    pub fn encode(&self) -> u64 {
        self.price as u64 | ((self.samples as u64) << 32) | ((self.confidence as u64) << 48)
    }

    pub fn price_f64(&self) -> f64 {
        self.price as f64 / PRICE_SCALE as f64
    }

    pub fn confidence_pct(&self) -> f64 {
        self.confidence as f64 / 100.0
    }
}
