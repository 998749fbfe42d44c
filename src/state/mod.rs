// Account State Codec
//
// Typed views over the fixed-size binary blobs the chain returns for
// each account kind. Parsing is strict about the prefix (discriminator,
// declared size) and tolerant about the tail: on-chain blobs are
// fixed-size and anything past the declared fields is reserved space
// that parsers must ignore and emitters must zero.
//
// Field order in each struct IS the wire layout: borsh writes fields
// sequentially in declaration order as little-endian with no alignment
// padding, which matches the program's packed account layouts exactly.
// Offset tests pin the load-bearing positions.

pub mod candle;
pub mod farm;
pub mod lottery;
pub mod npool;
pub mod pool;
pub mod registry;
pub mod twap;

pub use candle::Candle;
pub use farm::{Farm, UserFarm};
pub use lottery::{Lottery, LotteryEntry};
pub use npool::NPool;
pub use pool::Pool;
pub use registry::Registry;
pub use twap::TwapResult;

use borsh::{BorshDeserialize, BorshSerialize};
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Common parse/emit contract for every account kind
pub trait AccountState: BorshSerialize + BorshDeserialize + Sized {
    /// 8-byte tag at offset 0 of every blob of this kind
    const DISCRIMINATOR: [u8; 8];

    /// Declared extent of the blob; bytes past this are ignored
    const SIZE: usize;

    /// Parse an account blob fetched from the chain
    fn parse(data: &[u8]) -> SdkResult<Self> {
        if data.len() < 8 {
            return Err(SdkError::InsufficientData);
        }
        if data[..8] != Self::DISCRIMINATOR {
            debug!(
                kind = core::any::type_name::<Self>(),
                "account discriminator mismatch"
            );
            return Err(SdkError::InvalidDiscriminator);
        }
        if data.len() < Self::SIZE {
            return Err(SdkError::InvalidFormat);
        }
        let mut buf = &data[..Self::SIZE];
        Self::deserialize(&mut buf).map_err(|_| SdkError::InvalidFormat)
    }

    /// Serialize to exactly `SIZE` bytes, zero-filling reserved space
    fn to_bytes(&self) -> SdkResult<Vec<u8>> {
        let mut out = Vec::with_capacity(Self::SIZE);
        BorshSerialize::serialize(self, &mut out).map_err(|_| SdkError::InvalidFormat)?;
        out.resize(Self::SIZE, 0);
        Ok(out)
    }

    /// Cheap pre-check: does this blob carry our discriminator?
    fn has_discriminator(data: &[u8]) -> bool {
        data.len() >= 8 && data[..8] == Self::DISCRIMINATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::discriminator::account;

    #[test]
    fn test_parse_rejects_short_prefix() {
        assert_eq!(Pool::parse(&[]).unwrap_err(), SdkError::InsufficientData);
        assert_eq!(
            Pool::parse(&account::POOL[..7]).unwrap_err(),
            SdkError::InsufficientData
        );
    }

    #[test]
    fn test_parse_rejects_wrong_discriminator() {
        let mut data = vec![0u8; Pool::SIZE];
        data[..8].copy_from_slice(b"NOTAPOOL");
        assert_eq!(Pool::parse(&data).unwrap_err(), SdkError::InvalidDiscriminator);
    }

    #[test]
    fn test_parse_rejects_truncated_body() {
        let mut data = vec![0u8; Pool::SIZE - 1];
        data[..8].copy_from_slice(&account::POOL);
        assert_eq!(Pool::parse(&data).unwrap_err(), SdkError::InvalidFormat);
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let pool = Pool::default();
        let mut data = pool.to_bytes().unwrap();
        data.extend_from_slice(&[0xAB; 64]);
        let parsed = Pool::parse(&data).unwrap();
        assert_eq!(parsed, pool);
    }
}
