// Public Key Type and Base58 Helpers
//
// A 32-byte public key newtype shared by the codec, the address
// derivation module, and the labelled PDA helpers. Encoding follows the
// Bitcoin base-58 alphabet; both directions enforce the 32-byte length
// so a truncated or padded key never round-trips silently.

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SdkError, SdkResult};

/// A 32-byte Ed25519 public key or program-derived address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, BorshSerialize, BorshDeserialize)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    /// All-zero key, used for unset slots in account blobs
    pub const ZERO: Pubkey = Pubkey([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    /// Decode a base-58 string, enforcing the 32-byte key length
    pub fn from_base58(s: &str) -> SdkResult<Self> {
        Ok(Pubkey(decode_pubkey(s)?))
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }
}

impl FromStr for Pubkey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pubkey::from_base58(s)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        Pubkey::from_base58(&s).map_err(serde::de::Error::custom)
    }
}

/// Decode a base-58 public key string into its raw 32 bytes
pub fn decode_pubkey(s: &str) -> SdkResult<[u8; 32]> {
    let raw = bs58::decode(s)
        .into_vec()
        .map_err(|_| SdkError::InvalidFormat)?;
    raw.try_into().map_err(|_| SdkError::InvalidLength)
}

/// Encode raw public key bytes as base-58, enforcing the 32-byte length
pub fn encode_pubkey(bytes: &[u8]) -> SdkResult<String> {
    if bytes.len() != 32 {
        return Err(SdkError::InvalidLength);
    }
    Ok(bs58::encode(bytes).into_string())
}
