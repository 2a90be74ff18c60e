use serde::{Deserialize, Serialize};

/// An EVM-style account address (20 bytes, hex-encoded in JSON).
pub type Address = [u8; 20];

/// A party that has committed stake toward a node registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// The contributor's address.
    #[serde(with = "hex_addr")]
    pub address: Address,
    /// Committed amount in the smallest token unit.
    ///
    /// The on-chain contract stores this as uint112; u128 covers the full
    /// range without overflow in intermediate sums.
    pub amount: u128,
}

impl Contributor {
    /// Build a contributor from a hex address string and an amount.
    pub fn from_hex(address: &str, amount: u128) -> Result<Self, ContributionError> {
        Ok(Self {
            address: parse_address(address)?,
            amount,
        })
    }
}

/// The stake bounds offered to the next contributor of a node registration.
///
/// Derived from the current contributor list on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRange {
    /// Smallest amount the next contributor may commit.
    pub min_stake: u128,
    /// Largest amount the next contributor may commit (remaining capacity).
    pub max_stake: u128,
    /// Sum of all amounts committed so far.
    pub total_staked: u128,
}

/// Errors that can occur while computing a contribution range.
///
/// All variants are caller/data-integrity violations, not transient
/// failures; they propagate uncaught to the caller.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContributionError {
    #[error("committed stake {total} exceeds the full stake amount {full_stake}")]
    OverCapacity { total: u128, full_stake: u128 },

    #[error("{contributors} contributors exceed the {max_slots} available slots")]
    SlotCount { contributors: u32, max_slots: u32 },

    #[error("contributor amount must be greater than zero")]
    ZeroAmount,

    #[error("arithmetic overflow while summing contributions")]
    Overflow,

    #[error("invalid contributor address: {0}")]
    InvalidAddress(String),
}

/// Parse a hex address string, with or without a `0x` prefix.
pub fn parse_address(s: &str) -> Result<Address, ContributionError> {
    let raw = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(raw).map_err(|e| ContributionError::InvalidAddress(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| ContributionError::InvalidAddress(format!("expected 20 bytes, got {}", raw.len() / 2)))
}

mod hex_addr {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 20], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 20], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_address(&s).map_err(serde::de::Error::custom)
    }
}
