use std::path::Path;

use serde::{Deserialize, Serialize};

/// Full collateral a node registration must reach to activate, in the
/// smallest token unit (20,000 tokens at 9 decimals).
pub const FULL_STAKE_AMOUNT: u128 = 20_000_000_000_000;

/// Maximum number of contributors a single node registration can hold.
pub const MAX_CONTRIBUTORS: u32 = 10;

/// The operator (first contributor) must commit at least this fraction of
/// the full stake: full / OPERATOR_PORTION_DIVISOR.
pub const OPERATOR_PORTION_DIVISOR: u128 = 4;

/// Deployment-specific staking parameters.
///
/// The full stake amount differs across deployments, so callers pass it in
/// rather than relying on a hard-coded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeParams {
    /// Total collateral required for one node, in smallest token units.
    pub full_stake_amount: u128,
    /// Maximum contributor slots per node.
    pub max_contributors: u32,
}

impl Default for StakeParams {
    fn default() -> Self {
        Self {
            full_stake_amount: FULL_STAKE_AMOUNT,
            max_contributors: MAX_CONTRIBUTORS,
        }
    }
}

/// Errors when loading or validating stake parameters.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("full stake amount must be greater than zero")]
    ZeroFullStake,

    #[error("max contributors must be greater than zero")]
    ZeroMaxContributors,
}

impl StakeParams {
    /// Construct and validate parameters for a deployment.
    pub fn new(full_stake_amount: u128, max_contributors: u32) -> Result<Self, ParamsError> {
        let params = Self {
            full_stake_amount,
            max_contributors,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate all parameter invariants.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.full_stake_amount == 0 {
            return Err(ParamsError::ZeroFullStake);
        }
        if self.max_contributors == 0 {
            return Err(ParamsError::ZeroMaxContributors);
        }
        Ok(())
    }

    /// Load parameters from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path)?;
        let params: StakeParams = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Save parameters to a JSON file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
