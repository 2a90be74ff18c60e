use crate::types::ContributionError;

/// Source of `calcMinimumContribution` results for parity checking.
///
/// The off-chain calculator must agree bit-for-bit with the contract's view
/// function. Test suites inject an implementation of this trait as the
/// comparator: [`ContractReference`] simulates the contract locally, and an
/// RPC-backed implementation can call the live view function behind the
/// same interface.
pub trait MinimumContributionOracle {
    fn calc_minimum_contribution(
        &self,
        remaining_stake: u128,
        num_contributors: u32,
        max_num_contributors: u32,
    ) -> Result<u128, ContributionError>;
}

/// Local simulation of the node-contribution contract's view function,
/// transcribed from its require/branch structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractReference;

impl MinimumContributionOracle for ContractReference {
    fn calc_minimum_contribution(
        &self,
        remaining_stake: u128,
        num_contributors: u32,
        max_num_contributors: u32,
    ) -> Result<u128, ContributionError> {
        // require(maxNumContributors >= numContributors)
        if num_contributors > max_num_contributors {
            return Err(ContributionError::SlotCount {
                contributors: num_contributors,
                max_slots: max_num_contributors,
            });
        }

        let min = if num_contributors == 0 {
            // Operator stake: remainingStake / 4
            remaining_stake / 4
        } else {
            let slots = (max_num_contributors - num_contributors) as u128;
            if slots == 0 {
                0
            } else {
                // (remainingStake + slots - 1) / slots
                (remaining_stake + slots - 1) / slots
            }
        };

        Ok(min)
    }
}
