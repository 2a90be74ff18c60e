use crate::params::{StakeParams, OPERATOR_PORTION_DIVISOR};
use crate::types::{ContributionError, ContributionRange, Contributor};

/// Minimum amount the next contributor must commit, given the remaining
/// unfilled stake and how many of the available slots are already taken.
///
/// Mirrors the on-chain `calcMinimumContribution` view function exactly,
/// including rounding direction:
///
/// - With no contributors yet, the caller is the node operator and must
///   commit at least a quarter of the remaining stake (truncating division).
/// - Otherwise the minimum is the remaining stake divided by the remaining
///   open slots, rounded *up*. Rounding down would let contributors
///   under-collateralize relative to what the contract accepts.
/// - With every slot taken the minimum is zero.
pub fn minimum_contribution(
    remaining_stake: u128,
    num_contributors: u32,
    max_num_contributors: u32,
) -> Result<u128, ContributionError> {
    if max_num_contributors < num_contributors {
        return Err(ContributionError::SlotCount {
            contributors: num_contributors,
            max_slots: max_num_contributors,
        });
    }

    if num_contributors == 0 {
        return Ok(remaining_stake / OPERATOR_PORTION_DIVISOR);
    }

    let open_slots = (max_num_contributors - num_contributors) as u128;
    if open_slots == 0 {
        return Ok(0);
    }

    // Ceiling division in pure integer math.
    Ok((remaining_stake + open_slots - 1) / open_slots)
}

/// Compute the stake bounds for the next contributor to a node registration.
///
/// `contributors` is the current committed set, in any order. The result is
/// a pure function of the amounts, the count, and `params`.
pub fn contribution_range(
    params: &StakeParams,
    contributors: &[Contributor],
) -> Result<ContributionRange, ContributionError> {
    let mut total_staked: u128 = 0;
    for c in contributors {
        if c.amount == 0 {
            return Err(ContributionError::ZeroAmount);
        }
        total_staked = total_staked
            .checked_add(c.amount)
            .ok_or(ContributionError::Overflow)?;
    }

    if total_staked > params.full_stake_amount {
        return Err(ContributionError::OverCapacity {
            total: total_staked,
            full_stake: params.full_stake_amount,
        });
    }

    let remaining = params.full_stake_amount - total_staked;
    let num_contributors = contributors.len() as u32;

    // The first contribution comes from the operator, who is held to a
    // single-slot divisor; everyone after that shares the general ceiling.
    let max_slots = if num_contributors == 0 {
        1
    } else {
        params.max_contributors
    };

    let min_stake = minimum_contribution(remaining, num_contributors, max_slots)?;

    tracing::debug!(
        num_contributors,
        total_staked,
        min_stake,
        max_stake = remaining,
        "computed contribution range"
    );

    Ok(ContributionRange {
        min_stake,
        max_stake: remaining,
        total_staked,
    })
}
