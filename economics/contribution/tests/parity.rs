//! Parity and property tests for the contribution range calculator.
//!
//! The off-chain calculator must agree bit-for-bit with the on-chain
//! `calcMinimumContribution` view function. These tests fuzz random
//! contributor sets and compare against the injected oracle, here backed
//! by the local contract simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nodeshare_contribution::{
    contribution_range, ContractReference, Contributor, MinimumContributionOracle, StakeParams,
};

/// Generate `n` contributors with positive amounts summing to at most the
/// full stake, leaving room for every remaining entry to stay nonzero.
fn random_contributors(rng: &mut StdRng, params: &StakeParams, n: u32) -> Vec<Contributor> {
    let mut remaining = params.full_stake_amount;
    let mut out = Vec::with_capacity(n as usize);
    for i in 0..n {
        let slots_left = (n - i) as u128;
        // Keep at least one unit for each contributor still to come.
        let ceiling = remaining - (slots_left - 1);
        let amount = rng.gen_range(1..=ceiling);
        remaining -= amount;
        out.push(Contributor {
            address: rng.gen(),
            amount,
        });
    }
    out
}

// ---------------------------------------------------------------------------
// Parity against the contract view function
// ---------------------------------------------------------------------------

#[test]
fn min_stake_matches_contract_for_random_sets() {
    let oracle = ContractReference;
    let deployments = [
        StakeParams::default(),
        StakeParams::new(25_000_000_000_000, 10).unwrap(),
    ];
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for params in &deployments {
        for _ in 0..500 {
            let n = rng.gen_range(0..params.max_contributors);
            let contributors = random_contributors(&mut rng, params, n);
            let range = contribution_range(params, &contributors).unwrap();

            let max_slots = if n == 0 { 1 } else { params.max_contributors };
            let expected = oracle
                .calc_minimum_contribution(
                    params.full_stake_amount - range.total_staked,
                    n,
                    max_slots,
                )
                .unwrap();
            assert_eq!(range.min_stake, expected, "n = {n}");
        }
    }
}

// ---------------------------------------------------------------------------
// Range invariants
// ---------------------------------------------------------------------------

#[test]
fn capacity_invariant_holds_for_random_sets() {
    let params = StakeParams::default();
    let mut rng = StdRng::seed_from_u64(0xcafe);

    for _ in 0..500 {
        let n = rng.gen_range(0..=params.max_contributors);
        let contributors = random_contributors(&mut rng, &params, n);
        let range = contribution_range(&params, &contributors).unwrap();

        assert!(range.min_stake <= range.max_stake);
        assert_eq!(range.total_staked + range.max_stake, params.full_stake_amount);
    }
}

#[test]
fn adding_a_contributor_shrinks_capacity() {
    let params = StakeParams::default();
    let mut rng = StdRng::seed_from_u64(0xf00d);

    for _ in 0..200 {
        let n = rng.gen_range(0..params.max_contributors);
        let mut contributors = random_contributors(&mut rng, &params, n);
        let before = contribution_range(&params, &contributors).unwrap();

        if before.max_stake == 0 {
            continue;
        }
        contributors.push(Contributor {
            address: rng.gen(),
            amount: rng.gen_range(1..=before.max_stake),
        });
        let after = contribution_range(&params, &contributors).unwrap();

        assert!(after.max_stake <= before.max_stake);
        assert!(after.total_staked >= before.total_staked);
    }
}

// ---------------------------------------------------------------------------
// Boundary conditions
// ---------------------------------------------------------------------------

#[test]
fn filling_every_slot_zeroes_both_bounds() {
    let params = StakeParams::default();
    let mut rng = StdRng::seed_from_u64(0xbeef);

    // Fill the registration slot by slot, always staking the minimum, and
    // have the last contributor take whatever remains.
    let mut contributors: Vec<Contributor> = Vec::new();
    for _ in 0..params.max_contributors {
        let range = contribution_range(&params, &contributors).unwrap();
        let amount = if contributors.len() as u32 == params.max_contributors - 1 {
            range.max_stake
        } else {
            range.min_stake.max(1)
        };
        contributors.push(Contributor {
            address: rng.gen(),
            amount,
        });
    }

    let full = contribution_range(&params, &contributors).unwrap();
    assert_eq!(full.total_staked, params.full_stake_amount);
    assert_eq!(full.min_stake, 0);
    assert_eq!(full.max_stake, 0);
}

#[test]
fn staking_the_minimum_is_always_accepted() {
    // Repeatedly committing exactly the advertised minimum must never trip
    // the over-capacity guard before the registration is full.
    let params = StakeParams::default();
    let mut rng = StdRng::seed_from_u64(0xabcd);

    let mut contributors: Vec<Contributor> = Vec::new();
    loop {
        let range = contribution_range(&params, &contributors).unwrap();
        if range.max_stake == 0 {
            break;
        }
        assert!(range.min_stake <= range.max_stake);
        contributors.push(Contributor {
            address: rng.gen(),
            amount: range.min_stake.max(1),
        });
        assert!(contributors.len() as u32 <= params.max_contributors);
    }
}
