pub mod oracle;
pub mod params;
pub mod range;
pub mod types;

pub use oracle::{ContractReference, MinimumContributionOracle};
pub use params::StakeParams;
pub use range::{contribution_range, minimum_contribution};
pub use types::*;
