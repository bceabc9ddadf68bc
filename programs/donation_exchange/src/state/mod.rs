/**
 * State Accounts for the Donation Exchange
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

pub mod donation_config;
pub mod subsidy_record;

pub use donation_config::*;
pub use subsidy_record::*;
