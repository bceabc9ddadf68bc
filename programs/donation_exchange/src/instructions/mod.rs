/**
 * Instructions for the Donation Exchange
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

pub mod initialize;
pub mod donate;
pub mod collect;
pub mod claim_subsidy;
pub mod views;

pub use initialize::*;
pub use donate::*;
pub use collect::*;
pub use claim_subsidy::*;
pub use views::*;
