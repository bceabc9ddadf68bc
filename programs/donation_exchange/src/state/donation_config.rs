/**
 * Donation Config State
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

/// Addresses of the two external ledgers. Written once by `initialize`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Asset ledger ("dai")
    pub asset_ledger: Pubkey,
    /// Accounting ledger (donation token)
    pub accounting_ledger: Pubkey,
}

/// Lifetime totals
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub total_donated: u64,
    pub total_collected: u64,
    pub total_subsidies_paid: u64,
    pub subsidy_claims: u64,
}

/// Exchange configuration account (PDA, also the custody authority)
#[account]
pub struct DonationConfig {
    pub ledgers: LedgerConfig,

    pub totals: LedgerTotals,

    /// Bump seed for PDA
    pub bump: u8,

    /// Reserved for future use
    pub reserved: [u8; 64],
}

impl DonationConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // asset_ledger
        32 + // accounting_ledger
        8 +  // total_donated
        8 +  // total_collected
        8 +  // total_subsidies_paid
        8 +  // subsidy_claims
        1 +  // bump
        64;  // reserved

    pub fn dai_address(&self) -> Pubkey {
        self.ledgers.asset_ledger
    }

    pub fn accounting_token_address(&self) -> Pubkey {
        self.ledgers.accounting_ledger
    }
}
