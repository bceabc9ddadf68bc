/**
 * Subsidy Record State
 *
 * One record per account, created on the first claim and never closed.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::ledger::SubsidyRegistry;

#[account]
pub struct SubsidyRecord {
    /// Account this record belongs to
    pub account: Pubkey,

    /// Unix timestamp of the last successful claim (0 = never claimed)
    pub last_claim: i64,

    /// Bump seed for PDA
    pub bump: u8,

    /// Reserved for future use
    pub reserved: [u8; 16],
}

impl SubsidyRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // account
        8 +  // last_claim
        1 +  // bump
        16;  // reserved

    /// Bind a freshly created record to its account
    pub fn bind(&mut self, account: Pubkey, bump: u8) {
        if self.account == Pubkey::default() {
            self.account = account;
            self.last_claim = 0;
            self.bump = bump;
        }
    }
}

impl SubsidyRegistry for SubsidyRecord {
    fn last_claim(&self, account: &Pubkey) -> i64 {
        if *account == self.account {
            self.last_claim
        } else {
            0
        }
    }

    fn record_claim(&mut self, account: Pubkey, timestamp: i64) {
        self.account = account;
        self.last_claim = timestamp;
    }
}
