/**
 * Read-only Instructions
 *
 * Results are returned through Anchor return data.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    ledger::subsidy_claimable,
    state::{DonationConfig, LedgerTotals, SubsidyRecord},
    DonationError,
    DONATION_CONFIG_SEED,
    SUBSIDY_RECORD_SEED,
};

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(
        seeds = [DONATION_CONFIG_SEED],
        bump = donation_config.bump,
    )]
    pub donation_config: Account<'info, DonationConfig>,
}

pub fn dai_address_handler(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.donation_config.dai_address())
}

pub fn accounting_token_address_handler(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.donation_config.accounting_token_address())
}

pub fn ledger_totals_handler(ctx: Context<ReadConfig>) -> Result<LedgerTotals> {
    Ok(ctx.accounts.donation_config.totals)
}

// =============================================================================
// SUBSIDY STATUS
// =============================================================================

#[derive(Accounts)]
pub struct SubsidyStatus<'info> {
    /// CHECK: only its key is read
    pub account: UncheckedAccount<'info>,

    /// Absent until the account claims for the first time
    #[account(
        seeds = [SUBSIDY_RECORD_SEED, account.key().as_ref()],
        bump = subsidy_record.bump,
        constraint = subsidy_record.account == account.key() @ DonationError::RecordMismatch,
    )]
    pub subsidy_record: Option<Account<'info, SubsidyRecord>>,
}

/// Month check only; eligibility is evaluated at claim time
pub fn subsidy_claimable_handler(ctx: Context<SubsidyStatus>) -> Result<bool> {
    let last_claim = ctx
        .accounts
        .subsidy_record
        .as_ref()
        .map(|record| record.last_claim)
        .unwrap_or(0);
    let now = Clock::get()?.unix_timestamp;

    Ok(subsidy_claimable(last_claim, now)?)
}
