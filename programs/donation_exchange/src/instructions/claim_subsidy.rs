/**
 * Claim Subsidy Instruction
 *
 * Pays SUBSIDY_AMOUNT donation tokens out of custody to the claimant,
 * once per civil month. The claim month is tracked in a per-account
 * SubsidyRecord created on first use.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    ledger::{DonationLedger, WalletEligibility},
    ledger_call::CpiInvoker,
    state::{DonationConfig, SubsidyRecord},
    DonationError,
    DONATION_CONFIG_SEED,
    SUBSIDY_RECORD_SEED,
};

#[derive(Accounts)]
pub struct ClaimSubsidy<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [DONATION_CONFIG_SEED],
        bump = donation_config.bump,
    )]
    pub donation_config: Account<'info, DonationConfig>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = SubsidyRecord::LEN,
        seeds = [SUBSIDY_RECORD_SEED, claimant.key().as_ref()],
        bump,
    )]
    pub subsidy_record: Account<'info, SubsidyRecord>,

    /// CHECK: must be the configured accounting ledger program
    #[account(address = donation_config.ledgers.accounting_ledger @ DonationError::LedgerMismatch)]
    pub accounting_ledger: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, ClaimSubsidy<'info>>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let now = Clock::get()?.unix_timestamp;

    let record = &mut ctx.accounts.subsidy_record;
    record.bind(claimant, ctx.bumps.subsidy_record);
    require_keys_eq!(record.account, claimant, DonationError::RecordMismatch);

    let config = &ctx.accounts.donation_config;
    let ledgers = config.ledgers;
    let mut totals = config.totals;

    let invoker = CpiInvoker::new(
        vec![ctx.accounts.accounting_ledger.to_account_info()],
        ctx.remaining_accounts.to_vec(),
        config.to_account_info(),
        config.bump,
    );

    let claimant_info = ctx.accounts.claimant.to_account_info();
    let eligibility = WalletEligibility::new(&claimant_info);

    let mut ledger = DonationLedger::new(&ledgers, config.key(), invoker);
    let subsidy = ledger.claim_subsidy(
        claimant,
        now,
        &mut *ctx.accounts.subsidy_record,
        &eligibility,
        &mut totals,
    )?;

    ctx.accounts.donation_config.totals = totals;

    msg!(
        "Subsidy of {} paid to {} ({} claims so far)",
        subsidy.amount,
        subsidy.account,
        totals.subsidy_claims
    );

    emit!(subsidy);

    Ok(())
}
