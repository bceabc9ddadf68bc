/**
 * Donate Instruction
 *
 * Mints `amount` donation tokens into custody, then pulls `amount` dai
 * from the donor. The donor's dai account and any approval the asset
 * ledger needs travel in remaining_accounts.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    ledger::DonationLedger,
    ledger_call::CpiInvoker,
    state::DonationConfig,
    DonationError,
    DONATION_CONFIG_SEED,
};

#[derive(Accounts)]
pub struct Donate<'info> {
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [DONATION_CONFIG_SEED],
        bump = donation_config.bump,
    )]
    pub donation_config: Account<'info, DonationConfig>,

    /// CHECK: must be the configured asset ledger program
    #[account(address = donation_config.ledgers.asset_ledger @ DonationError::LedgerMismatch)]
    pub asset_ledger: UncheckedAccount<'info>,

    /// CHECK: must be the configured accounting ledger program
    #[account(address = donation_config.ledgers.accounting_ledger @ DonationError::LedgerMismatch)]
    pub accounting_ledger: UncheckedAccount<'info>,
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, Donate<'info>>, amount: u64) -> Result<()> {
    let config = &ctx.accounts.donation_config;
    let ledgers = config.ledgers;
    let mut totals = config.totals;

    let invoker = CpiInvoker::new(
        vec![
            ctx.accounts.asset_ledger.to_account_info(),
            ctx.accounts.accounting_ledger.to_account_info(),
        ],
        ctx.remaining_accounts.to_vec(),
        config.to_account_info(),
        config.bump,
    );

    let mut ledger = DonationLedger::new(&ledgers, config.key(), invoker);
    let donation = ledger.donate(ctx.accounts.donor.key(), amount, &mut totals)?;

    ctx.accounts.donation_config.totals = totals;

    msg!("Donated {} dai from {}", donation.amount, donation.account);

    emit!(donation);

    Ok(())
}
