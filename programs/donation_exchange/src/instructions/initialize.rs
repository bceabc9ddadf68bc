/**
 * Initialize Instruction
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    state::{DonationConfig, LedgerConfig, LedgerTotals},
    DonationLedgerInitialized,
    DONATION_CONFIG_SEED,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = DonationConfig::LEN,
        seeds = [DONATION_CONFIG_SEED],
        bump,
    )]
    pub donation_config: Account<'info, DonationConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    asset_ledger: Pubkey,
    accounting_ledger: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.donation_config;

    config.ledgers = LedgerConfig {
        asset_ledger,
        accounting_ledger,
    };
    config.totals = LedgerTotals::default();
    config.bump = ctx.bumps.donation_config;

    msg!(
        "Donation exchange initialized: dai {} / donation token {}",
        asset_ledger,
        accounting_ledger
    );

    emit!(DonationLedgerInitialized {
        config: config.key(),
        asset_ledger,
        accounting_ledger,
    });

    Ok(())
}
