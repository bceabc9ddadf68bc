/**
 * Donation Exchange
 *
 * Custodial dai ledger: donors deposit dai and the exchange mints donation
 * tokens 1:1 into its own custody. Donation tokens can be burned to collect
 * the underlying dai, and wallets may claim a fixed subsidy in donation
 * tokens once per civil month.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 *
 * License: BSL 1.1 (converts to MIT after Dec 2028)
 */

use anchor_lang::prelude::*;

pub mod calendar;
pub mod instructions;
pub mod ledger;
pub mod ledger_call;
pub mod math;
pub mod state;

use instructions::*;
use state::*;

declare_id!("2rPwwboZxF7aQofz9DxXB2nvtbMbsp5iffsL4SnSjzUe");

// =============================================================================
// SEEDS
// =============================================================================

/// Config PDA; also the custody account that holds donated dai and
/// undistributed donation tokens
pub const DONATION_CONFIG_SEED: &[u8] = b"donation_config";
pub const SUBSIDY_RECORD_SEED: &[u8] = b"subsidy";

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fixed monthly subsidy: 25 donation tokens (6 decimals)
pub const SUBSIDY_AMOUNT: u64 = 25_000_000;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

// =============================================================================
// PROGRAM
// =============================================================================

#[program]
pub mod donation_exchange {
    use super::*;

    /// Create the exchange configuration
    /// Ledger addresses are fixed for the lifetime of the program
    pub fn initialize(
        ctx: Context<Initialize>,
        asset_ledger: Pubkey,
        accounting_ledger: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, asset_ledger, accounting_ledger)
    }

    /// Deposit dai; mints the same amount of donation tokens into custody
    /// Remaining accounts are forwarded to both ledgers
    pub fn donate<'info>(ctx: Context<'_, '_, '_, 'info, Donate<'info>>, amount: u64) -> Result<()> {
        instructions::donate::handler(ctx, amount)
    }

    /// Burn donation tokens from the caller and pay out the same amount of dai
    pub fn collect<'info>(ctx: Context<'_, '_, '_, 'info, Collect<'info>>, amount: u64) -> Result<()> {
        instructions::collect::handler(ctx, amount)
    }

    /// Pay SUBSIDY_AMOUNT donation tokens to the caller, at most once per civil month
    pub fn claim_subsidy<'info>(ctx: Context<'_, '_, '_, 'info, ClaimSubsidy<'info>>) -> Result<()> {
        instructions::claim_subsidy::handler(ctx)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn dai_address(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        instructions::views::dai_address_handler(ctx)
    }

    pub fn accounting_token_address(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        instructions::views::accounting_token_address_handler(ctx)
    }

    pub fn ledger_totals(ctx: Context<ReadConfig>) -> Result<LedgerTotals> {
        instructions::views::ledger_totals_handler(ctx)
    }

    /// Whether `account` could claim a subsidy right now (eligibility aside)
    pub fn subsidy_claimable(ctx: Context<SubsidyStatus>) -> Result<bool> {
        instructions::views::subsidy_claimable_handler(ctx)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[error_code]
pub enum DonationError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("External ledger call failed")]
    TransferFailed,

    #[msg("Subsidy already claimed this month")]
    AlreadyClaimed,

    #[msg("Account is not eligible for the subsidy")]
    NotEligible,

    #[msg("Ledger account does not match configuration")]
    LedgerMismatch,

    #[msg("Subsidy record belongs to another account")]
    RecordMismatch,
}

// =============================================================================
// EVENTS
// =============================================================================

#[event]
pub struct DonationLedgerInitialized {
    pub config: Pubkey,
    pub asset_ledger: Pubkey,
    pub accounting_ledger: Pubkey,
}

#[event]
pub struct Donation {
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Collection {
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Subsidy {
    pub account: Pubkey,
    pub amount: u64,
}
