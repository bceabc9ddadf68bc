/**
 * Donation Ledger
 *
 * The three transitions (donate, collect, claim_subsidy) over the two
 * external ledgers. Host-independent: calls go through a LedgerInvoker,
 * claims through a SubsidyRegistry and a SubsidyEligibility predicate.
 *
 * Ordering:
 *   donate  = mint into custody, then pull dai from the donor
 *   collect = burn from the caller, then pay dai to the caller
 * A failure in the second step leaves the first one applied here; the
 * Solana runtime discards it together with the rest of the transaction.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use std::collections::BTreeMap;
use std::fmt;

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::calendar::civil_month;
use crate::ledger_call::{burn_from, mint_to, transfer, transfer_from, LedgerInvoker, TransferError};
use crate::math::{add, Amount, MathError};
use crate::state::{LedgerConfig, LedgerTotals};
use crate::{Collection, Donation, DonationError, Subsidy, SUBSIDY_AMOUNT};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    InvalidAmount,
    Math(MathError),
    Transfer(TransferError),
    AlreadyClaimed,
    NotEligible,
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidAmount => write!(f, "amount must be greater than zero"),
            LedgerError::Math(e) => write!(f, "{}", e),
            LedgerError::Transfer(e) => write!(f, "{}", e),
            LedgerError::AlreadyClaimed => write!(f, "subsidy already claimed this month"),
            LedgerError::NotEligible => write!(f, "account is not eligible for the subsidy"),
        }
    }
}

impl From<MathError> for LedgerError {
    fn from(e: MathError) -> Self {
        LedgerError::Math(e)
    }
}

impl From<TransferError> for LedgerError {
    fn from(e: TransferError) -> Self {
        LedgerError::Transfer(e)
    }
}

impl From<LedgerError> for anchor_lang::error::Error {
    fn from(e: LedgerError) -> Self {
        msg!("Rejected: {}", e);
        match e {
            LedgerError::InvalidAmount => error!(DonationError::InvalidAmount),
            LedgerError::Math(MathError::Overflow(_)) => error!(DonationError::Overflow),
            LedgerError::Math(MathError::Underflow(_)) => error!(DonationError::Underflow),
            LedgerError::Math(MathError::DivisionByZero(_)) => error!(DonationError::DivisionByZero),
            LedgerError::Transfer(_) => error!(DonationError::TransferFailed),
            LedgerError::AlreadyClaimed => error!(DonationError::AlreadyClaimed),
            LedgerError::NotEligible => error!(DonationError::NotEligible),
        }
    }
}

// =============================================================================
// SUBSIDY REGISTRY / ELIGIBILITY
// =============================================================================

/// account -> timestamp of its last successful claim
pub trait SubsidyRegistry {
    /// Epoch zero for an account that never claimed
    fn last_claim(&self, account: &Pubkey) -> i64;

    fn record_claim(&mut self, account: Pubkey, timestamp: i64);
}

impl SubsidyRegistry for BTreeMap<Pubkey, i64> {
    fn last_claim(&self, account: &Pubkey) -> i64 {
        self.get(account).copied().unwrap_or(0)
    }

    fn record_claim(&mut self, account: Pubkey, timestamp: i64) {
        self.insert(account, timestamp);
    }
}

pub trait SubsidyEligibility {
    fn is_eligible(&self, account: &Pubkey) -> bool;
}

/// Only end-user wallets qualify: a signer owned by the System Program
/// that is not executable.
pub struct WalletEligibility<'a, 'info> {
    claimant: &'a AccountInfo<'info>,
}

impl<'a, 'info> WalletEligibility<'a, 'info> {
    pub fn new(claimant: &'a AccountInfo<'info>) -> Self {
        Self { claimant }
    }
}

impl<'a, 'info> SubsidyEligibility for WalletEligibility<'a, 'info> {
    fn is_eligible(&self, account: &Pubkey) -> bool {
        self.claimant.key == account
            && self.claimant.is_signer
            && *self.claimant.owner == system_program::ID
            && !self.claimant.executable
    }
}

/// True when `last_claim` falls in an earlier civil month than `now`
pub fn subsidy_claimable(last_claim: i64, now: i64) -> LedgerResult<bool> {
    Ok(civil_month(last_claim)? < civil_month(now)?)
}

// =============================================================================
// LEDGER
// =============================================================================

pub struct DonationLedger<'a, I: LedgerInvoker> {
    ledgers: &'a LedgerConfig,
    custody: Pubkey,
    invoker: I,
}

impl<'a, I: LedgerInvoker> DonationLedger<'a, I> {
    pub fn new(ledgers: &'a LedgerConfig, custody: Pubkey, invoker: I) -> Self {
        Self {
            ledgers,
            custody,
            invoker,
        }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn donate(
        &mut self,
        donor: Pubkey,
        amount: Amount,
        totals: &mut LedgerTotals,
    ) -> LedgerResult<Donation> {
        require_positive(amount)?;
        let total_donated = add(totals.total_donated, amount)?;

        mint_to(
            &mut self.invoker,
            &self.ledgers.accounting_ledger,
            self.custody,
            amount,
        )?;
        transfer_from(
            &mut self.invoker,
            &self.ledgers.asset_ledger,
            donor,
            self.custody,
            amount,
        )?;

        totals.total_donated = total_donated;
        Ok(Donation {
            account: donor,
            amount,
        })
    }

    pub fn collect(
        &mut self,
        collector: Pubkey,
        amount: Amount,
        totals: &mut LedgerTotals,
    ) -> LedgerResult<Collection> {
        require_positive(amount)?;
        let total_collected = add(totals.total_collected, amount)?;

        burn_from(
            &mut self.invoker,
            &self.ledgers.accounting_ledger,
            collector,
            amount,
        )?;
        transfer(
            &mut self.invoker,
            &self.ledgers.asset_ledger,
            collector,
            amount,
        )?;

        totals.total_collected = total_collected;
        Ok(Collection {
            account: collector,
            amount,
        })
    }

    pub fn claim_subsidy<R, E>(
        &mut self,
        claimant: Pubkey,
        now: i64,
        registry: &mut R,
        eligibility: &E,
        totals: &mut LedgerTotals,
    ) -> LedgerResult<Subsidy>
    where
        R: SubsidyRegistry + ?Sized,
        E: SubsidyEligibility + ?Sized,
    {
        if !subsidy_claimable(registry.last_claim(&claimant), now)? {
            return Err(LedgerError::AlreadyClaimed);
        }
        if !eligibility.is_eligible(&claimant) {
            return Err(LedgerError::NotEligible);
        }

        let total_paid = add(totals.total_subsidies_paid, SUBSIDY_AMOUNT)?;
        let claims = add(totals.subsidy_claims, 1)?;

        transfer(
            &mut self.invoker,
            &self.ledgers.accounting_ledger,
            claimant,
            SUBSIDY_AMOUNT,
        )?;

        registry.record_claim(claimant, now);
        totals.total_subsidies_paid = total_paid;
        totals.subsidy_claims = claims;
        Ok(Subsidy {
            account: claimant,
            amount: SUBSIDY_AMOUNT,
        })
    }
}

fn require_positive(amount: Amount) -> LedgerResult<()> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}
