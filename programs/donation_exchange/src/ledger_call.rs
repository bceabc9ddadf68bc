/**
 * External Ledger Calls
 *
 * Every value-moving call against the asset and accounting ledgers goes
 * through invoke_token_op. Ledgers differ in how they answer:
 *   - some return a Borsh bool
 *   - some return nothing at all
 *   - some fail the call outright
 * check_response folds all of them into a single success / TransferError.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use std::fmt;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed, set_return_data};

use crate::math::Amount;
use crate::DONATION_CONFIG_SEED;

// =============================================================================
// SELECTORS (sha256("global:<name>")[..8])
// =============================================================================

pub const MINT_SELECTOR: [u8; 8] = [0x33, 0x39, 0xe1, 0x2f, 0xb6, 0x92, 0x89, 0xa6];
pub const BURN_FROM_SELECTOR: [u8; 8] = [0xa5, 0x44, 0xd8, 0x96, 0xaf, 0x91, 0x89, 0x45];
pub const TRANSFER_SELECTOR: [u8; 8] = [0xa3, 0x34, 0xc8, 0xe7, 0x8c, 0x03, 0x45, 0xba];
pub const TRANSFER_FROM_SELECTOR: [u8; 8] = [0xe6, 0xff, 0x82, 0x07, 0xdc, 0xf7, 0x7a, 0x00];

// =============================================================================
// OPERATIONS
// =============================================================================

/// A token operation and its arguments, in ledger argument order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOp {
    Mint { to: Pubkey, amount: Amount },
    BurnFrom { holder: Pubkey, amount: Amount },
    Transfer { to: Pubkey, amount: Amount },
    TransferFrom { from: Pubkey, to: Pubkey, amount: Amount },
}

impl TokenOp {
    pub fn name(&self) -> &'static str {
        match self {
            TokenOp::Mint { .. } => "mint",
            TokenOp::BurnFrom { .. } => "burn_from",
            TokenOp::Transfer { .. } => "transfer",
            TokenOp::TransferFrom { .. } => "transfer_from",
        }
    }

    pub fn selector(&self) -> [u8; 8] {
        match self {
            TokenOp::Mint { .. } => MINT_SELECTOR,
            TokenOp::BurnFrom { .. } => BURN_FROM_SELECTOR,
            TokenOp::Transfer { .. } => TRANSFER_SELECTOR,
            TokenOp::TransferFrom { .. } => TRANSFER_FROM_SELECTOR,
        }
    }

    /// Selector followed by Borsh-encoded arguments
    pub fn instruction_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(8 + 32 + 32 + 8);
        data.extend_from_slice(&self.selector());
        match self {
            TokenOp::Mint { to, amount } | TokenOp::Transfer { to, amount } => {
                data.extend_from_slice(to.as_ref());
                data.extend_from_slice(&amount.to_le_bytes());
            }
            TokenOp::BurnFrom { holder, amount } => {
                data.extend_from_slice(holder.as_ref());
                data.extend_from_slice(&amount.to_le_bytes());
            }
            TokenOp::TransferFrom { from, to, amount } => {
                data.extend_from_slice(from.as_ref());
                data.extend_from_slice(to.as_ref());
                data.extend_from_slice(&amount.to_le_bytes());
            }
        }
        data
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Raw outcome of a ledger call, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResponse {
    /// The call itself failed
    Failed,
    /// The call succeeded without return data
    Empty,
    /// The call succeeded and returned data
    Returned(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferFailure {
    CallFailed,
    ReturnedFalse,
    MalformedResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferError {
    pub ledger: Pubkey,
    pub operation: &'static str,
    pub failure: TransferFailure,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.failure {
            TransferFailure::CallFailed => "call failed",
            TransferFailure::ReturnedFalse => "ledger returned false",
            TransferFailure::MalformedResponse => "malformed response",
        };
        write!(f, "{} on ledger {}: {}", self.operation, self.ledger, reason)
    }
}

/// Empty and `true` are success; `false`, anything unparseable and a failed
/// call are not.
pub fn check_response(response: &CallResponse) -> std::result::Result<(), TransferFailure> {
    match response {
        CallResponse::Failed => Err(TransferFailure::CallFailed),
        CallResponse::Empty => Ok(()),
        CallResponse::Returned(data) => match data.as_slice() {
            [1] => Ok(()),
            [0] => Err(TransferFailure::ReturnedFalse),
            _ => Err(TransferFailure::MalformedResponse),
        },
    }
}

// =============================================================================
// INVOCATION
// =============================================================================

/// Issues a token operation against a ledger and reports what came back
pub trait LedgerInvoker {
    fn call(&mut self, ledger: &Pubkey, op: &TokenOp) -> CallResponse;
}

pub fn invoke_token_op<I: LedgerInvoker + ?Sized>(
    invoker: &mut I,
    ledger: &Pubkey,
    op: TokenOp,
) -> std::result::Result<(), TransferError> {
    let response = invoker.call(ledger, &op);
    check_response(&response).map_err(|failure| TransferError {
        ledger: *ledger,
        operation: op.name(),
        failure,
    })
}

pub fn mint_to<I: LedgerInvoker + ?Sized>(
    invoker: &mut I,
    ledger: &Pubkey,
    recipient: Pubkey,
    amount: Amount,
) -> std::result::Result<(), TransferError> {
    invoke_token_op(invoker, ledger, TokenOp::Mint { to: recipient, amount })
}

pub fn burn_from<I: LedgerInvoker + ?Sized>(
    invoker: &mut I,
    ledger: &Pubkey,
    holder: Pubkey,
    amount: Amount,
) -> std::result::Result<(), TransferError> {
    invoke_token_op(invoker, ledger, TokenOp::BurnFrom { holder, amount })
}

pub fn transfer<I: LedgerInvoker + ?Sized>(
    invoker: &mut I,
    ledger: &Pubkey,
    recipient: Pubkey,
    amount: Amount,
) -> std::result::Result<(), TransferError> {
    invoke_token_op(invoker, ledger, TokenOp::Transfer { to: recipient, amount })
}

pub fn transfer_from<I: LedgerInvoker + ?Sized>(
    invoker: &mut I,
    ledger: &Pubkey,
    sender: Pubkey,
    recipient: Pubkey,
    amount: Amount,
) -> std::result::Result<(), TransferError> {
    invoke_token_op(
        invoker,
        ledger,
        TokenOp::TransferFrom {
            from: sender,
            to: recipient,
            amount,
        },
    )
}

// =============================================================================
// CPI INVOKER
// =============================================================================

/// Calls ledger programs through CPI, signing as the custody PDA.
///
/// The ledger receives the custody account (read-only signer) followed by
/// every forwarded account with its original signer/writable flags.
pub struct CpiInvoker<'info> {
    ledgers: Vec<AccountInfo<'info>>,
    forwarded: Vec<AccountInfo<'info>>,
    custody: AccountInfo<'info>,
    custody_bump: u8,
}

impl<'info> CpiInvoker<'info> {
    pub fn new(
        ledgers: Vec<AccountInfo<'info>>,
        forwarded: Vec<AccountInfo<'info>>,
        custody: AccountInfo<'info>,
        custody_bump: u8,
    ) -> Self {
        Self {
            ledgers,
            forwarded,
            custody,
            custody_bump,
        }
    }

}

/// Custody first as a read-only signer, then every forwarded account with
/// its own signer/writable flags
pub fn ledger_account_metas(custody: &Pubkey, forwarded: &[AccountInfo]) -> Vec<AccountMeta> {
    let mut metas = Vec::with_capacity(forwarded.len() + 1);
    metas.push(AccountMeta::new_readonly(*custody, true));
    for account in forwarded.iter() {
        if account.is_writable {
            metas.push(AccountMeta::new(*account.key, account.is_signer));
        } else {
            metas.push(AccountMeta::new_readonly(*account.key, account.is_signer));
        }
    }
    metas
}

/// Only non-empty return data set by the called ledger counts as an answer
pub fn response_from_return_data(
    ledger: &Pubkey,
    return_data: Option<(Pubkey, Vec<u8>)>,
) -> CallResponse {
    match return_data {
        Some((program_id, data)) if program_id == *ledger && !data.is_empty() => {
            CallResponse::Returned(data)
        }
        _ => CallResponse::Empty,
    }
}

impl<'info> LedgerInvoker for CpiInvoker<'info> {
    fn call(&mut self, ledger: &Pubkey, op: &TokenOp) -> CallResponse {
        let program = match self.ledgers.iter().find(|p| p.key == ledger) {
            Some(program) => program.clone(),
            None => return CallResponse::Failed,
        };

        let ix = Instruction {
            program_id: *ledger,
            accounts: ledger_account_metas(self.custody.key, &self.forwarded),
            data: op.instruction_data(),
        };

        let mut account_infos = Vec::with_capacity(self.forwarded.len() + 2);
        account_infos.push(self.custody.clone());
        account_infos.extend(self.forwarded.iter().cloned());
        account_infos.push(program);

        let bump = [self.custody_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[DONATION_CONFIG_SEED, &bump]];

        // Stale return data from an earlier call must not be read as this answer
        set_return_data(&[]);

        if invoke_signed(&ix, &account_infos, signer_seeds).is_err() {
            return CallResponse::Failed;
        }

        response_from_return_data(ledger, get_return_data())
    }
}
