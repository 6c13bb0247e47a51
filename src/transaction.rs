//! Transaction shape consumed by the contract
//!
//! The ledger runtime assembles a candidate [`Transaction`] and hands it
//! to [`IouContract::verify`](crate::contract::IouContract::verify). The
//! validator only ever reads this value; it never constructs, persists,
//! or transmits one.

use crate::state::IouState;
use crate::types::{Amount, OwningKey, Party};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Intent of a proposed state transition
///
/// Commands carry no payload; the transaction shape holds all data the
/// rules need. Adding a variant is a compile-checked change to every
/// `match` in the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IouCommand {
    /// Create a new IOU with no prior version
    Issue,
    /// Reassign the lender of an existing IOU
    Transfer,
    /// Pay down an existing IOU, possibly extinguishing it
    Settle,
}

/// A command attached to a transaction together with its required signers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The declared transition intent
    pub value: IouCommand,
    /// Keys whose signatures the transaction requires
    pub signers: BTreeSet<OwningKey>,
}

impl Command {
    /// Attach a command with its signer set
    pub fn new(value: IouCommand, signers: BTreeSet<OwningKey>) -> Self {
        Self { value, signers }
    }
}

/// Evidence of an external value transfer accompanying a settlement
///
/// Produced by the excluded payment subsystem; the settle rules only
/// check that obligations directed at the lender cover the claimed
/// payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementObligation {
    /// Party the value moved to
    pub beneficiary: Party,
    /// Value transferred
    pub amount: Amount,
}

/// A proposed ledger state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transaction {
    /// States consumed, in ledger order
    pub inputs: Vec<IouState>,
    /// States created, in ledger order
    pub outputs: Vec<IouState>,
    /// External settlement evidence attached to this transaction
    pub obligations: Vec<SettlementObligation>,
    /// Attached commands; the contract requires exactly one
    pub commands: Vec<Command>,
}
