//! IOU ledger state
//!
//! An [`IouState`] records principal owed from a borrower to a lender and
//! the amount repaid so far. States are immutable values: a transition
//! never mutates a state in place, it produces a new version and leaves
//! the old one behind as a transaction input.

use crate::types::{Amount, LinearId, OwningKey, Party};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One version of a debt instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IouState {
    /// Principal owed
    pub amount: Amount,
    /// Party the debt is owed to
    pub lender: Party,
    /// Party that owes the debt
    pub borrower: Party,
    /// Amount repaid so far, denominated in the principal currency
    pub paid: Amount,
    /// Lineage identifier, fixed at issuance
    pub linear_id: LinearId,
}

impl IouState {
    /// Create the initial version of an IOU
    ///
    /// `paid` starts at zero and a fresh [`LinearId`] is assigned. The
    /// positive-amount and distinct-party invariants are enforced by the
    /// issue rules, not here, so rejected candidates can still be built.
    pub fn new(amount: Amount, lender: Party, borrower: Party) -> Self {
        Self {
            paid: Amount::zero(amount.currency),
            amount,
            lender,
            borrower,
            linear_id: LinearId::new(),
        }
    }

    /// New version with `paid` increased by the given amount
    ///
    /// Fails if the currencies differ or the addition overflows. Does not
    /// reject overpayment; the settle rules do.
    pub fn pay(&self, amount: Amount) -> Result<IouState> {
        Ok(IouState {
            paid: self.paid.checked_add(amount)?,
            ..self.clone()
        })
    }

    /// New version identical in every field except the lender
    pub fn with_new_lender(&self, new_lender: Party) -> IouState {
        IouState {
            lender: new_lender,
            ..self.clone()
        }
    }

    /// Amount still owed
    ///
    /// Saturates at zero; no state admitted by the contract carries
    /// `paid` above `amount`.
    pub fn outstanding(&self) -> Amount {
        Amount::new(
            self.amount.quantity.saturating_sub(self.paid.quantity),
            self.amount.currency,
        )
    }

    /// Parties whose signatures the contract rules may require
    pub fn participants(&self) -> [&Party; 2] {
        [&self.lender, &self.borrower]
    }

    /// Owning keys of the participants
    pub fn participant_keys(&self) -> BTreeSet<OwningKey> {
        self.participants()
            .iter()
            .map(|party| party.owning_key)
            .collect()
    }
}

impl fmt::Display for IouState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IOU {}: {} owes {} {} ({} paid)",
            self.linear_id, self.borrower.name, self.lender.name, self.amount, self.paid
        )
    }
}
