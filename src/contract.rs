//! Contract rules for the IOU asset
//!
//! - Single-command dispatch (Issue / Transfer / Settle)
//! - Per-command rule sets, first failing rule wins
//! - Lineage grouping for settlement
//!
//! Verification is a pure predicate over one [`Transaction`] value: no
//! I/O, no internal state, linear in the number of states and signers.

use crate::state::IouState;
use crate::transaction::{IouCommand, Transaction};
use crate::types::{Amount, LinearId, OwningKey};
use crate::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Stable identifier binding IOU states to this validator in the
/// runtime's contract registry
pub const IOU_CONTRACT_ID: &str = "iou_core.IouContract";

/// Rule engine for IOU state transitions
pub struct IouContract;

/// Evaluate one rule; the first failure aborts verification via `?`
fn require(condition: bool, rule: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::ContractViolation(rule.to_string()))
    }
}

/// Input and output versions of one instrument lineage
#[derive(Default)]
struct LineageGroup<'a> {
    inputs: Vec<&'a IouState>,
    outputs: Vec<&'a IouState>,
}

/// Group all IOU states in the transaction by lineage identifier
fn group_by_lineage(tx: &Transaction) -> HashMap<LinearId, LineageGroup<'_>> {
    let mut groups: HashMap<LinearId, LineageGroup<'_>> = HashMap::new();
    for state in &tx.inputs {
        groups.entry(state.linear_id).or_default().inputs.push(state);
    }
    for state in &tx.outputs {
        groups.entry(state.linear_id).or_default().outputs.push(state);
    }
    groups
}

impl IouContract {
    /// Verify a proposed IOU state transition
    ///
    /// The transaction must carry exactly one command; its rule set is
    /// then applied in order and the first violated rule is returned as
    /// [`Error::ContractViolation`].
    pub fn verify(tx: &Transaction) -> Result<()> {
        let command = match tx.commands.as_slice() {
            [command] => command,
            _ => return Err(Error::InvalidCommand),
        };

        debug!(
            command = ?command.value,
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            "verifying IOU transaction"
        );

        match command.value {
            IouCommand::Issue => Self::verify_issue(tx, &command.signers),
            IouCommand::Transfer => Self::verify_transfer(tx, &command.signers),
            IouCommand::Settle => Self::verify_settle(tx, &command.signers),
        }
    }

    // =========================================================================
    // ISSUE
    // =========================================================================

    fn verify_issue(tx: &Transaction, signers: &BTreeSet<OwningKey>) -> Result<()> {
        require(
            tx.inputs.is_empty(),
            "No inputs may be consumed when issuing an IOU",
        )?;
        require(
            tx.outputs.len() == 1,
            "Only one output state may be created when issuing an IOU",
        )?;
        let output = &tx.outputs[0];

        require(
            output.amount.quantity > 0,
            "A newly issued IOU must have a positive amount",
        )?;
        require(
            output.paid == Amount::zero(output.amount.currency),
            "An IOU cannot be issued already partially paid",
        )?;
        require(
            output.lender != output.borrower,
            "The lender and borrower cannot be the same identity",
        )?;
        require(
            *signers == output.participant_keys(),
            "Both lender and borrower together must sign an IOU issue transaction",
        )?;

        Ok(())
    }

    // =========================================================================
    // TRANSFER
    // =========================================================================

    fn verify_transfer(tx: &Transaction, signers: &BTreeSet<OwningKey>) -> Result<()> {
        require(
            tx.inputs.len() == 1,
            "An IOU transfer transaction must consume exactly one input state",
        )?;
        require(
            tx.outputs.len() == 1,
            "An IOU transfer transaction must create exactly one output state",
        )?;
        let input = &tx.inputs[0];
        let output = &tx.outputs[0];

        require(
            output.with_new_lender(input.lender.clone()) == *input,
            "Only the lender property may change in an IOU transfer",
        )?;
        require(
            input.lender != output.lender,
            "The lender property must change in an IOU transfer",
        )?;

        // Borrower, old lender and new lender; the sets overlap on the
        // borrower, set union collapses the duplicates.
        let required: BTreeSet<OwningKey> = input
            .participant_keys()
            .union(&output.participant_keys())
            .copied()
            .collect();
        require(
            *signers == required,
            "The borrower, old lender and new lender must sign an IOU transfer transaction",
        )?;

        Ok(())
    }

    // =========================================================================
    // SETTLE
    // =========================================================================

    fn verify_settle(tx: &Transaction, signers: &BTreeSet<OwningKey>) -> Result<()> {
        let mut lineages = group_by_lineage(tx).into_values();
        let group = match (lineages.next(), lineages.next()) {
            (Some(group), None) => group,
            _ => {
                return Err(Error::ContractViolation(
                    "An IOU settle transaction must cover exactly one IOU lineage".to_string(),
                ))
            }
        };

        require(
            group.inputs.len() == 1,
            "An IOU settle transaction must consume exactly one input state",
        )?;
        require(
            group.outputs.len() <= 1,
            "An IOU settle transaction may create at most one output state",
        )?;
        let input = group.inputs[0];

        // Settlement payment is the sum of external obligations directed
        // at the lender of the consumed IOU.
        let mut payment = Amount::zero(input.amount.currency);
        for obligation in tx
            .obligations
            .iter()
            .filter(|obligation| obligation.beneficiary == input.lender)
        {
            require(
                obligation.amount.currency == input.amount.currency,
                "Settlement obligations must be denominated in the IOU currency",
            )?;
            payment = payment.checked_add(obligation.amount)?;
        }
        require(
            payment.quantity > 0,
            "There must be a settlement obligation directed to the lender",
        )?;

        let outstanding = input.outstanding();
        require(
            payment <= outstanding,
            "Settlement cannot exceed the amount outstanding",
        )?;

        if payment == outstanding {
            require(
                group.outputs.is_empty(),
                "A fully settled IOU must not produce an output state",
            )?;
        } else {
            require(
                group.outputs.len() == 1,
                "A partially settled IOU must produce one updated output state",
            )?;
            require(
                *group.outputs[0] == input.pay(payment)?,
                "Only the paid property may change when settling an IOU",
            )?;
        }

        require(
            signers.contains(&input.borrower.owning_key),
            "The borrower must sign an IOU settle transaction",
        )?;

        Ok(())
    }
}
