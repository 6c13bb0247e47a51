//! # IOU Contract Core
//!
//! Deterministic transaction validator for a debt-instrument (IOU)
//! ledger asset. Given a proposed state transition (input states, output
//! states, one attached command), the contract decides whether the
//! transition is legal:
//!
//! - **Issue**: create a new IOU from nothing
//! - **Transfer**: reassign the lender of an existing IOU
//! - **Settle**: pay an IOU down, consuming it entirely once fully paid
//!
//! Transport, consensus, persistence and transaction assembly live in the
//! surrounding ledger runtime; this crate is a pure predicate over one
//! [`Transaction`] value and performs no I/O.
//!
//! ```text
//! ┌─────────────────┐
//! │   Transaction   │ ← inputs, outputs, obligations, command + signers
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  IouContract    │ ← single-command dispatch, per-command rule sets
//! └────────┬────────┘
//!          │
//!   Ok(()) or first violated rule
//! ```
//!
//! ## Safety
//!
//! - `#![forbid(unsafe_code)]`: no unsafe operations
//! - Money invariants enforced with checked minor-unit arithmetic
//! - Stateless verification, safe to call concurrently

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    clippy::all
)]

pub mod contract;
pub mod error;
pub mod state;
pub mod transaction;
pub mod types;

pub use contract::{IouContract, IOU_CONTRACT_ID};
pub use error::{Error, Result};
pub use state::IouState;
pub use transaction::{Command, IouCommand, SettlementObligation, Transaction};
pub use types::{Amount, Currency, LinearId, OwningKey, Party};
