//! Core value types for the IOU asset
//!
//! All types are designed for:
//! - Deterministic serialization (serde)
//! - Memory safety (no unsafe code)
//! - Exact arithmetic (integer minor units for money)

use crate::{Error, Result};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// ISO 4217 currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }

    /// Parse from an ISO 4217 code
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }

    /// Number of decimal places in the minor unit (ISO 4217 exponent)
    pub fn minor_unit_exponent(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A quantity of money in a single currency
///
/// The quantity is a non-negative count of the currency's minor unit
/// (cents for USD). Amounts in different currencies never mix: addition
/// fails with [`Error::CurrencyMismatch`] and comparison is undefined
/// (`partial_cmp` returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Quantity in minor units
    pub quantity: u64,
    /// Currency denomination
    pub currency: Currency,
}

impl Amount {
    /// Create an amount from minor units
    pub fn new(quantity: u64, currency: Currency) -> Self {
        Self { quantity, currency }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            quantity: 0,
            currency,
        }
    }

    /// Checked addition within one currency
    pub fn checked_add(self, other: Amount) -> Result<Amount> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        let quantity = self
            .quantity
            .checked_add(other.quantity)
            .ok_or(Error::Overflow)?;
        Ok(Amount {
            quantity,
            currency: self.currency,
        })
    }

    /// Quantity as a decimal in major units (10050 cents -> 100.50)
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(
            i128::from(self.quantity),
            self.currency.minor_unit_exponent(),
        )
    }
}

impl PartialOrd for Amount {
    /// Amounts are ordered only within one currency
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.quantity.cmp(&other.quantity))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency)
    }
}

/// Ed25519 public key identifying a transaction signer
///
/// Stored as raw bytes and parsed on use, so signer sets can be built and
/// compared without touching the curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwningKey([u8; 32]);

impl OwningKey {
    /// Create from raw key bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse into a verifying key
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        VerifyingKey::from_bytes(&self.0).map_err(|e| Error::SignatureInvalid(e.to_string()))
    }

    /// Verify an Ed25519 signature over a message
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let key = self.verifying_key()?;

        let sig_bytes: [u8; 64] = signature
            .try_into()
            .map_err(|_| Error::SignatureInvalid("Invalid signature length".into()))?;
        let signature = Signature::from_bytes(&sig_bytes);

        key.verify(message, &signature)
            .map_err(|e| Error::SignatureInvalid(e.to_string()))
    }
}

impl fmt::Debug for OwningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwningKey({})", hex::encode(self.0))
    }
}

impl fmt::Display for OwningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &hex::encode(self.0)[..8])
    }
}

/// A ledger participant identified by a public key
///
/// Equality is identity equality: two parties are the same exactly when
/// both the display name and the owning key match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    /// Display name
    pub name: String,
    /// Key whose signature commits this party
    pub owning_key: OwningKey,
}

impl Party {
    /// Create a party
    pub fn new(name: impl Into<String>, owning_key: OwningKey) -> Self {
        Self {
            name: name.into(),
            owning_key,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.owning_key)
    }
}

/// Identifier linking every version of one IOU across transitions
///
/// Assigned once at issuance and never changed afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LinearId(Uuid);

impl LinearId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LinearId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
