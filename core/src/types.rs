//! Domain types for cinema ticket purchases.
//!
//! Value objects shared by the validators, the tallier and the
//! [`TicketService`](crate::service::TicketService). All of them are immutable
//! once constructed.

use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account making a purchase.
///
/// Always a positive integer. The only ways to obtain one go through
/// validation, so a zero or negative account can never reach a collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct AccountId(NonZeroU64);

impl AccountId {
    /// Creates an `AccountId` from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidAccount`] if `id` is zero.
    pub fn new(id: u64) -> Result<Self, PurchaseError> {
        NonZeroU64::new(id)
            .map(Self)
            .ok_or_else(|| PurchaseError::invalid_account("accountId must be greater than zero"))
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&serde_json::Number> for AccountId {
    type Error = PurchaseError;

    /// Accepts only integer literals in `1..=u64::MAX`.
    ///
    /// Any literal with a fraction or exponent is rejected, `1.0` included,
    /// as are negative values and values that overflow `u64`.
    fn try_from(value: &serde_json::Number) -> Result<Self, Self::Error> {
        let id = value.as_u64().ok_or_else(|| {
            PurchaseError::invalid_account(format!(
                "accountId must be a positive integer, got {value}"
            ))
        })?;
        Self::new(id)
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.get()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (pence-based to avoid floating point errors)
// ============================================================================

/// An amount of money in the smallest currency unit (pence).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    /// Zero pence.
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from pence
    #[must_use]
    pub const fn from_pence(pence: u64) -> Self {
        Self(pence)
    }

    /// Returns the amount in pence
    #[must_use]
    pub const fn pence(&self) -> u64 {
        self.0
    }

    /// Adds two money amounts, clamping at `u64::MAX` pence
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies money by a quantity, clamping at `u64::MAX` pence
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Tickets
// ============================================================================

/// Ticket category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Adult ticket. Every purchase needs at least one.
    Adult,
    /// Child ticket. Occupies a seat.
    Child,
    /// Infant ticket. Sits on an adult's lap, so no seat is reserved.
    Infant,
}

impl TicketType {
    /// Upper-case wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this category is allocated its own seat.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line item of a purchase: a category and how many tickets of it.
///
/// Immutable. The JSON form is `{"type": "ADULT", "noOfTickets": 2}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    #[serde(rename = "noOfTickets")]
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a new line item
    #[must_use]
    pub const fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    /// Ticket category of this line item
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Number of tickets in this line item
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// Per-category ticket counts of a confirmed purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    /// Adult tickets
    pub adults: u64,
    /// Child tickets
    pub children: u64,
    /// Infant tickets
    pub infants: u64,
}

impl TicketCounts {
    /// Total tickets across all categories
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }
}

/// Outcome of a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Account that was charged
    pub account_id: AccountId,
    /// Amount passed to the payment service
    pub total_price: Money,
    /// Seats passed to the reservation service
    pub seats_reserved: u64,
    /// Tickets bought, by category
    pub tickets: TicketCounts,
}
