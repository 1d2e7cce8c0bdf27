//! Rejection reasons for ticket purchases.

use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Why a purchase request was rejected.
///
/// Every variant is a definitive business or input rejection. None of them is
/// transient, so callers should not retry the same request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    // ═══════════════════════════════════════════════════════════
    // Structural Errors
    // ═══════════════════════════════════════════════════════════

    /// Account identifier missing, zero, negative or not an integer.
    #[error("Invalid account: {reason}")]
    InvalidAccount {
        /// What was wrong with the identifier
        reason: String,
    },

    /// No line items were supplied.
    #[error("The array of ticketTypeRequests cannot be empty")]
    EmptyRequest,

    /// A line item is not a valid ticket-type request.
    #[error("ticketTypeRequests[{index}] is not a valid TicketTypeRequest: {reason}")]
    MalformedLineItem {
        /// Position of the offending element
        index: usize,
        /// Why it could not be read
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════
    // Business Rules
    // ═══════════════════════════════════════════════════════════

    /// The request contains no adult ticket.
    #[error("At least one adult ticket must be purchased")]
    NoAdultPresent,

    /// More tickets than one transaction allows.
    #[error("Cannot purchase {requested} tickets, the maximum per purchase is {limit}")]
    TicketLimitExceeded {
        /// Configured maximum
        limit: u64,
        /// Tickets requested in total
        requested: u64,
    },

    /// More infants than adults to hold them.
    #[error(
        "{infants} infant tickets requested but only {adults} adult tickets, \
         each infant must sit on an adult's lap"
    )]
    TooManyInfants {
        /// Infant tickets requested
        infants: u64,
        /// Adult tickets requested
        adults: u64,
    },
}

/// Fieldless discriminant of [`PurchaseError`], for branching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// See [`PurchaseError::InvalidAccount`]
    InvalidAccount,
    /// See [`PurchaseError::EmptyRequest`]
    EmptyRequest,
    /// See [`PurchaseError::MalformedLineItem`]
    MalformedLineItem,
    /// See [`PurchaseError::NoAdultPresent`]
    NoAdultPresent,
    /// See [`PurchaseError::TicketLimitExceeded`]
    TicketLimitExceeded,
    /// See [`PurchaseError::TooManyInfants`]
    TooManyInfants,
}

impl RejectionKind {
    /// Stable snake-case label, used as a log field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidAccount => "invalid_account",
            Self::EmptyRequest => "empty_request",
            Self::MalformedLineItem => "malformed_line_item",
            Self::NoAdultPresent => "no_adult_present",
            Self::TicketLimitExceeded => "ticket_limit_exceeded",
            Self::TooManyInfants => "too_many_infants",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PurchaseError {
    /// Creates an [`PurchaseError::InvalidAccount`] with the given reason.
    pub fn invalid_account(reason: impl Into<String>) -> Self {
        Self::InvalidAccount {
            reason: reason.into(),
        }
    }

    /// Creates a [`PurchaseError::MalformedLineItem`] for the element at `index`.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLineItem {
            index,
            reason: reason.into(),
        }
    }

    /// Which kind of rejection this is.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::InvalidAccount { .. } => RejectionKind::InvalidAccount,
            Self::EmptyRequest => RejectionKind::EmptyRequest,
            Self::MalformedLineItem { .. } => RejectionKind::MalformedLineItem,
            Self::NoAdultPresent => RejectionKind::NoAdultPresent,
            Self::TicketLimitExceeded { .. } => RejectionKind::TicketLimitExceeded,
            Self::TooManyInfants { .. } => RejectionKind::TooManyInfants,
        }
    }
}
