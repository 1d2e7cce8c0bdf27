//! Purchase requests, before and after structural validation.

use crate::error::{PurchaseError, Result};
use crate::types::{AccountId, TicketTypeRequest};
use crate::validation;
use serde::{Deserialize, Serialize};

/// A purchase request exactly as received from an untrusted caller.
///
/// Nothing about it has been checked yet: the account may be missing or not a
/// number, and each line item is raw JSON. Run it through
/// [`validation::validate_request`] to obtain a [`PurchaseRequest`].
///
/// ```
/// use cinema_tickets_core::request::UncheckedPurchaseRequest;
///
/// let raw: UncheckedPurchaseRequest = serde_json::from_str(
///     r#"{"accountId": 1, "ticketTypeRequests": [{"type": "ADULT", "noOfTickets": 2}]}"#,
/// ).unwrap();
/// assert_eq!(raw.ticket_type_requests.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncheckedPurchaseRequest {
    /// Account identifier, any JSON value or absent
    #[serde(default)]
    pub account_id: Option<serde_json::Value>,
    /// Line items, each any JSON value
    #[serde(default)]
    pub ticket_type_requests: Vec<serde_json::Value>,
}

impl UncheckedPurchaseRequest {
    /// Builds the wire form of a typed request.
    #[must_use]
    pub fn from_typed(account_id: u64, tickets: &[TicketTypeRequest]) -> Self {
        Self {
            account_id: Some(serde_json::Value::from(account_id)),
            ticket_type_requests: tickets
                .iter()
                .map(|ticket| {
                    serde_json::json!({
                        "type": ticket.ticket_type().as_str(),
                        "noOfTickets": ticket.count(),
                    })
                })
                .collect(),
        }
    }
}

/// A structurally valid purchase request.
///
/// The account is positive and there is at least one well-formed line item.
/// Business rules (adult present, ticket cap, infant ratio) have not been
/// checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    account_id: AccountId,
    ticket_type_requests: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    /// Creates a request from already-typed parts.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::InvalidAccount`] if `account_id` is zero
    /// - [`PurchaseError::EmptyRequest`] if `tickets` is empty
    pub fn new(account_id: u64, tickets: Vec<TicketTypeRequest>) -> Result<Self> {
        let account_id = AccountId::new(account_id)?;
        if tickets.is_empty() {
            return Err(PurchaseError::EmptyRequest);
        }
        Ok(Self::from_parts(account_id, tickets))
    }

    /// Callers must have checked that `tickets` is non-empty.
    pub(crate) const fn from_parts(
        account_id: AccountId,
        ticket_type_requests: Vec<TicketTypeRequest>,
    ) -> Self {
        Self {
            account_id,
            ticket_type_requests,
        }
    }

    /// Account making the purchase
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Line items, in the order they were given
    #[must_use]
    pub fn tickets(&self) -> &[TicketTypeRequest] {
        &self.ticket_type_requests
    }
}

impl TryFrom<&UncheckedPurchaseRequest> for PurchaseRequest {
    type Error = PurchaseError;

    fn try_from(raw: &UncheckedPurchaseRequest) -> Result<Self> {
        validation::validate_request(raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TicketType;

    #[test]
    fn test_new_checks_account_before_tickets() {
        assert_eq!(
            PurchaseRequest::new(0, vec![]).unwrap_err().kind(),
            crate::error::RejectionKind::InvalidAccount
        );
        assert_eq!(PurchaseRequest::new(1, vec![]), Err(PurchaseError::EmptyRequest));
    }

    #[test]
    fn test_from_typed_round_trips_through_validation() {
        let tickets = [
            TicketTypeRequest::new(TicketType::Adult, 2),
            TicketTypeRequest::new(TicketType::Infant, 1),
        ];
        let raw = UncheckedPurchaseRequest::from_typed(9, &tickets);
        let request = PurchaseRequest::try_from(&raw).unwrap();

        assert_eq!(request.account_id().get(), 9);
        assert_eq!(request.tickets(), &tickets);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let raw: UncheckedPurchaseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, UncheckedPurchaseRequest::default());
    }
}
