//! Structural validation of incoming purchase requests.
//!
//! Runs before any pricing. Checks are applied in a fixed order and the first
//! failure is returned:
//!
//! 1. account identifier present and a positive integer
//! 2. at least one line item
//! 3. every line item a well-formed [`TicketTypeRequest`]

use crate::error::{PurchaseError, Result};
use crate::request::{PurchaseRequest, UncheckedPurchaseRequest};
use crate::types::{AccountId, TicketTypeRequest};
use serde::Deserialize;
use serde_json::Value;

/// Validates the account identifier of a request.
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidAccount`] if the identifier is absent,
/// `null`, not a number, fractional, negative, zero or larger than `u64::MAX`.
pub fn validate_account_id(account_id: Option<&Value>) -> Result<AccountId> {
    match account_id {
        None | Some(Value::Null) => Err(PurchaseError::invalid_account("An accountId is required")),
        Some(Value::Number(number)) => AccountId::try_from(number),
        Some(other) => Err(PurchaseError::invalid_account(format!(
            "accountId must be a positive integer, got {other}"
        ))),
    }
}

/// Validates every line item, in order.
///
/// # Errors
///
/// - [`PurchaseError::EmptyRequest`] if `items` is empty
/// - [`PurchaseError::MalformedLineItem`] for the first element that is not a
///   valid ticket-type request
pub fn validate_line_items(items: &[Value]) -> Result<Vec<TicketTypeRequest>> {
    if items.is_empty() {
        return Err(PurchaseError::EmptyRequest);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            TicketTypeRequest::deserialize(item)
                .map_err(|e| PurchaseError::malformed(index, e.to_string()))
        })
        .collect()
}

/// Runs all structural checks over an untrusted request.
///
/// # Errors
///
/// Returns the first failing check, see [`validate_account_id`] and
/// [`validate_line_items`]. The account is always checked first, whatever the
/// line items contain.
pub fn validate_request(raw: &UncheckedPurchaseRequest) -> Result<PurchaseRequest> {
    let account_id = validate_account_id(raw.account_id.as_ref())?;
    let tickets = validate_line_items(&raw.ticket_type_requests)?;
    Ok(PurchaseRequest::from_parts(account_id, tickets))
}
