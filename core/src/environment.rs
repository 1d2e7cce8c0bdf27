//! Injected dependencies of the ticket service.
//!
//! The payment and seat-reservation services live outside this crate. They are
//! reached only through the traits below, so tests can substitute recording
//! mocks and a deployment can plug in real integrations.
//!
//! # Example
//!
//! ```
//! use cinema_tickets_core::environment::{SeatReservationService, TicketPaymentService};
//! use cinema_tickets_core::types::{AccountId, Money};
//!
//! struct NoopPayments;
//!
//! impl TicketPaymentService for NoopPayments {
//!     fn make_payment(&self, _account_id: AccountId, _amount: Money) {}
//! }
//! ```

use crate::types::{AccountId, Money};
use std::fmt;
use std::sync::Arc;

/// Takes payment for a purchase.
///
/// Assumed to always succeed.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to `account_id`
    fn make_payment(&self, account_id: AccountId, amount: Money);
}

/// Reserves seats for a purchase.
///
/// Assumed to always succeed.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    fn reserve_seats(&self, account_id: AccountId, seats: u64);
}

/// Collaborators used by [`TicketService`](crate::service::TicketService).
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Payment collaborator
    pub payment: Arc<dyn TicketPaymentService>,
    /// Seat-reservation collaborator
    pub seats: Arc<dyn SeatReservationService>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment`
    #[must_use]
    pub fn new(
        payment: Arc<dyn TicketPaymentService>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self { payment, seats }
    }
}

impl fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurchaseEnvironment")
            .field("payment", &"<dyn TicketPaymentService>")
            .field("seats", &"<dyn SeatReservationService>")
            .finish()
    }
}
