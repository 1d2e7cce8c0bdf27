//! Stand-in payment and seat-reservation services.
//!
//! Both always succeed and only log what they were asked to do. A real
//! deployment would replace them with integrations to the actual providers.

use cinema_tickets_core::{AccountId, Money, SeatReservationService, TicketPaymentService};
use std::sync::Arc;

/// Payment service that logs the charge and reports success
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentService;

impl LoggingPaymentService {
    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self)
    }
}

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        tracing::info!(
            account_id = account_id.get(),
            amount = amount.pence(),
            "Payment taken"
        );
    }
}

/// Seat-reservation service that logs the request and reports success
#[derive(Clone, Debug, Default)]
pub struct LoggingSeatReservationService;

impl LoggingSeatReservationService {
    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self)
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) {
        tracing::info!(account_id = account_id.get(), seats, "Seats reserved");
    }
}
