//! The purchase orchestrator.
//!
//! [`TicketService`] sequences the pipeline for one purchase:
//!
//! ```text
//! validation ─► tally ─► business rules ─► make_payment ─► reserve_seats
//!      │                        │
//!      └─────── reject ◄────────┘   (no collaborator is called)
//! ```
//!
//! The service keeps no per-call state. Each purchase builds its own
//! [`Tally`], so one `TicketService` can serve any number of calls.

use crate::config::Config;
use crate::environment::{PurchaseEnvironment, SeatReservationService, TicketPaymentService};
use crate::error::{PurchaseError, Result};
use crate::request::{PurchaseRequest, UncheckedPurchaseRequest};
use crate::rules::check_business_rules;
use crate::tally::Tally;
use crate::types::{PurchaseReceipt, TicketTypeRequest};
use crate::validation::validate_request;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validates, prices and books ticket purchases.
#[derive(Debug, Clone)]
pub struct TicketService {
    config: Config,
    env: PurchaseEnvironment,
}

impl TicketService {
    /// Creates a service from a configuration and its two collaborators.
    #[must_use]
    pub fn new(
        config: Config,
        payment: Arc<dyn TicketPaymentService>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self::with_environment(config, PurchaseEnvironment::new(payment, seats))
    }

    /// Creates a service from a configuration and a prepared environment.
    #[must_use]
    pub const fn with_environment(config: Config, env: PurchaseEnvironment) -> Self {
        Self { config, env }
    }

    /// Configuration the service was built with
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Purchases tickets for an account.
    ///
    /// On success the payment service has been charged the total price and
    /// then the reservation service has been asked for one seat per adult and
    /// child ticket.
    ///
    /// # Errors
    ///
    /// Any [`PurchaseError`]. On error neither collaborator has been called.
    #[tracing::instrument(skip(self, tickets), name = "purchase_tickets")]
    pub fn purchase_tickets(
        &self,
        account_id: u64,
        tickets: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt> {
        let request =
            PurchaseRequest::new(account_id, tickets.to_vec()).inspect_err(log_rejection)?;
        self.confirm(&request)
    }

    /// Purchases tickets from an untrusted wire-form request.
    ///
    /// # Errors
    ///
    /// Any [`PurchaseError`]. On error neither collaborator has been called.
    #[tracing::instrument(
        skip(self, raw),
        fields(account_id = %raw_account_label(raw)),
        name = "purchase_tickets"
    )]
    pub fn purchase_unchecked(&self, raw: &UncheckedPurchaseRequest) -> Result<PurchaseReceipt> {
        let request = validate_request(raw).inspect_err(log_rejection)?;
        self.confirm(&request)
    }

    /// Purchases a structurally valid request.
    ///
    /// # Errors
    ///
    /// [`PurchaseError::NoAdultPresent`], [`PurchaseError::TicketLimitExceeded`]
    /// or [`PurchaseError::TooManyInfants`]. On error neither collaborator has
    /// been called.
    #[tracing::instrument(
        skip(self, request),
        fields(account_id = %request.account_id()),
        name = "purchase_tickets"
    )]
    pub fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt> {
        self.confirm(request)
    }

    /// Runs the business rules and, if they pass, pays then reserves. Called
    /// inside the caller's `purchase_tickets` span.
    fn confirm(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt> {
        let tally = self.quote(request)?;
        let account_id = request.account_id();

        self.env.payment.make_payment(account_id, tally.total_price());
        self.env
            .seats
            .reserve_seats(account_id, tally.seats_to_reserve());

        info!(
            total_price = %tally.total_price(),
            seats = tally.seats_to_reserve(),
            tickets = tally.total_tickets(),
            "Purchase confirmed"
        );

        Ok(PurchaseReceipt {
            account_id,
            total_price: tally.total_price(),
            seats_reserved: tally.seats_to_reserve(),
            tickets: tally.counts(),
        })
    }

    /// Tallies a request and checks the business rules without calling any
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Same business-rule errors as [`TicketService::purchase`].
    pub fn quote(&self, request: &PurchaseRequest) -> Result<Tally> {
        let tally = Tally::from_requests(request.tickets(), &self.config.prices);
        debug!(
            adults = tally.adult_count(),
            children = tally.child_count(),
            infants = tally.infant_count(),
            total_price = %tally.total_price(),
            "Tallied purchase request"
        );

        check_business_rules(&tally, &self.config.rules).inspect_err(log_rejection)?;
        Ok(tally)
    }
}

fn log_rejection(err: &PurchaseError) {
    warn!(kind = %err.kind(), error = %err, "Purchase rejected");
}

/// The account as submitted, for log fields. May be missing or not a number.
fn raw_account_label(raw: &UncheckedPurchaseRequest) -> String {
    raw.account_id.as_ref().map_or_else(|| "missing".to_string(), ToString::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{PriceTable, PurchaseRules};
    use crate::error::RejectionKind;
    use crate::types::{AccountId, Money, TicketType};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Pay(u64, u64),
        Reserve(u64, u64),
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Call>>);

    impl TicketPaymentService for Recorder {
        fn make_payment(&self, account_id: AccountId, amount: Money) {
            self.0.lock().unwrap().push(Call::Pay(account_id.get(), amount.pence()));
        }
    }

    impl SeatReservationService for Recorder {
        fn reserve_seats(&self, account_id: AccountId, seats: u64) {
            self.0.lock().unwrap().push(Call::Reserve(account_id.get(), seats));
        }
    }

    fn service() -> (TicketService, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let config = Config::new(
            PriceTable::new(Money::from_pence(2000), Money::from_pence(1000), Money::ZERO),
            PurchaseRules::new(20),
        );
        let service = TicketService::new(config, recorder.clone(), recorder.clone());
        (service, recorder)
    }

    fn calls(recorder: &Recorder) -> Vec<Call> {
        recorder.0.lock().unwrap().clone()
    }

    #[test]
    fn test_payment_before_reservation() {
        let (service, recorder) = service();
        let receipt = service
            .purchase_tickets(
                4,
                &[
                    TicketTypeRequest::new(TicketType::Adult, 2),
                    TicketTypeRequest::new(TicketType::Child, 1),
                    TicketTypeRequest::new(TicketType::Infant, 1),
                ],
            )
            .unwrap();

        assert_eq!(calls(&recorder), vec![Call::Pay(4, 5000), Call::Reserve(4, 3)]);
        assert_eq!(receipt.total_price, Money::from_pence(5000));
        assert_eq!(receipt.seats_reserved, 3);
        assert_eq!(receipt.tickets.infants, 1);
    }

    #[test]
    fn test_rejection_calls_nobody() {
        let (service, recorder) = service();
        let err = service
            .purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Child, 2)])
            .unwrap_err();

        assert_eq!(err.kind(), RejectionKind::NoAdultPresent);
        assert!(calls(&recorder).is_empty());
    }

    #[test]
    fn test_quote_has_no_side_effects() {
        let (service, recorder) = service();
        let request =
            PurchaseRequest::new(1, vec![TicketTypeRequest::new(TicketType::Adult, 3)]).unwrap();

        let tally = service.quote(&request).unwrap();

        assert_eq!(tally.total_price(), Money::from_pence(6000));
        assert!(calls(&recorder).is_empty());
    }

    #[test]
    fn test_zero_account_is_rejected() {
        let (service, recorder) = service();
        let err = service
            .purchase_tickets(0, &[TicketTypeRequest::new(TicketType::Adult, 1)])
            .unwrap_err();

        assert_eq!(err.kind(), RejectionKind::InvalidAccount);
        assert!(calls(&recorder).is_empty());
    }
}
