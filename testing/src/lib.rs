//! # Cinema Tickets Testing
//!
//! Testing utilities and helpers for cinema ticket purchases.
//!
//! This crate provides:
//! - Recording implementations of the collaborator traits
//! - Test helpers and request builders
//! - Property-based testing strategies
//! - A Given-When-Then harness for purchases ([`PurchaseTest`])
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_testing::helpers::{adults, infants, test_service};
//! use cinema_tickets_testing::mocks::CollaboratorCall;
//! use cinema_tickets_core::Money;
//!
//! let (service, calls) = test_service();
//! service.purchase_tickets(1, &[adults(2), infants(1)]).unwrap();
//!
//! assert_eq!(
//!     calls.calls(),
//!     vec![
//!         CollaboratorCall::Payment { account_id: 1, amount: Money::from_pence(4100) },
//!         CollaboratorCall::SeatReservation { account_id: 1, seats: 2 },
//!     ]
//! );
//! ```


pub use purchase_test::{PurchaseTest, assertions};

/// Recording collaborators.
///
/// Both mocks append to a shared [`CallLog`](mocks::CallLog), so a test can
/// assert on the relative order of payment and reservation calls.
pub mod mocks {
    use cinema_tickets_core::{AccountId, Money, SeatReservationService, TicketPaymentService};
    use std::sync::{Arc, Mutex, PoisonError};

    /// One call made to a collaborator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CollaboratorCall {
        /// `make_payment(account_id, amount)`
        Payment {
            /// Account charged
            account_id: u64,
            /// Amount charged
            amount: Money,
        },
        /// `reserve_seats(account_id, seats)`
        SeatReservation {
            /// Account the seats were reserved for
            account_id: u64,
            /// Seats reserved
            seats: u64,
        },
    }

    /// Ordered log of collaborator calls, shared between mocks.
    #[derive(Debug, Clone, Default)]
    pub struct CallLog {
        calls: Arc<Mutex<Vec<CollaboratorCall>>>,
    }

    impl CallLog {
        /// Create an empty log
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn record(&self, call: CollaboratorCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }

        /// Snapshot of all calls so far, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<CollaboratorCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Whether no collaborator has been called
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_empty()
        }

        /// Forget all recorded calls (for test isolation)
        pub fn clear(&self) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    /// Payment service that records every charge.
    #[derive(Debug, Clone)]
    pub struct RecordingPaymentService {
        log: CallLog,
    }

    impl RecordingPaymentService {
        /// Create a payment mock writing to `log`
        #[must_use]
        pub const fn new(log: CallLog) -> Self {
            Self { log }
        }
    }

    impl TicketPaymentService for RecordingPaymentService {
        fn make_payment(&self, account_id: AccountId, amount: Money) {
            self.log.record(CollaboratorCall::Payment {
                account_id: account_id.get(),
                amount,
            });
        }
    }

    /// Seat-reservation service that records every reservation.
    #[derive(Debug, Clone)]
    pub struct RecordingSeatReservationService {
        log: CallLog,
    }

    impl RecordingSeatReservationService {
        /// Create a reservation mock writing to `log`
        #[must_use]
        pub const fn new(log: CallLog) -> Self {
            Self { log }
        }
    }

    impl SeatReservationService for RecordingSeatReservationService {
        fn reserve_seats(&self, account_id: AccountId, seats: u64) {
            self.log.record(CollaboratorCall::SeatReservation {
                account_id: account_id.get(),
                seats,
            });
        }
    }
}

/// Test helpers and request builders.
pub mod helpers {
    use super::mocks::{CallLog, RecordingPaymentService, RecordingSeatReservationService};
    use cinema_tickets_core::{
        Config, Money, PriceTable, PurchaseRules, TicketService, TicketType, TicketTypeRequest,
    };
    use std::sync::Arc;

    /// Adult price used by [`test_config`] (£20)
    pub const TEST_ADULT_PRICE: Money = Money::from_pence(2000);
    /// Child price used by [`test_config`] (£10)
    pub const TEST_CHILD_PRICE: Money = Money::from_pence(1000);
    /// Infant price used by [`test_config`] (£1)
    ///
    /// Non-zero so tests can tell whether infants were priced at all.
    pub const TEST_INFANT_PRICE: Money = Money::from_pence(100);
    /// Ticket cap used by [`test_config`]
    pub const TEST_TICKET_LIMIT: u64 = 20;

    /// Deterministic configuration for tests, independent of the environment.
    #[must_use]
    pub const fn test_config() -> Config {
        Config::new(
            PriceTable::new(TEST_ADULT_PRICE, TEST_CHILD_PRICE, TEST_INFANT_PRICE),
            PurchaseRules::new(TEST_TICKET_LIMIT),
        )
    }

    /// A [`TicketService`] with [`test_config`] and recording collaborators.
    #[must_use]
    pub fn test_service() -> (TicketService, CallLog) {
        test_service_with(test_config())
    }

    /// A [`TicketService`] with the given config and recording collaborators.
    #[must_use]
    pub fn test_service_with(config: Config) -> (TicketService, CallLog) {
        let log = CallLog::new();
        let service = TicketService::new(
            config,
            Arc::new(RecordingPaymentService::new(log.clone())),
            Arc::new(RecordingSeatReservationService::new(log.clone())),
        );
        (service, log)
    }

    /// `count` adult tickets
    #[must_use]
    pub const fn adults(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Adult, count)
    }

    /// `count` child tickets
    #[must_use]
    pub const fn children(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Child, count)
    }

    /// `count` infant tickets
    #[must_use]
    pub const fn infants(count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Infant, count)
    }

    /// Install a test-friendly tracing subscriber.
    ///
    /// Safe to call from every test; only the first call installs anything.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "cinema_tickets_core=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use cinema_tickets_core::{TicketType, TicketTypeRequest};
    use proptest::prelude::*;

    /// Any ticket category
    pub fn ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Adult),
            Just(TicketType::Child),
            Just(TicketType::Infant),
        ]
    }

    /// A line item of any category with `0..max_count` tickets
    pub fn ticket_request(max_count: u32) -> impl Strategy<Value = TicketTypeRequest> {
        (ticket_type(), 0..max_count).prop_map(|(t, n)| TicketTypeRequest::new(t, n))
    }

    /// A non-empty list of line items, each with `0..max_count` tickets
    pub fn ticket_requests(max_count: u32) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(ticket_request(max_count), 1..8)
    }

    /// `(adults, children, infants)` that pass every business rule under `limit`.
    ///
    /// `limit` must be at least 1.
    pub fn admissible_counts(limit: u32) -> impl Strategy<Value = (u32, u32, u32)> {
        (1..=limit)
            .prop_flat_map(move |adults| {
                let infants_max = adults.min(limit - adults);
                (Just(adults), 0..=infants_max)
            })
            .prop_flat_map(move |(adults, infants)| {
                (Just(adults), 0..=(limit - adults - infants), Just(infants))
            })
    }
}

pub use helpers::{adults, children, infants, test_config, test_service};
pub use mocks::{
    CallLog, CollaboratorCall, RecordingPaymentService, RecordingSeatReservationService,
};
