//! # Cinema Tickets Core
//!
//! Validation, pricing and booking of cinema ticket purchases.
//!
//! A purchase is a positive account identifier plus an ordered list of
//! `(ticket type, count)` line items. It goes through a fixed pipeline:
//!
//! 1. **Structural validation** ([`validation`]): account present and
//!    positive, at least one line item, every line item well formed
//! 2. **Tally** ([`tally`]): one fold over the line items producing adult,
//!    child and infant counts and the total price
//! 3. **Business rules** ([`rules`]): at least one adult, ticket cap per
//!    purchase, no more infants than adults
//! 4. **Payment**, then **seat reservation**, through the collaborators in
//!    [`environment`]
//!
//! Any failing step returns a typed [`PurchaseError`] and the remaining steps
//! do not run, so a rejected purchase never reaches a collaborator.
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{
//!     AccountId, Config, Money, SeatReservationService, TicketPaymentService, TicketService,
//!     TicketType, TicketTypeRequest,
//! };
//! use std::sync::Arc;
//!
//! struct Payments;
//! impl TicketPaymentService for Payments {
//!     fn make_payment(&self, _account_id: AccountId, _amount: Money) {}
//! }
//!
//! struct Seats;
//! impl SeatReservationService for Seats {
//!     fn reserve_seats(&self, _account_id: AccountId, _seats: u64) {}
//! }
//!
//! let service = TicketService::new(Config::default(), Arc::new(Payments), Arc::new(Seats));
//! let receipt = service
//!     .purchase_tickets(
//!         1,
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 2),
//!             TicketTypeRequest::new(TicketType::Infant, 1),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(receipt.total_price, Money::from_pence(5000));
//! assert_eq!(receipt.seats_reserved, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod environment;
pub mod error;
pub mod request;
pub mod rules;
pub mod service;
pub mod tally;
pub mod types;
pub mod validation;

pub use config::{Config, PriceTable, PurchaseRules};
pub use environment::{PurchaseEnvironment, SeatReservationService, TicketPaymentService};
pub use error::{PurchaseError, RejectionKind, Result};
pub use request::{PurchaseRequest, UncheckedPurchaseRequest};
pub use service::TicketService;
pub use tally::Tally;
pub use types::{AccountId, Money, PurchaseReceipt, TicketCounts, TicketType, TicketTypeRequest};
