//! Per-call ticket tally.
//!
//! A [`Tally`] is built fresh for every purchase by folding the line items in
//! input order. It never outlives the call that created it.

use crate::config::PriceTable;
use crate::types::{Money, TicketCounts, TicketType, TicketTypeRequest};

/// Running ticket counts and total price of one purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    adult_count: u64,
    child_count: u64,
    infant_count: u64,
    seats: u64,
    total_price: Money,
}

impl Tally {
    /// Folds line items into a tally using the given prices.
    ///
    /// Counts and price saturate instead of overflowing.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest], prices: &PriceTable) -> Self {
        requests
            .iter()
            .fold(Self::default(), |tally, request| tally.add(*request, prices))
    }

    /// Adds one line item.
    #[must_use]
    pub fn add(mut self, request: TicketTypeRequest, prices: &PriceTable) -> Self {
        let count = request.count();
        let ticket_type = request.ticket_type();

        let counter = match ticket_type {
            TicketType::Adult => &mut self.adult_count,
            TicketType::Child => &mut self.child_count,
            TicketType::Infant => &mut self.infant_count,
        };
        *counter = counter.saturating_add(u64::from(count));
        if ticket_type.occupies_seat() {
            self.seats = self.seats.saturating_add(u64::from(count));
        }

        let line_price = prices.price_of(ticket_type).saturating_multiply(count);
        self.total_price = self.total_price.saturating_add(line_price);
        self
    }

    /// Adult tickets
    #[must_use]
    pub const fn adult_count(&self) -> u64 {
        self.adult_count
    }

    /// Child tickets
    #[must_use]
    pub const fn child_count(&self) -> u64 {
        self.child_count
    }

    /// Infant tickets
    #[must_use]
    pub const fn infant_count(&self) -> u64 {
        self.infant_count
    }

    /// Tickets across all categories
    #[must_use]
    pub const fn total_tickets(&self) -> u64 {
        self.counts().total()
    }

    /// Seats to reserve. Infants sit on an adult's lap.
    #[must_use]
    pub const fn seats_to_reserve(&self) -> u64 {
        self.seats
    }

    /// Amount to charge
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// Counts by category
    #[must_use]
    pub const fn counts(&self) -> TicketCounts {
        TicketCounts {
            adults: self.adult_count,
            children: self.child_count,
            infants: self.infant_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prices() -> PriceTable {
        PriceTable::new(
            Money::from_pence(2500),
            Money::from_pence(1500),
            Money::from_pence(300),
        )
    }

    fn req(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, count)
    }

    #[test]
    fn test_empty_tally() {
        let tally = Tally::from_requests(&[], &prices());
        assert_eq!(tally, Tally::default());
        assert_eq!(tally.total_price(), Money::ZERO);
    }

    #[test]
    fn test_mixed_tally() {
        let tally = Tally::from_requests(
            &[
                req(TicketType::Adult, 5),
                req(TicketType::Child, 3),
                req(TicketType::Infant, 5),
            ],
            &prices(),
        );

        assert_eq!(tally.adult_count(), 5);
        assert_eq!(tally.child_count(), 3);
        assert_eq!(tally.infant_count(), 5);
        assert_eq!(tally.total_tickets(), 13);
        assert_eq!(tally.seats_to_reserve(), 8);
        assert_eq!(tally.total_price(), Money::from_pence(5 * 2500 + 3 * 1500 + 5 * 300));
    }

    #[test]
    fn test_infant_price_uses_infant_count() {
        // Children and infants priced differently so a mix-up shows.
        let tally = Tally::from_requests(
            &[
                req(TicketType::Adult, 1),
                req(TicketType::Child, 4),
                req(TicketType::Infant, 1),
            ],
            &prices(),
        );
        assert_eq!(tally.total_price(), Money::from_pence(2500 + 4 * 1500 + 300));
    }

    #[test]
    fn test_infants_only_reserve_no_seats() {
        let tally = Tally::from_requests(&[req(TicketType::Infant, 4)], &prices());
        assert_eq!(tally.infant_count(), 4);
        assert_eq!(tally.seats_to_reserve(), 0);
    }

    #[test]
    fn test_repeated_categories_accumulate() {
        let tally = Tally::from_requests(
            &[
                req(TicketType::Adult, 1),
                req(TicketType::Adult, 2),
                req(TicketType::Child, 0),
            ],
            &prices(),
        );
        assert_eq!(tally.adult_count(), 3);
        assert_eq!(tally.child_count(), 0);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let expensive = PriceTable::new(
            Money::from_pence(u64::MAX),
            Money::from_pence(u64::MAX),
            Money::ZERO,
        );
        let tally = Tally::from_requests(
            &[req(TicketType::Adult, u32::MAX), req(TicketType::Child, u32::MAX)],
            &expensive,
        );
        assert_eq!(tally.total_price(), Money::from_pence(u64::MAX));
        assert_eq!(tally.total_tickets(), 2 * u64::from(u32::MAX));
    }

    fn any_ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Adult),
            Just(TicketType::Child),
            Just(TicketType::Infant),
        ]
    }

    fn any_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(
            (any_ticket_type(), 0_u32..50).prop_map(|(t, n)| TicketTypeRequest::new(t, n)),
            0..12,
        )
    }

    proptest! {
        #[test]
        fn prop_tally_is_deterministic(requests in any_requests()) {
            let first = Tally::from_requests(&requests, &prices());
            let second = Tally::from_requests(&requests, &prices());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_order_does_not_matter(requests in any_requests()) {
            let mut reversed = requests.clone();
            reversed.reverse();
            prop_assert_eq!(
                Tally::from_requests(&requests, &prices()),
                Tally::from_requests(&reversed, &prices())
            );
        }

        #[test]
        fn prop_price_matches_counts(requests in any_requests()) {
            let tally = Tally::from_requests(&requests, &prices());
            let expected = tally.adult_count() * 2500
                + tally.child_count() * 1500
                + tally.infant_count() * 300;
            prop_assert_eq!(tally.total_price().pence(), expected);
            prop_assert_eq!(
                tally.seats_to_reserve(),
                tally.adult_count() + tally.child_count()
            );
        }
    }
}
