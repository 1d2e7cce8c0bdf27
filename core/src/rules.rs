//! Business rules applied to a tallied purchase.

use crate::config::PurchaseRules;
use crate::error::{PurchaseError, Result};
use crate::tally::Tally;

/// Checks a tally against the purchase rules.
///
/// Rules are evaluated in this order and the first violation is returned:
///
/// 1. at least one adult ticket
/// 2. no more than `max_tickets_per_purchase` tickets in total
/// 3. no more infants than adults
///
/// # Errors
///
/// [`PurchaseError::NoAdultPresent`], [`PurchaseError::TicketLimitExceeded`]
/// or [`PurchaseError::TooManyInfants`].
pub fn check_business_rules(tally: &Tally, rules: &PurchaseRules) -> Result<()> {
    if tally.adult_count() == 0 {
        return Err(PurchaseError::NoAdultPresent);
    }

    let requested = tally.total_tickets();
    if requested > rules.max_tickets_per_purchase {
        return Err(PurchaseError::TicketLimitExceeded {
            limit: rules.max_tickets_per_purchase,
            requested,
        });
    }

    if tally.infant_count() > tally.adult_count() {
        return Err(PurchaseError::TooManyInfants {
            infants: tally.infant_count(),
            adults: tally.adult_count(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceTable;
    use crate::types::{TicketType, TicketTypeRequest};

    fn tally(adults: u32, children: u32, infants: u32) -> Tally {
        Tally::from_requests(
            &[
                TicketTypeRequest::new(TicketType::Adult, adults),
                TicketTypeRequest::new(TicketType::Child, children),
                TicketTypeRequest::new(TicketType::Infant, infants),
            ],
            &PriceTable::default(),
        )
    }

    #[test]
    fn test_no_adult() {
        let rules = PurchaseRules::new(25);
        assert_eq!(
            check_business_rules(&tally(0, 2, 0), &rules),
            Err(PurchaseError::NoAdultPresent)
        );
        assert_eq!(
            check_business_rules(&tally(0, 0, 1), &rules),
            Err(PurchaseError::NoAdultPresent)
        );
    }

    #[test]
    fn test_limit_boundary() {
        let rules = PurchaseRules::new(25);
        assert_eq!(check_business_rules(&tally(20, 5, 0), &rules), Ok(()));
        assert_eq!(
            check_business_rules(&tally(20, 6, 0), &rules),
            Err(PurchaseError::TicketLimitExceeded {
                limit: 25,
                requested: 26
            })
        );
    }

    #[test]
    fn test_infants_count_towards_limit() {
        let rules = PurchaseRules::new(25);
        assert_eq!(
            check_business_rules(&tally(13, 0, 13), &rules),
            Err(PurchaseError::TicketLimitExceeded {
                limit: 25,
                requested: 26
            })
        );
    }

    #[test]
    fn test_infant_ratio_boundary() {
        let rules = PurchaseRules::new(25);
        assert_eq!(check_business_rules(&tally(5, 3, 5), &rules), Ok(()));
        assert_eq!(
            check_business_rules(&tally(1, 0, 5), &rules),
            Err(PurchaseError::TooManyInfants {
                infants: 5,
                adults: 1
            })
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Breaks the limit and the infant ratio; the limit comes first.
        let rules = PurchaseRules::new(5);
        assert!(matches!(
            check_business_rules(&tally(1, 0, 6), &rules),
            Err(PurchaseError::TicketLimitExceeded { .. })
        ));

        // No adult and over the limit; the adult rule comes first.
        assert_eq!(
            check_business_rules(&tally(0, 10, 0), &rules),
            Err(PurchaseError::NoAdultPresent)
        );
    }
}
