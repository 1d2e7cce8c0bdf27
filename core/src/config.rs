//! Pricing and purchase-limit configuration.
//!
//! Loaded once at startup (from environment variables with sensible defaults)
//! and treated as immutable afterwards.

use crate::types::{Money, TicketType};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default adult ticket price in pence (£25)
pub const DEFAULT_ADULT_PRICE: u64 = 2500;
/// Default child ticket price in pence (£15)
pub const DEFAULT_CHILD_PRICE: u64 = 1500;
/// Default infant ticket price in pence (free)
pub const DEFAULT_INFANT_PRICE: u64 = 0;
/// Default maximum number of tickets in one purchase
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u64 = 25;

/// Purchase configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unit price per ticket category
    pub prices: PriceTable,
    /// Business-rule limits
    pub rules: PurchaseRules,
}

/// Unit price of each ticket category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Price of one adult ticket
    pub adult: Money,
    /// Price of one child ticket
    pub child: Money,
    /// Price of one infant ticket
    pub infant: Money,
}

/// Limits enforced by the business-rule validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRules {
    /// Maximum number of tickets (all categories) in a single purchase.
    ///
    /// Applies per transaction. Nothing stops an account from making several
    /// purchases in a row.
    pub max_tickets_per_purchase: u64,
}

impl PriceTable {
    /// Creates a price table
    #[must_use]
    pub const fn new(adult: Money, child: Money, infant: Money) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Unit price of a ticket category
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(
            Money::from_pence(DEFAULT_ADULT_PRICE),
            Money::from_pence(DEFAULT_CHILD_PRICE),
            Money::from_pence(DEFAULT_INFANT_PRICE),
        )
    }
}

impl PurchaseRules {
    /// Creates purchase rules with the given ticket cap
    #[must_use]
    pub const fn new(max_tickets_per_purchase: u64) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS_PER_PURCHASE)
    }
}

impl Config {
    /// Creates a configuration from explicit parts
    #[must_use]
    pub const fn new(prices: PriceTable, rules: PurchaseRules) -> Self {
        Self { prices, rules }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `CINEMA_ADULT_PRICE` | 2500 |
    /// | `CINEMA_CHILD_PRICE` | 1500 |
    /// | `CINEMA_INFANT_PRICE` | 0 |
    /// | `CINEMA_MAX_TICKETS_PER_PURCHASE` | 25 |
    ///
    /// Prices are in pence. A variable that is set but does not parse is
    /// logged and replaced by its default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            prices: PriceTable {
                adult: Money::from_pence(env_or("CINEMA_ADULT_PRICE", DEFAULT_ADULT_PRICE)),
                child: Money::from_pence(env_or("CINEMA_CHILD_PRICE", DEFAULT_CHILD_PRICE)),
                infant: Money::from_pence(env_or("CINEMA_INFANT_PRICE", DEFAULT_INFANT_PRICE)),
            },
            rules: PurchaseRules {
                max_tickets_per_purchase: env_or(
                    "CINEMA_MAX_TICKETS_PER_PURCHASE",
                    DEFAULT_MAX_TICKETS_PER_PURCHASE,
                ),
            },
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(
            variable = key,
            value = raw,
            default = %default,
            "Ignoring unparsable configuration value"
        );
        default
    })
}
