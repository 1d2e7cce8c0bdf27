//! Box office command-line demo.
//!
//! Reads a purchase request as JSON, runs it through the ticket service and
//! prints the receipt.
//!
//! ```text
//! box-office purchase.json
//! echo '{"accountId":1,"ticketTypeRequests":[{"type":"ADULT","noOfTickets":2}]}' | box-office
//! ```
//!
//! Prices and the ticket cap come from `CINEMA_*` environment variables, see
//! `Config::from_env`.

mod thirdparty;

use cinema_tickets_core::{Config, TicketService, UncheckedPurchaseRequest};
use std::io::Read;
use std::process::ExitCode;
use thirdparty::{LoggingPaymentService, LoggingSeatReservationService};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Failure to obtain a purchase request
#[derive(Debug, Error)]
enum InputError {
    /// Reading the file or stdin failed
    #[error("Failed to read purchase request from {source_name}: {error}")]
    Read {
        source_name: String,
        error: std::io::Error,
    },
    /// The input is not a JSON purchase request
    #[error("Purchase request is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "box_office=info,cinema_tickets_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        adult_price = %config.prices.adult,
        child_price = %config.prices.child,
        infant_price = %config.prices.infant,
        max_tickets = config.rules.max_tickets_per_purchase,
        "Configuration loaded"
    );

    let request = match read_request(std::env::args().nth(1)) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "Could not read purchase request");
            return ExitCode::from(2);
        }
    };

    let service = TicketService::new(
        config,
        LoggingPaymentService::shared(),
        LoggingSeatReservationService::shared(),
    );

    match service.purchase_unchecked(&request) {
        Ok(receipt) => match serde_json::to_string_pretty(&receipt) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Could not serialize receipt");
                ExitCode::FAILURE
            }
        },
        Err(rejection) => {
            eprintln!("Purchase rejected ({}): {rejection}", rejection.kind());
            ExitCode::FAILURE
        }
    }
}

/// Reads the request from `path`, or from stdin when no path is given.
fn read_request(path: Option<String>) -> Result<UncheckedPurchaseRequest, InputError> {
    let body = match path {
        Some(path) => std::fs::read_to_string(&path).map_err(|error| InputError::Read {
            source_name: path,
            error,
        })?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .map_err(|error| InputError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            body
        }
    };
    parse_request(&body)
}

fn parse_request(body: &str) -> Result<UncheckedPurchaseRequest, InputError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinema_tickets_core::RejectionKind;

    fn service() -> TicketService {
        TicketService::new(
            Config::default(),
            LoggingPaymentService::shared(),
            LoggingSeatReservationService::shared(),
        )
    }

    #[test]
    fn test_parse_and_purchase() {
        let request = parse_request(
            r#"{"accountId": 1, "ticketTypeRequests": [{"type": "ADULT", "noOfTickets": 2}]}"#,
        )
        .unwrap();

        let receipt = service().purchase_unchecked(&request).unwrap();
        assert_eq!(receipt.seats_reserved, 2);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(parse_request("not json"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_wrongly_typed_account_reaches_validator() {
        let request = parse_request(r#"{"accountId": "abc", "ticketTypeRequests": []}"#).unwrap();
        let err = service().purchase_unchecked(&request).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::InvalidAccount);
    }

    #[test]
    fn test_missing_file() {
        let err = read_request(Some("/definitely/not/here.json".to_string())).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
