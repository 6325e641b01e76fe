use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::{
    config,
    declare::{CoinPrices, Currency, CurrencyQuote, PriceReport},
    error::PriceError,
    util::{
        self,
        datetime::{self, DATE_TIME_FORMAT},
    },
};

/// One coin's entry in the `simple/price` response. Every field is
/// required: a response missing any of them cannot become a report.
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct ApiCoinEntry {
    usd: f64,
    usd_24h_change: f64,
    eur: f64,
    eur_24h_change: f64,
    jpy: f64,
    jpy_24h_change: f64,
    /// unix seconds, provided once for the whole asset
    last_updated_at: i64,
}

/// Fetches the current price of the configured coin and builds the report.
///
/// Exactly one GET request is issued. The result is all-or-nothing: a fully
/// populated `PriceReport`, or a `PriceError` saying whether the transport
/// or the response shape failed.
pub async fn visit(cfg: &config::CoinGecko) -> Result<PriceReport, PriceError> {
    let url = format!(
        "{base}/simple/price?ids={id}&vs_currencies=usd,eur,jpy&include_24hr_change=true&include_last_updated_at=true",
        base = cfg.base_url,
        id = cfg.coin_id
    );

    let body = util::http::get(&url, None)
        .await
        .map_err(|cause| PriceError::Transport { cause })?;

    let entry = parse_entry(&body, &cfg.coin_id)?;

    build_report(&entry, Local::now())
}

/// Validates the body shape and extracts the configured coin's entry.
fn parse_entry(body: &str, coin_id: &str) -> Result<ApiCoinEntry, PriceError> {
    let mut data: HashMap<String, ApiCoinEntry> =
        serde_json::from_str(body).map_err(|why| PriceError::Malformed(why.to_string()))?;

    data.remove(coin_id)
        .ok_or_else(|| PriceError::Malformed(format!("missing asset key \"{}\"", coin_id)))
}

/// Builds the report from a validated entry. Numbers pass through verbatim;
/// only the provider timestamp is converted, to local time.
fn build_report(entry: &ApiCoinEntry, captured_at: DateTime<Local>) -> Result<PriceReport, PriceError> {
    let last_updated = datetime::from_unix_seconds(entry.last_updated_at).ok_or_else(|| {
        PriceError::Malformed(format!("last_updated_at {} is out of range", entry.last_updated_at))
    })?;

    let bitcoin = CoinPrices {
        usd: CurrencyQuote {
            price: entry.usd,
            change_24h: entry.usd_24h_change,
        },
        eur: CurrencyQuote {
            price: entry.eur,
            change_24h: entry.eur_24h_change,
        },
        jpy: CurrencyQuote {
            price: entry.jpy,
            change_24h: entry.jpy_24h_change,
        },
        last_updated: last_updated.format(DATE_TIME_FORMAT).to_string(),
    };

    for currency in Currency::iterator() {
        let quote = bitcoin.quote(currency);
        if quote.price < 0.0 {
            return Err(PriceError::Malformed(format!(
                "negative price {} for {}",
                quote.price,
                currency.code()
            )));
        }
    }

    Ok(PriceReport {
        captured_at: captured_at.format(DATE_TIME_FORMAT).to_string(),
        bitcoin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"bitcoin":{"usd":65000.5,"usd_24h_change":2.35,"eur":60000.1,"eur_24h_change":1.80,"jpy":9800000,"jpy_24h_change":-0.50,"last_updated_at":1700000000}}"#;

    #[test]
    fn test_build_report() {
        let entry = parse_entry(BODY, "bitcoin").expect("well-formed body");
        let captured_at = Local::now();
        let report = build_report(&entry, captured_at).expect("report should build");

        assert_eq!(report.captured_at, captured_at.format(DATE_TIME_FORMAT).to_string());

        // values pass through untouched
        assert_eq!(report.bitcoin.usd.price, 65000.5);
        assert_eq!(report.bitcoin.usd.change_24h, 2.35);
        assert_eq!(report.bitcoin.eur.price, 60000.1);
        assert_eq!(report.bitcoin.eur.change_24h, 1.80);
        assert_eq!(report.bitcoin.jpy.price, 9_800_000.0);
        assert_eq!(report.bitcoin.jpy.change_24h, -0.50);

        let expected_updated = datetime::from_unix_seconds(1_700_000_000)
            .unwrap()
            .format(DATE_TIME_FORMAT)
            .to_string();
        assert_eq!(report.bitcoin.last_updated, expected_updated);
    }

    #[test]
    fn test_summary_from_scenario_body() {
        let entry = parse_entry(BODY, "bitcoin").expect("well-formed body");
        let report = build_report(&entry, Local::now()).expect("report should build");
        let summary = report.summary();

        assert!(summary.contains("USD: $65,000.50 (2.35%)"));
        assert!(summary.contains("EUR: €60,000.10 (1.80%)"));
        assert!(summary.contains("JPY: ¥9,800,000 (-0.50%)"));
    }

    #[test]
    fn test_missing_change_field() {
        let body = BODY.replace(r#""usd_24h_change":2.35,"#, "");
        let result = parse_entry(&body, "bitcoin");

        match result {
            Err(PriceError::Malformed(why)) => assert!(why.contains("usd_24h_change")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_asset_key() {
        let body = BODY.replace(r#""bitcoin""#, r#""dogecoin""#);
        let result = parse_entry(&body, "bitcoin");

        match result {
            Err(PriceError::Malformed(why)) => assert!(why.contains("bitcoin")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_not_json() {
        let result = parse_entry("<html>rate limited</html>", "bitcoin");
        assert!(matches!(result, Err(PriceError::Malformed(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let body = BODY.replace(r#""usd":65000.5"#, r#""usd":-1.0"#);
        let entry = parse_entry(&body, "bitcoin").expect("shape is still valid");
        assert!(matches!(build_report(&entry, Local::now()), Err(PriceError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_visit_transport_error() {
        let cfg = config::CoinGecko {
            base_url: "http://127.0.0.1:9/api/v3".to_string(),
            coin_id: "bitcoin".to_string(),
        };

        match visit(&cfg).await {
            Err(PriceError::Transport { .. }) => {}
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
