use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::{HistoricalBar, Listing, StockQuote};
use crate::utils::round_to;

/// Listings quoted by `/stocks`, with the base price each quote jitters around.
pub const LISTINGS: [Listing; 8] = [
    Listing { symbol: "AAPL", name: "Apple Inc.", base_price: 180.0 },
    Listing { symbol: "GOOGL", name: "Alphabet Inc.", base_price: 140.0 },
    Listing { symbol: "MSFT", name: "Microsoft Corp.", base_price: 400.0 },
    Listing { symbol: "AMZN", name: "Amazon.com Inc.", base_price: 150.0 },
    Listing { symbol: "TSLA", name: "Tesla Inc.", base_price: 250.0 },
    Listing { symbol: "NVDA", name: "NVIDIA Corp.", base_price: 800.0 },
    Listing { symbol: "META", name: "Meta Platforms Inc.", base_price: 350.0 },
    Listing { symbol: "NFLX", name: "Netflix Inc.", base_price: 500.0 },
];

/// Opening reference for the first bar of every generated series.
pub const HISTORY_BASE_PRICE: f64 = 100.0;

pub const DEFAULT_HISTORY_DAYS: i64 = 30;

pub fn generate_quotes<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<StockQuote> {
    LISTINGS
        .iter()
        .map(|listing| generate_quote(rng, listing, now))
        .collect()
}

pub fn generate_quote<R: Rng + ?Sized>(
    rng: &mut R,
    listing: &Listing,
    now: DateTime<Utc>,
) -> StockQuote {
    let change: f64 = rng.random_range(-5.0..=5.0);
    let change_percent = change / listing.base_price * 100.0;
    let price = listing.base_price + change;
    let shares_outstanding = rng.random_range(1_000_000_000u64..=3_000_000_000) as f64;

    StockQuote {
        id: Uuid::new_v4(),
        symbol: listing.symbol.to_string(),
        name: listing.name.to_string(),
        price: round_to(price, 2),
        change: round_to(change, 2),
        change_percent: round_to(change_percent, 2),
        volume: rng.random_range(1_000_000..=50_000_000),
        market_cap: round_to(price * shares_outstanding, 2),
        timestamp: now,
    }
}

/// Builds `days` chained daily bars ending on `today`.
///
/// Each bar opens within +/-2 of the previous close (the first one of
/// [`HISTORY_BASE_PRICE`]). A non-positive `days` yields an empty series.
pub fn generate_history<R: Rng + ?Sized>(
    rng: &mut R,
    days: i64,
    today: NaiveDate,
) -> Vec<HistoricalBar> {
    if days <= 0 {
        return Vec::new();
    }

    let Some(first_day) = today.checked_sub_days(Days::new(days as u64 - 1)) else {
        return Vec::new();
    };

    let mut base_price = HISTORY_BASE_PRICE;
    let mut bars = Vec::new();

    for date in first_day.iter_days().take(days as usize) {
        let open = base_price + rng.random_range(-2.0..=2.0);
        let high = open + rng.random_range(0.0..=3.0);
        let low = open - rng.random_range(0.0..=3.0);
        let close = open + rng.random_range(-2.0..=2.0);

        bars.push(HistoricalBar {
            date: date.format("%Y-%m-%d").to_string(),
            open: round_to(open, 2),
            high: round_to(high, 2),
            low: round_to(low, 2),
            close: round_to(close, 2),
            volume: rng.random_range(1_000_000..=10_000_000),
        });

        // unrounded close carries into the next bar
        base_price = close;
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_quotes_cover_every_listing_in_order() {
        let quotes = generate_quotes(&mut rng(), Utc::now());
        let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "NVDA", "META", "NFLX"]);
    }

    #[test]
    fn test_change_percent_tracks_base_price() {
        let mut rng = rng();
        for _ in 0..50 {
            for (quote, listing) in generate_quotes(&mut rng, Utc::now()).iter().zip(LISTINGS.iter()) {
                let expected = quote.change / listing.base_price * 100.0;
                assert!(
                    (quote.change_percent - expected).abs() < 0.01,
                    "{}: change_percent {} vs expected {}",
                    quote.symbol, quote.change_percent, expected
                );
                assert!((quote.price - (listing.base_price + quote.change)).abs() < 0.011);
            }
        }
    }

    #[test]
    fn test_quote_ranges() {
        let mut rng = rng();
        for quote in (0..50).flat_map(|_| generate_quotes(&mut rng, Utc::now())) {
            assert!(quote.change >= -5.0 && quote.change <= 5.0);
            assert!((1_000_000..=50_000_000).contains(&quote.volume));
            let shares = quote.market_cap / quote.price;
            assert!(shares >= 1e9 * 0.9999 && shares <= 3e9 * 1.0001);
        }
    }

    #[test]
    fn test_history_has_requested_length_and_consecutive_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let bars = generate_history(&mut rng(), 30, today);

        assert_eq!(bars.len(), 30);
        assert_eq!(bars.last().unwrap().date, "2024-03-01");
        // crosses the leap day
        assert_eq!(bars[0].date, "2024-02-01");
        assert!(bars.iter().any(|b| b.date == "2024-02-29"));

        for pair in bars.windows(2) {
            let prev = NaiveDate::parse_from_str(&pair[0].date, "%Y-%m-%d").unwrap();
            let next = NaiveDate::parse_from_str(&pair[1].date, "%Y-%m-%d").unwrap();
            assert_eq!(next - prev, chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_history_chains_close_into_next_open() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let bars = generate_history(&mut rng(), 200, today);

        assert!((bars[0].open - HISTORY_BASE_PRICE).abs() <= 2.01);
        for pair in bars.windows(2) {
            // rounding on both sides adds at most 0.01
            assert!((pair[1].open - pair[0].close).abs() <= 2.01);
        }
        for bar in &bars {
            assert!(bar.high >= bar.open);
            assert!(bar.low <= bar.open);
            assert!((1_000_000..=10_000_000).contains(&bar.volume));
        }
    }

    #[test]
    fn test_history_non_positive_days_is_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(generate_history(&mut rng(), 0, today).is_empty());
        assert!(generate_history(&mut rng(), -7, today).is_empty());
    }

    #[test]
    fn test_history_single_day_is_today() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let bars = generate_history(&mut rng(), 1, today);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, "2025-01-01");
    }
}
