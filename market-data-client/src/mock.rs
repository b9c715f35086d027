use crate::Quote;

/// Deterministic FNV-1a hash of the ticker, used to derive every
/// synthetic field so repeated calls agree.
fn seed(ticker: &str) -> u64 {
    ticker
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

/// Generate a plausible synthetic quote for a ticker. Pure function:
/// the same ticker always produces the same record.
pub fn mock_quote(ticker: &str) -> Quote {
    let seed = seed(ticker);

    let price = 15.0 + (seed % 48_500) as f64 / 100.0;
    let change_pct = ((seed >> 8) % 1001) as f64 / 100.0 - 5.0;
    let change = price * change_pct / 100.0;
    let market_cap = (10 + (seed >> 16) % 1990) as f64 * 1e9;
    let pe_ratio = 8.0 + ((seed >> 24) % 520) as f64 / 10.0;

    Quote {
        ticker: ticker.to_string(),
        name: format!("{} Corporation", ticker),
        price,
        change: Some(change),
        change_pct: Some(change_pct),
        market_cap: Some(market_cap),
        pe_ratio: Some(pe_ratio),
        week52_high: Some(price * 1.25),
        week52_low: Some(price * 0.75),
        is_mock: true,
    }
}

/// Generate mock quotes for a batch of tickers, preserving input order.
pub fn mock_quotes(tickers: &[String]) -> Vec<Quote> {
    tickers.iter().map(|ticker| mock_quote(ticker)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_quote_is_deterministic() {
        let first = mock_quote("NVDA");
        let second = mock_quote("NVDA");
        assert_eq!(first, second);
    }

    #[test]
    fn test_mock_quote_is_flagged_and_populated() {
        let quote = mock_quote("AAPL");

        assert!(quote.is_mock);
        assert!(quote.price > 0.0);
        assert!(quote.change.is_some());
        assert!(quote.change_pct.is_some());
        assert!(quote.market_cap.is_some());
        assert!(quote.pe_ratio.is_some());
        assert!(quote.week52_high.unwrap() > quote.week52_low.unwrap());
    }

    #[test]
    fn test_different_tickers_differ() {
        let a = mock_quote("AAPL");
        let b = mock_quote("MSFT");
        assert_ne!(a.price, b.price);
    }
}
