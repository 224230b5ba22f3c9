// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static reference data shipped with the application.

use once_cell::sync::Lazy;

use crate::models::{CompareStock, StockResult};

pub const SECTORS: &[&str] = &["Technologie", "Santé", "Consommation", "Finance"];

/// Market-cap floors offered by the screener, in billions.
pub const MARKET_CAP_OPTIONS: &[u32] = &[10, 100, 500, 1000];

/// Watchlist colors as `(value, label)`.
pub const WATCHLIST_COLORS: &[(&str, &str)] = &[
    ("bg-blue-500", "Bleu"),
    ("bg-green-500", "Vert"),
    ("bg-purple-500", "Violet"),
    ("bg-orange-500", "Orange"),
    ("bg-pink-500", "Rose"),
    ("bg-yellow-500", "Jaune"),
];

pub const DEFAULT_WATCHLIST_COLOR: &str = "bg-blue-500";

pub const MAX_COMPARED: usize = 5;

#[allow(clippy::too_many_arguments)]
fn screened(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    pe: f64,
    roic: f64,
    fcf_yield: f64,
    debt_to_equity: f64,
    revenue_growth: f64,
    net_margin: f64,
    dividend_yield: f64,
    market_cap: f64,
    sector: &str,
) -> StockResult {
    StockResult {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        pe,
        roic,
        fcf_yield,
        debt_to_equity,
        revenue_growth,
        net_margin,
        dividend_yield,
        market_cap,
        sector: sector.to_string(),
    }
}

pub static SCREENER_UNIVERSE: Lazy<Vec<StockResult>> = Lazy::new(|| {
    vec![
        screened("AAPL", "Apple Inc.", 178.52, 2.34, 28.5, 56.2, 3.8, 1.87, 8.1, 25.3, 0.5, 2800e9, "Technologie"),
        screened("MSFT", "Microsoft Corporation", 378.91, 1.23, 35.2, 31.4, 2.9, 0.42, 12.5, 36.7, 0.8, 2820e9, "Technologie"),
        screened("GOOGL", "Alphabet Inc.", 142.56, -0.87, 23.8, 22.1, 4.2, 0.11, 15.2, 21.5, 0.0, 1780e9, "Technologie"),
        screened("JNJ", "Johnson & Johnson", 156.23, 0.45, 14.2, 18.5, 5.1, 0.44, 3.2, 18.9, 3.0, 380e9, "Santé"),
        screened("PG", "Procter & Gamble", 152.87, 0.32, 25.1, 17.8, 4.5, 0.78, 4.5, 17.2, 2.5, 360e9, "Consommation"),
        screened("V", "Visa Inc.", 278.45, 1.89, 29.8, 25.3, 3.2, 0.52, 11.8, 52.1, 0.8, 580e9, "Finance"),
        screened("KO", "Coca-Cola Company", 58.92, -0.12, 22.5, 12.4, 4.8, 1.85, 5.8, 22.3, 3.1, 255e9, "Consommation"),
        screened("UNH", "UnitedHealth Group", 512.34, 3.21, 18.9, 19.2, 4.1, 0.71, 12.1, 5.8, 1.4, 470e9, "Santé"),
        screened("HD", "Home Depot", 345.67, 2.45, 21.3, 42.5, 3.6, 8.21, 2.8, 10.2, 2.5, 345e9, "Consommation"),
        screened("MA", "Mastercard Inc.", 425.89, 2.12, 34.2, 48.7, 2.8, 2.15, 13.5, 45.2, 0.6, 420e9, "Finance"),
        screened("NVDA", "NVIDIA Corporation", 495.23, 8.45, 65.2, 38.9, 1.2, 0.41, 122.4, 55.6, 0.0, 1220e9, "Technologie"),
        screened("BRK.B", "Berkshire Hathaway", 356.78, 1.23, 8.5, 9.8, 6.2, 0.25, 8.9, 15.3, 0.0, 780e9, "Finance"),
    ]
});

fn compared(symbol: &str, name: &str, v: [f64; 26]) -> CompareStock {
    let [
        price,
        change,
        market_cap,
        pe,
        forward_pe,
        peg,
        price_to_book,
        price_to_sales,
        ev_to_ebitda,
        roic,
        roe,
        roa,
        gross_margin,
        operating_margin,
        net_margin,
        fcf_yield,
        fcf_margin,
        revenue_growth,
        eps_growth,
        debt_to_equity,
        debt_to_ebitda,
        interest_coverage,
        current_ratio,
        dividend_yield,
        payout_ratio,
        beta,
    ] = v;
    CompareStock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        market_cap,
        pe,
        forward_pe,
        peg,
        price_to_book,
        price_to_sales,
        ev_to_ebitda,
        roic,
        roe,
        roa,
        gross_margin,
        operating_margin,
        net_margin,
        fcf_yield,
        fcf_margin,
        revenue_growth,
        eps_growth,
        debt_to_equity,
        debt_to_ebitda,
        interest_coverage,
        current_ratio,
        dividend_yield,
        payout_ratio,
        beta,
    }
}

// Column order: price, change, market_cap, pe, forward_pe, peg, p/b, p/s, ev/ebitda,
// roic, roe, roa, gross, operating, net, fcf_yield, fcf_margin, rev_growth, eps_growth,
// d/e, debt/ebitda, interest_coverage, current_ratio, dividend_yield, payout, beta
pub static COMPARE_UNIVERSE: Lazy<Vec<CompareStock>> = Lazy::new(|| {
    vec![
        compared("AAPL", "Apple Inc.", [178.52, 2.34, 2800e9, 28.5, 25.2, 2.1, 45.2, 7.2, 21.5, 56.2, 147.2, 28.5, 43.8, 30.2, 25.3, 3.8, 26.1, 8.1, 12.5, 1.87, 1.2, 29.5, 0.99, 0.5, 15.2, 1.28]),
        compared("MSFT", "Microsoft Corporation", [378.91, 1.23, 2820e9, 35.2, 29.8, 2.4, 12.8, 12.1, 24.2, 31.4, 38.5, 19.2, 69.8, 42.1, 36.7, 2.9, 32.5, 12.5, 18.2, 0.42, 0.8, 42.1, 1.77, 0.8, 27.5, 0.91]),
        compared("GOOGL", "Alphabet Inc.", [142.56, -0.87, 1780e9, 23.8, 19.5, 1.2, 5.8, 5.9, 15.2, 22.1, 24.8, 14.2, 56.2, 27.5, 21.5, 4.2, 22.8, 15.2, 25.8, 0.11, 0.3, 185.2, 2.12, 0.0, 0.0, 1.05]),
        compared("NVDA", "NVIDIA Corporation", [495.23, 8.45, 1220e9, 65.2, 35.8, 0.8, 28.5, 25.8, 52.1, 38.9, 69.5, 32.1, 72.5, 54.2, 55.6, 1.2, 38.2, 122.4, 168.5, 0.41, 0.5, 85.2, 4.17, 0.0, 1.2, 1.72]),
        compared("META", "Meta Platforms Inc.", [355.82, 3.21, 920e9, 25.2, 20.1, 1.1, 6.2, 6.8, 14.5, 24.5, 28.2, 16.8, 80.5, 35.2, 29.1, 3.5, 28.5, 21.5, 42.8, 0.28, 0.6, 52.1, 2.68, 0.5, 8.5, 1.35]),
        compared("AMZN", "Amazon.com Inc.", [178.25, 1.85, 1850e9, 62.5, 42.1, 1.8, 8.5, 3.2, 18.5, 12.5, 15.2, 5.8, 46.8, 6.2, 5.1, 2.8, 8.5, 12.8, 85.2, 0.58, 1.2, 12.5, 1.05, 0.0, 0.0, 1.18]),
        compared("TSLA", "Tesla Inc.", [248.52, -2.15, 790e9, 72.5, 58.2, 3.2, 12.8, 8.2, 45.2, 15.8, 22.5, 8.5, 18.2, 9.2, 10.5, 1.5, 5.2, 18.5, -25.2, 0.12, 0.8, 28.5, 1.72, 0.0, 0.0, 2.05]),
    ]
});

pub fn screener_stock(symbol: &str) -> Option<&'static StockResult> {
    SCREENER_UNIVERSE
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(symbol.trim()))
}

pub fn compare_stock(symbol: &str) -> Option<&'static CompareStock> {
    COMPARE_UNIVERSE
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(symbol.trim()))
}

pub fn is_watchlist_color(value: &str) -> bool {
    WATCHLIST_COLORS.iter().any(|(v, _)| *v == value)
}
