// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::catalog::{compare_stock, screener_stock};
use crate::error::LookupError;

const DEFAULT_SECTOR: &str = "Technologie";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    pub pe: f64,
    pub eps: f64,
    pub dividend_yield: f64,
    pub beta: f64,
    pub sector: String,
}

pub trait QuoteSource {
    fn quote(&self, symbol: &str) -> Result<StockQuote, LookupError>;
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Serves quotes for the comparator universe.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogQuotes;

impl QuoteSource for CatalogQuotes {
    fn quote(&self, symbol: &str) -> Result<StockQuote, LookupError> {
        let stock =
            compare_stock(symbol).ok_or_else(|| LookupError::UnknownSymbol(symbol.trim().to_uppercase()))?;
        let sector = screener_stock(&stock.symbol)
            .map(|s| s.sector.clone())
            .unwrap_or_else(|| DEFAULT_SECTOR.to_string());
        Ok(StockQuote {
            symbol: stock.symbol.clone(),
            name: stock.name.clone(),
            price: stock.price,
            change: stock.change,
            change_percent: if stock.price == 0.0 {
                0.0
            } else {
                round2(stock.change / stock.price * 100.0)
            },
            market_cap: stock.market_cap,
            pe: stock.pe,
            eps: if stock.pe == 0.0 {
                0.0
            } else {
                round2(stock.price / stock.pe)
            },
            dividend_yield: stock.dividend_yield,
            beta: stock.beta,
            sector,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Good,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub label: &'static str,
    pub value: f64,
    pub description: &'static str,
    pub status: IndicatorStatus,
}

fn grade(good: bool, neutral: bool) -> IndicatorStatus {
    if good {
        IndicatorStatus::Good
    } else if neutral {
        IndicatorStatus::Neutral
    } else {
        IndicatorStatus::Warning
    }
}

pub fn indicators(q: &StockQuote) -> Vec<Indicator> {
    vec![
        Indicator {
            label: "P/E Ratio",
            value: q.pe,
            description: "Ratio cours/bénéfice",
            status: grade(q.pe < 20.0, q.pe < 35.0),
        },
        Indicator {
            label: "EPS",
            value: q.eps,
            description: "Bénéfice par action",
            status: grade(q.eps > 5.0, q.eps > 2.0),
        },
        Indicator {
            label: "Beta",
            value: q.beta,
            description: "Volatilité par rapport au marché",
            status: grade(q.beta < 1.0, q.beta < 1.5),
        },
        Indicator {
            label: "Dividende",
            value: q.dividend_yield,
            description: "Rendement du dividende",
            status: grade(q.dividend_yield > 2.0, q.dividend_yield > 0.0),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub quote: StockQuote,
    pub indicators: Vec<Indicator>,
}

pub fn analyze<Q: QuoteSource + ?Sized>(symbol: &str, source: &Q) -> Result<Analysis, LookupError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(LookupError::EmptySymbol);
    }
    let quote = source.quote(symbol)?;
    let indicators = indicators(&quote);
    Ok(Analysis { quote, indicators })
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Only the most recent search may deliver its result; earlier ones are superseded.
#[derive(Debug, Default)]
pub struct SearchGate {
    issued: u64,
    active: Option<u64>,
}

impl SearchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        if let Some(previous) = self.active.replace(self.issued) {
            tracing::debug!(ticket = previous, "search superseded");
        }
        Ticket(self.issued)
    }

    /// Hands back `value` only for the live ticket, which is then retired.
    pub fn resolve<T>(&mut self, ticket: Ticket, value: T) -> Option<T> {
        if self.active == Some(ticket.0) {
            self.active = None;
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "stale search result dropped");
            None
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.active.is_some()
    }
}
