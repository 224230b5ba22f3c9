// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{CompareStock, StockResult};

/// Screener thresholds. `sector` and `market_cap_min` (billions) are inactive when `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub pe_min: f64,
    pub pe_max: f64,
    pub roic_min: f64,
    pub fcf_yield_min: f64,
    pub debt_to_equity_max: f64,
    pub revenue_growth_min: f64,
    pub net_margin_min: f64,
    pub dividend_yield_min: f64,
    pub sector: Option<String>,
    pub market_cap_min: Option<f64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pe_min: 0.0,
            pe_max: 100.0,
            roic_min: 0.0,
            fcf_yield_min: 0.0,
            debt_to_equity_max: 10.0,
            revenue_growth_min: -50.0,
            net_margin_min: 0.0,
            dividend_yield_min: 0.0,
            sector: None,
            market_cap_min: None,
        }
    }
}

impl FilterConfig {
    pub fn accepts(&self, stock: &StockResult) -> bool {
        if stock.pe < self.pe_min || stock.pe > self.pe_max {
            return false;
        }
        if stock.roic < self.roic_min
            || stock.fcf_yield < self.fcf_yield_min
            || stock.debt_to_equity > self.debt_to_equity_max
            || stock.revenue_growth < self.revenue_growth_min
            || stock.net_margin < self.net_margin_min
            || stock.dividend_yield < self.dividend_yield_min
        {
            return false;
        }
        if let Some(sector) = &self.sector {
            if stock.sector != *sector {
                return false;
            }
        }
        if let Some(billions) = self.market_cap_min {
            if stock.market_cap < billions * 1e9 {
                return false;
            }
        }
        true
    }
}

pub fn filter_stocks<'a>(candidates: &'a [StockResult], filters: &FilterConfig) -> Vec<&'a StockResult> {
    candidates.iter().filter(|s| filters.accepts(s)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Price,
    Change,
    Pe,
    Roic,
    FcfYield,
    DebtToEquity,
    RevenueGrowth,
    NetMargin,
    DividendYield,
    MarketCap,
    Score,
}

impl SortColumn {
    pub fn value(&self, stock: &StockResult) -> f64 {
        match self {
            Self::Price => stock.price,
            Self::Change => stock.change,
            Self::Pe => stock.pe,
            Self::Roic => stock.roic,
            Self::FcfYield => stock.fcf_yield,
            Self::DebtToEquity => stock.debt_to_equity,
            Self::RevenueGrowth => stock.revenue_growth,
            Self::NetMargin => stock.net_margin,
            Self::DividendYield => stock.dividend_yield,
            Self::MarketCap => stock.market_cap,
            Self::Score => f64::from(score_stock(&ScoreInputs::from(stock))),
        }
    }
}

impl FromStr for SortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "price" => Ok(Self::Price),
            "change" => Ok(Self::Change),
            "pe" => Ok(Self::Pe),
            "roic" => Ok(Self::Roic),
            "fcfyield" => Ok(Self::FcfYield),
            "debttoequity" | "de" => Ok(Self::DebtToEquity),
            "revenuegrowth" | "growth" => Ok(Self::RevenueGrowth),
            "netmargin" | "margin" => Ok(Self::NetMargin),
            "dividendyield" | "dividend" => Ok(Self::DividendYield),
            "marketcap" | "cap" => Ok(Self::MarketCap),
            "score" => Ok(Self::Score),
            _ => Err(ValidationError::UnknownVariant {
                kind: "sort column",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Roic,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Clicking the active column flips direction; another column starts descending.
    pub fn toggle(self, column: SortColumn) -> Self {
        if self.column == column {
            let direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
            Self { column, direction }
        } else {
            Self {
                column,
                direction: SortDirection::Desc,
            }
        }
    }

    fn compare(&self, a: &StockResult, b: &StockResult) -> Ordering {
        let ord = self.column.value(a).total_cmp(&self.column.value(b));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Stable: equal keys keep their relative order.
pub fn sort_stocks(matches: &mut [&StockResult], sort: SortSpec) {
    matches.sort_by(|a, b| sort.compare(a, b));
}

/// Fundamentals consumed by [`score_stock`]. Missing ratios earn no points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreInputs {
    pub pe: f64,
    pub peg: Option<f64>,
    pub roic: f64,
    pub net_margin: f64,
    pub revenue_growth: f64,
    pub debt_to_equity: f64,
    pub current_ratio: Option<f64>,
}

impl From<&StockResult> for ScoreInputs {
    fn from(s: &StockResult) -> Self {
        Self {
            pe: s.pe,
            peg: None,
            roic: s.roic,
            net_margin: s.net_margin,
            revenue_growth: s.revenue_growth,
            debt_to_equity: s.debt_to_equity,
            current_ratio: None,
        }
    }
}

impl From<&CompareStock> for ScoreInputs {
    fn from(s: &CompareStock) -> Self {
        Self {
            pe: s.pe,
            peg: Some(s.peg),
            roic: s.roic,
            net_margin: s.net_margin,
            revenue_growth: s.revenue_growth,
            debt_to_equity: s.debt_to_equity,
            current_ratio: Some(s.current_ratio),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub valuation: u8,
    pub profitability: u8,
    pub growth: u8,
    pub health: u8,
    pub total: u8,
}

fn below(value: f64, tiers: &[(f64, u8)]) -> u8 {
    tiers
        .iter()
        .find(|(limit, _)| value < *limit)
        .map_or(0, |(_, points)| *points)
}

fn above(value: f64, tiers: &[(f64, u8)]) -> u8 {
    tiers
        .iter()
        .find(|(limit, _)| value > *limit)
        .map_or(0, |(_, points)| *points)
}

pub fn score_breakdown(s: &ScoreInputs) -> ScoreBreakdown {
    let valuation = below(s.pe, &[(20.0, 15), (30.0, 10)])
        + s.peg.map_or(0, |peg| below(peg, &[(1.5, 15), (2.0, 10), (2.5, 5)]));
    let profitability = above(s.roic, &[(20.0, 20), (15.0, 15), (10.0, 10)])
        + above(s.net_margin, &[(20.0, 15), (10.0, 10), (5.0, 5)]);
    let growth = above(s.revenue_growth, &[(20.0, 15), (10.0, 10), (5.0, 5)]);
    let health = below(s.debt_to_equity, &[(0.5, 10), (1.0, 7), (2.0, 3)])
        + s.current_ratio.map_or(0, |cr| above(cr, &[(1.5, 10), (1.0, 5)]));

    ScoreBreakdown {
        valuation,
        profitability,
        growth,
        health,
        total: (valuation + profitability + growth + health).min(100),
    }
}

/// Heuristic 0..=100 ranking aid.
pub fn score_stock(s: &ScoreInputs) -> u8 {
    score_breakdown(s).total
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStock {
    #[serde(flatten)]
    pub stock: StockResult,
    pub score: u8,
}

pub fn filter_and_score_stocks(
    candidates: &[StockResult],
    filters: &FilterConfig,
    sort: SortSpec,
) -> Vec<RankedStock> {
    let mut matches = filter_stocks(candidates, filters);
    tracing::debug!(
        candidates = candidates.len(),
        matches = matches.len(),
        "screener pass"
    );
    sort_stocks(&mut matches, sort);
    matches
        .into_iter()
        .map(|stock| RankedStock {
            score: score_stock(&ScoreInputs::from(stock)),
            stock: stock.clone(),
        })
        .collect()
}
