// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::catalog::{COMPARE_UNIVERSE, MAX_COMPARED, compare_stock};
use crate::engine::screener::{ScoreInputs, score_stock};
use crate::error::LookupError;
use crate::models::CompareStock;

use GoodIf::{High, Low};
use MetricKey as K;

pub const DEFAULT_SELECTION: &[&str] = &["AAPL", "MSFT", "GOOGL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoodIf {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub good: f64,
    pub bad: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Neutral,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    Pe,
    #[serde(rename = "forwardPE")]
    ForwardPe,
    Peg,
    PriceToBook,
    PriceToSales,
    EvToEbitda,
    Roic,
    Roe,
    Roa,
    GrossMargin,
    OperatingMargin,
    NetMargin,
    FcfMargin,
    RevenueGrowth,
    EpsGrowth,
    DebtToEquity,
    DebtToEbitda,
    InterestCoverage,
    CurrentRatio,
    FcfYield,
    DividendYield,
    PayoutRatio,
    Beta,
}

impl MetricKey {
    pub fn value(&self, s: &CompareStock) -> f64 {
        match self {
            Self::Pe => s.pe,
            Self::ForwardPe => s.forward_pe,
            Self::Peg => s.peg,
            Self::PriceToBook => s.price_to_book,
            Self::PriceToSales => s.price_to_sales,
            Self::EvToEbitda => s.ev_to_ebitda,
            Self::Roic => s.roic,
            Self::Roe => s.roe,
            Self::Roa => s.roa,
            Self::GrossMargin => s.gross_margin,
            Self::OperatingMargin => s.operating_margin,
            Self::NetMargin => s.net_margin,
            Self::FcfMargin => s.fcf_margin,
            Self::RevenueGrowth => s.revenue_growth,
            Self::EpsGrowth => s.eps_growth,
            Self::DebtToEquity => s.debt_to_equity,
            Self::DebtToEbitda => s.debt_to_ebitda,
            Self::InterestCoverage => s.interest_coverage,
            Self::CurrentRatio => s.current_ratio,
            Self::FcfYield => s.fcf_yield,
            Self::DividendYield => s.dividend_yield,
            Self::PayoutRatio => s.payout_ratio,
            Self::Beta => s.beta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub key: MetricKey,
    pub label: &'static str,
    pub good_if: Option<GoodIf>,
    pub thresholds: Option<Thresholds>,
    #[serde(skip)]
    percent: bool,
    #[serde(skip)]
    decimals: usize,
}

const fn ratio(key: MetricKey, label: &'static str, decimals: usize) -> Metric {
    Metric {
        key,
        label,
        good_if: None,
        thresholds: None,
        percent: false,
        decimals,
    }
}

const fn pct(key: MetricKey, label: &'static str) -> Metric {
    Metric {
        key,
        label,
        good_if: None,
        thresholds: None,
        percent: true,
        decimals: 1,
    }
}

impl Metric {
    const fn rated(self, good_if: GoodIf, good: f64, bad: f64) -> Self {
        Self {
            good_if: Some(good_if),
            thresholds: Some(Thresholds { good, bad }),
            ..self
        }
    }

    pub fn format(&self, value: f64) -> String {
        if self.percent {
            format!("{:.*}%", self.decimals, value)
        } else {
            format!("{:.*}", self.decimals, value)
        }
    }

    /// `None` for metrics without a preferred direction.
    pub fn status(&self, value: f64) -> Option<MetricStatus> {
        let t = self.thresholds?;
        let status = match self.good_if? {
            GoodIf::High if value >= t.good => MetricStatus::Good,
            GoodIf::High if value <= t.bad => MetricStatus::Bad,
            GoodIf::Low if value <= t.good => MetricStatus::Good,
            GoodIf::Low if value >= t.bad => MetricStatus::Bad,
            _ => MetricStatus::Neutral,
        };
        Some(status)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricSection {
    pub name: &'static str,
    pub metrics: &'static [Metric],
}

pub const METRIC_SECTIONS: &[MetricSection] = &[
    MetricSection {
        name: "Valorisation",
        metrics: &[
            ratio(K::Pe, "P/E Ratio", 1).rated(Low, 20.0, 40.0),
            ratio(K::ForwardPe, "Forward P/E", 1).rated(Low, 18.0, 35.0),
            ratio(K::Peg, "PEG Ratio", 2).rated(Low, 1.5, 2.5),
            ratio(K::PriceToBook, "P/B Ratio", 1),
            ratio(K::PriceToSales, "P/S Ratio", 1),
            ratio(K::EvToEbitda, "EV/EBITDA", 1).rated(Low, 12.0, 25.0),
        ],
    },
    MetricSection {
        name: "Rentabilité",
        metrics: &[
            pct(K::Roic, "ROIC").rated(High, 15.0, 8.0),
            pct(K::Roe, "ROE").rated(High, 20.0, 10.0),
            pct(K::Roa, "ROA").rated(High, 10.0, 5.0),
        ],
    },
    MetricSection {
        name: "Marges",
        metrics: &[
            pct(K::GrossMargin, "Marge brute").rated(High, 40.0, 20.0),
            pct(K::OperatingMargin, "Marge opérationnelle").rated(High, 20.0, 10.0),
            pct(K::NetMargin, "Marge nette").rated(High, 15.0, 5.0),
            pct(K::FcfMargin, "Marge FCF").rated(High, 15.0, 5.0),
        ],
    },
    MetricSection {
        name: "Croissance",
        metrics: &[
            pct(K::RevenueGrowth, "Croissance CA").rated(High, 15.0, 0.0),
            pct(K::EpsGrowth, "Croissance EPS").rated(High, 15.0, 0.0),
        ],
    },
    MetricSection {
        name: "Dette & Liquidité",
        metrics: &[
            ratio(K::DebtToEquity, "Dette/Equity", 2).rated(Low, 0.5, 2.0),
            ratio(K::DebtToEbitda, "Dette/EBITDA", 1).rated(Low, 1.5, 3.0),
            ratio(K::InterestCoverage, "Couverture intérêts", 1).rated(High, 10.0, 3.0),
            ratio(K::CurrentRatio, "Current Ratio", 2).rated(High, 1.5, 1.0),
        ],
    },
    MetricSection {
        name: "Cash Flow",
        metrics: &[pct(K::FcfYield, "FCF Yield").rated(High, 4.0, 2.0)],
    },
    MetricSection {
        name: "Dividendes & Risque",
        metrics: &[
            pct(K::DividendYield, "Rendement dividende"),
            pct(K::PayoutRatio, "Payout Ratio").rated(Low, 40.0, 80.0),
            ratio(K::Beta, "Beta", 2),
        ],
    },
];

pub fn find_metric(key: MetricKey) -> Option<&'static Metric> {
    METRIC_SECTIONS
        .iter()
        .flat_map(|section| section.metrics.iter())
        .find(|m| m.key == key)
}

pub fn metric_status(metric: &Metric, value: f64) -> Option<MetricStatus> {
    metric.status(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BestWorst {
    pub best: Option<String>,
    pub worst: Option<String>,
}

/// Ties keep selection order. `worst` is only reported when two or more stocks are compared.
pub fn best_worst(metric: &Metric, selection: &[&CompareStock]) -> BestWorst {
    let Some(good_if) = metric.good_if else {
        return BestWorst::default();
    };
    let mut ranked: Vec<&CompareStock> = selection.to_vec();
    ranked.sort_by(|a, b| {
        let ord = metric.key.value(a).total_cmp(&metric.key.value(b));
        match good_if {
            GoodIf::High => ord.reverse(),
            GoodIf::Low => ord,
        }
    });
    BestWorst {
        best: ranked.first().map(|s| s.symbol.clone()),
        worst: if ranked.len() > 1 {
            ranked.last().map(|s| s.symbol.clone())
        } else {
            None
        },
    }
}

/// Ordered set of compared symbols, at most [`MAX_COMPARED`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    selected: Vec<&'static CompareStock>,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            selected: DEFAULT_SELECTION.iter().filter_map(|s| compare_stock(s)).collect(),
        }
    }
}

impl Comparison {
    pub fn empty() -> Self {
        Self { selected: Vec::new() }
    }

    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut comparison = Self::empty();
        for symbol in symbols {
            comparison.add(symbol.as_ref())?;
        }
        Ok(comparison)
    }

    /// Returns `false` when the symbol was already selected.
    pub fn add(&mut self, symbol: &str) -> Result<bool, LookupError> {
        let stock =
            compare_stock(symbol).ok_or_else(|| LookupError::UnknownSymbol(symbol.trim().to_string()))?;
        if self.contains(&stock.symbol) {
            return Ok(false);
        }
        if self.selected.len() >= MAX_COMPARED {
            return Err(LookupError::ComparisonFull(MAX_COMPARED));
        }
        self.selected.push(stock);
        Ok(true)
    }

    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.selected.len();
        self.selected
            .retain(|s| !s.symbol.eq_ignore_ascii_case(symbol.trim()));
        self.selected.len() != before
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.selected
            .iter()
            .any(|s| s.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    pub fn stocks(&self) -> &[&'static CompareStock] {
        &self.selected
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.selected.iter().map(|s| s.symbol.as_str()).collect()
    }

    /// Universe symbols containing `term` (case-insensitive) that are not yet selected.
    pub fn search_symbols(&self, term: &str) -> Vec<&'static str> {
        let needle = term.trim().to_uppercase();
        COMPARE_UNIVERSE
            .iter()
            .filter(|s| s.symbol.contains(&needle) && !self.contains(&s.symbol))
            .map(|s| s.symbol.as_str())
            .collect()
    }

    pub fn rows(&self) -> Vec<MetricRow> {
        METRIC_SECTIONS
            .iter()
            .flat_map(|section| {
                section
                    .metrics
                    .iter()
                    .map(move |metric| metric_row(section.name, metric, &self.selected))
            })
            .collect()
    }

    pub fn scores(&self) -> Vec<(&'static str, u8)> {
        self.selected
            .iter()
            .map(|s| (s.symbol.as_str(), score_stock(&ScoreInputs::from(*s))))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCell {
    pub symbol: String,
    pub value: f64,
    pub display: String,
    pub status: Option<MetricStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub section: &'static str,
    pub metric: Metric,
    pub cells: Vec<MetricCell>,
    #[serde(flatten)]
    pub best_worst: BestWorst,
}

fn metric_row(section: &'static str, metric: &Metric, selection: &[&CompareStock]) -> MetricRow {
    MetricRow {
        section,
        metric: *metric,
        cells: selection
            .iter()
            .map(|s| {
                let value = metric.key.value(s);
                MetricCell {
                    symbol: s.symbol.clone(),
                    value,
                    display: metric.format(value),
                    status: metric.status(value),
                }
            })
            .collect(),
        best_worst: best_worst(metric, selection),
    }
}
