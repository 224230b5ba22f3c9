// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// Budget category. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salaire,
    Logement,
    Alimentation,
    Transport,
    Loisirs,
    Investissement,
    Autres,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Salaire,
            Self::Logement,
            Self::Alimentation,
            Self::Transport,
            Self::Loisirs,
            Self::Investissement,
            Self::Autres,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salaire => "salaire",
            Self::Logement => "logement",
            Self::Alimentation => "alimentation",
            Self::Transport => "transport",
            Self::Loisirs => "loisirs",
            Self::Investissement => "investissement",
            Self::Autres => "autres",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salaire => "Salaire",
            Self::Logement => "Logement",
            Self::Alimentation => "Alimentation",
            Self::Transport => "Transport",
            Self::Loisirs => "Loisirs",
            Self::Investissement => "Investissement",
            Self::Autres => "Autres",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Salaire | Self::Investissement => "hsl(160 84% 39%)",
            Self::Logement => "hsl(199 89% 48%)",
            Self::Alimentation => "hsl(38 92% 50%)",
            Self::Transport => "hsl(280 80% 55%)",
            Self::Loisirs => "hsl(320 85% 55%)",
            Self::Autres => "hsl(215 20% 55%)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxType,
    pub category: Category,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TxType::Expense
    }
}

/// Calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let (y, m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Inclusive `[first, last]` day range of the month.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.last_day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.bounds();
        start <= date && date <= end
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidMonth(raw.to_string()))?;
        Ok(Self::of(date))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Haute",
            Self::Medium => "Moyenne",
            Self::Low => "Basse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveCategory {
    Savings,
    Investment,
    Debt,
    Income,
    Other,
}

impl ObjectiveCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Épargne",
            Self::Investment => "Investissement",
            Self::Debt => "Remboursement",
            Self::Income => "Revenus",
            Self::Other => "Autre",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Some(Self::Savings),
            "investment" => Some(Self::Investment),
            "debt" => Some(Self::Debt),
            "income" => Some(Self::Income),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub current: Decimal,
    pub target: Decimal,
    pub unit: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub category: ObjectiveCategory,
}

/// Portfolio asset class. Declaration order is the allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stocks,
    Etf,
    Crypto,
    Bonds,
    Cash,
}

impl AssetType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stocks => "Actions",
            Self::Etf => "ETF",
            Self::Crypto => "Crypto",
            Self::Bonds => "Obligations",
            Self::Cash => "Cash",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Stocks => "hsl(199 89% 48%)",
            Self::Etf => "hsl(160 84% 39%)",
            Self::Crypto => "hsl(280 80% 55%)",
            Self::Bonds => "hsl(38 92% 50%)",
            Self::Cash => "hsl(215 20% 55%)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stocks" => Some(Self::Stocks),
            "etf" => Some(Self::Etf),
            "crypto" => Some(Self::Crypto),
            "bonds" => Some(Self::Bonds),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatrimonyKind {
    Asset,
    Liability,
}

impl PatrimonyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asset" | "actif" => Some(Self::Asset),
            "liability" | "passif" => Some(Self::Liability),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrimonyItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PatrimonyKind,
    pub category: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub items: Vec<WatchlistItem>,
}

/// Screener row. Ratios are percentages unless noted; `market_cap` is in units of currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResult {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub pe: f64,
    pub roic: f64,
    pub fcf_yield: f64,
    pub debt_to_equity: f64,
    pub revenue_growth: f64,
    pub net_margin: f64,
    pub dividend_yield: f64,
    pub market_cap: f64,
    pub sector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub market_cap: f64,
    pub pe: f64,
    #[serde(rename = "forwardPE")]
    pub forward_pe: f64,
    pub peg: f64,
    pub price_to_book: f64,
    pub price_to_sales: f64,
    pub ev_to_ebitda: f64,
    pub roic: f64,
    pub roe: f64,
    pub roa: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub fcf_yield: f64,
    pub fcf_margin: f64,
    pub revenue_growth: f64,
    pub eps_growth: f64,
    pub debt_to_equity: f64,
    pub debt_to_ebitda: f64,
    pub interest_coverage: f64,
    pub current_ratio: f64,
    pub dividend_yield: f64,
    pub payout_ratio: f64,
    pub beta: f64,
}
