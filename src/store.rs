// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory session state. Nothing is written back to disk.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{
    DEFAULT_WATCHLIST_COLOR, compare_stock, is_watchlist_color, screener_stock,
};
use crate::engine::budgets::{BudgetCaps, BudgetLine, BudgetNotifier, default_caps, evaluate_budgets};
use crate::engine::objectives::{ObjectiveStatus, derive_status};
use crate::engine::patrimony::{PatrimonySummary, net_patrimony};
use crate::engine::portfolio::{PortfolioSummary, valuate_portfolio};
use crate::engine::transactions::{TransactionSummary, aggregate_transactions};
use crate::error::{LookupError, StoreError, ValidationError};
use crate::forms::{AssetDraft, ObjectiveDraft, PatrimonyDraft, TransactionDraft};
use crate::models::{
    Asset, Category, Objective, PatrimonyItem, Transaction, TxType, Watchlist, WatchlistItem,
    YearMonth,
};
use crate::utils::{percent_of, round_money};

static SYMBOL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9.\-]{0,9}$").ok());

pub trait Record {
    const KIND: &'static str;
    fn id(&self) -> &str;
}

macro_rules! record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;
            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

record!(Transaction, "transaction");
record!(Objective, "objective");
record!(Asset, "asset");
record!(PatrimonyItem, "patrimony item");
record!(Watchlist, "watchlist");
record!(WatchlistItem, "watchlist item");

/// Ordered records addressed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    fn not_found(id: &str) -> LookupError {
        LookupError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    pub fn push_back(&mut self, item: T) -> &T {
        let idx = self.items.len();
        self.items.push(item);
        &self.items[idx]
    }

    pub fn push_front(&mut self, item: T) -> &T {
        self.items.insert(0, item);
        &self.items[0]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    /// Swaps in `item` at the position of the record sharing its id.
    pub fn replace(&mut self, item: T) -> Result<T, LookupError> {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id() == item.id())
            .ok_or_else(|| Self::not_found(item.id()))?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn remove(&mut self, id: &str) -> Result<T, LookupError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(self.items.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

/// Monotonic numeric ids, resumed past the largest numeric id already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    next: u128,
}

impl IdSequence {
    pub fn starting_after<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let max = ids
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: u128::from(max) + 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next.max(1);
        self.next = id.saturating_add(1);
        id.to_string()
    }
}

/// Price and daily change for a watchlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub price: Decimal,
    pub change: Decimal,
}

fn to_money(v: f64) -> Decimal {
    Decimal::from_f64(v).map(round_money).unwrap_or_default()
}

/// Latest catalog quote for `symbol`, if the symbol is known.
pub fn catalog_quote(symbol: &str) -> Option<(String, Quote)> {
    if let Some(s) = screener_stock(symbol) {
        return Some((
            s.name.clone(),
            Quote {
                price: to_money(s.price),
                change: to_money(s.change),
            },
        ));
    }
    compare_stock(symbol).map(|s| {
        (
            s.name.clone(),
            Quote {
                price: to_money(s.price),
                change: to_money(s.change),
            },
        )
    })
}

/// Trimmed, uppercased ticker.
pub fn normalize_symbol(raw: &str) -> Result<String, ValidationError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::Required("symbol"));
    }
    if !SYMBOL_RE.as_ref().is_some_and(|re| re.is_match(&symbol)) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

pub fn change_percent(quote: &Quote) -> Decimal {
    round_money(percent_of(quote.change, quote.price))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub transactions: Collection<Transaction>,
    pub budget_caps: BudgetCaps,
    pub objectives: Collection<Objective>,
    pub assets: Collection<Asset>,
    pub patrimony: Collection<PatrimonyItem>,
    pub watchlists: Collection<Watchlist>,
    pub selected_watchlist: Option<String>,
    #[serde(skip)]
    ids: IdSequence,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            transactions: Collection::new(),
            budget_caps: default_caps(),
            objectives: Collection::new(),
            assets: Collection::new(),
            patrimony: Collection::new(),
            watchlists: Collection::new(),
            selected_watchlist: None,
            ids: IdSequence::default(),
        }
    }
}

fn demo_tx(id: &str, description: &str, amount: i64, kind: TxType, category: Category, day: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: description.to_string(),
        amount: Decimal::from(amount),
        kind,
        category,
        date: NaiveDate::from_ymd_opt(2025, 12, day).unwrap_or_default(),
    }
}

impl Session {
    /// December 2025 sample budget with the default caps.
    pub fn demo() -> Self {
        use Category::*;
        use TxType::{Expense, Income};
        let transactions = vec![
            demo_tx("1", "Salaire", 3500, Income, Salaire, 1),
            demo_tx("2", "Loyer", 900, Expense, Logement, 5),
            demo_tx("3", "Courses", 350, Expense, Alimentation, 10),
            demo_tx("4", "Abonnement transport", 80, Expense, Transport, 1),
            demo_tx("5", "Netflix + Spotify", 25, Expense, Loisirs, 1),
            demo_tx("6", "Investissement ETF", 500, Expense, Investissement, 15),
        ];
        let mut session = Self {
            transactions: Collection::from_vec(transactions),
            ..Self::default()
        };
        session.reseed();
        session
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let mut session: Session = serde_json::from_str(s).context("Invalid session JSON")?;
        session.reseed();
        Ok(session)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read session at {}", path.display()))?;
        let session = Self::from_json(&raw)
            .with_context(|| format!("Load session at {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            transactions = session.transactions.len(),
            objectives = session.objectives.len(),
            assets = session.assets.len(),
            patrimony = session.patrimony.len(),
            watchlists = session.watchlists.len(),
            "session loaded"
        );
        Ok(session)
    }

    fn reseed(&mut self) {
        let ids: Vec<&str> = self
            .transactions
            .iter()
            .map(Record::id)
            .chain(self.objectives.iter().map(Record::id))
            .chain(self.assets.iter().map(Record::id))
            .chain(self.patrimony.iter().map(Record::id))
            .chain(self.watchlists.iter().map(Record::id))
            .chain(
                self.watchlists
                    .iter()
                    .flat_map(|w| w.items.iter().map(Record::id)),
            )
            .collect();
        self.ids = IdSequence::starting_after(ids);

        let selection_valid = self
            .selected_watchlist
            .as_deref()
            .is_some_and(|id| self.watchlists.get(id).is_some());
        if !selection_valid {
            self.selected_watchlist = self.watchlists.first().map(|w| w.id.clone());
        }
    }

    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    // Transactions: newest first.

    pub fn add_transaction(&mut self, draft: &TransactionDraft) -> Result<&Transaction, ValidationError> {
        let tx = draft.validate(self.ids.next_id())?;
        Ok(self.transactions.push_front(tx))
    }

    pub fn update_transaction(&mut self, id: &str, draft: &TransactionDraft) -> Result<(), StoreError> {
        let tx = draft.validate(id.to_string())?;
        self.transactions.replace(tx)?;
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction, LookupError> {
        self.transactions.remove(id)
    }

    pub fn transaction_summary(&self, month: Option<YearMonth>) -> TransactionSummary {
        aggregate_transactions(self.transactions.as_slice(), month)
    }

    pub fn budget_alerts<N: BudgetNotifier + ?Sized>(
        &self,
        month: Option<YearMonth>,
        notifier: &mut N,
    ) -> Vec<BudgetLine> {
        let summary = self.transaction_summary(month);
        evaluate_budgets(&summary.expenses_by_category, &self.budget_caps, notifier)
    }

    // Objectives, assets and patrimony: appended.

    pub fn add_objective(&mut self, draft: &ObjectiveDraft) -> Result<&Objective, ValidationError> {
        let objective = draft.validate(self.ids.next_id())?;
        Ok(self.objectives.push_back(objective))
    }

    pub fn update_objective(&mut self, id: &str, draft: &ObjectiveDraft) -> Result<(), StoreError> {
        let objective = draft.validate(id.to_string())?;
        self.objectives.replace(objective)?;
        Ok(())
    }

    pub fn delete_objective(&mut self, id: &str) -> Result<Objective, LookupError> {
        self.objectives.remove(id)
    }

    pub fn objective_statuses(
        &self,
        now: NaiveDate,
        epoch_start: NaiveDate,
    ) -> Vec<(&Objective, ObjectiveStatus)> {
        self.objectives
            .iter()
            .map(|o| (o, derive_status(o, now, epoch_start)))
            .collect()
    }

    pub fn add_asset(&mut self, draft: &AssetDraft) -> Result<&Asset, ValidationError> {
        let asset = draft.validate(self.ids.next_id())?;
        Ok(self.assets.push_back(asset))
    }

    pub fn update_asset(&mut self, id: &str, draft: &AssetDraft) -> Result<(), StoreError> {
        let asset = draft.validate(id.to_string())?;
        self.assets.replace(asset)?;
        Ok(())
    }

    pub fn delete_asset(&mut self, id: &str) -> Result<Asset, LookupError> {
        self.assets.remove(id)
    }

    pub fn portfolio(&self) -> PortfolioSummary {
        valuate_portfolio(self.assets.as_slice())
    }

    pub fn add_patrimony(&mut self, draft: &PatrimonyDraft) -> Result<&PatrimonyItem, ValidationError> {
        let item = draft.validate(self.ids.next_id())?;
        Ok(self.patrimony.push_back(item))
    }

    pub fn update_patrimony(&mut self, id: &str, draft: &PatrimonyDraft) -> Result<(), StoreError> {
        let item = draft.validate(id.to_string())?;
        self.patrimony.replace(item)?;
        Ok(())
    }

    pub fn delete_patrimony(&mut self, id: &str) -> Result<PatrimonyItem, LookupError> {
        self.patrimony.remove(id)
    }

    pub fn patrimony_summary(&self) -> PatrimonySummary {
        net_patrimony(self.patrimony.as_slice())
    }

    // Watchlists.

    /// The new list becomes the selected one. `color` defaults to blue.
    pub fn create_watchlist(&mut self, name: &str, color: Option<&str>) -> Result<&Watchlist, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name"));
        }
        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_WATCHLIST_COLOR);
        if !is_watchlist_color(color) {
            return Err(ValidationError::UnknownColor(color.to_string()));
        }
        let id = self.ids.next_id();
        self.selected_watchlist = Some(id.clone());
        Ok(self.watchlists.push_back(Watchlist {
            id,
            name: name.to_string(),
            color: color.to_string(),
            items: Vec::new(),
        }))
    }

    /// Deleting the selected list moves the selection to the first remaining one.
    pub fn delete_watchlist(&mut self, id: &str) -> Result<Watchlist, LookupError> {
        let removed = self.watchlists.remove(id)?;
        if self.selected_watchlist.as_deref() == Some(id) {
            self.selected_watchlist = self.watchlists.first().map(|w| w.id.clone());
        }
        Ok(removed)
    }

    pub fn select_watchlist(&mut self, id: &str) -> Result<(), LookupError> {
        if self.watchlists.get(id).is_none() {
            return Err(Collection::<Watchlist>::not_found(id));
        }
        self.selected_watchlist = Some(id.to_string());
        Ok(())
    }

    pub fn selected_watchlist(&self) -> Option<&Watchlist> {
        self.selected_watchlist
            .as_deref()
            .and_then(|id| self.watchlists.get(id))
    }

    /// Known symbols are priced from the catalog; others need `quote`.
    pub fn add_watchlist_item(
        &mut self,
        watchlist_id: &str,
        symbol: &str,
        name: Option<&str>,
        quote: Option<Quote>,
    ) -> Result<&WatchlistItem, StoreError> {
        let symbol = normalize_symbol(symbol)?;
        let quote = match quote.or_else(|| catalog_quote(&symbol).map(|(_, q)| q)) {
            Some(q) => q,
            None => return Err(LookupError::UnknownSymbol(symbol).into()),
        };
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| symbol.clone());

        let list = self
            .watchlists
            .get_mut(watchlist_id)
            .ok_or_else(|| Collection::<Watchlist>::not_found(watchlist_id))?;
        let item = WatchlistItem {
            id: self.ids.next_id(),
            symbol,
            name,
            price: quote.price,
            change: quote.change,
            change_percent: change_percent(&quote),
        };
        let idx = list.items.len();
        list.items.push(item);
        Ok(&list.items[idx])
    }

    pub fn remove_watchlist_item(&mut self, watchlist_id: &str, item_id: &str) -> Result<WatchlistItem, LookupError> {
        let list = self
            .watchlists
            .get_mut(watchlist_id)
            .ok_or_else(|| Collection::<Watchlist>::not_found(watchlist_id))?;
        let pos = list
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| Collection::<WatchlistItem>::not_found(item_id))?;
        Ok(list.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resume_after_numeric_max() {
        let mut seq = IdSequence::starting_after(["3", "abc", "12"]);
        assert_eq!(seq.next_id(), "13");
        assert_eq!(seq.next_id(), "14");
    }

    #[test]
    fn largest_numeric_id_does_not_overflow() {
        let mut seq = IdSequence::starting_after(["18446744073709551615"]);
        assert_eq!(seq.next_id(), "18446744073709551616");
        assert_eq!(seq.next_id(), "18446744073709551617");
    }

    #[test]
    fn empty_sequence_starts_at_one() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), "1");
    }

    #[test]
    fn symbol_pattern() {
        assert_eq!(normalize_symbol(" brk.b ").unwrap(), "BRK.B");
        assert!(matches!(normalize_symbol("1ABC"), Err(ValidationError::InvalidSymbol(_))));
        assert!(matches!(normalize_symbol("TOOLONGSYMBOL"), Err(ValidationError::InvalidSymbol(_))));
        assert_eq!(normalize_symbol("  "), Err(ValidationError::Required("symbol")));
    }
}
