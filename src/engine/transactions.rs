// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Category, Transaction, TxType, YearMonth};
use crate::utils::{percent_of, round_money, round_pct};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    /// Percentage with one decimal; zero when there is no income.
    pub savings_rate: Decimal,
    pub expenses_by_category: BTreeMap<Category, Decimal>,
}

impl TransactionSummary {
    pub fn empty() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            balance: Decimal::ZERO,
            savings_rate: Decimal::ZERO,
            expenses_by_category: BTreeMap::new(),
        }
    }
}

/// Totals over `transactions`, restricted to `month` (inclusive day range) when given.
pub fn aggregate_transactions(
    transactions: &[Transaction],
    month: Option<YearMonth>,
) -> TransactionSummary {
    let mut summary = TransactionSummary::empty();

    for tx in transactions
        .iter()
        .filter(|t| month.is_none_or(|m| m.contains(t.date)))
    {
        match tx.kind {
            TxType::Income => {
                summary.total_income = summary.total_income.saturating_add(tx.amount);
            }
            TxType::Expense => {
                summary.total_expenses = summary.total_expenses.saturating_add(tx.amount);
                let spent = summary
                    .expenses_by_category
                    .entry(tx.category)
                    .or_insert(Decimal::ZERO);
                *spent = spent.saturating_add(tx.amount);
            }
        }
    }

    summary.total_income = round_money(summary.total_income);
    summary.total_expenses = round_money(summary.total_expenses);
    for spent in summary.expenses_by_category.values_mut() {
        *spent = round_money(*spent);
    }
    summary.balance = summary.total_income.saturating_sub(summary.total_expenses);
    summary.savings_rate = if summary.total_income > Decimal::ZERO {
        round_pct(percent_of(summary.balance, summary.total_income))
    } else {
        Decimal::ZERO
    };
    summary
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub label: &'static str,
    pub value: Decimal,
    pub color: &'static str,
}

/// Pie-chart slices for the expense mapping, in category order.
pub fn expense_breakdown(expenses: &BTreeMap<Category, Decimal>) -> Vec<CategorySlice> {
    expenses
        .iter()
        .map(|(category, value)| CategorySlice {
            category: *category,
            label: category.label(),
            value: *value,
            color: category.color(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthFlow {
    pub month: YearMonth,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Income and expenses per month, newest first, limited to `months` entries.
pub fn monthly_cashflow(transactions: &[Transaction], months: usize) -> Vec<MonthFlow> {
    let mut map: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let entry = map
            .entry(YearMonth::of(tx.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxType::Income => entry.0 = entry.0.saturating_add(tx.amount),
            TxType::Expense => entry.1 = entry.1.saturating_add(tx.amount),
        }
    }
    map.into_iter()
        .rev()
        .take(months)
        .map(|(month, (income, expenses))| MonthFlow {
            month,
            income: round_money(income),
            expenses: round_money(expenses),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, kind: TxType, category: Category, date: &str) -> Transaction {
        Transaction {
            id: date.to_string(),
            description: "t".into(),
            amount,
            kind,
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn cashflow_is_newest_first_and_limited() {
        let txs = vec![
            tx(dec!(100), TxType::Income, Category::Salaire, "2025-10-01"),
            tx(dec!(40), TxType::Expense, Category::Loisirs, "2025-11-03"),
            tx(dec!(200), TxType::Income, Category::Salaire, "2025-12-01"),
            tx(dec!(50), TxType::Expense, Category::Transport, "2025-12-02"),
        ];
        let flows = monthly_cashflow(&txs, 2);
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].month.to_string(), "2025-12");
        assert_eq!(flows[0].income, dec!(200));
        assert_eq!(flows[0].expenses, dec!(50));
        assert_eq!(flows[1].month.to_string(), "2025-11");
        assert_eq!(flows[1].income, Decimal::ZERO);
    }

    #[test]
    fn breakdown_follows_category_order_with_palette() {
        let mut expenses = BTreeMap::new();
        expenses.insert(Category::Loisirs, dec!(25));
        expenses.insert(Category::Logement, dec!(900));
        let slices = expense_breakdown(&expenses);
        assert_eq!(slices[0].label, "Logement");
        assert_eq!(slices[0].color, "hsl(199 89% 48%)");
        assert_eq!(slices[1].label, "Loisirs");
    }
}
