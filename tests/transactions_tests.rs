// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use riphus::commands::transactions::query_rows;
use riphus::error::ValidationError;
use riphus::engine::transactions::{aggregate_transactions, expense_breakdown, monthly_cashflow};
use riphus::forms::TransactionDraft;
use riphus::models::{Category, Transaction, TxType, YearMonth};
use riphus::store::Session;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tx(id: &str, amount: Decimal, kind: TxType, category: Category, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: id.to_string(),
        amount,
        kind,
        category,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[test]
fn salary_rent_groceries_scenario() {
    let txs = vec![
        tx("salary", dec!(3500), TxType::Income, Category::Salaire, "2025-12-01"),
        tx("rent", dec!(900), TxType::Expense, Category::Logement, "2025-12-05"),
        tx("groceries", dec!(350), TxType::Expense, Category::Alimentation, "2025-12-10"),
    ];
    let s = aggregate_transactions(&txs, None);
    assert_eq!(s.total_income, dec!(3500));
    assert_eq!(s.total_expenses, dec!(1250));
    assert_eq!(s.balance, dec!(2250));
    assert_eq!(s.savings_rate, dec!(64.3));
    assert_eq!(s.expenses_by_category.get(&Category::Logement), Some(&dec!(900)));
    assert_eq!(s.expenses_by_category.get(&Category::Alimentation), Some(&dec!(350)));
    assert_eq!(s.expenses_by_category.len(), 2);
}

#[test]
fn empty_list_is_all_zero() {
    let s = aggregate_transactions(&[], None);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expenses, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.savings_rate, Decimal::ZERO);
    assert!(s.expenses_by_category.is_empty());
}

#[test]
fn no_income_means_zero_savings_rate() {
    let txs = vec![tx("a", dec!(80), TxType::Expense, Category::Transport, "2025-12-01")];
    let s = aggregate_transactions(&txs, None);
    assert_eq!(s.savings_rate, Decimal::ZERO);
    assert_eq!(s.balance, dec!(-80));
}

#[test]
fn balance_identity_holds_with_overspending() {
    let txs = vec![
        tx("a", dec!(1000.10), TxType::Income, Category::Salaire, "2025-12-01"),
        tx("b", dec!(1500.25), TxType::Expense, Category::Loisirs, "2025-12-02"),
        tx("c", dec!(0.01), TxType::Expense, Category::Autres, "2025-12-03"),
    ];
    let s = aggregate_transactions(&txs, None);
    assert_eq!(s.total_income - s.total_expenses, s.balance);
    assert!(s.savings_rate <= dec!(100));
    assert_eq!(s.savings_rate, dec!(-50.0));
}

#[test]
fn month_filter_includes_both_month_edges() {
    let txs = vec![
        tx("before", dec!(10), TxType::Expense, Category::Autres, "2025-11-30"),
        tx("first", dec!(20), TxType::Expense, Category::Autres, "2025-12-01"),
        tx("last", dec!(30), TxType::Expense, Category::Autres, "2025-12-31"),
        tx("after", dec!(40), TxType::Expense, Category::Autres, "2026-01-01"),
    ];
    let december: YearMonth = "2025-12".parse().unwrap();
    let s = aggregate_transactions(&txs, Some(december));
    assert_eq!(s.total_expenses, dec!(50));
}

#[test]
fn demo_session_december_totals() {
    let session = Session::demo();
    let s = session.transaction_summary(Some("2025-12".parse().unwrap()));
    assert_eq!(s.total_income, dec!(3500));
    assert_eq!(s.total_expenses, dec!(1855));
    assert_eq!(s.balance, dec!(1645));
    assert_eq!(s.savings_rate, dec!(47.0));

    let slices = expense_breakdown(&s.expenses_by_category);
    let labels: Vec<&str> = slices.iter().map(|sl| sl.label).collect();
    assert_eq!(
        labels,
        vec!["Logement", "Alimentation", "Transport", "Loisirs", "Investissement"]
    );
}

#[test]
fn cashflow_groups_by_month() {
    let txs = vec![
        tx("a", dec!(3500), TxType::Income, Category::Salaire, "2025-11-01"),
        tx("b", dec!(900), TxType::Expense, Category::Logement, "2025-11-05"),
        tx("c", dec!(3600), TxType::Income, Category::Salaire, "2025-12-01"),
    ];
    let flows = monthly_cashflow(&txs, 12);
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].month.to_string(), "2025-12");
    assert_eq!(flows[0].income, dec!(3600));
    assert_eq!(flows[1].expenses, dec!(900));
}

#[test]
fn new_transactions_go_to_the_front() {
    let mut session = Session::demo();
    let draft = TransactionDraft {
        description: "Cinéma".into(),
        amount: "12,50".into(),
        kind: "expense".into(),
        category: "loisirs".into(),
        date: "2025-12-20".into(),
    };
    let added = session.add_transaction(&draft).unwrap();
    assert_eq!(added.id, "7");
    assert_eq!(added.amount, dec!(12.50));
    assert_eq!(session.transactions.first().unwrap().description, "Cinéma");
    assert_eq!(session.transactions.len(), 7);

    let rows = query_rows(&session, Some("2025-12".parse().unwrap()));
    assert_eq!(rows[0].description, "Cinéma");
    assert_eq!(rows[0].kind, "expense");
}

#[test]
fn edit_and_delete_by_id() {
    let mut session = Session::demo();
    let draft = TransactionDraft {
        description: "Loyer".into(),
        amount: "950".into(),
        kind: "expense".into(),
        category: "logement".into(),
        date: "2025-12-05".into(),
    };
    session.update_transaction("2", &draft).unwrap();
    assert_eq!(session.transactions.get("2").unwrap().amount, dec!(950));
    assert_eq!(session.transactions.as_slice()[1].id, "2");

    let removed = session.delete_transaction("3").unwrap();
    assert_eq!(removed.description, "Courses");
    assert!(session.transactions.get("3").is_none());
    assert!(session.delete_transaction("3").is_err());
}

#[test]
fn query_rows_outside_any_month_is_empty() {
    let session = Session::demo();
    assert!(query_rows(&session, Some("2024-01".parse().unwrap())).is_empty());
    assert_eq!(query_rows(&session, None).len(), 6);
}

#[test]
fn totals_are_rounded_to_cents() {
    let txs = vec![
        tx("1", dec!(10.005), TxType::Income, Category::Salaire, "2025-12-01"),
        tx("2", dec!(3.333), TxType::Expense, Category::Loisirs, "2025-12-02"),
        tx("3", dec!(3.333), TxType::Expense, Category::Loisirs, "2025-12-03"),
    ];
    let s = aggregate_transactions(&txs, None);
    assert_eq!(s.total_income, dec!(10.01));
    assert_eq!(s.total_expenses, dec!(6.67));
    assert_eq!(s.balance, dec!(3.34));
    assert_eq!(s.balance, s.total_income - s.total_expenses);
    assert_eq!(s.expenses_by_category.get(&Category::Loisirs), Some(&dec!(6.67)));
    assert_eq!(s.savings_rate, dec!(33.4));
}

#[test]
fn oversized_amount_is_rejected() {
    let mut session = Session::demo();
    let draft = TransactionDraft {
        description: "Loterie".into(),
        amount: "79228162514264337593543950335".into(),
        kind: "income".into(),
        category: "autres".into(),
        date: "2025-12-20".into(),
    };
    assert_eq!(
        session.add_transaction(&draft).unwrap_err(),
        ValidationError::TooLarge("amount")
    );
    assert_eq!(session.transactions.len(), 6);
}

#[test]
fn huge_loaded_amounts_saturate() {
    let txs = vec![
        tx("1", Decimal::MAX, TxType::Income, Category::Salaire, "2025-12-01"),
        tx("2", Decimal::MAX, TxType::Income, Category::Salaire, "2025-12-02"),
        tx("3", Decimal::MAX, TxType::Expense, Category::Autres, "2025-12-03"),
        tx("4", Decimal::MAX, TxType::Expense, Category::Autres, "2025-12-04"),
    ];
    let s = aggregate_transactions(&txs, None);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expenses, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(monthly_cashflow(&txs, 1)[0].income, Decimal::MAX);
}
