// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::budgets::{print_alerts, print_summary};
use super::{date_or_today, month_arg, notifier, required_str};
use crate::config::Settings;
use crate::engine::budgets::BudgetLine;
use crate::engine::transactions::TransactionSummary;
use crate::forms::TransactionDraft;
use crate::models::{Transaction, YearMonth};
use crate::store::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, settings, sub)?,
        Some(("add", sub)) => add(session, settings, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            description: t.description.clone(),
            category: t.category.as_str().to_string(),
            kind: t.kind.as_str().to_string(),
            amount: t.amount.to_string(),
        }
    }
}

/// Session order (newest entries first), restricted to `month` when given.
pub fn query_rows(session: &Session, month: Option<YearMonth>) -> Vec<TransactionRow> {
    session
        .transactions
        .iter()
        .filter(|t| month.is_none_or(|m| m.contains(t.date)))
        .map(TransactionRow::from)
        .collect()
}

fn list(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_arg(sub)?;
    let data = query_rows(session, month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = session
        .transactions
        .iter()
        .filter(|t| month.is_none_or(|m| m.contains(t.date)))
        .map(|t| {
            let signed = if t.is_expense() { -t.amount } else { t.amount };
            vec![
                t.date.to_string(),
                t.description.clone(),
                t.category.label().to_string(),
                fmt_money(&signed, &settings.currency_symbol),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Catégorie", "Montant"], rows)
    );
    Ok(())
}

#[derive(Serialize)]
struct Preview<'a> {
    transaction: &'a Transaction,
    month: String,
    summary: TransactionSummary,
    alerts: Vec<BudgetLine>,
}

fn add(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let draft = TransactionDraft {
        description: required_str(sub, "description")?.to_string(),
        amount: required_str(sub, "amount")?.to_string(),
        kind: required_str(sub, "type")?.to_string(),
        category: required_str(sub, "category")?.to_string(),
        date: date_or_today(sub, "date")?.to_string(),
    };

    let mut what_if = session.clone();
    let tx = what_if.add_transaction(&draft)?.clone();
    let month = YearMonth::of(tx.date);
    let summary = what_if.transaction_summary(Some(month));
    let mut notifier = notifier(settings.budget_alerts);
    let alerts = what_if.budget_alerts(Some(month), notifier.as_mut());

    let preview = Preview {
        transaction: &tx,
        month: month.to_string(),
        summary,
        alerts,
    };
    if maybe_print_json(sub.get_flag("json"), false, &preview)? {
        return Ok(());
    }
    println!(
        "Preview: {} {} on {} ({}), not saved",
        tx.description,
        fmt_money(&tx.amount, &settings.currency_symbol),
        tx.date,
        tx.category.label()
    );
    println!("Month {}", month);
    print_summary(&preview.summary, &settings.currency_symbol);
    print_alerts(&preview.alerts, &settings.currency_symbol);
    Ok(())
}
