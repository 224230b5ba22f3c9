// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{month_arg, notifier};
use crate::config::Settings;
use crate::engine::budgets::BudgetLine;
use crate::engine::transactions::{CategorySlice, TransactionSummary, expense_breakdown};
use crate::store::Session;
use crate::utils::{fmt_money, fmt_pct, fmt_signed_money, maybe_print_json, percent_of, pretty_table};

pub fn handle(session: &Session, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(session, settings, sub)?,
        Some(("alerts", sub)) => alerts(session, settings, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    month: Option<String>,
    #[serde(flatten)]
    summary: &'a TransactionSummary,
    breakdown: Vec<CategorySlice>,
}

fn summary(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_arg(sub)?;
    let summary = session.transaction_summary(month);
    let breakdown = expense_breakdown(&summary.expenses_by_category);
    let out = SummaryOutput {
        month: month.map(|m| m.to_string()),
        summary: &summary,
        breakdown,
    };
    if maybe_print_json(sub.get_flag("json"), false, &out)? {
        return Ok(());
    }

    print_summary(&summary, &settings.currency_symbol);
    let rows: Vec<Vec<String>> = out
        .breakdown
        .iter()
        .map(|slice| {
            vec![
                slice.label.to_string(),
                fmt_money(&slice.value, &settings.currency_symbol),
                fmt_pct(&percent_of(slice.value, summary.total_expenses)),
            ]
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", pretty_table(&["Catégorie", "Dépenses", "Part"], rows));
    }
    Ok(())
}

pub(crate) fn print_summary(summary: &TransactionSummary, symbol: &str) {
    let rows = vec![
        vec!["Revenus".to_string(), fmt_money(&summary.total_income, symbol)],
        vec!["Dépenses".to_string(), fmt_money(&summary.total_expenses, symbol)],
        vec!["Solde".to_string(), fmt_signed_money(&summary.balance, symbol)],
        vec!["Taux d'épargne".to_string(), fmt_pct(&summary.savings_rate)],
    ];
    println!("{}", pretty_table(&["", "Montant"], rows));
}

pub(crate) fn print_alerts(alerts: &[BudgetLine], symbol: &str) {
    let rows: Vec<Vec<String>> = alerts
        .iter()
        .map(|a| {
            vec![
                a.label.to_string(),
                fmt_money(&a.cap, symbol),
                fmt_money(&a.spent, symbol),
                fmt_pct(&a.percent_used),
                a.level.as_str().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Catégorie", "Budget", "Dépensé", "Utilisé", "État"], rows)
    );
}

fn alerts(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_arg(sub)?;
    let mut notifier = notifier(settings.budget_alerts);
    let alerts = session.budget_alerts(month, notifier.as_mut());
    if maybe_print_json(sub.get_flag("json"), false, &alerts)? {
        return Ok(());
    }
    print_alerts(&alerts, &settings.currency_symbol);
    Ok(())
}
