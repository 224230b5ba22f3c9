// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Settings;
use crate::store::Session;
use crate::utils::{fmt_money, fmt_pct, fmt_signed_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("value", sub)) = m.subcommand() {
        value(session, settings, sub)?;
    }
    Ok(())
}

fn value(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let summary = session.portfolio();
    if maybe_print_json(sub.get_flag("json"), false, &summary)? {
        return Ok(());
    }
    let cur = settings.currency_symbol.as_str();

    let rows: Vec<Vec<String>> = summary
        .positions
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.kind.label().to_string(),
                fmt_money(&p.cost, cur),
                fmt_money(&p.value, cur),
                fmt_signed_money(&p.gain, cur),
                fmt_pct(&p.gain_percent),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Actif", "Type", "Coût", "Valeur", "+/-", "%"], rows)
    );

    let totals = vec![
        vec!["Valeur totale".to_string(), fmt_money(&summary.total_value, cur)],
        vec!["Investi".to_string(), fmt_money(&summary.total_cost, cur)],
        vec!["Plus-value".to_string(), fmt_signed_money(&summary.total_gain, cur)],
        vec!["Performance".to_string(), fmt_pct(&summary.total_gain_percent)],
    ];
    println!("{}", pretty_table(&["", "Montant"], totals));

    let allocation: Vec<Vec<String>> = summary
        .allocation
        .iter()
        .map(|a| vec![a.label.to_string(), fmt_money(&a.value, cur), fmt_pct(&a.share)])
        .collect();
    if !allocation.is_empty() {
        println!("{}", pretty_table(&["Répartition", "Valeur", "Part"], allocation));
    }
    Ok(())
}
