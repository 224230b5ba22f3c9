// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Settings;
use crate::engine::patrimony::StepKind;
use crate::store::Session;
use crate::utils::{fmt_money, fmt_signed_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("summary", sub)) = m.subcommand() {
        summary(session, settings, sub)?;
    }
    Ok(())
}

fn summary(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let summary = session.patrimony_summary();
    if maybe_print_json(sub.get_flag("json"), false, &summary)? {
        return Ok(());
    }
    let cur = settings.currency_symbol.as_str();

    let rows: Vec<Vec<String>> = summary
        .waterfall
        .iter()
        .map(|step| {
            let value = match step.kind {
                StepKind::Total => fmt_signed_money(&step.value, cur),
                _ => fmt_money(&step.value, cur),
            };
            vec![step.label.clone(), value]
        })
        .collect();
    println!("{}", pretty_table(&["Poste", "Montant"], rows));
    println!(
        "Actifs {} | Dettes {} | Valeur nette {}",
        fmt_money(&summary.total_assets, cur),
        fmt_money(&summary.total_liabilities, cur),
        fmt_signed_money(&summary.net_worth, cur)
    );
    Ok(())
}
