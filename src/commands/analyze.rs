// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::required_str;
use crate::engine::analyzer::{CatalogQuotes, analyze};
use crate::utils::{abbreviate, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let symbol = required_str(m, "SYMBOL")?;
    let analysis = analyze(symbol, &CatalogQuotes)?;
    if maybe_print_json(m.get_flag("json"), false, &analysis)? {
        return Ok(());
    }

    let q = &analysis.quote;
    println!("{} ({}) - {}", q.name, q.symbol, q.sector);
    println!(
        "{:.2}  {:+.2} ({:+.2}%)  cap. {}",
        q.price,
        q.change,
        q.change_percent,
        abbreviate(q.market_cap)
    );
    let rows: Vec<Vec<String>> = analysis
        .indicators
        .iter()
        .map(|i| {
            vec![
                i.label.to_string(),
                format!("{:.2}", i.value),
                i.description.to_string(),
                i.status.as_str().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Indicateur", "Valeur", "Description", "État"], rows)
    );
    Ok(())
}
