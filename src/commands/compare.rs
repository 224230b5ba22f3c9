// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::engine::comparator::{Comparison, METRIC_SECTIONS, MetricRow};
use crate::utils::{abbreviate, maybe_print_json, pretty_table};

#[derive(Serialize)]
struct Report {
    symbols: Vec<&'static str>,
    scores: Vec<Score>,
    metrics: Vec<MetricRow>,
}

#[derive(Serialize)]
struct Score {
    symbol: &'static str,
    score: u8,
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let symbols: Vec<&String> = m
        .get_many::<String>("symbols")
        .map(|vals| vals.collect())
        .unwrap_or_default();
    let comparison = if symbols.is_empty() {
        Comparison::default()
    } else {
        Comparison::from_symbols(symbols)?
    };

    let report = Report {
        symbols: comparison.symbols(),
        scores: comparison
            .scores()
            .into_iter()
            .map(|(symbol, score)| Score { symbol, score })
            .collect(),
        metrics: comparison.rows(),
    };
    if maybe_print_json(m.get_flag("json"), false, &report)? {
        return Ok(());
    }

    let mut headers = vec!["Métrique"];
    headers.extend(report.symbols.iter().copied());

    let mut overview: Vec<Vec<String>> = Vec::new();
    let mut price = vec!["Prix".to_string()];
    let mut cap = vec!["Cap.".to_string()];
    for stock in comparison.stocks() {
        price.push(format!("{:.2} ({:+.2})", stock.price, stock.change));
        cap.push(abbreviate(stock.market_cap));
    }
    let mut score = vec!["Score".to_string()];
    score.extend(report.scores.iter().map(|s| s.score.to_string()));
    overview.extend([price, cap, score]);
    println!("{}", pretty_table(&headers, overview));

    for section in METRIC_SECTIONS {
        let rows: Vec<Vec<String>> = report
            .metrics
            .iter()
            .filter(|r| r.section == section.name)
            .map(|r| {
                let mut row = vec![r.metric.label.to_string()];
                row.extend(r.cells.iter().map(|c| {
                    if r.best_worst.best.as_deref() == Some(c.symbol.as_str()) {
                        format!("{} ▲", c.display)
                    } else if r.best_worst.worst.as_deref() == Some(c.symbol.as_str()) {
                        format!("{} ▼", c.display)
                    } else {
                        c.display.clone()
                    }
                }));
                row
            })
            .collect();
        println!("{}", section.name);
        println!("{}", pretty_table(&headers, rows));
    }
    Ok(())
}
