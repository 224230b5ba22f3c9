// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use riphus::catalog::compare_stock;
use riphus::engine::comparator::{
    Comparison, MetricKey, MetricStatus, best_worst, find_metric, metric_status,
};
use riphus::error::LookupError;

#[test]
fn lower_is_better_metrics() {
    let pe = find_metric(MetricKey::Pe).unwrap();
    assert_eq!(metric_status(pe, 15.0), Some(MetricStatus::Good));
    assert_eq!(metric_status(pe, 20.0), Some(MetricStatus::Good));
    assert_eq!(metric_status(pe, 28.5), Some(MetricStatus::Neutral));
    assert_eq!(metric_status(pe, 40.0), Some(MetricStatus::Bad));
}

#[test]
fn higher_is_better_metrics() {
    let current_ratio = find_metric(MetricKey::CurrentRatio).unwrap();
    assert_eq!(metric_status(current_ratio, 2.12), Some(MetricStatus::Good));
    assert_eq!(metric_status(current_ratio, 1.2), Some(MetricStatus::Neutral));
    assert_eq!(metric_status(current_ratio, 0.99), Some(MetricStatus::Bad));

    let eps_growth = find_metric(MetricKey::EpsGrowth).unwrap();
    assert_eq!(metric_status(eps_growth, -25.2), Some(MetricStatus::Bad));
}

#[test]
fn unrated_metrics_have_no_status() {
    let beta = find_metric(MetricKey::Beta).unwrap();
    assert_eq!(metric_status(beta, 1.28), None);
    let aapl = compare_stock("AAPL").unwrap();
    let msft = compare_stock("MSFT").unwrap();
    let bw = best_worst(beta, &[aapl, msft]);
    assert!(bw.best.is_none());
    assert!(bw.worst.is_none());
}

#[test]
fn best_and_worst_follow_direction() {
    let comparison = Comparison::default();
    let roic = find_metric(MetricKey::Roic).unwrap();
    let bw = best_worst(roic, comparison.stocks());
    assert_eq!(bw.best.as_deref(), Some("AAPL"));
    assert_eq!(bw.worst.as_deref(), Some("GOOGL"));

    let pe = find_metric(MetricKey::Pe).unwrap();
    let bw = best_worst(pe, comparison.stocks());
    assert_eq!(bw.best.as_deref(), Some("GOOGL"));
    assert_eq!(bw.worst.as_deref(), Some("MSFT"));
}

#[test]
fn single_stock_has_best_but_no_worst() {
    let roic = find_metric(MetricKey::Roic).unwrap();
    let bw = best_worst(roic, &[compare_stock("NVDA").unwrap()]);
    assert_eq!(bw.best.as_deref(), Some("NVDA"));
    assert_eq!(bw.worst, None);
}

#[test]
fn selection_rules() {
    let mut comparison = Comparison::default();
    assert_eq!(comparison.symbols(), vec!["AAPL", "MSFT", "GOOGL"]);

    assert_eq!(comparison.add("aapl"), Ok(false));
    assert_eq!(comparison.add("NVDA"), Ok(true));
    assert_eq!(comparison.add("META"), Ok(true));
    assert_eq!(comparison.add("AMZN"), Err(LookupError::ComparisonFull(5)));
    assert_eq!(comparison.stocks().len(), 5);
    assert_eq!(
        comparison.add("XYZ"),
        Err(LookupError::UnknownSymbol("XYZ".into()))
    );

    assert!(comparison.remove("msft"));
    assert!(!comparison.remove("MSFT"));
    assert_eq!(comparison.add("AMZN"), Ok(true));
    assert_eq!(comparison.symbols(), vec!["AAPL", "GOOGL", "NVDA", "META", "AMZN"]);
}

#[test]
fn search_skips_selected_symbols() {
    let comparison = Comparison::default();
    assert_eq!(comparison.search_symbols("a"), vec!["NVDA", "META", "AMZN", "TSLA"]);
    assert!(comparison.search_symbols("goo").is_empty());
}

#[test]
fn rows_cover_every_metric_for_every_stock() {
    let comparison = Comparison::default();
    let rows = comparison.rows();
    assert_eq!(rows.len(), 23);
    assert!(rows.iter().all(|r| r.cells.len() == 3));
    assert_eq!(rows[0].section, "Valorisation");
    assert_eq!(rows[0].cells[0].display, "28.5");

    let net_margin = rows.iter().find(|r| r.metric.key == MetricKey::NetMargin).unwrap();
    assert_eq!(net_margin.cells[1].display, "36.7%");
    assert_eq!(net_margin.cells[1].status, Some(MetricStatus::Good));
}

#[test]
fn comparison_scores_use_full_fundamentals() {
    let comparison = Comparison::default();
    assert_eq!(
        comparison.scores(),
        vec![("AAPL", 58), ("MSFT", 70), ("GOOGL", 90)]
    );
}

#[test]
fn building_from_symbols_stops_at_first_error() {
    assert!(Comparison::from_symbols(["TSLA", "NVDA"]).is_ok());
    assert_eq!(
        Comparison::from_symbols(["TSLA", "NOPE"]),
        Err(LookupError::UnknownSymbol("NOPE".into()))
    );
    let empty = Comparison::from_symbols(Vec::<String>::new()).unwrap();
    assert!(empty.stocks().is_empty());
}
