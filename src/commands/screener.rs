// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::catalog::{MARKET_CAP_OPTIONS, SCREENER_UNIVERSE, SECTORS};
use crate::error::ValidationError;
use crate::engine::screener::{
    FilterConfig, RankedStock, SortColumn, SortDirection, SortSpec, filter_and_score_stocks,
};
use crate::utils::{abbreviate, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let filters = filters_from_args(m)?;
    let sort = sort_from_args(m)?;
    let ranked = filter_and_score_stocks(&SCREENER_UNIVERSE, &filters, sort);

    if let Some(path) = m.get_one::<String>("csv") {
        let n = write_csv(Path::new(path), &ranked)?;
        println!("Wrote {} rows to {}", n, path);
        return Ok(());
    }
    if maybe_print_json(m.get_flag("json"), false, &ranked)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|r| {
            let s = &r.stock;
            vec![
                s.symbol.clone(),
                s.name.clone(),
                s.sector.clone(),
                format!("{:.2}", s.price),
                format!("{:.1}", s.pe),
                format!("{:.1}%", s.roic),
                format!("{:.1}%", s.fcf_yield),
                format!("{:.2}", s.debt_to_equity),
                format!("{:.1}%", s.revenue_growth),
                format!("{:.1}%", s.net_margin),
                format!("{:.1}%", s.dividend_yield),
                abbreviate(s.market_cap),
                r.score.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Symbole", "Nom", "Secteur", "Prix", "P/E", "ROIC", "FCF Yield", "D/E", "Croissance",
                "Marge", "Div.", "Cap.", "Score",
            ],
            rows,
        )
    );
    println!("{} résultat(s)", ranked.len());
    Ok(())
}

/// Unset flags keep their default threshold; sector `all` disables the sector filter.
/// The sector and market-cap floor must be among the offered options.
pub fn filters_from_args(m: &clap::ArgMatches) -> Result<FilterConfig> {
    let mut f = FilterConfig::default();
    let bound = |name: &str, slot: &mut f64| {
        if let Some(v) = m.get_one::<f64>(name) {
            *slot = *v;
        }
    };
    bound("pe-min", &mut f.pe_min);
    bound("pe-max", &mut f.pe_max);
    bound("roic-min", &mut f.roic_min);
    bound("fcf-yield-min", &mut f.fcf_yield_min);
    bound("de-max", &mut f.debt_to_equity_max);
    bound("growth-min", &mut f.revenue_growth_min);
    bound("margin-min", &mut f.net_margin_min);
    bound("div-min", &mut f.dividend_yield_min);

    if let Some(raw) = m
        .get_one::<String>("sector")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
    {
        let sector = SECTORS
            .iter()
            .find(|s| s.to_lowercase() == raw.to_lowercase())
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "sector",
                value: raw.to_string(),
            })?;
        f.sector = Some(sector.to_string());
    }

    if let Some(billions) = m.get_one::<f64>("cap-min").copied() {
        if !MARKET_CAP_OPTIONS.iter().any(|o| f64::from(*o) == billions) {
            return Err(ValidationError::UnknownVariant {
                kind: "market cap floor",
                value: billions.to_string(),
            }
            .into());
        }
        f.market_cap_min = Some(billions);
    }
    Ok(f)
}

pub fn sort_from_args(m: &clap::ArgMatches) -> Result<SortSpec> {
    let mut sort = SortSpec::default();
    if let Some(col) = m.get_one::<String>("sort") {
        sort.column = col.parse::<SortColumn>()?;
    }
    if m.get_flag("asc") {
        sort.direction = SortDirection::Asc;
    }
    Ok(sort)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    symbol: &'a str,
    name: &'a str,
    sector: &'a str,
    price: f64,
    change: f64,
    pe: f64,
    roic: f64,
    fcf_yield: f64,
    debt_to_equity: f64,
    revenue_growth: f64,
    net_margin: f64,
    dividend_yield: f64,
    market_cap: f64,
    score: u8,
}

pub fn write_csv(path: &Path, ranked: &[RankedStock]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Create CSV at {}", path.display()))?;
    for r in ranked {
        let s = &r.stock;
        wtr.serialize(CsvRow {
            symbol: &s.symbol,
            name: &s.name,
            sector: &s.sector,
            price: s.price,
            change: s.change,
            pe: s.pe,
            roic: s.roic,
            fcf_yield: s.fcf_yield,
            debt_to_equity: s.debt_to_equity,
            revenue_growth: s.revenue_growth,
            net_margin: s.net_margin,
            dividend_yield: s.dividend_yield,
            market_cap: s.market_cap,
            score: r.score,
        })?;
    }
    wtr.flush()?;
    Ok(ranked.len())
}
