// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analyze;
pub mod budgets;
pub mod compare;
pub mod objectives;
pub mod patrimony;
pub mod portfolio;
pub mod screener;
pub mod transactions;
pub mod watchlist;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::engine::budgets::{BudgetNotifier, SilentNotifier, TracingNotifier};
use crate::models::YearMonth;
use crate::utils::{parse_date, parse_month};

pub(crate) fn required_str<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("Missing --{}", name))
}

pub(crate) fn month_arg(m: &clap::ArgMatches) -> Result<Option<YearMonth>> {
    m.get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()
}

/// `name` as a date, or today's local date when absent.
pub(crate) fn date_or_today(m: &clap::ArgMatches, name: &str) -> Result<NaiveDate> {
    match m.get_one::<String>(name) {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn notifier(enabled: bool) -> Box<dyn BudgetNotifier> {
    if enabled {
        Box::new(TracingNotifier)
    } else {
        Box::new(SilentNotifier)
    }
}
