// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::YearMonth;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<YearMonth> {
    s.parse::<YearMonth>()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

/// Currency precision used by every displayed amount.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage precision used by every displayed rate.
pub fn round_pct(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// `part / whole * 100`, or zero when `whole` is zero. Not rounded.
/// Saturates at the decimal bounds instead of overflowing.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// French grouping, e.g. `3 500,00 €`.
pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let rounded = round_money(*d);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ");

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{},{} {}", sign, grouped, dec_part, symbol)
}

pub fn fmt_signed_money(d: &Decimal, symbol: &str) -> String {
    if *d >= Decimal::ZERO {
        format!("+{}", fmt_money(d, symbol))
    } else {
        fmt_money(d, symbol)
    }
}

pub fn fmt_pct(d: &Decimal) -> String {
    format!("{:.1}%", round_pct(*d))
}

/// Market capitalisation shorthand: `2.8T`, `380B`, `950M`.
pub fn abbreviate(value: f64) -> String {
    if value >= 1e12 {
        format!("{:.1}T", value / 1e12)
    } else if value >= 1e9 {
        format!("{:.0}B", value / 1e9)
    } else {
        format!("{:.0}M", value / 1e6)
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_is_grouped_french_style() {
        assert_eq!(fmt_money(&dec!(3500), "€"), "3 500,00 €");
        assert_eq!(fmt_money(&dec!(1234567.891), "€"), "1 234 567,89 €");
        assert_eq!(fmt_money(&dec!(-900), "€"), "-900,00 €");
        assert_eq!(fmt_money(&dec!(0), "€"), "0,00 €");
    }

    #[test]
    fn signed_money_marks_non_negative_values() {
        assert_eq!(fmt_signed_money(&dec!(2250), "€"), "+2 250,00 €");
        assert_eq!(fmt_signed_money(&dec!(-12.5), "€"), "-12,50 €");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_pct(dec!(64.25)), dec!(64.3));
        assert_eq!(round_pct(dec!(-64.25)), dec!(-64.3));
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(1), dec!(4)), dec!(25));
    }

    #[test]
    fn market_cap_abbreviations() {
        assert_eq!(abbreviate(2800e9), "2.8T");
        assert_eq!(abbreviate(380e9), "380B");
        assert_eq!(abbreviate(950e6), "950M");
    }

    #[test]
    fn percent_of_saturates() {
        assert_eq!(percent_of(Decimal::MAX, dec!(0.5)), Decimal::MAX);
        assert_eq!(percent_of(Decimal::MIN, dec!(0.5)), Decimal::MIN);
    }

    #[test]
    fn month_parsing_trims_and_validates() {
        let m = parse_month(" 2025-12 ").unwrap();
        assert_eq!(m.to_string(), "2025-12");
        assert!(parse_month("2025-13").is_err());
    }
}
