// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flag() -> Arg {
    arg!(--json "Print JSON instead of a table")
}

fn month_arg() -> Arg {
    arg!(--month <MONTH> "Restrict to a month (YYYY-MM)").required(false)
}

fn threshold(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("N")
        .help(help)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Monthly income, expenses and budget caps")
        .subcommand_required(true)
        .subcommand(
            Command::new("summary")
                .about("Totals, savings rate and expenses per category")
                .arg(month_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("alerts")
                .about("Spending against each category cap")
                .arg(month_arg())
                .arg(json_flag()),
        )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Transactions")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .arg(month_arg())
                .arg(json_flag())
                .arg(arg!(--jsonl "Print one JSON object per line")),
        )
        .subcommand(
            Command::new("add")
                .about("Preview a transaction against the session (nothing is saved)")
                .arg(arg!(--description <TEXT>).required(true))
                .arg(arg!(--amount <AMOUNT>).required(true))
                .arg(
                    arg!(--"type" <TYPE>)
                        .required(true)
                        .value_parser(["income", "expense"]),
                )
                .arg(arg!(--category <CATEGORY>).required(true))
                .arg(arg!(--date <DATE> "Defaults to today").required(false))
                .arg(json_flag()),
        )
}

fn objectives_cmd() -> Command {
    Command::new("objectives")
        .about("Financial goals")
        .subcommand_required(true)
        .subcommand(
            Command::new("status")
                .arg(arg!(--today <DATE> "Evaluate as of this date (YYYY-MM-DD)").required(false))
                .arg(json_flag()),
        )
}

fn portfolio_cmd() -> Command {
    Command::new("portfolio")
        .about("Investment positions")
        .subcommand_required(true)
        .subcommand(Command::new("value").arg(json_flag()))
}

fn patrimony_cmd() -> Command {
    Command::new("patrimony")
        .about("Assets, liabilities and net worth")
        .subcommand_required(true)
        .subcommand(Command::new("summary").arg(json_flag()))
}

fn screener_cmd() -> Command {
    Command::new("screener")
        .about("Filter, rank and score the stock universe")
        .arg(threshold("pe-min", "Minimum P/E"))
        .arg(threshold("pe-max", "Maximum P/E"))
        .arg(threshold("roic-min", "Minimum ROIC (%)"))
        .arg(threshold("fcf-yield-min", "Minimum FCF yield (%)"))
        .arg(threshold("de-max", "Maximum debt to equity"))
        .arg(threshold("growth-min", "Minimum revenue growth (%)"))
        .arg(threshold("margin-min", "Minimum net margin (%)"))
        .arg(threshold("div-min", "Minimum dividend yield (%)"))
        .arg(arg!(--sector <SECTOR> "Technologie, Santé, Consommation, Finance, or 'all'").required(false))
        .arg(
            arg!(--"cap-min" <BILLIONS> "Minimum market cap in billions: 10, 100, 500 or 1000")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--sort <COLUMN> "Sort column (default: roic)").required(false))
        .arg(arg!(--asc "Sort ascending"))
        .arg(json_flag())
        .arg(arg!(--csv <PATH> "Write the ranked rows as CSV").required(false))
}

fn compare_cmd() -> Command {
    Command::new("compare")
        .about("Side-by-side fundamentals for up to five stocks")
        .arg(
            Arg::new("symbols")
                .value_name("SYMBOL")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Defaults to AAPL MSFT GOOGL"),
        )
        .arg(json_flag())
}

fn analyze_cmd() -> Command {
    Command::new("analyze")
        .about("Quote and indicator check for one stock")
        .arg(arg!(<SYMBOL> "Ticker symbol"))
        .arg(json_flag())
}

fn watchlist_cmd() -> Command {
    Command::new("watchlist")
        .about("Saved symbol lists")
        .subcommand_required(true)
        .subcommand(Command::new("list").arg(json_flag()))
}

pub fn build_cli() -> Command {
    Command::new("riphus")
        .about("Personal finance dashboard: budget, goals, portfolio and stock research")
        .version(clap::crate_version!())
        .arg(
            arg!(--config <PATH> "Settings file (JSON)")
                .global(true)
                .required(false),
        )
        .arg(
            arg!(--session <PATH> "Session snapshot (JSON); the demo data is used otherwise")
                .global(true)
                .required(false),
        )
        .subcommand(budget_cmd())
        .subcommand(tx_cmd())
        .subcommand(objectives_cmd())
        .subcommand(portfolio_cmd())
        .subcommand(patrimony_cmd())
        .subcommand(screener_cmd())
        .subcommand(compare_cmd())
        .subcommand(analyze_cmd())
        .subcommand(watchlist_cmd())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        build_cli().debug_assert();
    }
}
