// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use riphus::store::Session;
use riphus::{cli, commands, config, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let settings = config::load(matches.get_one::<String>("config").map(Path::new))?;
    logging::init(settings.log_json);

    let session = match matches.get_one::<String>("session") {
        Some(path) => Session::load(Path::new(path))?,
        None => Session::demo(),
    };

    match matches.subcommand() {
        Some(("budget", sub)) => commands::budgets::handle(&session, &settings, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&session, &settings, sub)?,
        Some(("objectives", sub)) => commands::objectives::handle(&session, &settings, sub)?,
        Some(("portfolio", sub)) => commands::portfolio::handle(&session, &settings, sub)?,
        Some(("patrimony", sub)) => commands::patrimony::handle(&session, &settings, sub)?,
        Some(("screener", sub)) => commands::screener::handle(sub)?,
        Some(("compare", sub)) => commands::compare::handle(sub)?,
        Some(("analyze", sub)) => commands::analyze::handle(sub)?,
        Some(("watchlist", sub)) => commands::watchlist::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
