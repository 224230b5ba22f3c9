// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::models::Watchlist;
use crate::store::Session;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(session, sub)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Listing<'a> {
    selected: Option<&'a str>,
    watchlists: &'a [Watchlist],
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let listing = Listing {
        selected: session.selected_watchlist.as_deref(),
        watchlists: session.watchlists.as_slice(),
    };
    if maybe_print_json(sub.get_flag("json"), false, &listing)? {
        return Ok(());
    }
    if session.watchlists.is_empty() {
        println!("Aucune watchlist");
        return Ok(());
    }
    for list in session.watchlists.iter() {
        let marker = if listing.selected == Some(list.id.as_str()) { "*" } else { " " };
        println!("{} {} ({} actifs)", marker, list.name, list.items.len());
        let rows: Vec<Vec<String>> = list
            .items
            .iter()
            .map(|i| {
                vec![
                    i.symbol.clone(),
                    i.name.clone(),
                    i.price.to_string(),
                    format!("{:+}", i.change),
                    format!("{:+}%", i.change_percent),
                ]
            })
            .collect();
        if !rows.is_empty() {
            println!(
                "{}",
                pretty_table(&["Symbole", "Nom", "Prix", "Variation", "%"], rows)
            );
        }
    }
    Ok(())
}
