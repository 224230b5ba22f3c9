// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::date_or_today;
use crate::config::Settings;
use crate::engine::objectives::{ObjectiveStatus, StatusCounts, status_counts};
use crate::models::Objective;
use crate::store::Session;
use crate::utils::{fmt_pct, maybe_print_json, pretty_table};

pub fn handle(session: &Session, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("status", sub)) = m.subcommand() {
        status(session, settings, sub)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    objective: &'a Objective,
    progress: ObjectiveStatus,
}

#[derive(Serialize)]
struct Report<'a> {
    today: String,
    counts: StatusCounts,
    objectives: Vec<Entry<'a>>,
}

fn status(session: &Session, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let today = date_or_today(sub, "today")?;
    let report = Report {
        today: today.to_string(),
        counts: status_counts(session.objectives.as_slice(), today, settings.epoch_start),
        objectives: session
            .objective_statuses(today, settings.epoch_start)
            .into_iter()
            .map(|(objective, progress)| Entry { objective, progress })
            .collect(),
    };
    if maybe_print_json(sub.get_flag("json"), false, &report)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = report
        .objectives
        .iter()
        .map(|e| {
            vec![
                e.objective.title.clone(),
                e.objective.category.label().to_string(),
                e.objective.priority.label().to_string(),
                format!(
                    "{} / {} {}",
                    e.objective.current, e.objective.target, e.objective.unit
                ),
                fmt_pct(&e.progress.percentage),
                fmt_pct(&e.progress.expected_progress),
                e.objective.deadline.to_string(),
                e.progress.status.label().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Objectif", "Catégorie", "Priorité", "Progression", "%", "Attendu", "Échéance",
                "Statut",
            ],
            rows,
        )
    );
    println!(
        "{} objectifs: {} atteints, {} en bonne voie, {} en retard",
        report.counts.total, report.counts.completed, report.counts.on_track, report.counts.behind
    );
    Ok(())
}
