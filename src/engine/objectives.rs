// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Objective;
use crate::utils::{percent_of, round_pct};

/// Fraction of the expected progress an objective must reach to count as on track.
const ON_TRACK_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    OnTrack,
    Behind,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::OnTrack => "on-track",
            Self::Behind => "behind",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Atteint",
            Self::OnTrack => "En bonne voie",
            Self::Behind => "En retard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveStatus {
    /// Completion, capped at 100, one decimal.
    pub percentage: Decimal,
    /// Share of the schedule elapsed at `now`, one decimal.
    pub expected_progress: Decimal,
    pub status: Status,
    pub remaining: Decimal,
}

/// Linear schedule between `epoch_start` and `deadline`, clamped to `[0, 100]`.
/// A deadline on or before the epoch counts as fully elapsed.
pub fn expected_progress(epoch_start: NaiveDate, deadline: NaiveDate, now: NaiveDate) -> Decimal {
    let total = (deadline - epoch_start).num_days();
    if total <= 0 {
        return Decimal::ONE_HUNDRED;
    }
    let elapsed = (now - epoch_start).num_days().clamp(0, total);
    percent_of(Decimal::from(elapsed), Decimal::from(total))
}

fn raw_percentage(current: Decimal, target: Decimal) -> Decimal {
    if target.is_zero() {
        if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        percent_of(current, target).min(Decimal::ONE_HUNDRED)
    }
}

/// Deterministic in `now`; never reads the clock.
pub fn derive_status(objective: &Objective, now: NaiveDate, epoch_start: NaiveDate) -> ObjectiveStatus {
    let percentage = raw_percentage(objective.current, objective.target);
    let expected = expected_progress(epoch_start, objective.deadline, now);

    let status = if objective.current >= objective.target {
        Status::Completed
    } else if percentage >= expected * ON_TRACK_FACTOR {
        Status::OnTrack
    } else {
        Status::Behind
    };

    ObjectiveStatus {
        percentage: round_pct(percentage),
        expected_progress: round_pct(expected),
        status,
        remaining: objective.target.saturating_sub(objective.current).max(Decimal::ZERO),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub on_track: usize,
    pub behind: usize,
}

pub fn status_counts(objectives: &[Objective], now: NaiveDate, epoch_start: NaiveDate) -> StatusCounts {
    objectives
        .iter()
        .fold(StatusCounts::default(), |mut counts, objective| {
            counts.total += 1;
            match derive_status(objective, now, epoch_start).status {
                Status::Completed => counts.completed += 1,
                Status::OnTrack => counts.on_track += 1,
                Status::Behind => counts.behind += 1,
            }
            counts
        })
}
