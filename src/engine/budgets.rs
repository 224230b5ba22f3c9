// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Category;
use crate::utils::{percent_of, round_pct};

/// Monthly spending cap per category.
pub type BudgetCaps = BTreeMap<Category, Decimal>;

/// Share of the cap from which a category is flagged.
const WARNING_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

pub fn default_caps() -> BudgetCaps {
    [
        (Category::Logement, 1000),
        (Category::Alimentation, 400),
        (Category::Transport, 100),
        (Category::Loisirs, 200),
        (Category::Investissement, 600),
    ]
    .into_iter()
    .filter_map(|(c, v)| Decimal::from_i64(v).map(|d| (c, d)))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Ok,
    Warning,
    Over,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }

    pub fn is_alert(&self) -> bool {
        !matches!(self, Self::Ok)
    }
}

pub fn classify(spent: Decimal, cap: Decimal) -> BudgetLevel {
    if spent > cap {
        BudgetLevel::Over
    } else if cap > Decimal::ZERO && spent >= cap * WARNING_RATIO {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Ok
    }
}

/// Budget vs actual for one capped category. `ok` rows are included; only
/// `warning` and `over` lines are alerts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: Category,
    pub label: &'static str,
    pub cap: Decimal,
    pub spent: Decimal,
    pub percent_used: Decimal,
    pub level: BudgetLevel,
}

/// Receives one call per `warning` or `over` category on every evaluation pass.
pub trait BudgetNotifier {
    fn notify(&mut self, line: &BudgetLine);
}

impl<F: FnMut(&BudgetLine)> BudgetNotifier for F {
    fn notify(&mut self, line: &BudgetLine) {
        self(line)
    }
}

/// Logs alerts through `tracing`.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl BudgetNotifier for TracingNotifier {
    fn notify(&mut self, line: &BudgetLine) {
        tracing::warn!(
            category = line.category.as_str(),
            spent = %line.spent,
            cap = %line.cap,
            level = line.level.as_str(),
            "budget alert"
        );
    }
}

/// Discards every alert.
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl BudgetNotifier for SilentNotifier {
    fn notify(&mut self, _line: &BudgetLine) {}
}

/// One entry per capped category, in category order. Categories without a cap are skipped.
/// No state is kept between passes, so a category that stays over its cap is reported again.
pub fn evaluate_budgets<N: BudgetNotifier + ?Sized>(
    expenses_by_category: &BTreeMap<Category, Decimal>,
    caps: &BudgetCaps,
    notifier: &mut N,
) -> Vec<BudgetLine> {
    caps.iter()
        .map(|(category, cap)| {
            let spent = expenses_by_category
                .get(category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let line = BudgetLine {
                category: *category,
                label: category.label(),
                cap: *cap,
                spent,
                percent_used: round_pct(percent_of(spent, *cap)),
                level: classify(spent, *cap),
            };
            if line.level.is_alert() {
                notifier.notify(&line);
            }
            line
        })
        .collect()
}
