// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{PatrimonyItem, PatrimonyKind};
use crate::utils::round_money;

pub const ASSET_CATEGORIES: &[(&str, &str)] = &[
    ("cash", "Liquidités"),
    ("investments", "Investissements"),
    ("real-estate", "Immobilier"),
    ("vehicles", "Véhicules"),
    ("other-assets", "Autres actifs"),
];

pub const LIABILITY_CATEGORIES: &[(&str, &str)] = &[
    ("mortgage", "Crédit immobilier"),
    ("car-loan", "Crédit auto"),
    ("consumer-credit", "Crédit conso"),
    ("other-debts", "Autres dettes"),
];

pub const LIABILITIES_LABEL: &str = "Dettes";
pub const NET_WORTH_LABEL: &str = "Valeur nette";

/// Display label for a category key; unknown keys are returned as-is.
pub fn category_label(category: &str, kind: PatrimonyKind) -> &str {
    let table = match kind {
        PatrimonyKind::Asset => ASSET_CATEGORIES,
        PatrimonyKind::Liability => LIABILITY_CATEGORIES,
    };
    table
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, label)| *label)
        .unwrap_or(category)
}

pub fn category_color(category: &str) -> &'static str {
    match category {
        "cash" => "hsl(160 84% 39%)",
        "investments" => "hsl(199 89% 48%)",
        "real-estate" => "hsl(280 80% 55%)",
        "vehicles" => "hsl(38 92% 50%)",
        "mortgage" => "hsl(0 84% 60%)",
        "car-loan" => "hsl(0 70% 50%)",
        "consumer-credit" => "hsl(0 60% 45%)",
        "other-debts" => "hsl(0 50% 40%)",
        _ => "hsl(215 20% 55%)",
    }
}

const LIABILITIES_COLOR: &str = "hsl(0 84% 60%)";
const NET_WORTH_COLOR: &str = "hsl(199 89% 48%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Asset,
    Liability,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub label: String,
    pub value: Decimal,
    pub kind: StepKind,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatrimonySummary {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub assets_by_category: BTreeMap<String, Decimal>,
    pub liabilities_by_category: BTreeMap<String, Decimal>,
    pub waterfall: Vec<WaterfallStep>,
}

fn saturating_sum<'a>(values: impl Iterator<Item = &'a Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
}

/// Known categories first in their fixed order, then unknown keys alphabetically.
fn ordered_asset_categories(by_category: &BTreeMap<String, Decimal>) -> Vec<(&str, Decimal)> {
    let known = ASSET_CATEGORIES
        .iter()
        .filter_map(|(key, _)| by_category.get(*key).map(|v| (*key, *v)));
    let unknown = by_category
        .iter()
        .filter(|(key, _)| !ASSET_CATEGORIES.iter().any(|(k, _)| *k == key.as_str()))
        .map(|(key, v)| (key.as_str(), *v));
    known.chain(unknown).collect()
}

pub fn net_patrimony(items: &[PatrimonyItem]) -> PatrimonySummary {
    let mut assets_by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut liabilities_by_category: BTreeMap<String, Decimal> = BTreeMap::new();

    for item in items {
        let bucket = match item.kind {
            PatrimonyKind::Asset => &mut assets_by_category,
            PatrimonyKind::Liability => &mut liabilities_by_category,
        };
        let slot = bucket.entry(item.category.clone()).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(item.value);
    }

    let total_assets = round_money(saturating_sum(assets_by_category.values()));
    let total_liabilities = round_money(saturating_sum(liabilities_by_category.values()));
    let net_worth = total_assets.saturating_sub(total_liabilities);
    for value in assets_by_category
        .values_mut()
        .chain(liabilities_by_category.values_mut())
    {
        *value = round_money(*value);
    }

    let mut waterfall: Vec<WaterfallStep> = ordered_asset_categories(&assets_by_category)
        .into_iter()
        .map(|(key, value)| WaterfallStep {
            label: category_label(key, PatrimonyKind::Asset).to_string(),
            value,
            kind: StepKind::Asset,
            color: category_color(key),
        })
        .collect();
    waterfall.push(WaterfallStep {
        label: LIABILITIES_LABEL.to_string(),
        value: if total_liabilities.is_zero() {
            Decimal::ZERO
        } else {
            -total_liabilities
        },
        kind: StepKind::Liability,
        color: LIABILITIES_COLOR,
    });
    waterfall.push(WaterfallStep {
        label: NET_WORTH_LABEL.to_string(),
        value: net_worth,
        kind: StepKind::Total,
        color: NET_WORTH_COLOR,
    });

    PatrimonySummary {
        total_assets,
        total_liabilities,
        net_worth,
        assets_by_category,
        liabilities_by_category,
        waterfall,
    }
}
