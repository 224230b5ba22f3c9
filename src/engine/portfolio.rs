// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Asset, AssetType};
use crate::utils::{percent_of, round_money, round_pct};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionValue {
    pub id: String,
    pub name: String,
    pub kind: AssetType,
    pub value: Decimal,
    pub cost: Decimal,
    pub gain: Decimal,
    pub gain_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub kind: AssetType,
    pub label: &'static str,
    pub value: Decimal,
    pub share: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub positions: Vec<PositionValue>,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain: Decimal,
    pub total_gain_percent: Decimal,
    pub allocation: Vec<AllocationSlice>,
}

pub fn value_position(asset: &Asset) -> PositionValue {
    let value = asset.quantity.saturating_mul(asset.current_price);
    let cost = asset.quantity.saturating_mul(asset.buy_price);
    let gain = value.saturating_sub(cost);
    PositionValue {
        id: asset.id.clone(),
        name: asset.name.clone(),
        kind: asset.kind,
        value: round_money(value),
        cost: round_money(cost),
        gain: round_money(gain),
        gain_percent: round_pct(percent_of(gain, cost)),
    }
}

pub fn valuate_portfolio(assets: &[Asset]) -> PortfolioSummary {
    let mut total_value = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;
    let mut by_type: BTreeMap<AssetType, Decimal> = BTreeMap::new();

    for asset in assets {
        let value = asset.quantity.saturating_mul(asset.current_price);
        total_value = total_value.saturating_add(value);
        total_cost = total_cost.saturating_add(asset.quantity.saturating_mul(asset.buy_price));
        let slot = by_type.entry(asset.kind).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(value);
    }

    let total_gain = total_value.saturating_sub(total_cost);
    let allocation = by_type
        .into_iter()
        .map(|(kind, value)| AllocationSlice {
            kind,
            label: kind.label(),
            value: round_money(value),
            share: round_pct(percent_of(value, total_value)),
            color: kind.color(),
        })
        .collect();

    PortfolioSummary {
        positions: assets.iter().map(value_position).collect(),
        total_value: round_money(total_value),
        total_cost: round_money(total_cost),
        total_gain: round_money(total_gain),
        total_gain_percent: round_pct(percent_of(total_gain, total_cost)),
        allocation,
    }
}
