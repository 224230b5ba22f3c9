// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Raw form input, validated into records before it reaches a session.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::models::{
    Asset, AssetType, Category, Objective, ObjectiveCategory, PatrimonyItem, PatrimonyKind,
    Priority, Transaction, TxType,
};

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(v)
    }
}

/// Largest magnitude accepted for any amount, quantity or price (10^12).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn number(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    let v = required(field, value)?;
    // Accept the French decimal comma as typed into the forms.
    let d = v
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: v.to_string(),
        })?;
    if d.abs() > MAX_AMOUNT {
        return Err(ValidationError::TooLarge(field));
    }
    Ok(d)
}

fn positive(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    let d = number(field, value)?;
    if d <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(d)
}

fn non_negative(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    let d = number(field, value)?;
    if d < Decimal::ZERO {
        return Err(ValidationError::Negative(field));
    }
    Ok(d)
}

fn date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let v = required(field, value)?;
    NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: v.to_string(),
    })
}

fn variant<T>(
    kind: &'static str,
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let v = required(field, value)?;
    parse(v).ok_or_else(|| ValidationError::UnknownVariant {
        kind,
        value: v.to_string(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub date: String,
}

impl TransactionDraft {
    pub fn validate(&self, id: String) -> Result<Transaction, ValidationError> {
        Ok(Transaction {
            id,
            description: required("description", &self.description)?.to_string(),
            amount: positive("amount", &self.amount)?,
            kind: variant("transaction type", "type", &self.kind, TxType::parse)?,
            category: variant("category", "category", &self.category, Category::parse)?,
            date: date("date", &self.date)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectiveDraft {
    pub title: String,
    pub description: String,
    pub current: String,
    pub target: String,
    pub unit: String,
    pub deadline: String,
    pub priority: String,
    pub category: String,
}

impl ObjectiveDraft {
    pub fn validate(&self, id: String) -> Result<Objective, ValidationError> {
        let unit = match self.unit.trim() {
            "" => "€".to_string(),
            u => u.to_string(),
        };
        Ok(Objective {
            id,
            title: required("title", &self.title)?.to_string(),
            description: self.description.trim().to_string(),
            current: non_negative("current", &self.current)?,
            target: positive("target", &self.target)?,
            unit,
            deadline: date("deadline", &self.deadline)?,
            priority: variant("priority", "priority", &self.priority, Priority::parse)?,
            category: variant(
                "objective category",
                "category",
                &self.category,
                ObjectiveCategory::parse,
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: String,
    pub buy_price: String,
    pub current_price: String,
}

impl AssetDraft {
    pub fn validate(&self, id: String) -> Result<Asset, ValidationError> {
        Ok(Asset {
            id,
            name: required("name", &self.name)?.to_string(),
            kind: variant("asset type", "type", &self.kind, AssetType::parse)?,
            quantity: positive("quantity", &self.quantity)?,
            buy_price: non_negative("buyPrice", &self.buy_price)?,
            current_price: non_negative("currentPrice", &self.current_price)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatrimonyDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub value: String,
}

impl PatrimonyDraft {
    pub fn validate(&self, id: String) -> Result<PatrimonyItem, ValidationError> {
        Ok(PatrimonyItem {
            id,
            name: required("name", &self.name)?.to_string(),
            kind: variant("patrimony type", "type", &self.kind, PatrimonyKind::parse)?,
            category: required("category", &self.category)?.to_lowercase(),
            value: non_negative("value", &self.value)?,
        })
    }
}
