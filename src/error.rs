// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejection of a submitted form before it reaches the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    Required(&'static str),
    #[error("invalid number '{value}' for field '{field}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("field '{0}' must be greater than zero")]
    NotPositive(&'static str),
    #[error("field '{0}' must not be negative")]
    Negative(&'static str),
    #[error("field '{0}' exceeds 1 000 000 000 000")]
    TooLarge(&'static str),
    #[error("invalid date '{value}' for field '{field}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("invalid ticker symbol '{0}'")]
    InvalidSymbol(String),
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("at most {0} stocks can be compared")]
    ComparisonFull(usize),
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),
    #[error("a symbol is required")]
    EmptySymbol,
}

/// Failure of a session mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
