// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation, evaluation and scoring functions. Nothing here performs I/O.

pub mod analyzer;
pub mod budgets;
pub mod comparator;
pub mod objectives;
pub mod patrimony;
pub mod portfolio;
pub mod screener;
pub mod transactions;

pub use budgets::{BudgetLevel, BudgetLine, BudgetNotifier, evaluate_budgets};
pub use objectives::{ObjectiveStatus, Status, derive_status};
pub use patrimony::{PatrimonySummary, net_patrimony};
pub use portfolio::{PortfolioSummary, valuate_portfolio};
pub use screener::{FilterConfig, RankedStock, SortSpec, filter_and_score_stocks, score_stock};
pub use transactions::{TransactionSummary, aggregate_transactions};
