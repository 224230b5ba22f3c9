// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use riphus::engine::budgets::{
    BudgetCaps, BudgetLevel, BudgetLine, SilentNotifier, default_caps, evaluate_budgets,
};
use riphus::models::Category;
use riphus::store::Session;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

#[test]
fn demo_december_budget_levels() {
    let session = Session::demo();
    let mut raised: Vec<Category> = Vec::new();
    let lines = session.budget_alerts(Some("2025-12".parse().unwrap()), &mut |l: &BudgetLine| {
        raised.push(l.category)
    });

    let levels: Vec<(Category, BudgetLevel)> = lines.iter().map(|l| (l.category, l.level)).collect();
    assert_eq!(
        levels,
        vec![
            (Category::Logement, BudgetLevel::Warning),
            (Category::Alimentation, BudgetLevel::Warning),
            (Category::Transport, BudgetLevel::Warning),
            (Category::Loisirs, BudgetLevel::Ok),
            (Category::Investissement, BudgetLevel::Warning),
        ]
    );
    assert_eq!(lines[1].percent_used, dec!(87.5));
    assert_eq!(lines[4].percent_used, dec!(83.3));
    assert_eq!(
        raised,
        vec![
            Category::Logement,
            Category::Alimentation,
            Category::Transport,
            Category::Investissement
        ]
    );
}

#[test]
fn uncapped_categories_are_skipped() {
    let mut caps = BudgetCaps::new();
    caps.insert(Category::Loisirs, dec!(100));
    let mut spent = BTreeMap::new();
    spent.insert(Category::Loisirs, dec!(150));
    spent.insert(Category::Autres, dec!(9999));

    let alerts = evaluate_budgets(&spent, &caps, &mut SilentNotifier);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, BudgetLevel::Over);
    assert_eq!(alerts[0].percent_used, dec!(150.0));
}

#[test]
fn capped_category_without_spending_is_ok() {
    let spent = BTreeMap::new();
    let alerts = evaluate_budgets(&spent, &default_caps(), &mut SilentNotifier);
    assert_eq!(alerts.len(), 5);
    assert!(alerts.iter().all(|a| a.level == BudgetLevel::Ok));
}

#[test]
fn every_pass_notifies_again() {
    let mut caps = BudgetCaps::new();
    caps.insert(Category::Transport, dec!(100));
    let mut spent = BTreeMap::new();
    spent.insert(Category::Transport, dec!(120));

    let mut count = 0;
    let mut notifier = |_: &BudgetLine| count += 1;
    evaluate_budgets(&spent, &caps, &mut notifier);
    evaluate_budgets(&spent, &caps, &mut notifier);
    assert_eq!(count, 2);
}

#[test]
fn exactly_at_cap_is_warning_not_over() {
    let mut caps = BudgetCaps::new();
    caps.insert(Category::Alimentation, dec!(400));
    let mut spent = BTreeMap::new();
    spent.insert(Category::Alimentation, dec!(400));
    let alerts = evaluate_budgets(&spent, &caps, &mut SilentNotifier);
    assert_eq!(alerts[0].level, BudgetLevel::Warning);
    assert_eq!(alerts[0].percent_used, dec!(100.0));
}
