// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use riphus::engine::portfolio::{valuate_portfolio, value_position};
use riphus::error::{LookupError, StoreError, ValidationError};
use riphus::forms::AssetDraft;
use riphus::models::{Asset, AssetType};
use riphus::store::Session;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn asset(id: &str, kind: AssetType, quantity: Decimal, buy: Decimal, current: Decimal) -> Asset {
    Asset {
        id: id.into(),
        name: id.into(),
        kind,
        quantity,
        buy_price: buy,
        current_price: current,
    }
}

#[test]
fn single_position_gain() {
    let a = asset("CW8", AssetType::Etf, dec!(10), dec!(100), dec!(120));
    let p = value_position(&a);
    assert_eq!(p.value, dec!(1200));
    assert_eq!(p.cost, dec!(1000));
    assert_eq!(p.gain, dec!(200));
    assert_eq!(p.gain_percent, dec!(20.0));

    let s = valuate_portfolio(&[a]);
    assert_eq!(s.total_value, dec!(1200));
    assert_eq!(s.total_cost, dec!(1000));
    assert_eq!(s.total_gain, dec!(200));
    assert_eq!(s.total_gain_percent, dec!(20.0));
}

#[test]
fn zero_cost_gives_zero_gain_percent() {
    let a = asset("gift", AssetType::Stocks, dec!(5), Decimal::ZERO, dec!(40));
    let s = valuate_portfolio(&[a]);
    assert_eq!(s.total_gain, dec!(200));
    assert_eq!(s.total_gain_percent, Decimal::ZERO);
    assert_eq!(s.positions[0].gain_percent, Decimal::ZERO);
}

#[test]
fn empty_portfolio() {
    let s = valuate_portfolio(&[]);
    assert_eq!(s.total_value, Decimal::ZERO);
    assert_eq!(s.total_gain_percent, Decimal::ZERO);
    assert!(s.allocation.is_empty());
    assert!(s.positions.is_empty());
}

#[test]
fn allocation_follows_asset_type_order() {
    let assets = vec![
        asset("btc", AssetType::Crypto, dec!(1), dec!(500), dec!(800)),
        asset("aapl", AssetType::Stocks, dec!(10), dec!(100), dec!(120)),
        asset("msft", AssetType::Stocks, dec!(0), dec!(300), dec!(380)),
    ];
    let s = valuate_portfolio(&assets);
    let kinds: Vec<AssetType> = s.allocation.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AssetType::Stocks, AssetType::Crypto]);
    assert_eq!(s.allocation[0].value, dec!(1200));
    assert_eq!(s.allocation[0].share, dec!(60.0));
    assert_eq!(s.allocation[1].share, dec!(40.0));
    assert_eq!(s.allocation[0].label, "Actions");
}

#[test]
fn losing_position_has_negative_gain() {
    let a = asset("tsla", AssetType::Stocks, dec!(3), dec!(300), dec!(248.52));
    let p = value_position(&a);
    assert_eq!(p.gain, dec!(-154.44));
    assert_eq!(p.gain_percent, dec!(-17.2));
}

#[test]
fn assets_are_appended_in_session() {
    let mut session = Session::default();
    for name in ["ETF World", "Bitcoin"] {
        session
            .add_asset(&AssetDraft {
                name: name.into(),
                kind: if name == "Bitcoin" { "crypto" } else { "etf" }.into(),
                quantity: "2".into(),
                buy_price: "100".into(),
                current_price: "110".into(),
            })
            .unwrap();
    }
    let names: Vec<&str> = session.assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["ETF World", "Bitcoin"]);
    assert_eq!(session.portfolio().total_value, dec!(440));
}

fn draft(name: &str, quantity: &str, buy: &str, current: &str) -> AssetDraft {
    AssetDraft {
        name: name.into(),
        kind: "stocks".into(),
        quantity: quantity.into(),
        buy_price: buy.into(),
        current_price: current.into(),
    }
}

#[test]
fn edit_and_delete_assets_by_id() {
    let mut session = Session::default();
    let apple = session.add_asset(&draft("Apple", "10", "150", "180")).unwrap().id.clone();
    let msft = session.add_asset(&draft("Microsoft", "2", "300", "400")).unwrap().id.clone();

    session.update_asset(&apple, &draft("Apple", "10", "150", "200")).unwrap();
    assert_eq!(session.assets.as_slice()[0].id, apple);
    assert_eq!(session.assets.get(&apple).unwrap().current_price, dec!(200));
    assert_eq!(session.portfolio().total_value, dec!(2800));

    assert!(matches!(
        session.update_asset("404", &draft("Ghost", "1", "1", "1")),
        Err(StoreError::Lookup(LookupError::NotFound { kind: "asset", .. }))
    ));

    let removed = session.delete_asset(&msft).unwrap();
    assert_eq!(removed.name, "Microsoft");
    assert_eq!(session.assets.len(), 1);
    assert!(session.delete_asset(&msft).is_err());
}

#[test]
fn asset_draft_rejections() {
    let mut session = Session::default();
    assert_eq!(
        session.add_asset(&draft("A", "0", "1", "1")).unwrap_err(),
        ValidationError::NotPositive("quantity")
    );
    assert_eq!(
        session.add_asset(&draft("A", "1", "-1", "1")).unwrap_err(),
        ValidationError::Negative("buyPrice")
    );
    assert_eq!(
        session.add_asset(&draft("A", "1", "1", "-5")).unwrap_err(),
        ValidationError::Negative("currentPrice")
    );
    assert_eq!(
        session
            .add_asset(&draft("A", "100000000000000000", "1", "1000000000000000"))
            .unwrap_err(),
        ValidationError::TooLarge("quantity")
    );
    assert!(session.assets.is_empty());

    let apple = session.add_asset(&draft("Apple", "1", "1", "1")).unwrap().id.clone();
    assert_eq!(
        session.update_asset(&apple, &draft("Apple", "-1", "1", "1")).unwrap_err(),
        StoreError::Validation(ValidationError::NotPositive("quantity"))
    );
}

#[test]
fn huge_loaded_positions_saturate() {
    let whale = asset(
        "W",
        AssetType::Crypto,
        dec!(100000000000000000),
        Decimal::ZERO,
        dec!(1000000000000000),
    );
    let p = value_position(&whale);
    assert_eq!(p.value, Decimal::MAX);
    assert_eq!(p.gain_percent, Decimal::ZERO);

    let s = valuate_portfolio(&[whale.clone(), whale]);
    assert_eq!(s.total_value, Decimal::MAX);
    assert_eq!(s.allocation[0].share, dec!(100));
}
