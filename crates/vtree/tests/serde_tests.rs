//! JSON output through the `serde` feature.

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use serde_json::json;
use vtree::{Dictionary, Grid, List, Value};

#[test]
fn scalars_and_lists() {
    let list: List = vec![Some(Value::scalar(1.5)), None].into_iter().collect();
    assert_eq!(serde_json::to_value(&list).unwrap(), json!([1.5, null]));
    assert_eq!(serde_json::to_value(Value::scalar(2.0)).unwrap(), json!(2.0));
}

#[test]
fn dictionaries_are_key_ordered_maps() {
    let mut dict = Dictionary::new();
    dict.add_scalar("b", 2.0);
    dict.add_list("a").add_scalar(1.0);
    assert_eq!(
        serde_json::to_string(&dict).unwrap(),
        r#"{"a":[1.0],"b":2.0}"#
    );
}

#[test]
fn grids_serialize_logical_rows_only() {
    let mut grid = Grid::buffered(2, 1, 4, 4, 1, 1).unwrap();
    grid.add_scalar(0, 0, 1.5).unwrap();
    assert_eq!(
        serde_json::to_value(&grid).unwrap(),
        json!({ "columns": 2, "rows": 1, "cells": [[1.5, null]] })
    );
}
