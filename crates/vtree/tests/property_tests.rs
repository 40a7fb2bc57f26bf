//! Property-based tests for grid reshaping and deep copies.
//!
//! These check structural invariants over arbitrary shapes rather than
//! specific cases.

#![allow(
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    reason = "Tests can panic and use small indices as values"
)]

use proptest::prelude::*;
use vtree::{Encode, Grid, List, Value};

/// A grid whose cell `(c, r)` holds `r * 1000 + c`.
fn labelled(columns: usize, rows: usize) -> Grid {
    let mut grid = Grid::with_shape(columns, rows, 1, 1);
    for row in 0..rows {
        for column in 0..columns {
            grid.add_scalar(column, row, (row * 1000 + column) as f64)
                .unwrap();
        }
    }
    grid
}

fn label(grid: &Grid, column: usize, row: usize) -> Option<f64> {
    grid.get(column, row)
        .unwrap()
        .map(|value| value.as_f64().unwrap())
}

fn nested_list(depth: usize, width: usize) -> Value {
    let mut root = Value::list();
    let mut cursor = root.as_list_mut().unwrap();
    for level in 0..depth {
        for i in 0..width {
            cursor.add_scalar((level * width + i) as f64);
        }
        cursor.add_scalar(f64::NAN);
        cursor.push(None);
        cursor = cursor.add_list();
    }
    root
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn growth_preserves_cells(
        columns in 0usize..6,
        rows in 0usize..6,
        extra_columns in 0usize..4,
        extra_rows in 0usize..4,
        column_step in 0usize..4,
        row_step in 0usize..4,
    ) {
        let mut grid = Grid::with_shape(columns, rows, column_step, row_step);
        for row in 0..rows {
            for column in 0..columns {
                grid.add_scalar(column, row, (row * 1000 + column) as f64).unwrap();
            }
        }
        for _ in 0..extra_columns {
            grid.add_column();
        }
        for _ in 0..extra_rows {
            grid.add_row();
        }

        prop_assert_eq!(grid.columns(), columns + extra_columns);
        prop_assert_eq!(grid.rows(), rows + extra_rows);
        let (column_max, row_max) = grid.capacity();
        prop_assert!(column_max >= grid.columns());
        prop_assert!(row_max >= grid.rows());

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let expected = (column < columns && row < rows)
                    .then(|| (row * 1000 + column) as f64);
                prop_assert_eq!(label(&grid, column, row), expected);
            }
        }
    }

    #[test]
    fn resize_keeps_exactly_the_intersection(
        columns in 0usize..6,
        rows in 0usize..6,
        new_columns in 0usize..8,
        new_rows in 0usize..8,
    ) {
        let mut grid = labelled(columns, rows);
        grid.resize(new_columns, new_rows);

        prop_assert_eq!((grid.columns(), grid.rows()), (new_columns, new_rows));
        for row in 0..new_rows {
            for column in 0..new_columns {
                let kept = column < columns && row < rows;
                let expected = kept.then(|| (row * 1000 + column) as f64);
                prop_assert_eq!(label(&grid, column, row), expected);
            }
        }
    }

    #[test]
    fn shrink_and_regrow_exposes_only_nulls(
        columns in 1usize..6,
        rows in 1usize..6,
    ) {
        let mut grid = labelled(columns, rows);
        grid.resize(1, 1);
        grid.resize(columns, rows);
        for row in 0..rows {
            for column in 0..columns {
                let expected = (column == 0 && row == 0).then_some(0.0);
                prop_assert_eq!(label(&grid, column, row), expected);
            }
        }
    }

    #[test]
    fn cursor_cycles_through_every_cell(columns in 1usize..6, rows in 1usize..6) {
        let mut grid = Grid::with_shape(columns, rows, 1, 1);
        let mut visited = Vec::new();
        for _ in 0..columns * rows {
            visited.push(grid.last_cell());
            grid.move_last_cell();
        }
        let row_major: Vec<_> = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (column, row)))
            .collect();
        prop_assert_eq!(visited, row_major);
        prop_assert_eq!(grid.last_cell(), (0, 0));
    }

    #[test]
    fn views_match_cell_access(columns in 1usize..6, rows in 1usize..6) {
        let grid = labelled(columns, rows);
        for column in 0..columns {
            let line = grid.column(column).unwrap();
            prop_assert_eq!(line.len(), rows);
            for row in 0..rows {
                prop_assert_eq!(line.get(row).unwrap(), grid.get(column, row).unwrap());
            }
        }
        for row in 0..rows {
            let line = grid.row(row).unwrap();
            prop_assert_eq!(line.len(), columns);
            for column in 0..columns {
                prop_assert_eq!(line.get(column).unwrap(), grid.get(column, row).unwrap());
            }
        }
    }

    #[test]
    fn clones_are_equal_and_independent(depth in 0usize..8, width in 0usize..4) {
        let original = nested_list(depth, width);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.to_xml_string(), original.to_xml_string());

        copy.as_list_mut().unwrap().add_scalar(-1.0);
        prop_assert_ne!(&copy, &original);
        let top_level = if depth == 0 { 0 } else { width + 3 };
        prop_assert_eq!(original.as_list().unwrap().len(), top_level);
    }

    #[test]
    fn list_give_preserves_order(len in 1usize..10, index in 0usize..10) {
        let mut list: List = (0..len).map(|i| Value::scalar(i as f64)).collect();
        let index = index % len;
        let given = list.give(index).unwrap();
        prop_assert_eq!(given, Some(Value::scalar(index as f64)));
        prop_assert_eq!(list.len(), len - 1);
        let rest: Vec<f64> = list.iter().map(|v| v.unwrap().as_f64().unwrap()).collect();
        let expected: Vec<f64> = (0..len).filter(|&i| i != index).map(|i| i as f64).collect();
        prop_assert_eq!(rest, expected);
    }
}
