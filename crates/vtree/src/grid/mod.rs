//! Dense 2-D grid of nullable values.
//!
//! # Storage
//!
//! Cells live in one flat row-major buffer of `column_max * row_max` slots;
//! cell `(column, row)` is at `row * column_max + column`. The *logical*
//! shape `columns x rows` is what callers see. The *allocated* shape
//! `column_max x row_max` is reserved ahead of time so the grid can grow
//! without reallocating on every new column or row. Slots outside the
//! logical region are reset to null whenever the logical region grows over
//! them, so newly exposed cells always read as null.
//!
//! # Growth
//!
//! [`Grid::add_column`] and [`Grid::add_row`] grow the logical shape by one.
//! When that exceeds the allocation, the allocation grows by the configured
//! step on that axis. Existing cells keep their coordinates. Growing rows
//! only extends the buffer; growing columns changes the stride and moves
//! every row.
//!
//! # Fill cursor
//!
//! The cursor `(last_x, last_y)` supports coordinate-free streaming fills:
//! [`Grid::add_to_last_cell`] writes at the cursor and
//! [`Grid::move_last_cell`] advances it column-first, wrapping back to the
//! origin after the last cell.

mod view;

pub use view::{GridView, Line, LineMut};

use crate::dictionary::Dictionary;
use crate::emitter::Emitter;
use crate::encode::{encode_slot, Encode, Encoding};
use crate::errors::{Position, ValueError, ValueResult};
use crate::list::List;
use crate::stack::ensure_sufficient_stack;
use crate::value::{downcast_slot, install, Value, Variant};

/// Growth step used when none is given.
pub const DEFAULT_STEP: usize = 1;

/// A dense grid of owned, possibly-null values with buffered capacity.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Option<Value>>,
    columns: usize,
    rows: usize,
    column_max: usize,
    row_max: usize,
    column_step: usize,
    row_step: usize,
    last_x: usize,
    last_y: usize,
}

impl Grid {
    /// Create an empty grid with no allocated storage.
    pub fn new() -> Self {
        Grid {
            cells: Vec::new(),
            columns: 0,
            rows: 0,
            column_max: 0,
            row_max: 0,
            column_step: DEFAULT_STEP,
            row_step: DEFAULT_STEP,
            last_x: 0,
            last_y: 0,
        }
    }

    /// Create a `columns x rows` grid of null cells with no spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if `columns * rows` overflows `usize`.
    pub fn with_shape(columns: usize, rows: usize, column_step: usize, row_step: usize) -> Self {
        Grid {
            cells: empty_cells(columns, rows),
            columns,
            rows,
            column_max: columns,
            row_max: rows,
            column_step,
            row_step,
            last_x: 0,
            last_y: 0,
        }
    }

    /// Create a `columns x rows` grid with storage reserved for
    /// `column_max x row_max` cells.
    ///
    /// Fails with [`ValueError::InvalidShape`] when the logical shape exceeds
    /// the capacity or the capacity is not addressable.
    pub fn buffered(
        columns: usize,
        rows: usize,
        column_max: usize,
        row_max: usize,
        column_step: usize,
        row_step: usize,
    ) -> ValueResult<Self> {
        if columns > column_max || rows > row_max || column_max.checked_mul(row_max).is_none() {
            return Err(ValueError::InvalidShape {
                columns,
                rows,
                column_max,
                row_max,
            });
        }
        Ok(Grid {
            cells: empty_cells(column_max, row_max),
            columns,
            rows,
            column_max,
            row_max,
            column_step,
            row_step,
            last_x: 0,
            last_y: 0,
        })
    }

    // Shape

    /// Logical number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Logical number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Allocated `(column_max, row_max)`.
    pub fn capacity(&self) -> (usize, usize) {
        (self.column_max, self.row_max)
    }

    /// Growth `(column_step, row_step)`.
    pub fn steps(&self) -> (usize, usize) {
        (self.column_step, self.row_step)
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Change the logical shape.
    ///
    /// Cells outside the new bounds are dropped, cells in the intersection
    /// of the old and new shapes are kept, and newly exposed cells are null.
    /// The allocation grows to fit but never shrinks. A cursor left outside
    /// the new shape returns to the origin.
    ///
    /// # Panics
    ///
    /// Panics if the grown allocation overflows `usize`.
    #[tracing::instrument(level = "trace", skip(self), fields(from_columns = self.columns, from_rows = self.rows))]
    pub fn resize(&mut self, columns: usize, rows: usize) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                if column >= columns || row >= rows {
                    let at = self.offset_unchecked(column, row);
                    self.cells[at] = None;
                }
            }
        }

        if columns > self.column_max || rows > self.row_max {
            self.reallocate(columns.max(self.column_max), rows.max(self.row_max));
        }
        self.clear_exposed(columns, rows);

        self.columns = columns;
        self.rows = rows;
        if self.last_x >= columns || self.last_y >= rows {
            self.last_x = 0;
            self.last_y = 0;
        }
    }

    /// Grow the logical shape by one column of null cells.
    pub fn add_column(&mut self) {
        if self.columns == self.column_max {
            let column_max = self.column_max.saturating_add(self.column_step.max(1));
            tracing::debug!(
                from = self.column_max,
                to = column_max,
                step = self.column_step,
                "growing grid column capacity"
            );
            self.reallocate(column_max, self.row_max);
        }
        self.clear_exposed(self.columns + 1, self.rows);
        self.columns += 1;
    }

    /// Grow the logical shape by one row of null cells.
    pub fn add_row(&mut self) {
        if self.rows == self.row_max {
            let row_max = self.row_max.saturating_add(self.row_step.max(1));
            tracing::debug!(
                from = self.row_max,
                to = row_max,
                step = self.row_step,
                "growing grid row capacity"
            );
            self.reallocate(self.column_max, row_max);
        }
        self.clear_exposed(self.columns, self.rows + 1);
        self.rows += 1;
    }

    /// Move the logical region into a `column_max x row_max` allocation.
    /// Spare slots are not carried over.
    fn reallocate(&mut self, column_max: usize, row_max: usize) {
        if column_max == self.column_max {
            // Same stride: rows are already in place.
            let len = storage_len(column_max, row_max);
            self.cells.resize_with(len, || None);
        } else {
            let mut cells = empty_cells(column_max, row_max);
            for row in 0..self.rows.min(row_max) {
                for column in 0..self.columns.min(column_max) {
                    let from = self.offset_unchecked(column, row);
                    cells[row * column_max + column] = self.cells[from].take();
                }
            }
            self.cells = cells;
        }
        self.column_max = column_max;
        self.row_max = row_max;
    }

    /// Null every slot of the `columns x rows` region that lies outside the
    /// current logical shape. The region must fit the allocation.
    fn clear_exposed(&mut self, columns: usize, rows: usize) {
        for row in 0..rows {
            let first = if row < self.rows { self.columns.min(columns) } else { 0 };
            for column in first..columns {
                let at = self.offset_unchecked(column, row);
                self.cells[at] = None;
            }
        }
    }

    // Cell access

    #[inline]
    fn offset_unchecked(&self, column: usize, row: usize) -> usize {
        row * self.column_max + column
    }

    /// Offset of a cell in storage.
    ///
    /// With the `unchecked` feature only the allocation is checked, so
    /// cells beyond the logical shape but inside the allocation are
    /// reachable.
    fn offset(&self, column: usize, row: usize) -> ValueResult<usize> {
        let (column_limit, row_limit) = if cfg!(feature = "unchecked") {
            (self.column_max, self.row_max)
        } else {
            (self.columns, self.rows)
        };
        if column >= column_limit || row >= row_limit {
            return Err(ValueError::cell_out_of_range(
                column,
                row,
                self.columns,
                self.rows,
            ));
        }
        Ok(self.offset_unchecked(column, row))
    }

    /// The value at `(column, row)`, which may be a null cell.
    pub fn get(&self, column: usize, row: usize) -> ValueResult<Option<&Value>> {
        let at = self.offset(column, row)?;
        Ok(self.cells[at].as_ref())
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> ValueResult<Option<&mut Value>> {
        self.cell_mut(column, row).map(Option::as_mut)
    }

    /// Typed access to a cell. A null cell is a type mismatch.
    pub fn get_as<T: Variant>(&self, column: usize, row: usize) -> ValueResult<&T> {
        downcast_slot(self.get(column, row)?)
    }

    /// The slot at `(column, row)` itself, for in-place replacement.
    pub fn cell_mut(&mut self, column: usize, row: usize) -> ValueResult<&mut Option<Value>> {
        let at = self.offset(column, row)?;
        Ok(&mut self.cells[at])
    }

    /// Install `value` (or null) at `(column, row)`, dropping the previous
    /// occupant.
    pub fn set(
        &mut self,
        column: usize,
        row: usize,
        value: impl Into<Option<Value>>,
    ) -> ValueResult<()> {
        *self.cell_mut(column, row)? = value.into();
        Ok(())
    }

    /// Install a deep copy of `value` at `(column, row)`.
    pub fn set_cloned(&mut self, column: usize, row: usize, value: &Value) -> ValueResult<()> {
        self.set(column, row, value.clone())
    }

    pub fn add_scalar(&mut self, column: usize, row: usize, value: f64) -> ValueResult<()> {
        self.set(column, row, Value::scalar(value))
    }

    /// Install an empty dictionary at a cell and return it for population.
    pub fn add_dictionary(&mut self, column: usize, row: usize) -> ValueResult<&mut Dictionary> {
        Ok(install(self.cell_mut(column, row)?, Dictionary::new()))
    }

    /// Install an empty grid at a cell and return it for population.
    pub fn add_grid(&mut self, column: usize, row: usize) -> ValueResult<&mut Grid> {
        Ok(install(self.cell_mut(column, row)?, Grid::new()))
    }

    /// Install an empty list at a cell and return it for population.
    pub fn add_list(&mut self, column: usize, row: usize) -> ValueResult<&mut List> {
        Ok(install(self.cell_mut(column, row)?, List::new()))
    }

    /// Drop every cell, keeping shape and allocation.
    pub fn clear(&mut self) {
        ensure_sufficient_stack(|| self.cells.iter_mut().for_each(|cell| *cell = None));
    }

    // Fill cursor

    /// Cursor position `(last_x, last_y)`.
    pub fn last_cell(&self) -> (usize, usize) {
        (self.last_x, self.last_y)
    }

    /// Install `value` at the cursor. The cursor does not move.
    pub fn add_to_last_cell(&mut self, value: impl Into<Option<Value>>) -> ValueResult<()> {
        self.set(self.last_x, self.last_y, value)
    }

    /// Advance the cursor to the next column, wrapping to the next row and
    /// then back to the origin. Does nothing on an empty grid.
    pub fn move_last_cell(&mut self) {
        if self.is_empty() {
            return;
        }
        self.last_x += 1;
        if self.last_x >= self.columns {
            self.last_x = 0;
            self.last_y += 1;
            if self.last_y >= self.rows {
                self.last_y = 0;
            }
        }
    }

    // Views

    /// Live view of column `index` over the logical rows.
    pub fn column(&self, index: usize) -> ValueResult<Line<'_>> {
        self.check_column(index)?;
        Ok(Line::new(&self.cells, index, self.column_max, self.rows))
    }

    pub fn column_mut(&mut self, index: usize) -> ValueResult<LineMut<'_>> {
        self.check_column(index)?;
        Ok(LineMut::new(&mut self.cells, index, self.column_max, self.rows))
    }

    /// Live view of row `index` over the logical columns.
    pub fn row(&self, index: usize) -> ValueResult<Line<'_>> {
        self.submatrix().line(index)
    }

    pub fn row_mut(&mut self, index: usize) -> ValueResult<LineMut<'_>> {
        self.check_row(index)?;
        let start = index * self.column_max;
        Ok(LineMut::new(&mut self.cells, start, 1, self.columns))
    }

    /// Live view of the logical region.
    pub fn submatrix(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.column_max, self.columns, self.rows)
    }

    fn check_column(&self, index: usize) -> ValueResult<()> {
        if index >= self.columns {
            return Err(ValueError::IndexOutOfRange {
                index: Position::Column(index),
                extent: Position::Column(self.columns),
            });
        }
        Ok(())
    }

    fn check_row(&self, index: usize) -> ValueResult<()> {
        if index >= self.rows {
            return Err(ValueError::IndexOutOfRange {
                index: Position::Row(index),
                extent: Position::Row(self.rows),
            });
        }
        Ok(())
    }
}

/// Slot count of a `columns x rows` buffer.
///
/// # Panics
///
/// Panics if the count overflows `usize`.
fn storage_len(columns: usize, rows: usize) -> usize {
    match columns.checked_mul(rows) {
        Some(len) => len,
        None => panic!("grid storage of {columns}x{rows} cells overflows usize"),
    }
}

fn empty_cells(columns: usize, rows: usize) -> Vec<Option<Value>> {
    std::iter::repeat_with(|| None)
        .take(storage_len(columns, rows))
        .collect()
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl Drop for Grid {
    fn drop(&mut self) {
        ensure_sufficient_stack(|| self.cells.clear());
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Grid {
            cells: self.cells.clone(),
            columns: self.columns,
            rows: self.rows,
            column_max: self.column_max,
            row_max: self.row_max,
            column_step: self.column_step,
            row_step: self.row_step,
            last_x: self.last_x,
            last_y: self.last_y,
        })
    }
}

/// Grids are equal when their logical shapes and logical cells are equal.
/// Allocation, growth steps and cursor are not compared.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.submatrix() == other.submatrix())
    }
}

impl Encode for Grid {
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter) {
        ensure_sufficient_stack(|| {
            let view = self.submatrix();
            if encoding == Encoding::Xml {
                out.emit(&format!(
                    "<matrix rows=\"{}\" columns=\"{}\" columnmax=\"{}\" rowmax=\"{}\" columnstep=\"{}\" rowstep=\"{}\">",
                    self.rows,
                    self.columns,
                    self.column_max,
                    self.row_max,
                    self.column_step,
                    self.row_step,
                ));
                for cell in view.cells() {
                    encode_slot(cell, encoding, out);
                }
                out.emit("</matrix>");
                return;
            }

            for row in view.lines() {
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        out.emit_space();
                    }
                    encode_slot(cell, encoding, out);
                }
                out.emit_newline();
            }
        });
    }
}
