//! Borrowed views over a grid's storage.
//!
//! Views are not copies: they read (or write) the grid's own cells through
//! an offset and a stride. They borrow the grid, so any reshaping operation
//! ends every outstanding view.

use crate::errors::{Position, ValueError, ValueResult};
use crate::value::Value;

/// Read-only 1-D view: a grid column or row.
#[derive(Copy, Clone, Debug)]
pub struct Line<'a> {
    cells: &'a [Option<Value>],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a> Line<'a> {
    pub(super) fn new(cells: &'a [Option<Value>], start: usize, stride: usize, len: usize) -> Self {
        Line {
            cells,
            start,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> ValueResult<Option<&'a Value>> {
        if index >= self.len {
            return Err(ValueError::index_out_of_range(index, self.len));
        }
        Ok(self.cells[self.start + index * self.stride].as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        let Line {
            cells,
            start,
            stride,
            len,
        } = *self;
        (0..len).map(move |i| cells[start + i * stride].as_ref())
    }
}

impl PartialEq for Line<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

/// Mutable 1-D view: a grid column or row.
pub struct LineMut<'a> {
    cells: &'a mut [Option<Value>],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a> LineMut<'a> {
    pub(super) fn new(
        cells: &'a mut [Option<Value>],
        start: usize,
        stride: usize,
        len: usize,
    ) -> Self {
        LineMut {
            cells,
            start,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn slot(&mut self, index: usize) -> ValueResult<&mut Option<Value>> {
        if index >= self.len {
            return Err(ValueError::index_out_of_range(index, self.len));
        }
        Ok(&mut self.cells[self.start + index * self.stride])
    }

    pub fn get(&self, index: usize) -> ValueResult<Option<&Value>> {
        if index >= self.len {
            return Err(ValueError::index_out_of_range(index, self.len));
        }
        Ok(self.cells[self.start + index * self.stride].as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> ValueResult<Option<&mut Value>> {
        self.slot(index).map(Option::as_mut)
    }

    /// Install `value` (or null) at `index`, dropping the previous occupant.
    pub fn set(&mut self, index: usize, value: impl Into<Option<Value>>) -> ValueResult<()> {
        *self.slot(index)? = value.into();
        Ok(())
    }

    /// Reborrow as a read-only view.
    pub fn as_line(&self) -> Line<'_> {
        Line::new(&*self.cells, self.start, self.stride, self.len)
    }
}

/// Read-only 2-D view of a grid's logical region.
#[derive(Copy, Clone)]
pub struct GridView<'a> {
    cells: &'a [Option<Value>],
    stride: usize,
    columns: usize,
    rows: usize,
}

impl<'a> GridView<'a> {
    pub(super) fn new(cells: &'a [Option<Value>], stride: usize, columns: usize, rows: usize) -> Self {
        GridView {
            cells,
            stride,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The value at `(column, row)`. Always checked against the logical shape.
    pub fn get(&self, column: usize, row: usize) -> ValueResult<Option<&'a Value>> {
        if column >= self.columns || row >= self.rows {
            return Err(ValueError::cell_out_of_range(
                column,
                row,
                self.columns,
                self.rows,
            ));
        }
        Ok(self.cells[row * self.stride + column].as_ref())
    }

    /// Row `index` of the view.
    pub fn line(&self, index: usize) -> ValueResult<Line<'a>> {
        if index >= self.rows {
            return Err(ValueError::IndexOutOfRange {
                index: Position::Row(index),
                extent: Position::Row(self.rows),
            });
        }
        Ok(Line::new(self.cells, index * self.stride, 1, self.columns))
    }

    /// Rows of the view, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        let GridView {
            cells,
            stride,
            columns,
            rows,
        } = *self;
        (0..rows).map(move |row| Line::new(cells, row * stride, 1, columns))
    }

    /// Every logical cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.lines().flat_map(|line| line.iter())
    }
}

impl PartialEq for GridView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows && self.cells().eq(other.cells())
    }
}
