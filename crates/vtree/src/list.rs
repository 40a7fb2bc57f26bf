//! Ordered list of nullable values.

use crate::dictionary::Dictionary;
use crate::emitter::Emitter;
use crate::encode::{encode_slot, Encode, Encoding};
use crate::errors::{ValueError, ValueResult};
use crate::grid::Grid;
use crate::stack::ensure_sufficient_stack;
use crate::value::{downcast_slot, install, Value, Variant};

/// An ordered, index-addressable sequence of owned, possibly-null values.
///
/// Removing an element (by [`delete`](List::delete) or
/// [`give`](List::give)) shifts every later element down by one.
#[derive(Debug, Default)]
pub struct List {
    items: Vec<Option<Value>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list of `len` null slots.
    pub fn with_len(len: usize) -> Self {
        List {
            items: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value, or a null slot when given `None`.
    pub fn push(&mut self, value: impl Into<Option<Value>>) {
        self.items.push(value.into());
    }

    /// Append a deep copy of `value`.
    pub fn push_cloned(&mut self, value: &Value) {
        self.items.push(Some(value.clone()));
    }

    pub fn add_scalar(&mut self, value: f64) {
        self.push(Value::scalar(value));
    }

    /// Append an empty list and return it for population.
    pub fn add_list(&mut self) -> &mut List {
        self.push_variant(List::new())
    }

    /// Append an empty dictionary and return it for population.
    pub fn add_dictionary(&mut self) -> &mut Dictionary {
        self.push_variant(Dictionary::new())
    }

    /// Append an empty grid and return it for population.
    pub fn add_grid(&mut self) -> &mut Grid {
        self.push_variant(Grid::new())
    }

    fn push_variant<T: Variant>(&mut self, variant: T) -> &mut T {
        self.items.push(None);
        let last = self.items.len() - 1;
        install(&mut self.items[last], variant)
    }

    pub fn get(&self, index: usize) -> ValueResult<Option<&Value>> {
        self.items
            .get(index)
            .map(Option::as_ref)
            .ok_or_else(|| ValueError::index_out_of_range(index, self.items.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> ValueResult<Option<&mut Value>> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .map(Option::as_mut)
            .ok_or_else(|| ValueError::index_out_of_range(index, len))
    }

    /// Typed access to the element at `index`. A null slot is a type mismatch.
    pub fn get_as<T: Variant>(&self, index: usize) -> ValueResult<&T> {
        downcast_slot(self.get(index)?)
    }

    /// Replace the element at `index`, dropping the previous occupant.
    pub fn set(&mut self, index: usize, value: impl Into<Option<Value>>) -> ValueResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| ValueError::index_out_of_range(index, len))?;
        *slot = value.into();
        Ok(())
    }

    /// Drop the element at `index` and close the gap.
    pub fn delete(&mut self, index: usize) -> ValueResult<()> {
        self.give(index).map(drop)
    }

    /// Remove the element at `index` and hand it to the caller.
    pub fn give(&mut self, index: usize) -> ValueResult<Option<Value>> {
        if index >= self.items.len() {
            return Err(ValueError::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        ensure_sufficient_stack(|| self.items.clear());
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
        self.items.iter().map(Option::as_ref)
    }
}

impl Drop for List {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| List {
            items: self.items.clone(),
        })
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.items == other.items)
    }
}

impl From<Vec<Option<Value>>> for List {
    fn from(items: Vec<Option<Value>>) -> Self {
        List { items }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List {
            items: iter.into_iter().map(Some).collect(),
        }
    }
}

impl FromIterator<Option<Value>> for List {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
        }
    }
}

impl Encode for List {
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter) {
        ensure_sufficient_stack(|| {
            match encoding {
                Encoding::Xml => out.emit("<set>"),
                Encoding::Debug => out.emit_char('('),
                Encoding::Compact => {}
            }
            for (i, item) in self.iter().enumerate() {
                if i > 0 && encoding != Encoding::Xml {
                    out.emit_char(',');
                }
                encode_slot(item, encoding, out);
            }
            match encoding {
                Encoding::Xml => out.emit("</set>"),
                Encoding::Debug => out.emit_char(')'),
                Encoding::Compact => {}
            }
        });
    }
}
