//! String-keyed dictionary of nullable values.

use std::collections::BTreeMap;

use crate::emitter::Emitter;
use crate::encode::{emit_xml_attr, encode_slot, Encode, Encoding};
use crate::errors::{ValueError, ValueResult};
use crate::grid::Grid;
use crate::list::List;
use crate::scalar::Scalar;
use crate::stack::ensure_sufficient_stack;
use crate::value::{downcast_slot, downcast_slot_mut, install, Value, Variant};

/// A mapping from unique names to owned, possibly-null values.
///
/// Entries are kept in key order, which is also the order every encoding
/// writes them in.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Option<Value>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Install `value` (or a null slot) at `key`, dropping any previous
    /// occupant of that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Option<Value>>) {
        let key = key.into();
        match self.entries.get_mut(&key) {
            Some(slot) => {
                tracing::trace!(%key, "replacing dictionary entry");
                *slot = value.into();
            }
            None => {
                self.entries.insert(key, value.into());
            }
        }
    }

    /// Same as [`set`](Dictionary::set).
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Option<Value>>) {
        self.set(key, value);
    }

    /// Install a deep copy of `value` at `key`.
    pub fn add_cloned(&mut self, key: impl Into<String>, value: &Value) {
        self.set(key, value.clone());
    }

    pub fn add_scalar(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, Value::scalar(value));
    }

    /// Install an empty dictionary at `key` and return it for population.
    pub fn add_dictionary(&mut self, key: impl Into<String>) -> &mut Dictionary {
        self.install_variant(key.into(), Dictionary::new())
    }

    /// Install an empty grid at `key` and return it for population.
    pub fn add_grid(&mut self, key: impl Into<String>) -> &mut Grid {
        self.install_variant(key.into(), Grid::new())
    }

    /// Install an empty list at `key` and return it for population.
    pub fn add_list(&mut self, key: impl Into<String>) -> &mut List {
        self.install_variant(key.into(), List::new())
    }

    fn install_variant<T: Variant>(&mut self, key: String, variant: T) -> &mut T {
        install(self.entries.entry(key).or_default(), variant)
    }

    /// The value at `key`, which may be a null slot.
    pub fn get(&self, key: &str) -> ValueResult<Option<&Value>> {
        self.entries
            .get(key)
            .map(Option::as_ref)
            .ok_or_else(|| ValueError::key_not_found(key))
    }

    pub fn get_mut(&mut self, key: &str) -> ValueResult<Option<&mut Value>> {
        self.entries
            .get_mut(key)
            .map(Option::as_mut)
            .ok_or_else(|| ValueError::key_not_found(key))
    }

    /// Non-failing lookup. An absent key and a null slot both give `None`.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Typed access to the value at `key`. A null slot is a type mismatch.
    pub fn get_as<T: Variant>(&self, key: &str) -> ValueResult<&T> {
        downcast_slot(self.get(key)?)
    }

    pub fn get_as_mut<T: Variant>(&mut self, key: &str) -> ValueResult<&mut T> {
        downcast_slot_mut(self.get_mut(key)?)
    }

    pub fn get_scalar(&self, key: &str) -> ValueResult<f64> {
        self.get_as::<Scalar>(key).map(|s| s.get())
    }

    pub fn get_dictionary(&self, key: &str) -> ValueResult<&Dictionary> {
        self.get_as(key)
    }

    pub fn get_dictionary_mut(&mut self, key: &str) -> ValueResult<&mut Dictionary> {
        self.get_as_mut(key)
    }

    pub fn get_grid(&self, key: &str) -> ValueResult<&Grid> {
        self.get_as(key)
    }

    pub fn get_grid_mut(&mut self, key: &str) -> ValueResult<&mut Grid> {
        self.get_as_mut(key)
    }

    pub fn get_list(&self, key: &str) -> ValueResult<&List> {
        self.get_as(key)
    }

    pub fn get_list_mut(&mut self, key: &str) -> ValueResult<&mut List> {
        self.get_as_mut(key)
    }

    /// Remove `key` and hand its value to the caller.
    pub fn give(&mut self, key: &str) -> ValueResult<Option<Value>> {
        self.entries
            .remove(key)
            .ok_or_else(|| ValueError::key_not_found(key))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        ensure_sufficient_stack(|| self.entries.clear());
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl Drop for Dictionary {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for Dictionary {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Dictionary {
            entries: self.entries.clone(),
        })
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.entries == other.entries)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.set(key, value);
        }
        dictionary
    }
}

impl Encode for Dictionary {
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter) {
        ensure_sufficient_stack(|| {
            if encoding == Encoding::Xml {
                out.emit("<map>");
                for (key, value) in self.iter() {
                    out.emit("<key name=\"");
                    emit_xml_attr(key, out);
                    out.emit("\">");
                    encode_slot(value, encoding, out);
                    out.emit("</key>");
                }
                out.emit("</map>");
                return;
            }

            for (i, (key, value)) in self.iter().enumerate() {
                if i > 0 {
                    out.emit_space();
                }
                out.emit_char('(');
                out.emit(key);
                out.emit(", ");
                encode_slot(value, encoding, out);
                out.emit_char(')');
            }
        });
    }
}
