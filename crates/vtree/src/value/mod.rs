//! The polymorphic value type.
//!
//! A [`Value`] is one of a closed set of variants. Containers ([`List`],
//! [`Dictionary`], [`Grid`]) hold their children as `Option<Value>` slots,
//! where `None` is a null slot. Every slot owns its value exclusively:
//! inserting a value moves it into the slot, so one value can never be
//! registered in two containers. Copying requires an explicit clone, and
//! cloning is always deep.
//!
//! # Building trees
//!
//! Trees are usually assembled top-down with the typed builders, which
//! create a child in place and hand back a mutable reference to it:
//!
//! ```text
//! let mut root = Dictionary::new();
//! root.add_scalar("step", 0.5);
//! let grid = root.add_grid("results");
//! grid.resize(3, 2);
//! grid.add_scalar(0, 0, 1.0)?;
//! ```

use std::fmt;

use crate::dictionary::Dictionary;
use crate::emitter::Emitter;
use crate::encode::{Encode, Encoding};
use crate::errors::{ValueError, ValueResult};
use crate::grid::Grid;
use crate::kind::ValueKind;
use crate::list::List;
use crate::scalar::Scalar;

/// A node in a value tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    List(List),
    Dictionary(Dictionary),
    Grid(Grid),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn scalar(value: f64) -> Self {
        Value::Scalar(Scalar::new(value))
    }

    /// Create an empty list value.
    #[inline]
    pub fn list() -> Self {
        Value::List(List::new())
    }

    /// Create an empty dictionary value.
    #[inline]
    pub fn dictionary() -> Self {
        Value::Dictionary(Dictionary::new())
    }

    /// Create an empty grid value.
    #[inline]
    pub fn grid() -> Self {
        Value::Grid(Grid::new())
    }
}

// Value Methods

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::List(_) => ValueKind::List,
            Value::Dictionary(_) => ValueKind::Dictionary,
            Value::Grid(_) => ValueKind::Grid,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, Value::Grid(_))
    }

    /// Checked downcast to a concrete variant.
    pub fn downcast<T: Variant>(&self) -> ValueResult<&T> {
        T::from_value(self).ok_or_else(|| ValueError::type_mismatch(T::KIND, Some(self.kind())))
    }

    /// Checked mutable downcast to a concrete variant.
    pub fn downcast_mut<T: Variant>(&mut self) -> ValueResult<&mut T> {
        let found = self.kind();
        T::from_value_mut(self).ok_or_else(|| ValueError::type_mismatch(T::KIND, Some(found)))
    }

    pub fn as_scalar(&self) -> ValueResult<&Scalar> {
        self.downcast()
    }

    pub fn as_scalar_mut(&mut self) -> ValueResult<&mut Scalar> {
        self.downcast_mut()
    }

    /// The number held by a scalar value.
    pub fn as_f64(&self) -> ValueResult<f64> {
        self.as_scalar().map(|s| s.get())
    }

    pub fn as_list(&self) -> ValueResult<&List> {
        self.downcast()
    }

    pub fn as_list_mut(&mut self) -> ValueResult<&mut List> {
        self.downcast_mut()
    }

    pub fn as_dictionary(&self) -> ValueResult<&Dictionary> {
        self.downcast()
    }

    pub fn as_dictionary_mut(&mut self) -> ValueResult<&mut Dictionary> {
        self.downcast_mut()
    }

    pub fn as_grid(&self) -> ValueResult<&Grid> {
        self.downcast()
    }

    pub fn as_grid_mut(&mut self) -> ValueResult<&mut Grid> {
        self.downcast_mut()
    }
}

/// A concrete variant that can be stored in and recovered from a [`Value`].
pub trait Variant: Into<Value> {
    /// Kind tag reported by values holding this variant.
    const KIND: ValueKind;

    fn from_value(value: &Value) -> Option<&Self>;

    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! impl_variant {
    ($ty:ident) => {
        impl Variant for $ty {
            const KIND: ValueKind = ValueKind::$ty;

            fn from_value(value: &Value) -> Option<&Self> {
                match value {
                    Value::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(inner: $ty) -> Self {
                Value::$ty(inner)
            }
        }
    };
}

impl_variant!(Scalar);
impl_variant!(List);
impl_variant!(Dictionary);
impl_variant!(Grid);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::scalar(value)
    }
}

/// Downcast a nullable container slot. A null slot is a type mismatch.
pub(crate) fn downcast_slot<T: Variant>(slot: Option<&Value>) -> ValueResult<&T> {
    match slot {
        Some(value) => value.downcast(),
        None => Err(ValueError::type_mismatch(T::KIND, None)),
    }
}

pub(crate) fn downcast_slot_mut<T: Variant>(slot: Option<&mut Value>) -> ValueResult<&mut T> {
    match slot {
        Some(value) => value.downcast_mut(),
        None => Err(ValueError::type_mismatch(T::KIND, None)),
    }
}

/// Replace the occupant of `slot` with `variant` and return a reference to
/// the freshly installed variant.
pub(crate) fn install<T: Variant>(slot: &mut Option<Value>, variant: T) -> &mut T {
    match T::from_value_mut(slot.insert(variant.into())) {
        Some(installed) => installed,
        None => unreachable!("slot holds the {} just installed", T::KIND),
    }
}

// Trait Implementations

impl Encode for Value {
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter) {
        match self {
            Value::Scalar(s) => s.encode(encoding, out),
            Value::List(l) => l.encode(encoding, out),
            Value::Dictionary(d) => d.encode(encoding, out),
            Value::Grid(g) => g.encode(encoding, out),
        }
    }
}

/// Renders the debug encoding.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_debug_string())
    }
}

#[cfg(test)]
mod tests;
