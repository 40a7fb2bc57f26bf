//! `serde::Serialize` for value trees.
//!
//! Scalars serialize as numbers, lists as sequences, dictionaries as maps
//! in key order and null slots as unit. A grid serializes as a struct
//! holding its logical shape and its rows, each row a sequence of cells.

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::dictionary::Dictionary;
use crate::grid::{Grid, Line};
use crate::list::List;
use crate::scalar::Scalar;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(s) => s.serialize(serializer),
            Value::List(l) => l.serialize(serializer),
            Value::Dictionary(d) => d.serialize(serializer),
            Value::Grid(g) => g.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.get())
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for item in self.iter() {
                seq.serialize_element(&item)?;
            }
            seq.end()
        })
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, &value)?;
            }
            map.end()
        })
    }
}

impl Serialize for Line<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for cell in self.iter() {
            seq.serialize_element(&cell)?;
        }
        seq.end()
    }
}

/// The logical rows of a grid, serialized as a sequence of sequences.
struct Rows<'a>(&'a Grid);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = self.0.submatrix();
        let mut seq = serializer.serialize_seq(Some(view.rows()))?;
        for line in view.lines() {
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| {
            let mut state = serializer.serialize_struct("Grid", 3)?;
            state.serialize_field("columns", &self.columns())?;
            state.serialize_field("rows", &self.rows())?;
            state.serialize_field("cells", &Rows(self))?;
            state.end()
        })
    }
}
