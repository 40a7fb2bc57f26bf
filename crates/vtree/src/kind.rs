//! Kind tags for the value variants.

use std::fmt;

/// Discriminator identifying which concrete shape a value holds.
///
/// `Table` is reserved for an externally defined tabular variant. No value
/// built by this crate reports it, but callers matching on kinds must still
/// account for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Scalar,
    List,
    Dictionary,
    Grid,
    Table,
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::List => "list",
            ValueKind::Dictionary => "dictionary",
            ValueKind::Grid => "grid",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
