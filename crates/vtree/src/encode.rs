//! The three text encodings shared by every value variant.
//!
//! Each variant writes itself in three forms:
//!
//! - **Compact**: machine-oriented text, the form persisted to result files.
//! - **Debug**: human-oriented text for logs and diagnostics.
//! - **Xml**: tagged form consumed by the project-file layer.
//!
//! These are stable text contracts. Writers take `&self`, push into an
//! [`Emitter`] and never fail; null slots inside containers render as
//! [`NULL_TEXT`] or [`NULL_XML`].

use crate::emitter::{Emitter, StringEmitter};
use crate::value::Value;

/// Text for a null slot in the compact and debug forms.
pub const NULL_TEXT: &str = "NA";

/// Element for a null slot in the XML form.
pub const NULL_XML: &str = "<null />";

/// Selects one of the three encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Compact,
    Debug,
    Xml,
}

/// Rendering capability implemented by every variant.
pub trait Encode {
    /// Append this value to `out` in the given encoding.
    fn encode(&self, encoding: Encoding, out: &mut dyn Emitter);

    fn write_compact(&self, out: &mut dyn Emitter) {
        self.encode(Encoding::Compact, out);
    }

    fn write_debug(&self, out: &mut dyn Emitter) {
        self.encode(Encoding::Debug, out);
    }

    fn write_xml(&self, out: &mut dyn Emitter) {
        self.encode(Encoding::Xml, out);
    }

    /// Render into a fresh string.
    fn encode_to_string(&self, encoding: Encoding) -> String {
        let mut out = StringEmitter::new();
        self.encode(encoding, &mut out);
        out.output()
    }

    fn to_compact_string(&self) -> String {
        self.encode_to_string(Encoding::Compact)
    }

    fn to_debug_string(&self) -> String {
        self.encode_to_string(Encoding::Debug)
    }

    fn to_xml_string(&self) -> String {
        self.encode_to_string(Encoding::Xml)
    }
}

/// Write a container slot, rendering `None` as the null token of `encoding`.
pub(crate) fn encode_slot(slot: Option<&Value>, encoding: Encoding, out: &mut dyn Emitter) {
    match slot {
        Some(value) => value.encode(encoding, out),
        None if encoding == Encoding::Xml => out.emit(NULL_XML),
        None => out.emit(NULL_TEXT),
    }
}

/// Emit `text` escaped for use inside a double-quoted XML attribute.
pub(crate) fn emit_xml_attr(text: &str, out: &mut dyn Emitter) {
    let mut rest = text;
    while let Some(pos) = rest.find(['&', '<', '>', '"']) {
        out.emit(&rest[..pos]);
        let entity = match rest.as_bytes()[pos] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => "&quot;",
        };
        out.emit(entity);
        rest = &rest[pos + 1..];
    }
    out.emit(rest);
}

#[cfg(test)]
mod tests;
