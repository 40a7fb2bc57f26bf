use super::*;
use crate::scalar::Scalar;
use pretty_assertions::assert_eq;

fn attr(text: &str) -> String {
    let mut out = StringEmitter::new();
    emit_xml_attr(text, &mut out);
    out.output()
}

#[test]
fn plain_attribute_is_unchanged() {
    assert_eq!(attr("temperature"), "temperature");
    assert_eq!(attr(""), "");
}

#[test]
fn attribute_special_characters_are_escaped() {
    assert_eq!(attr(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
}

#[test]
fn null_slot_tokens() {
    assert_eq!(encode_slot_string(None, Encoding::Compact), "NA");
    assert_eq!(encode_slot_string(None, Encoding::Debug), "NA");
    assert_eq!(encode_slot_string(None, Encoding::Xml), "<null />");
}

#[test]
fn filled_slot_defers_to_value() {
    let value = Value::from(Scalar::new(2.5));
    assert_eq!(encode_slot_string(Some(&value), Encoding::Xml), "<double>2.5</double>");
}

fn encode_slot_string(slot: Option<&Value>, encoding: Encoding) -> String {
    let mut out = StringEmitter::new();
    encode_slot(slot, encoding, &mut out);
    out.output()
}
