//! Schema-driven conversion between domain records and GraphQL payloads.
//!
//! Each entity declares a static [`Schema`]: an ordered table of attribute
//! names and value kinds. [`decode`] and [`encode`] walk that table, so no
//! per-entity mapping code is needed.
//!
//! Decoding is lenient. A nested value that does not have the expected shape
//! is kept as-is and tagged [`Decoded::Degraded`] instead of failing the
//! whole response.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::case::{camel_to_snake, snake_to_camel};

/// JSON object as exchanged with the GraphQL endpoint.
pub type WireMap = Map<String, Value>;

/// Value kind of a single attribute.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Scalar or opaque JSON, assigned without coercion.
    Primitive,
    /// A nested object following another schema.
    Object(&'static Schema),
    /// A list of nested objects following another schema.
    List(&'static Schema),
}

// Schemas can be self-referential (an organization's parent), so only the
// target name is printed.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.write_str("Primitive"),
            Self::Object(schema) => write!(f, "Object({})", schema.name),
            Self::List(schema) => write!(f, "List({})", schema.name),
        }
    }
}

/// Declaration of one domain attribute.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn primitive(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Primitive,
        }
    }

    pub const fn object(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::Object(schema),
        }
    }

    pub const fn list(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::List(schema),
        }
    }

    /// Key of this attribute in the wire payload.
    pub fn wire_key(&self) -> String {
        snake_to_camel(self.name)
    }
}

/// Ordered attribute table of an entity type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Outcome of converting a nested value.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The value had the expected shape and converted cleanly.
    Clean(T),
    /// The raw wire value, kept because it could not be converted.
    Degraded(Value),
}

impl<T> Decoded<T> {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean(_))
    }

    pub fn clean(&self) -> Option<&T> {
        match self {
            Self::Clean(value) => Some(value),
            Self::Degraded(_) => None,
        }
    }

    pub fn into_clean(self) -> Option<T> {
        match self {
            Self::Clean(value) => Some(value),
            Self::Degraded(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Self::Clean(value) => Decoded::Clean(f(value)),
            Self::Degraded(raw) => Decoded::Degraded(raw),
        }
    }
}

/// Value held by a set attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Primitive(Value),
    Object(Decoded<Record>),
    List(Vec<Decoded<Record>>),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Primitive(value)
    }
}

impl From<Record> for FieldValue {
    fn from(record: Record) -> Self {
        Self::Object(Decoded::Clean(record))
    }
}

impl From<Vec<Record>> for FieldValue {
    fn from(records: Vec<Record>) -> Self {
        Self::List(records.into_iter().map(Decoded::Clean).collect())
    }
}

/// A domain object: the attributes of one schema that are currently set.
///
/// An attribute missing from the record is unset, which is distinct from an
/// attribute set to JSON `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static Schema,
    fields: IndexMap<&'static str, FieldValue>,
}

impl Record {
    /// Create a record with every attribute unset.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            fields: IndexMap::new(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The raw value of a primitive attribute.
    pub fn primitive(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(FieldValue::Primitive(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set an attribute.
    ///
    /// Names not declared by the schema, and values that do not fit the
    /// declared kind, are ignored. `null` fits every kind.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        let Some(spec) = self.schema.field(name) else {
            debug!(schema = self.schema.name, field = name, "Ignoring undeclared field");
            return;
        };
        let value = value.into();
        if !kind_accepts(spec.kind, &value) {
            debug!(
                schema = self.schema.name,
                field = name,
                kind = ?spec.kind,
                "Ignoring value of the wrong kind"
            );
            return;
        }
        self.fields.insert(spec.name, value);
    }

    pub fn unset(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    /// Set attribute names, in the order they were set.
    pub fn set_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Returns `true` if no nested value anywhere in the record was degraded.
    pub fn is_lossless(&self) -> bool {
        self.schema.fields.iter().all(|spec| {
            match (spec.kind, self.fields.get(spec.name)) {
                (_, None) => true,
                (FieldKind::Primitive, Some(_)) => true,
                (_, Some(FieldValue::Primitive(value))) => value.is_null(),
                (_, Some(FieldValue::Object(nested))) => decoded_is_lossless(nested),
                (_, Some(FieldValue::List(items))) => items.iter().all(decoded_is_lossless),
            }
        })
    }
}

fn kind_accepts(kind: FieldKind, value: &FieldValue) -> bool {
    match (kind, value) {
        (FieldKind::Primitive, FieldValue::Primitive(_)) => true,
        (_, FieldValue::Primitive(Value::Null)) => true,
        (FieldKind::Object(_), FieldValue::Object(_)) => true,
        (FieldKind::List(_), FieldValue::List(_)) => true,
        _ => false,
    }
}

fn decoded_is_lossless(decoded: &Decoded<Record>) -> bool {
    match decoded {
        Decoded::Clean(record) => record.is_lossless(),
        Decoded::Degraded(_) => false,
    }
}

/// Decode a wire payload into a record of `schema`.
///
/// Attributes missing from the payload stay unset. Never fails: nested values
/// of the wrong shape are kept raw and tagged [`Decoded::Degraded`].
pub fn decode(payload: &WireMap, schema: &'static Schema) -> Record {
    let mut record = Record::new(schema);
    for spec in schema.fields {
        if let Some(value) = payload.get(&spec.wire_key()) {
            record
                .fields
                .insert(spec.name, decode_field(schema, spec, value));
        }
    }
    for key in payload.keys() {
        let name = camel_to_snake(key);
        if schema.field(&name).is_none() {
            debug!(schema = schema.name, field = %name, "Ignoring undeclared wire field");
        }
    }
    record
}

fn decode_field(parent: &Schema, spec: &FieldSpec, value: &Value) -> FieldValue {
    match spec.kind {
        FieldKind::Primitive => FieldValue::Primitive(value.clone()),
        FieldKind::Object(_) if value.is_null() => FieldValue::Primitive(Value::Null),
        FieldKind::Object(target) => FieldValue::Object(decode_nested(target, value)),
        FieldKind::List(target) => match value {
            Value::Array(items) => FieldValue::List(
                items
                    .iter()
                    .map(|item| decode_nested(target, item))
                    .collect(),
            ),
            Value::Null => FieldValue::Primitive(Value::Null),
            other => {
                debug!(
                    schema = parent.name,
                    field = spec.name,
                    "Expected a list, keeping raw value"
                );
                FieldValue::Primitive(other.clone())
            }
        },
    }
}

fn decode_nested(schema: &'static Schema, value: &Value) -> Decoded<Record> {
    match value {
        Value::Object(map) => Decoded::Clean(decode(map, schema)),
        other => {
            debug!(
                schema = schema.name,
                value = %other,
                "Expected an object, keeping raw value"
            );
            Decoded::Degraded(other.clone())
        }
    }
}

/// Encode a record into a wire payload.
///
/// Only set attributes are emitted; an unset attribute never turns into
/// `null`.
pub fn encode(record: &Record) -> WireMap {
    let mut payload = WireMap::new();
    for spec in record.schema.fields {
        if let Some(value) = record.fields.get(spec.name) {
            payload.insert(spec.wire_key(), encode_field(value));
        }
    }
    payload
}

fn encode_field(value: &FieldValue) -> Value {
    match value {
        FieldValue::Primitive(raw) => raw.clone(),
        FieldValue::Object(nested) => encode_nested(nested),
        FieldValue::List(items) => Value::Array(items.iter().map(encode_nested).collect()),
    }
}

fn encode_nested(nested: &Decoded<Record>) -> Value {
    match nested {
        Decoded::Clean(record) => Value::Object(encode(record)),
        Decoded::Degraded(raw) => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static TAG: Schema = Schema {
        name: "Tag",
        fields: &[FieldSpec::primitive("id"), FieldSpec::primitive("label")],
    };

    static NODE: Schema = Schema {
        name: "Node",
        fields: &[
            FieldSpec::primitive("id"),
            FieldSpec::primitive("display_name"),
            FieldSpec::object("parent_node", &NODE),
            FieldSpec::list("tag_list", &TAG),
        ],
    };

    fn payload(value: Value) -> WireMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_decode_maps_camel_case_keys() {
        let record = decode(
            &payload(json!({
                "id": 7,
                "displayName": "root",
                "tagList": [{"id": 1, "label": "a"}]
            })),
            &NODE,
        );

        assert_eq!(record.primitive("id"), Some(&json!(7)));
        assert_eq!(record.primitive("display_name"), Some(&json!("root")));
        match record.get("tag_list") {
            Some(FieldValue::List(items)) => {
                assert_eq!(items.len(), 1);
                let tag = items[0].clean().expect("clean tag");
                assert_eq!(tag.primitive("label"), Some(&json!("a")));
            }
            other => panic!("unexpected tag_list: {:?}", other),
        }
        assert!(record.is_lossless());
    }

    #[test]
    fn test_decode_leaves_missing_fields_unset() {
        let record = decode(&payload(json!({"id": 1})), &NODE);

        assert!(record.is_set("id"));
        assert!(!record.is_set("display_name"));
        assert!(!record.is_set("parent_node"));
        assert_eq!(record.set_fields().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_decode_keeps_explicit_null() {
        let record = decode(
            &payload(json!({"displayName": null, "parentNode": null})),
            &NODE,
        );

        assert_eq!(record.primitive("display_name"), Some(&Value::Null));
        assert_eq!(record.primitive("parent_node"), Some(&Value::Null));
        assert!(record.is_lossless());
    }

    #[test]
    fn test_decode_degrades_scalar_list_elements() {
        let record = decode(
            &payload(json!({"tagList": [{"id": 1}, "bare", 3]})),
            &NODE,
        );

        match record.get("tag_list") {
            Some(FieldValue::List(items)) => {
                assert!(items[0].is_clean());
                assert_eq!(items[1], Decoded::Degraded(json!("bare")));
                assert_eq!(items[2], Decoded::Degraded(json!(3)));
            }
            other => panic!("unexpected tag_list: {:?}", other),
        }
        assert!(!record.is_lossless());
    }

    #[test]
    fn test_decode_degrades_non_object_nested_value() {
        let record = decode(&payload(json!({"parentNode": 42})), &NODE);

        assert_eq!(
            record.get("parent_node"),
            Some(&FieldValue::Object(Decoded::Degraded(json!(42))))
        );
        assert!(!record.is_lossless());
    }

    #[test]
    fn test_decode_non_array_list_is_kept_raw() {
        let record = decode(&payload(json!({"tagList": "oops"})), &NODE);

        assert_eq!(record.primitive("tag_list"), Some(&json!("oops")));
        assert!(!record.is_lossless());
    }

    #[test]
    fn test_decode_recurses_into_self_referential_schema() {
        let record = decode(
            &payload(json!({"id": 2, "parentNode": {"id": 1, "displayName": "root"}})),
            &NODE,
        );

        match record.get("parent_node") {
            Some(FieldValue::Object(Decoded::Clean(parent))) => {
                assert_eq!(parent.schema().name, "Node");
                assert_eq!(parent.primitive("display_name"), Some(&json!("root")));
            }
            other => panic!("unexpected parent_node: {:?}", other),
        }
    }

    #[test]
    fn test_encode_omits_unset_fields() {
        let mut record = Record::new(&NODE);
        record.set("id", json!(3));

        let wire = encode(&record);

        assert_eq!(Value::Object(wire), json!({"id": 3}));
    }

    #[test]
    fn test_encode_passes_degraded_values_through() {
        let record = decode(
            &payload(json!({"tagList": [{"id": 1, "label": "x"}, "bare"], "parentNode": 5})),
            &NODE,
        );

        let wire = encode(&record);

        assert_eq!(
            Value::Object(wire),
            json!({"parentNode": 5, "tagList": [{"id": 1, "label": "x"}, "bare"]})
        );
    }

    #[test]
    fn test_round_trip_preserves_set_fields() {
        let mut parent = Record::new(&NODE);
        parent.set("id", json!(1));
        let mut tag = Record::new(&TAG);
        tag.set("label", json!("t"));

        let mut record = Record::new(&NODE);
        record.set("id", json!(2));
        record.set("display_name", json!("child"));
        record.set("parent_node", parent);
        record.set("tag_list", vec![tag]);

        let decoded = decode(&encode(&record), &NODE);

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_set_ignores_undeclared_field() {
        let mut record = Record::new(&TAG);
        record.set("colour", json!("red"));

        assert!(!record.is_set("colour"));
        assert!(encode(&record).is_empty());
    }

    #[test]
    fn test_set_ignores_value_of_the_wrong_kind() {
        let mut tag = Record::new(&TAG);
        tag.set("id", json!(1));

        let mut record = Record::new(&NODE);
        record.set("id", tag.clone());
        record.set("parent_node", json!("root"));
        record.set("tag_list", tag);

        assert!(!record.is_set("id"));
        assert!(!record.is_set("parent_node"));
        assert!(!record.is_set("tag_list"));
        assert!(encode(&record).is_empty());
    }

    #[test]
    fn test_set_accepts_null_for_nested_kinds() {
        let mut record = Record::new(&NODE);
        record.set("parent_node", Value::Null);
        record.set("tag_list", Value::Null);

        assert_eq!(
            Value::Object(encode(&record)),
            json!({"parentNode": null, "tagList": null})
        );
        assert_eq!(decode(&encode(&record), &NODE), record);
    }

    #[test]
    fn test_decode_ignores_undeclared_wire_fields() {
        let record = decode(&payload(json!({"id": 1, "colourCode": "red"})), &NODE);

        assert_eq!(record.set_fields().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_unset_removes_field() {
        let mut record = Record::new(&TAG);
        record.set("label", json!("t"));

        assert_eq!(record.unset("label"), Some(FieldValue::Primitive(json!("t"))));
        assert!(!record.is_set("label"));
    }
}
