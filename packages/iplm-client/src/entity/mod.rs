//! Domain entities and the operations that fetch and update them.
//!
//! Every entity is a typed view over a [`Record`] that follows the entity's
//! static [`Schema`]. Entities that the API can list and update also
//! implement [`Resource`], which pairs them with their wire documents.

mod address;
mod organization;
mod organization_type;

pub use address::{Address, ADDRESS_SCHEMA};
pub use organization::{get_organizations, update_organization, Organization, ORGANIZATION_SCHEMA};
pub use organization_type::{
    get_organization_types, update_organization_type, OrganizationType,
    ORGANIZATION_TYPE_SCHEMA,
};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::graphql::{Transport, Variables};
use crate::mapper::{self, Decoded, FieldValue, Record, Schema, WireMap};

/// A typed domain object backed by a [`Record`].
pub trait Entity: Sized {
    fn schema() -> &'static Schema;

    fn from_record(record: Record) -> Self;

    fn as_record(&self) -> &Record;

    fn into_record(self) -> Record;

    /// Decode a wire payload into a new entity.
    fn from_wire(payload: &WireMap) -> Self {
        Self::from_record(mapper::decode(payload, Self::schema()))
    }

    /// Encode the set attributes of this entity.
    fn to_wire(&self) -> WireMap {
        mapper::encode(self.as_record())
    }
}

/// An entity the API can list and update.
pub trait Resource: Entity {
    /// Query returning every entity under [`Self::LIST_FIELD`].
    const LIST_QUERY: &'static str;
    const LIST_FIELD: &'static str;

    /// Mutation taking the encoded entity as [`Self::UPDATE_VARIABLE`].
    const UPDATE_MUTATION: &'static str;
    const UPDATE_VARIABLE: &'static str;
    /// Path of the updated entity in the mutation result.
    const UPDATE_FIELD: &'static str;
    const UPDATE_RESULT_FIELD: &'static str;
}

/// Result of an update mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Updated<T> {
    /// The entity as returned by the server.
    pub entity: T,
    /// Set when a name was submitted and the server returned a different one.
    pub name_mismatch: Option<NameMismatch>,
}

impl<T> Updated<T> {
    pub fn is_applied(&self) -> bool {
        self.name_mismatch.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameMismatch {
    pub submitted: Option<Value>,
    pub returned: Option<Value>,
}

/// Fetch every entity of type `T`, in response order.
///
/// A missing or `null` list yields an empty `Vec`.
pub async fn fetch_all<T: Resource>(transport: &dyn Transport) -> Result<Vec<T>> {
    let mut data = transport.execute(T::LIST_QUERY, Variables::new()).await?;

    let items = match data.remove(T::LIST_FIELD) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ClientError::UnexpectedResponse(format!(
                "expected a list under '{}', got {}",
                T::LIST_FIELD,
                other
            )))
        }
    };

    let mut entities = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(payload) => entities.push(T::from_wire(&payload)),
            other => {
                warn!(
                    entity = T::schema().name,
                    index,
                    value = %other,
                    "Skipping list element that is not an object"
                );
            }
        }
    }

    debug!(entity = T::schema().name, count = entities.len(), "Fetched entities");
    Ok(entities)
}

/// Send an update mutation for `entity` and decode the server's version.
///
/// When `entity` carries a name, a different name in the server's version is
/// reported through [`Updated::name_mismatch`] and logged. It is not an error.
pub async fn update<T: Resource>(transport: &dyn Transport, entity: &T) -> Result<Updated<T>> {
    let mut variables = Variables::new();
    variables.insert(
        T::UPDATE_VARIABLE.to_string(),
        Value::Object(entity.to_wire()),
    );

    let data = transport.execute(T::UPDATE_MUTATION, variables).await?;

    let payload = data
        .get(T::UPDATE_FIELD)
        .and_then(|result| result.get(T::UPDATE_RESULT_FIELD))
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ClientError::UnexpectedResponse(format!(
                "missing '{}.{}' in mutation result",
                T::UPDATE_FIELD,
                T::UPDATE_RESULT_FIELD
            ))
        })?;
    let updated = T::from_wire(payload);

    let submitted = entity.as_record().primitive("name");
    let returned = updated.as_record().primitive("name");
    let name_mismatch = (submitted.is_some() && submitted != returned).then(|| {
        warn!(
            entity = T::schema().name,
            submitted = ?submitted,
            returned = ?returned,
            "{} name not updated",
            T::schema().name
        );
        NameMismatch {
            submitted: submitted.cloned(),
            returned: returned.cloned(),
        }
    });

    Ok(Updated {
        entity: updated,
        name_mismatch,
    })
}

// ============================================================================
// Field access helpers shared by the entity types
// ============================================================================

/// Numeric id, accepting both JSON numbers and numeric strings (GraphQL `ID`).
pub(crate) fn id_of(record: &Record) -> Option<i64> {
    match record.primitive("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn str_of<'a>(record: &'a Record, name: &str) -> Option<&'a str> {
    record.primitive(name).and_then(Value::as_str)
}

/// A nested entity. `None` when unset or `null`.
pub(crate) fn nested_of<T: Entity>(record: &Record, name: &str) -> Option<Decoded<T>> {
    match record.get(name)? {
        FieldValue::Object(nested) => Some(nested.clone().map(T::from_record)),
        FieldValue::Primitive(Value::Null) => None,
        FieldValue::Primitive(raw) => Some(Decoded::Degraded(raw.clone())),
        FieldValue::List(_) => None,
    }
}

/// A list of nested entities. `None` when unset, `null` or not a list.
pub(crate) fn list_of<T: Entity>(record: &Record, name: &str) -> Option<Vec<Decoded<T>>> {
    match record.get(name)? {
        FieldValue::List(items) => Some(
            items
                .iter()
                .cloned()
                .map(|item| item.map(T::from_record))
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) fn with_field<T: Entity>(entity: T, name: &str, value: impl Into<FieldValue>) -> T {
    let mut record = entity.into_record();
    record.set(name, value);
    T::from_record(record)
}
