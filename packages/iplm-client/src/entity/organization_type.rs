use serde_json::Value;

use super::{fetch_all, id_of, str_of, update, with_field, Entity, Resource, Updated};
use crate::error::Result;
use crate::graphql::{Transport, ORGANIZATION_TYPES_QUERY, UPDATE_ORGANIZATION_TYPE};
use crate::mapper::{FieldSpec, Record, Schema};

pub static ORGANIZATION_TYPE_SCHEMA: Schema = Schema {
    name: "OrganizationType",
    fields: &[
        FieldSpec::primitive("id"),
        FieldSpec::primitive("name"),
        FieldSpec::primitive("description"),
    ],
};

/// A category an organization can belong to (vendor, customer, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationType {
    record: Record,
}

impl OrganizationType {
    pub fn new() -> Self {
        Self {
            record: Record::new(&ORGANIZATION_TYPE_SCHEMA),
        }
    }

    pub fn id(&self) -> Option<i64> {
        id_of(&self.record)
    }

    pub fn name(&self) -> Option<&str> {
        str_of(&self.record, "name")
    }

    pub fn description(&self) -> Option<&str> {
        str_of(&self.record, "description")
    }

    pub fn with_id(self, id: i64) -> Self {
        with_field(self, "id", Value::from(id))
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        with_field(self, "name", Value::String(name.into()))
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        with_field(self, "description", Value::String(description.into()))
    }
}

impl Default for OrganizationType {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for OrganizationType {
    fn schema() -> &'static Schema {
        &ORGANIZATION_TYPE_SCHEMA
    }

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn as_record(&self) -> &Record {
        &self.record
    }

    fn into_record(self) -> Record {
        self.record
    }
}

impl Resource for OrganizationType {
    const LIST_QUERY: &'static str = ORGANIZATION_TYPES_QUERY;
    const LIST_FIELD: &'static str = "organizationTypes";
    const UPDATE_MUTATION: &'static str = UPDATE_ORGANIZATION_TYPE;
    const UPDATE_VARIABLE: &'static str = "organizationType";
    const UPDATE_FIELD: &'static str = "updateOrganizationType";
    const UPDATE_RESULT_FIELD: &'static str = "organizationType";
}

/// Fetch all organization types.
pub async fn get_organization_types(transport: &dyn Transport) -> Result<Vec<OrganizationType>> {
    fetch_all(transport).await
}

/// Update an organization type and return the server's version of it.
pub async fn update_organization_type(
    transport: &dyn Transport,
    org_type: &OrganizationType,
) -> Result<Updated<OrganizationType>> {
    update(transport, org_type).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_wire() {
        let payload = json!({"id": "4", "name": "Vendor", "description": "desc"});

        let org_type = OrganizationType::from_wire(payload.as_object().unwrap());

        assert_eq!(org_type.id(), Some(4));
        assert_eq!(org_type.name(), Some("Vendor"));
        assert_eq!(org_type.description(), Some("desc"));
    }

    #[test]
    fn test_to_wire_omits_unset_description() {
        let org_type = OrganizationType::new().with_id(1).with_name("Vendor");

        let wire = org_type.to_wire();

        assert_eq!(Value::Object(wire), json!({"id": 1, "name": "Vendor"}));
    }
}
