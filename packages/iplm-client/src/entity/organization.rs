use serde_json::Value;

use super::{
    fetch_all, id_of, list_of, nested_of, str_of, update, with_field, Address, Entity,
    OrganizationType, Resource, Updated, ADDRESS_SCHEMA, ORGANIZATION_TYPE_SCHEMA,
};
use crate::error::Result;
use crate::graphql::{Transport, ORGANIZATIONS_QUERY, UPDATE_ORGANIZATION};
use crate::mapper::{Decoded, FieldSpec, FieldValue, Record, Schema};

pub static ORGANIZATION_SCHEMA: Schema = Schema {
    name: "Organization",
    fields: &[
        FieldSpec::primitive("id"),
        FieldSpec::primitive("name"),
        FieldSpec::primitive("description"),
        FieldSpec::object("parent", &ORGANIZATION_SCHEMA),
        FieldSpec::list("org_types", &ORGANIZATION_TYPE_SCHEMA),
        FieldSpec::list("addresses", &ADDRESS_SCHEMA),
    ],
};

/// An organization, optionally nested under a parent organization.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    record: Record,
}

impl Organization {
    pub fn new() -> Self {
        Self {
            record: Record::new(&ORGANIZATION_SCHEMA),
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

    pub fn parent(&self) -> Option<Decoded<Organization>> {
        nested_of(&self.record, "parent")
    }

    pub fn org_types(&self) -> Option<Vec<Decoded<OrganizationType>>> {
        list_of(&self.record, "org_types")
    }

    pub fn addresses(&self) -> Option<Vec<Decoded<Address>>> {
        list_of(&self.record, "addresses")
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

    pub fn with_parent(self, parent: Organization) -> Self {
        with_field(self, "parent", parent.into_record())
    }

    pub fn with_org_types(self, org_types: Vec<OrganizationType>) -> Self {
        let records: Vec<Record> = org_types.into_iter().map(Entity::into_record).collect();
        with_field(self, "org_types", FieldValue::from(records))
    }

    pub fn with_addresses(self, addresses: Vec<Address>) -> Self {
        let records: Vec<Record> = addresses.into_iter().map(Entity::into_record).collect();
        with_field(self, "addresses", FieldValue::from(records))
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Organization {
    fn schema() -> &'static Schema {
        &ORGANIZATION_SCHEMA
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

impl Resource for Organization {
    const LIST_QUERY: &'static str = ORGANIZATIONS_QUERY;
    const LIST_FIELD: &'static str = "organizations";
    const UPDATE_MUTATION: &'static str = UPDATE_ORGANIZATION;
    const UPDATE_VARIABLE: &'static str = "organization";
    const UPDATE_FIELD: &'static str = "updateOrganization";
    const UPDATE_RESULT_FIELD: &'static str = "organization";
}

/// Fetch all organizations with their parent, types and addresses.
pub async fn get_organizations(transport: &dyn Transport) -> Result<Vec<Organization>> {
    fetch_all(transport).await
}

/// Update an organization and return the server's version of it.
pub async fn update_organization(
    transport: &dyn Transport,
    org: &Organization,
) -> Result<Updated<Organization>> {
    update(transport, org).await
}
