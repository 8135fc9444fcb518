use serde_json::Value;

use super::{id_of, str_of, with_field, Entity};
use crate::mapper::{FieldSpec, Record, Schema};

pub static ADDRESS_SCHEMA: Schema = Schema {
    name: "Address",
    fields: &[
        FieldSpec::primitive("id"),
        FieldSpec::primitive("street"),
        FieldSpec::primitive("street2"),
        FieldSpec::primitive("city"),
        FieldSpec::primitive("state"),
        FieldSpec::primitive("zip"),
        FieldSpec::primitive("country"),
    ],
};

/// Postal address of an organization.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    record: Record,
}

impl Address {
    pub fn new() -> Self {
        Self {
            record: Record::new(&ADDRESS_SCHEMA),
        }
    }

    pub fn id(&self) -> Option<i64> {
        id_of(&self.record)
    }

    pub fn street(&self) -> Option<&str> {
        str_of(&self.record, "street")
    }

    pub fn street2(&self) -> Option<&str> {
        str_of(&self.record, "street2")
    }

    pub fn city(&self) -> Option<&str> {
        str_of(&self.record, "city")
    }

    pub fn state(&self) -> Option<&str> {
        str_of(&self.record, "state")
    }

    pub fn zip(&self) -> Option<&str> {
        str_of(&self.record, "zip")
    }

    pub fn country(&self) -> Option<&str> {
        str_of(&self.record, "country")
    }

    pub fn with_id(self, id: i64) -> Self {
        with_field(self, "id", Value::from(id))
    }

    pub fn with_street(self, street: impl Into<String>) -> Self {
        with_field(self, "street", Value::String(street.into()))
    }

    pub fn with_street2(self, street2: impl Into<String>) -> Self {
        with_field(self, "street2", Value::String(street2.into()))
    }

    pub fn with_city(self, city: impl Into<String>) -> Self {
        with_field(self, "city", Value::String(city.into()))
    }

    pub fn with_state(self, state: impl Into<String>) -> Self {
        with_field(self, "state", Value::String(state.into()))
    }

    pub fn with_zip(self, zip: impl Into<String>) -> Self {
        with_field(self, "zip", Value::String(zip.into()))
    }

    pub fn with_country(self, country: impl Into<String>) -> Self {
        with_field(self, "country", Value::String(country.into()))
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Address {
    fn schema() -> &'static Schema {
        &ADDRESS_SCHEMA
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
