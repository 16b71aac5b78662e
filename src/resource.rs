//! Resource descriptors.
//!
//! Each resource kind is fixed data: its table's primary key, its declared
//! secondary indexes, and the fields a record must carry to be stored.
//! Adding a resource type means adding a descriptor, not code.

use crate::store::TableSchema;

/// Static description of one resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Resource (and table) name, as mounted on the HTTP surface
    pub name: &'static str,
    /// Primary key attribute, server-assigned at creation
    pub primary_key: &'static str,
    /// Attributes carrying a secondary index
    pub secondary_indexes: &'static [&'static str],
    /// Attributes a record must contain to be stored
    pub required_fields: &'static [&'static str],
}

impl ResourceSpec {
    /// Build the table schema for this resource
    pub fn table_schema(&self) -> TableSchema {
        let mut schema = TableSchema::new(self.name, self.primary_key);
        for attribute in self.secondary_indexes {
            schema = schema.with_secondary_index(*attribute);
        }
        schema
    }
}

/// Bookable spaces
pub const SPACES: ResourceSpec = ResourceSpec {
    name: "spaces",
    primary_key: "spaceId",
    secondary_indexes: &["location"],
    required_fields: &["name", "location"],
};

/// Reservations against a space
pub const RESERVATIONS: ResourceSpec = ResourceSpec {
    name: "reservations",
    primary_key: "reservationId",
    secondary_indexes: &["user"],
    required_fields: &["spaceId", "user"],
};
