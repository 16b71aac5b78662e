//! Table shape configuration.
//!
//! A [`TableSchema`] names the table, its primary key attribute, and the
//! attributes carrying a secondary index. The schema is fixed at
//! construction; the store never infers shape from the records it holds.

/// Declared shape of one record table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    primary_key: String,
    secondary_indexes: Vec<String>,
}

impl TableSchema {
    /// Create a schema with a primary key and no secondary indexes
    pub fn new(name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: primary_key.into(),
            secondary_indexes: Vec::new(),
        }
    }

    /// Declare a secondary index on the given attribute
    pub fn with_secondary_index(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        if !self.secondary_indexes.contains(&attribute) {
            self.secondary_indexes.push(attribute);
        }
        self
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary key attribute name
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Declared secondary index attributes
    pub fn secondary_indexes(&self) -> &[String] {
        &self.secondary_indexes
    }

    /// Whether the attribute carries a declared secondary index
    pub fn has_index(&self, attribute: &str) -> bool {
        self.secondary_indexes.iter().any(|a| a == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_construction() {
        let schema = TableSchema::new("spaces", "spaceId").with_secondary_index("location");

        assert_eq!(schema.name(), "spaces");
        assert_eq!(schema.primary_key(), "spaceId");
        assert_eq!(schema.secondary_indexes(), &["location".to_string()]);
    }

    #[test]
    fn test_has_index() {
        let schema = TableSchema::new("spaces", "spaceId").with_secondary_index("location");

        assert!(schema.has_index("location"));
        assert!(!schema.has_index("name"));
        assert!(!schema.has_index("spaceId"));
    }

    #[test]
    fn test_duplicate_index_declaration_collapses() {
        let schema = TableSchema::new("spaces", "spaceId")
            .with_secondary_index("location")
            .with_secondary_index("location");

        assert_eq!(schema.secondary_indexes().len(), 1);
    }
}
