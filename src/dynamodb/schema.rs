use aws_sdk_dynamodb::types::{AttributeValue, ScalarAttributeType};

/// The key schema of a DynamoDB table.
///
/// DynamoDB is schemaless for ordinary attributes, but every table declares the
/// attributes that make up its primary key. The job table uses a simple primary
/// key: a single partition (hash) key with no sort key.
///
/// # Example
///
/// ```
/// use dynamodb::{KeySchema, FieldType};
///
/// let key_schema = KeySchema::new("BatchId", FieldType::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    partition_key: String,
    field_type: FieldType,
}

/// The scalar type of a key attribute.
///
/// DynamoDB also allows number and binary keys; job keys are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Represents a string field.
    String,
}

impl FieldType {
    pub(crate) fn scalar_attribute_type(self) -> ScalarAttributeType {
        match self {
            FieldType::String => ScalarAttributeType::S,
        }
    }

    /// Wraps a key value in the matching attribute type.
    pub(crate) fn attribute_value(self, value: &str) -> AttributeValue {
        match self {
            FieldType::String => AttributeValue::S(value.to_string()),
        }
    }
}

impl KeySchema {
    /// Creates a key schema with a single partition key.
    pub fn new(partition_key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            partition_key: partition_key.into(),
            field_type,
        }
    }

    /// Returns the name of the partition key attribute.
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Returns the type of the partition key attribute.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keys_use_s_attributes() {
        assert_eq!(
            FieldType::String.scalar_attribute_type(),
            ScalarAttributeType::S
        );
        assert_eq!(
            FieldType::String.attribute_value("abc123"),
            AttributeValue::S("abc123".to_string())
        );
    }

    #[test]
    fn key_schema_exposes_partition_key() {
        let schema = KeySchema::new("BatchId", FieldType::String);
        assert_eq!(schema.partition_key(), "BatchId");
        assert_eq!(schema.field_type(), FieldType::String);
    }
}
