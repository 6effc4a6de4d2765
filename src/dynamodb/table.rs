use crate::dynamodb::{FieldType, JobKey, KeySchema};

/// Provisioned read and write capacity units for a table.
///
/// Capacity is fixed at creation time. Local emulators accept any values and
/// ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl Throughput {
    pub fn new(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        Self {
            read_capacity_units,
            write_capacity_units,
        }
    }
}

/// DynamoDB table configuration.
///
/// This struct describes a table to be provisioned: its name, its key schema,
/// and the throughput it is created with. It carries no connection state; the
/// same `Table` can be handed to [`DynamoDb::ensure_table`] any number of times.
///
/// # Capacity Mode
///
/// Tables are created in **provisioned** mode, where the number of reads and
/// writes per second is declared up front.
///
/// # Example
///
/// ```
/// use dynamodb::{Table, KeySchema, FieldType, Throughput};
///
/// let table = Table::new(
///     "Job",
///     KeySchema::new("BatchId", FieldType::String),
///     Throughput::new(10, 5),
/// );
/// ```
///
/// [`DynamoDb::ensure_table`]: crate::dynamodb::DynamoDb::ensure_table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    key_schema: KeySchema,
    throughput: Throughput,
}

impl Table {
    /// Creates a new `Table` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `key_schema` - The partition key definition.
    /// * `throughput` - The provisioned read/write capacity.
    pub fn new(name: impl Into<String>, key_schema: KeySchema, throughput: Throughput) -> Self {
        Self {
            name: name.into(),
            key_schema,
            throughput,
        }
    }

    /// The job table: hash key `BatchId` (string), 10 read and 5 write units.
    pub fn job(name: impl Into<String>) -> Self {
        Self::new(
            name,
            KeySchema::new(JobKey::BatchId.as_str(), FieldType::String),
            Throughput::new(10, 5),
        )
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &str {
        self.key_schema.partition_key()
    }

    pub fn key_schema(&self) -> &KeySchema {
        &self.key_schema
    }

    pub fn throughput(&self) -> Throughput {
        self.throughput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_table_uses_batch_id_hash_key() {
        let table = Table::job("Job");

        assert_eq!(table.name(), "Job");
        assert_eq!(table.partition_key(), "BatchId");
        assert_eq!(table.key_schema().field_type(), FieldType::String);
        assert_eq!(table.throughput(), Throughput::new(10, 5));
    }
}
