use anyhow::{anyhow, Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::{
    error::{DisplayErrorContext, SdkError},
    operation::create_table::CreateTableError,
    types::{
        AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
        TableDescription,
    },
    Client,
};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::dynamodb::{Document, GetItemConfig, Item, Table};

/// DynamoDB client wrapper for the job table workflow.
///
/// Wraps an [`aws_sdk_dynamodb::Client`] and exposes the handful of calls the
/// sample needs, each a direct pass-through to one DynamoDB API operation:
///
/// - **CreateTable / DescribeTable**: idempotent provisioning via [`ensure_table`]
/// - **PutItem**: unconditional write of a raw item
/// - **GetItem**: raw read, or a projected document read with a chosen consistency
/// - **DeleteItem**: delete the record a document was read from
///
/// There is no retry, caching or batching. Every method awaits a single request.
///
/// # Example
///
/// ```rust
/// use dynamodb::{DynamoDb, Table, JobRecord};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = aws_config::load_from_env().await;
///     let ddb = DynamoDb::new(&config);
///
///     let table = Table::job("Job");
///     ddb.ensure_table(&table).await?;
///     ddb.put_item(table.name(), JobRecord::sample("abc123").to_item()?).await?;
///     Ok(())
/// }
/// ```
///
/// # Error Handling
///
/// Methods return `anyhow::Result`. Only "table already exists" during
/// provisioning is recovered from; every other SDK error is returned.
///
/// [`ensure_table`]: DynamoDb::ensure_table
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

/// Outcome of [`DynamoDb::ensure_table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned {
    Created(TableDescription),
    Existing(TableDescription),
}

impl Provisioned {
    pub fn description(&self) -> &TableDescription {
        match self {
            Provisioned::Created(description) | Provisioned::Existing(description) => description,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client for the configured region and endpoint.
    ///
    /// Credentials come from the default provider chain. Nothing is sent until
    /// the first request, so an unreachable endpoint surfaces there.
    pub async fn connect(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        info!("Connecting to {}", config.target_display());
        Self::new(&sdk_config)
    }

    // --- Table Operations ---

    /// Creates the table, or returns the existing table's description if it is already there.
    pub async fn ensure_table(&self, table: &Table) -> Result<Provisioned> {
        let key_schema = table.key_schema();
        let throughput = table.throughput();

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(key_schema.partition_key())
            .attribute_type(key_schema.field_type().scalar_attribute_type())
            .build()?;

        let key_schema_element = KeySchemaElement::builder()
            .attribute_name(key_schema.partition_key())
            .key_type(KeyType::Hash)
            .build()?;

        let provisioned_throughput = ProvisionedThroughput::builder()
            .read_capacity_units(throughput.read_capacity_units)
            .write_capacity_units(throughput.write_capacity_units)
            .build()?;

        let result = self
            .client
            .create_table()
            .table_name(table.name())
            .attribute_definitions(attribute_definition)
            .key_schema(key_schema_element)
            .provisioned_throughput(provisioned_throughput)
            .send()
            .await;

        match result {
            Ok(output) => {
                info!("Table '{}' created", table.name());
                let description = output.table_description.ok_or_else(|| {
                    anyhow!("CreateTable returned no description for '{}'", table.name())
                })?;
                Ok(Provisioned::Created(description))
            }
            Err(err) if is_table_in_use(&err) => {
                let status = err.raw_response().map(|response| response.status().as_u16());
                info!(
                    "Table '{}' already exists. Fetching description... status code: {:?}",
                    table.name(),
                    status
                );
                let description = self.describe_table(table.name()).await?;
                Ok(Provisioned::Existing(description))
            }
            Err(err) => {
                error!(
                    "Failed to create table '{}': {}",
                    table.name(),
                    DisplayErrorContext(&err)
                );
                Err(err).with_context(|| format!("CreateTable '{}'", table.name()))
            }
        }
    }

    /// Retrieves the table description.
    pub async fn describe_table(&self, table_name: &str) -> Result<TableDescription> {
        let output = self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .with_context(|| format!("DescribeTable '{table_name}'"))?;

        output
            .table
            .ok_or_else(|| anyhow!("DescribeTable returned no table for '{table_name}'"))
    }

    // --- Item Operations ---

    /// Puts an item into a DynamoDB table, replacing any item with the same key.
    pub async fn put_item(&self, table_name: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await
            .with_context(|| format!("PutItem into '{table_name}'"))?;

        info!("Item added to '{table_name}'");
        Ok(())
    }

    /// Gets the full item stored under `key`. Absent items come back empty.
    pub async fn get_item(&self, table_name: &str, key: Item) -> Result<Item> {
        let response = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key.attributes))
            .send()
            .await
            .with_context(|| format!("GetItem from '{table_name}'"))?;

        Ok(response.item.map(Item::from).unwrap_or_default())
    }

    /// Gets the item with the given partition key value as a [`Document`].
    ///
    /// Only the attributes named in `config` are requested and returned.
    pub async fn get_document(
        &self,
        table: &Table,
        partition_key_value: &str,
        config: &GetItemConfig,
    ) -> Result<Document> {
        let mut request = self
            .client
            .get_item()
            .table_name(table.name())
            .key(
                table.partition_key(),
                key_attribute(table, partition_key_value),
            )
            .consistent_read(config.consistent_read);

        if let Some((expression, names)) = config.projection() {
            debug!("Projection for '{}': {}", table.name(), expression);
            request = request
                .projection_expression(expression)
                .set_expression_attribute_names(Some(names));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("GetItem from '{}'", table.name()))?;

        let item = response.item.map(Item::from).unwrap_or_default();
        Ok(Document::from_item(item, &config.attributes_to_get))
    }

    /// Deletes the item a document was read from.
    ///
    /// The document must carry the table's partition key. Deleting a key that
    /// no longer exists succeeds, as DynamoDB reports it.
    pub async fn delete_document(&self, table: &Table, document: &Document) -> Result<()> {
        let partition_key = table.partition_key();
        let value = document.get(partition_key).ok_or_else(|| {
            anyhow!(
                "Document has no '{}' attribute, cannot delete from '{}'",
                partition_key,
                table.name()
            )
        })?;

        self.client
            .delete_item()
            .table_name(table.name())
            .key(partition_key, key_attribute(table, value))
            .send()
            .await
            .with_context(|| format!("DeleteItem from '{}'", table.name()))?;

        info!("Item deleted from '{}'", table.name());
        Ok(())
    }
}

fn is_table_in_use<R>(err: &SdkError<CreateTableError, R>) -> bool {
    err.as_service_error()
        .is_some_and(CreateTableError::is_resource_in_use_exception)
}

fn key_attribute(table: &Table, value: &str) -> AttributeValue {
    table.key_schema().field_type().attribute_value(value)
}
