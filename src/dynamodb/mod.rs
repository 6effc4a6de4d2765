//! # DynamoDB Module
//!
//! A thin layer over `aws-sdk-dynamodb` for provisioning the job table and
//! reading and writing job records.
//!
//! ## Components
//!
//! - `DynamoDb`: client wrapper; one method per DynamoDB call.
//! - `Item`: a raw, attribute-typed item (what GetItem/PutItem exchange).
//! - `Document`: a plain string view of an item, optionally projected.
//! - `JobKey` / `JobRecord`: the job table's attribute names and record shape.
//! - `KeySchema` / `Table`: what gets provisioned.
//!
//! ## Usage
//!
//! ```rust
//! use dynamodb::{DynamoDb, GetItemConfig, Item, JobRecord, Table};
//!
//! async fn roundtrip(ddb: &DynamoDb) -> anyhow::Result<()> {
//!     let table = Table::job("Job");
//!     ddb.ensure_table(&table).await?;
//!
//!     let record = JobRecord::sample("abc123");
//!     ddb.put_item(table.name(), record.to_item()?).await?;
//!
//!     let key = Item::new().set_string("BatchId", &record.batch_id);
//!     let raw = ddb.get_item(table.name(), key).await?;
//!     let document = ddb
//!         .get_document(&table, &record.batch_id, &GetItemConfig::for_job())
//!         .await?;
//!     ddb.delete_document(&table, &document).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod document;
mod item;
mod job;
mod schema;
mod table;

pub use client::DynamoDb;
pub use document::{Document, GetItemConfig};
pub use item::Item;
pub use job::{new_batch_id, JobKey, JobRecord};
pub use schema::{FieldType, KeySchema};
pub use table::Table;
