use anyhow::Result;
use aws_sdk_dynamodb::types::TableDescription;
use tracing::info;

use crate::dynamodb::{new_batch_id, DynamoDb, GetItemConfig, Item, JobRecord, Table};

/// Runs the whole sample against `table`: provision, write, read twice, delete.
///
/// Each step awaits the previous one. The batch id generated by the write is
/// passed to every later step.
pub async fn run(ddb: &DynamoDb, table: &Table) -> Result<()> {
    let description = provision_table(ddb, table).await?;
    println!("{description:?}");

    let batch_id = save_item(ddb, table).await?;
    load_item(ddb, table, &batch_id).await?;
    load_item_using_document(ddb, table, &batch_id).await?;
    delete_item_using_document(ddb, table, &batch_id).await?;

    println!("App is finished!");
    Ok(())
}

async fn provision_table(ddb: &DynamoDb, table: &Table) -> Result<TableDescription> {
    let provisioned = ddb.ensure_table(table).await?;
    if provisioned.was_created() {
        println!("Table created.");
    } else {
        println!("Table already exists.");
    }
    Ok(provisioned.description().clone())
}

/// Writes a fresh sample record and returns its batch id.
async fn save_item(ddb: &DynamoDb, table: &Table) -> Result<String> {
    let batch_id = new_batch_id();
    let record = JobRecord::sample(&batch_id);
    ddb.put_item(table.name(), record.to_item()?).await?;
    println!("Finished put item.");
    Ok(batch_id)
}

async fn load_item(ddb: &DynamoDb, table: &Table, batch_id: &str) -> Result<Item> {
    let key = Item::new().set_string(table.partition_key(), batch_id);
    let item = ddb.get_item(table.name(), key).await?;
    info!("Read {} attributes for {batch_id}", item.len());

    for (name, value) in item.sorted() {
        println!("Key: {name}");
        let text = value
            .as_s()
            .or_else(|_| value.as_n())
            .map(String::as_str)
            .unwrap_or_default();
        println!("Value: {text}");
    }
    Ok(item)
}

async fn load_item_using_document(ddb: &DynamoDb, table: &Table, batch_id: &str) -> Result<()> {
    let document = ddb
        .get_document(table, batch_id, &GetItemConfig::for_job())
        .await?;
    info!("Read document with {} attributes for {batch_id}", document.len());

    for (name, value) in document.iter() {
        println!("Key: {name}");
        println!("Value: {value}");
    }
    Ok(())
}

async fn delete_item_using_document(ddb: &DynamoDb, table: &Table, batch_id: &str) -> Result<()> {
    let document = ddb
        .get_document(table, batch_id, &GetItemConfig::for_job())
        .await?;
    if document.is_empty() {
        info!("Nothing to delete for {batch_id}");
        return Ok(());
    }
    ddb.delete_document(table, &document).await
}
