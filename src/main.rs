mod config;
mod dynamodb;
mod logging;
mod sample;


use anyhow::Result;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::dynamodb::{DynamoDb, Table};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;
    logging::init_logging(config.log_level)?;

    let ddb = DynamoDb::connect(&config).await;
    let table = Table::job(config.table_name.as_str());

    if let Err(e) = sample::run(&ddb, &table).await {
        error!("Sample run failed: {:#}", e);
        return Err(e);
    }

    info!("Sample run completed for table '{}'", table.name());
    Ok(())
}
