use anyhow::Context;
use mongodb::{bson::doc, Client, Database};
use tracing::info;

use crate::config::MongoConfig;

/// Connects to MongoDB and pings the server before handing the database out.
pub async fn connect(config: &MongoConfig) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(&config.uri)
        .await
        .context("connect to mongodb")?;
    let db = client.database(&config.database);
    db.run_command(doc! { "ping": 1 }, None)
        .await
        .context("ping mongodb")?;
    info!(database = %config.database, "mongo connection established");
    Ok(db)
}
