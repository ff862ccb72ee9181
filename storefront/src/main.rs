mod web;

use crate::web::WebState;
use anyhow::Result;
use storefront_db::StorefrontDb;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("db starting");
    let db = StorefrontDb::connect().await?;
    db.insert_sample_products().await?;
    web::start_web(WebState { db }).await?;
    Ok(())
}
