use dotenvy::dotenv;
use store_catalog::{
    config::{catalog, database},
    core::{category, product, seed, urls::UrlResolver},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the catalog configuration, if there is one
    let config = catalog::load_default_config().inspect_err(|e| {
        error!("Failed to load {}: {}", catalog::DEFAULT_CONFIG_PATH, e);
    })?;

    // 4. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Seed configured products and categories
    seed::seed_catalog(&db, &config)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 6. Summarize what the catalog holds
    let urls = UrlResolver::with_routes(&config.routes);
    let products = product::get_all_products(&db).await?;
    let in_stock = product::get_in_stock_products(&db).await?;
    let categories = category::get_all_categories(&db).await?;

    info!(
        products = products.len(),
        in_stock = in_stock.len(),
        categories = categories.len(),
        "Catalog ready"
    );
    for item in &products {
        let url = item.get_absolute_url(&urls)?;
        info!(
            sku = %item.sku,
            price = %item.price,
            vat = %item.vat(),
            stock = item.stock_count,
            url = %url,
            "{}",
            item
        );
    }

    Ok(())
}
