use product_catalog_api::infra::{config::AppConfig, logging};
use product_catalog_api::{CatalogStore, DatabaseService};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-schema]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           BIND_ADDR, CORS_ALLOWED_ORIGINS, DB_MAX_CONNECTIONS, DB_ACQUIRE_TIMEOUT_SECS\n\
         \n\
         --init-schema  create the `products` table if it is missing\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_schema = args.iter().any(|a| a == "--init-schema");

    // Force-read config (nice error messages if missing)
    let config = AppConfig::from_env()?;
    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  CORS_ALLOWED_ORIGINS={:?}", config.cors_allowed_origins);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);

    // Basic DB connectivity
    let db = DatabaseService::connect(&config).await?;
    db.ping().await?;
    println!("  Database: reachable");

    if !db.table_exists("products").await? {
        if init_schema {
            db.ensure_products_table().await?;
            println!("  products: created");
        } else {
            anyhow::bail!("table `products` is missing (rerun with --init-schema to create it)");
        }
    } else {
        println!("  products: present");
    }

    // The user table belongs to another system; only report on it.
    if db.table_exists("user").await? {
        println!("  user: present");
    } else {
        println!("  user: MISSING (POST /logins/ will fail until it exists)");
    }

    println!("> Preflight OK");
    Ok(())
}
