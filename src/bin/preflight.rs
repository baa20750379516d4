use bic_directory::infra::database;
use bic_directory::storage::postgres::BANKS_TABLE;
use bic_directory::{BankStore, Config, CountryRegistry, PostgresBankStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-schema]\n\
         \n\
         Reads env vars (or .env):\n\
           DATABASE_URL, or DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_schema = args.iter().any(|a| a == "--init-schema");

    let config = Config::from_env()?;

    println!("> Preflight:");
    match config.database_url.as_deref() {
        Some(_) => println!("  DATABASE_URL=<set>"),
        None => println!(
            "  DB={}@{}:{}/{}",
            config.db_user, config.db_host, config.db_port, config.db_name
        ),
    }
    println!("  PORT={}", config.port);
    println!("  Country registry: {} codes", CountryRegistry::iso3166().len());

    let pool = database::connect(&config).await?;
    let store = PostgresBankStore::new(pool.clone());
    store.ping().await?;
    println!("  Database: reachable");

    if init_schema {
        database::init_schema(&pool).await?;
        println!("  Schema: initialized");
    }

    let table_exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
        .bind(BANKS_TABLE)
        .fetch_one(&pool)
        .await?;
    if !table_exists {
        println!("  Table {}: MISSING (rerun with --init-schema or start api_server)", BANKS_TABLE);
        std::process::exit(1);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banks_data")
        .fetch_one(&pool)
        .await?;
    println!("  Table {}: {} rows", BANKS_TABLE, rows);
    println!("> Preflight OK");
    Ok(())
}
