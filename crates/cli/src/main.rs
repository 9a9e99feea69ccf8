use anyhow::Context;

use shopfront_auth::JsonFileUserStore;
use shopfront_cli::{search_and_buy_product, CliConfig};
use shopfront_core::StdConsole;

fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = CliConfig::from_env();
    tracing::info!(
        products = %config.products_csv.display(),
        users = %config.users_json.display(),
        "starting shop session"
    );

    let store = JsonFileUserStore::new(&config.users_json);
    let mut console = StdConsole::new();

    search_and_buy_product(&mut console, &store, &config.products_csv)
        .with_context(|| format!("shop session over {} failed", config.products_csv.display()))?;
    Ok(())
}
