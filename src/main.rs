use clap::Parser;
use storefront_cart::utils::{logger, validation::Validate};
use storefront_cart::{CatalogLoader, CliConfig, HttpCatalogSource, ShopSession};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting storefront-cart");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let source = HttpCatalogSource::from_config(&settings);
    tracing::info!("Loading catalog from {}", source.endpoint());
    let catalog = CatalogLoader::spawn(source);

    let mut session = ShopSession::new(settings, catalog);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    println!("{}", storefront_cart::app::session::HELP_TEXT);
    session.run(stdin, &mut stdout).await?;

    tracing::info!(
        items = session.cart().total_item_count(),
        "Leaving the shop"
    );
    Ok(())
}
