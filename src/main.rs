use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;

use product_choice::{
    Catalog, Product, RecommendError, RecommendationResult, Recommender, RecommenderConfig,
    Session,
};

#[derive(Parser)]
#[command(author, version, about = "Recommend products for a shopping preference")]
struct Cli {
    /// What you are looking for, e.g. "a phone under $500 with a great camera"
    preference: Vec<String>,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the catalog overview instead of recommending
    #[arg(long)]
    list: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Model to request from the completion endpoint
    #[arg(long)]
    model: Option<String>,

    /// Never call the completion endpoint
    #[arg(long)]
    local: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RecommendError::EmptyPreference) => {
            eprintln!("{}", RecommendError::EmptyPreference);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Something went wrong. Please try again.");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RecommendError> {
    let mut config = RecommenderConfig::load()?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if cli.local {
        config.api_key = None;
    }

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path).await?,
        None => Catalog::builtin()?,
    };

    if cli.list {
        print_overview(&catalog, cli.json)?;
        return Ok(());
    }

    let recommender = Recommender::from_config(&config)?;
    let session = Session::new(recommender, catalog);
    let result = session.submit(&cli.preference.join(" ")).await?;
    debug!("Source: {}", result.source);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_overview(catalog: &Catalog, json: bool) -> Result<(), RecommendError> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.products())?);
        return Ok(());
    }
    println!(
        "Catalog overview - average price ${}",
        catalog.average_price()
    );
    for product in catalog.products() {
        print_product(product);
    }
    Ok(())
}

fn print_result(result: &RecommendationResult) {
    println!("Recommended for you");
    for product in &result.items {
        print_product(product);
    }
}

fn print_product(product: &Product) {
    println!();
    println!("  [{}] {}", product.category, product.name);
    println!("  ${}", product.price);
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
}
