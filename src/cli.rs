use crate::render;
use clap::{Args, CommandFactory, Parser, Subcommand};
use gourmand::catalog::{CsvDataSource, CsvRestaurantRepository, RestaurantRepository};
use gourmand::config::{AppConfig, OutputFormat};
use gourmand::domain::{Cuisine, Distance, Price, Rating};
use gourmand::error::AppError;
use gourmand::search::{SearchCriteria, SearchService};
use gourmand::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "gourmand",
    about = "Find the perfect restaurant for your next meal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Searches for local restaurants based on given criteria
    Search(SearchArgs),
    /// Lists the cuisines available in the restaurant catalog
    Cuisines(CatalogArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Directory containing restaurants.csv and cuisines.csv
    #[arg(long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Output format: table or json
    #[arg(long, value_name = "FORMAT", value_parser = parse_format)]
    format: Option<OutputFormat>,
    /// Prints additional information
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Restaurant name (partial match is supported)
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,
    /// Minimum customer rating (1-5 stars)
    #[arg(short = 'r', long = "rating", value_name = "RATING", value_parser = parse_rating)]
    min_rating: Option<Rating>,
    /// Maximum distance in miles (1-10)
    #[arg(short = 'd', long = "distance", value_name = "DISTANCE", value_parser = parse_distance)]
    max_distance: Option<Distance>,
    /// Maximum price per person in dollars (10-50)
    #[arg(short = 'p', long = "price", value_name = "PRICE", value_parser = parse_price)]
    max_price: Option<Price>,
    /// Cuisine type (e.g., Chinese, Italian)
    #[arg(short, long, value_name = "CUISINE", value_parser = parse_cuisine)]
    cuisine: Option<Cuisine>,
    #[command(flatten)]
    catalog: CatalogArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let mut command = Cli::command();
        if let Some(search) = command.find_subcommand_mut("search") {
            search.print_help()?;
        }
        return Ok(());
    };

    let result = match command {
        Command::Search(args) => run_search(args),
        Command::Cuisines(args) => run_cuisines(args),
    };

    if let Err(err) = &result {
        error!(error = %err.report(), "command failed");
    }
    result
}

fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        name,
        min_rating,
        max_distance,
        max_price,
        cuisine,
        catalog,
    } = args;

    let (config, format) = prepare(&catalog)?;
    let criteria = SearchCriteria::new(name, min_rating, max_distance, max_price, cuisine);
    info!(%criteria, "executing search");

    let repository = load_repository(catalog.data_dir.or(config.data.directory))?;
    let service = SearchService::new(Arc::new(repository));
    let results = service.search(&criteria);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if format == OutputFormat::Table {
        writeln!(out, "{}", render::BANNER)?;
        render::render_criteria(&mut out, &criteria)?;
    }

    match format {
        OutputFormat::Table => render::render_results(&mut out, &results)?,
        OutputFormat::Json => render::render_results_json(&mut out, &results)?,
    }

    out.flush()?;
    Ok(())
}

fn run_cuisines(args: CatalogArgs) -> Result<(), AppError> {
    let (config, format) = prepare(&args)?;
    let repository = load_repository(args.data_dir.or(config.data.directory))?;
    let cuisines = repository.find_all_cuisines();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", render::BANNER)?;
            render::render_cuisines(&mut out, cuisines)?
        }
        OutputFormat::Json => render::render_cuisines_json(&mut out, cuisines)?,
    }

    out.flush()?;
    Ok(())
}

/// Loads configuration, applies flag overrides, and starts telemetry.
fn prepare(args: &CatalogArgs) -> Result<(AppConfig, OutputFormat), AppError> {
    let mut config = AppConfig::load()?;
    if args.verbose {
        config.telemetry.log_level = "info".to_string();
    }
    telemetry::init(&config.telemetry)?;

    let format = args.format.unwrap_or(config.output);
    Ok((config, format))
}

fn load_repository(data_dir: Option<PathBuf>) -> Result<CsvRestaurantRepository, AppError> {
    let source = match data_dir {
        Some(dir) => {
            info!(directory = %dir.display(), "loading catalog from directory");
            CsvDataSource::from_directory(dir)?
        }
        None => {
            info!("loading packaged catalog");
            CsvDataSource::bundled()
        }
    };

    Ok(CsvRestaurantRepository::load(&source)?)
}

pub(crate) fn parse_rating(raw: &str) -> Result<Rating, String> {
    let value = raw
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("'{raw}' is not a whole number ({err})"))?;
    Rating::new(value).map_err(|err| err.to_string())
}

pub(crate) fn parse_distance(raw: &str) -> Result<Distance, String> {
    let miles = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("'{raw}' is not a number ({err})"))?;
    Distance::new(miles).map_err(|err| err.to_string())
}

pub(crate) fn parse_price(raw: &str) -> Result<Price, String> {
    let amount = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("'{raw}' is not a number ({err})"))?;
    Price::new(amount).map_err(|err| err.to_string())
}

pub(crate) fn parse_cuisine(raw: &str) -> Result<Cuisine, String> {
    Cuisine::new(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse::<OutputFormat>().map_err(|err| err.to_string())
}
