//! The command line interface for the program.
use crate::market::{MarketStats, OrderBook};
use crate::model::Model;
use crate::settings::Settings;
use crate::units::Tonnes;
use crate::{id::IDCollection, log};
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod demo;
use demo::DemoSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two locations.
    Route {
        /// Path to the model directory.
        model_dir: PathBuf,
        /// The location to start from.
        from: String,
        /// The location to travel to.
        to: String,
    },
    /// Choose the best-fit storage facility for a quantity.
    Allocate {
        /// Path to the model directory.
        model_dir: PathBuf,
        /// The quantity to store, in tonnes.
        quantity: f64,
    },
    /// Quote the cost of carrying a load between two locations.
    Quote {
        /// Path to the model directory.
        model_dir: PathBuf,
        /// The vehicle to quote for.
        vehicle: String,
        /// The location to start from.
        from: String,
        /// The location to travel to.
        to: String,
        /// The load to carry, in tonnes.
        quantity: f64,
    },
    /// Report aggregate marketplace figures.
    Stats {
        /// Path to the model directory.
        model_dir: PathBuf,
    },
    /// Validate a model.
    Validate {
        /// The path to the model directory.
        model_dir: PathBuf,
    },
    /// Manage demo models.
    Demo {
        /// The available subcommands for managing demo models.
        #[command(subcommand)]
        subcommand: DemoSubcommands,
    },
    /// Manage the program settings file.
    Settings {
        /// The available subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Route {
                model_dir,
                from,
                to,
            } => handle_route_command(&model_dir, &from, &to, None),
            Self::Allocate {
                model_dir,
                quantity,
            } => handle_allocate_command(&model_dir, Tonnes(quantity), None),
            Self::Quote {
                model_dir,
                vehicle,
                from,
                to,
                quantity,
            } => handle_quote_command(&model_dir, &vehicle, &from, &to, Tonnes(quantity), None),
            Self::Stats { model_dir } => handle_stats_command(&model_dir, None),
            Self::Validate { model_dir } => handle_validate_command(&model_dir, None),
            Self::Demo { subcommand } => subcommand.execute(),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ agriconnect --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Initialise the program logger, unless a previous command handler already has
fn init_logging(settings: Option<Settings>) -> Result<()> {
    if log::is_logger_initialised() {
        return Ok(());
    }

    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    log::init(Some(&settings.log_level), None).context("Failed to initialise logging.")
}

/// Load the model from the given directory, logging where it came from
fn load_model(model_dir: &Path) -> Result<Model> {
    let model = Model::from_path(model_dir).context("Failed to load model.")?;
    info!("Loaded model from {}", model_dir.display());

    Ok(model)
}

/// Handle the `route` command.
pub fn handle_route_command(
    model_dir: &Path,
    from: &str,
    to: &str,
    settings: Option<Settings>,
) -> Result<()> {
    init_logging(settings)?;
    let model = load_model(model_dir)?;

    let Some(route) = model.shortest_route(&from.into(), &to.into()) else {
        warn!("No route found from {from} to {to}");
        println!("No route found from {from} to {to}");
        return Ok(());
    };

    println!("Route: {route}");
    println!("Distance: {} km", route.distance.value());
    println!(
        "Estimated time: {}",
        route.estimated_time(model.parameters.average_speed)
    );

    Ok(())
}

/// Handle the `allocate` command.
pub fn handle_allocate_command(
    model_dir: &Path,
    quantity: Tonnes,
    settings: Option<Settings>,
) -> Result<()> {
    init_logging(settings)?;
    let model = load_model(model_dir)?;

    let Some(allocation) = model.best_storage(quantity) else {
        warn!("No facility can store {} t", quantity.value());
        println!("No facility can store {} t", quantity.value());
        return Ok(());
    };

    let facility = &model.facilities[&allocation.facility_id];
    println!("Best facility: {} ({})", facility.id, facility.description);
    println!("Location: {}", facility.location);
    println!("Available capacity: {} t", facility.available_capacity.value());
    println!("Temperature: {} degC", facility.temperature.value());
    println!("Score: {}", allocation.score.value());

    Ok(())
}

/// Handle the `quote` command.
pub fn handle_quote_command(
    model_dir: &Path,
    vehicle: &str,
    from: &str,
    to: &str,
    quantity: Tonnes,
    settings: Option<Settings>,
) -> Result<()> {
    init_logging(settings)?;
    let model = load_model(model_dir)?;

    let vehicle_ids: HashSet<_> = model.vehicles.keys().cloned().collect();
    let vehicle_id = vehicle_ids.get_id_by_str(vehicle)?;
    let vehicle = &model.vehicles[&vehicle_id];

    let Some(route) = model.shortest_route(&from.into(), &to.into()) else {
        warn!("No route found from {from} to {to}");
        println!("No route found from {from} to {to}");
        return Ok(());
    };

    let quote = vehicle.quote(&route, quantity, model.parameters.average_speed)?;
    println!("Route: {route}");
    println!("Cost: {}", quote.cost.value());
    println!("Estimated time: {}", quote.time);

    Ok(())
}

/// Handle the `stats` command.
pub fn handle_stats_command(model_dir: &Path, settings: Option<Settings>) -> Result<()> {
    init_logging(settings)?;
    let model = load_model(model_dir)?;

    // No orders exist at model load time; the book is included so pending counts are reported
    // the same way for all callers
    let orders = OrderBook::new();
    let stats = MarketStats::gather(&model.crops, &model.facilities, &model.vehicles, &orders);
    println!("Crop listings: {}", stats.num_listings);
    println!("Total listed: {} t", stats.total_listed.value());
    println!("Storage facilities: {}", stats.num_facilities);
    println!(
        "Storage capacity: {} t ({} t available)",
        stats.total_storage_capacity.value(),
        stats.available_storage_capacity.value()
    );
    println!("Vehicles: {}", stats.num_vehicles);
    println!("Pending orders: {}", stats.pending_orders);

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(model_dir: &Path, settings: Option<Settings>) -> Result<()> {
    init_logging(settings)?;

    // Load/validate the model
    load_model(model_dir).context("Failed to validate model.")?;
    info!("Model validation successful!");

    Ok(())
}
