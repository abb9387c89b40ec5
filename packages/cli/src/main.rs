#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for spot search query interpretation.
//!
//! `parse`, `place`, `state` and `regions` run entirely offline. `search`
//! and `locate` call the configured Nominatim service (see
//! `SPOT_FINDER_GEOCODER_*` environment variables).

use clap::{Parser, Subcommand};
use spot_finder_geocoder::nominatim::NominatimClient;
use spot_finder_geocoder::{region_for_coordinates, resolve_search};
use spot_finder_search::{
    QueryInterpreter, TermPolicy, extract_place, resolve_from_administrative_name,
};
use spot_finder_search_models::{Classification, Region};

#[derive(Parser)]
#[command(name = "spot_finder", about = "Spot search query interpretation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a search query and print the result as JSON
    Parse {
        /// Query words (joined with spaces). Omit for an empty query.
        query: Vec<String>,
        /// Keep residual search terms even when a kind or region is found
        #[arg(long)]
        retain_terms: bool,
        /// Do not look for a "locality, state" place reference
        #[arg(long)]
        no_place: bool,
    },
    /// Print the "locality, state" place reference found in a query
    Place {
        /// Query words (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Map a state name or postal abbreviation to its region
    State {
        /// State name or abbreviation (e.g., "Oregon", "or")
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// List regions with their map views, and spot kinds
    Regions,
    /// Interpret a query and geocode its place reference, if any
    Search {
        /// Query words (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Find the region containing a coordinate
    Locate {
        /// Latitude (WGS84)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude (WGS84)
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            query,
            retain_terms,
            no_place,
        } => {
            let mut interpreter = QueryInterpreter::new();
            if retain_terms {
                interpreter = interpreter.with_term_policy(TermPolicy::Retain);
            }
            if no_place {
                interpreter = interpreter.without_place_extraction();
            }
            let parsed = interpreter.parse(&query.join(" "));
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Place { query } => match extract_place(&query.join(" ")) {
            Some(reference) => println!("{reference}"),
            None => println!("(no place reference)"),
        },
        Commands::State { name } => match resolve_from_administrative_name(&name.join(" ")) {
            Some(region) => println!("{region}"),
            None => println!("(not a US state)"),
        },
        Commands::Regions => {
            println!("{:<20} {:>9} {:>10} {:>5}", "REGION", "LAT", "LNG", "ZOOM");
            println!("{}", "-".repeat(47));
            for region in Region::all() {
                let view = region.map_view();
                println!(
                    "{:<20} {:>9.2} {:>10.2} {:>5}",
                    region.name(),
                    view.latitude,
                    view.longitude,
                    view.zoom
                );
            }
            println!();
            println!("{:<12} {:<12} COLOR", "KIND", "LABEL");
            println!("{}", "-".repeat(32));
            for kind in Classification::all() {
                println!("{:<12} {:<12} {}", kind, kind.label(), kind.color());
            }
        }
        Commands::Search { query } => {
            let geocoder = NominatimClient::from_env()?;
            log::info!("Using geocoder {}", geocoder.service().name);
            let resolution = resolve_search(&geocoder, &query.join(" ")).await;
            println!("{}", serde_json::to_string_pretty(&resolution)?);
            if let Some(view) = resolution.map_view() {
                println!(
                    "map view: ({:.4}, {:.4}) zoom {}",
                    view.latitude, view.longitude, view.zoom
                );
            }
        }
        Commands::Locate { lat, lng } => {
            let geocoder = NominatimClient::from_env()?;
            match region_for_coordinates(&geocoder, lat, lng).await {
                Some(region) => println!("{region}"),
                None => println!("(no region)"),
            }
        }
    }

    Ok(())
}
