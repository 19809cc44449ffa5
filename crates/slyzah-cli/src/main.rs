mod catalog;
mod lookup;
mod quote;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use slyzah_core::Urgency;
use slyzah_search::{RawGeoAddress, ResolvedLocation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "slyzah-cli")]
#[command(about = "Slyzah vendor search command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List provinces and their canonical regions
    Regions {
        /// Only this province (case and punctuation are ignored)
        #[arg(long)]
        province: Option<String>,
    },
    /// Resolve a geocoded or typed address to a province and region
    Resolve(ResolveArgs),
    /// Rank vendors for a service category near a location
    Search {
        /// Service category, e.g. "Plumber"
        #[arg(long)]
        category: String,
        #[command(flatten)]
        location: LocationArgs,
        /// Skip this many ranked results
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Maximum number of results to print
        #[arg(long, env = "SLYZAH_RESULTS_PAGE_SIZE", default_value_t = 8)]
        limit: usize,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show the featured vendor carousel for a location
    Featured {
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Build a quote request for up to four selected vendors
    Quote {
        #[arg(long)]
        category: String,
        /// Description of the job
        #[arg(long)]
        issue: String,
        /// Selected vendor id; repeat for up to four vendors, extras are dropped
        #[arg(long = "vendor", required = true)]
        vendors: Vec<String>,
        /// urgent, standard, or comparing
        #[arg(long, default_value = "standard")]
        urgency: Urgency,
        #[command(flatten)]
        location: LocationArgs,
        #[arg(long, default_value = "")]
        town: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "cli")]
        customer: String,
    },
}

/// An already-resolved location.
#[derive(Debug, Args)]
struct LocationArgs {
    #[arg(long)]
    province: Option<String>,
    #[arg(long)]
    region: Option<String>,
}

impl LocationArgs {
    fn to_resolved(&self) -> ResolvedLocation {
        ResolvedLocation::new(
            self.province.clone().unwrap_or_default(),
            self.region.clone().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Vendor catalog file (YAML or JSON)
    #[arg(long = "catalog", env = "SLYZAH_CATALOG_PATH")]
    path: PathBuf,
    /// Maximum records read from the catalog per search
    #[arg(long, env = "SLYZAH_SNAPSHOT_LIMIT", default_value_t = 100)]
    snapshot_limit: usize,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Province as reported by the geocoder or typed by the user
    #[arg(long)]
    province: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    subregion: Option<String>,
    #[arg(long)]
    district: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    place_name: Option<String>,
    #[arg(long)]
    city: Option<String>,
}

impl From<ResolveArgs> for RawGeoAddress {
    fn from(args: ResolveArgs) -> Self {
        RawGeoAddress {
            region: args.province,
            postal_code: args.postal_code,
            subregion: args.subregion,
            district: args.district,
            street: args.street,
            place_name: args.place_name,
            city: args.city,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let fallback_level = std::env::var("SLYZAH_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Some(Commands::Regions { province }) => lookup::run_regions(province.as_deref())?,
        Some(Commands::Resolve(args)) => lookup::run_resolve(&args.into()),
        Some(Commands::Search {
            category,
            location,
            offset,
            limit,
            catalog,
        }) => {
            catalog::run_search(&category, &location.to_resolved(), offset, limit, &catalog)
                .await?
        }
        Some(Commands::Featured { location, catalog }) => {
            catalog::run_featured(&location.to_resolved(), &catalog).await?
        }
        Some(Commands::Quote {
            category,
            issue,
            vendors,
            urgency,
            location,
            town,
            address,
            customer,
        }) => quote::run_quote(slyzah_core::LeadDraft {
            customer_id: customer,
            category,
            province: location.province.unwrap_or_default(),
            region: location.region.unwrap_or_default(),
            town,
            address,
            issue_description: issue,
            urgency,
            vendor_ids: quote::select_vendors(&vendors).into_vendor_ids(),
        })?,
        None => {
            println!("slyzah-cli: run with --help to list commands");
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
