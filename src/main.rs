use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_rental::models::Car;
use fleet_rental::store::JsonFileStore;
use fleet_rental::{api, seed, service::RentalService};

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Car rental quoting and booking service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the rental HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Directory holding the JSON store files (defaults to the per-user
        /// data directory)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Generate random fixture data into the store files
    Seed {
        /// Number of cars and customers to generate
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Directory to write the JSON store files into
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "fleet_rental=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_car_store(data_dir: Option<PathBuf>) -> anyhow::Result<JsonFileStore<Car>> {
    match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Ok(JsonFileStore::new(dir.join("cars.json")))
        }
        None => JsonFileStore::open_default("cars"),
    }
}

async fn serve(port: u16, data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let store = open_car_store(data_dir)?;
    let service = RentalService::new(Arc::new(store));
    let app = api::create_router(service);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Fleet rental server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, data_dir }) => {
            tracing::info!("Starting fleet rental server on port {}", port);
            serve(port, data_dir).await?;
        }
        Some(Commands::Seed { count, data_dir }) => {
            let dir = match data_dir {
                Some(dir) => dir,
                None => {
                    let dirs = directories::ProjectDirs::from("", "", "fleet-rental")
                        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
                    dirs.data_dir().to_path_buf()
                }
            };
            seed::run(&dir, count)?;
            tracing::info!("Seeded {} cars and customers into {}", count, dir.display());
        }
        None => {
            // Default: start server
            tracing::info!("Starting fleet rental server on port 3000");
            serve(3000, None).await?;
        }
    }

    Ok(())
}
