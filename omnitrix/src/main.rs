use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use omnitrix::cache::FileStore;
use omnitrix::config::Config;
use omnitrix::gateway::ApiClient;
use omnitrix::models::{
    ClusterAlgorithm, ClusterParams, Feature, ProjectionMethod, ProjectionParams,
    SimilarityMetric,
};
use omnitrix::Explorer;

#[derive(Parser)]
#[command(name = "omnitrix")]
#[command(about = "Query the Omnitrix alien database, with offline fallback")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the alien API is reachable
    Status,
    /// List every alien
    Aliens,
    /// Show one alien
    Alien { id: String },
    /// Show the extended record with super powers (backend only)
    Detail { id: String },
    /// Find the most and least similar aliens
    Similar {
        id: String,
        #[arg(long, default_value = "cosine")]
        metric: SimilarityMetric,
    },
    /// Group aliens into clusters
    Cluster {
        #[arg(long, default_value = "kmeans")]
        algorithm: ClusterAlgorithm,
        #[arg(long, default_value_t = 3)]
        k: u32,
        #[arg(long, value_delimiter = ',', default_value = "strength,speed,intelligence,durability,power,combat")]
        features: Vec<Feature>,
    },
    /// Project aliens onto two dimensions
    Project {
        #[arg(long, default_value = "pca")]
        method: ProjectionMethod,
        #[arg(long, value_delimiter = ',', default_value = "strength,speed,intelligence,durability,power,combat")]
        features: Vec<Feature>,
    },
    /// Show the cached cluster and projection results
    Cached,
}

#[derive(Serialize)]
struct CachedResults {
    clusters: Option<Vec<omnitrix::models::ClusterResult>>,
    projection: Option<Vec<omnitrix::models::ProjectionPoint>>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omnitrix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let client = ApiClient::new(&config.gateway)?;
    match client.base_url() {
        Some(base_url) => tracing::info!("Using alien API at {}", base_url),
        None => tracing::warn!(
            "OMNITRIX_API_BASE is not set - answering from the bundled sample set"
        ),
    }

    let store = FileStore::new(&config.cache.dir);
    let explorer = Explorer::new(client, store);

    match args.command {
        Command::Status => println!("{}", explorer.api_status().await),
        Command::Aliens => print_json(&explorer.fetch_aliens().await)?,
        Command::Alien { id } => print_json(&explorer.fetch_alien(&id).await?)?,
        Command::Detail { id } => print_json(&explorer.alien_detail(&id).await?)?,
        Command::Similar { id, metric } => {
            print_json(&explorer.fetch_similarity(&id, metric).await)?
        }
        Command::Cluster {
            algorithm,
            k,
            features,
        } => {
            let params = ClusterParams {
                algorithm,
                k,
                features,
            };
            print_json(&explorer.run_cluster(&params).await?)?
        }
        Command::Project { method, features } => {
            let params = ProjectionParams { method, features };
            print_json(&explorer.run_projection(&params).await?)?
        }
        Command::Cached => print_json(&CachedResults {
            clusters: explorer.cached_clusters(),
            projection: explorer.cached_projection(),
        })?,
    }

    Ok(())
}
