//! Garden Server
//!
//! Axum server exposing the garden catalog and ecosystem view models to the
//! front end, plus CLI subcommands that run the same resolutions from a shell.

mod api;

use anyhow::{bail, Context};
use api::garden::{ecosystem_response, resolve_ecosystem};
use api::{AppState, SharedState};
use clap::{Parser, Subcommand};
use garden_core::ecosystem::{build_ecosystem_url, slugify, EcosystemUrlParams};
use garden_core::{Garden, GardenConfig};
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Clone)]
#[command(author, version, about = "Garden - seed catalog and ecosystem resolver")]
struct Args {
    /// Catalog endpoint (overrides GARDEN_API_URL)
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Skip the network and serve the bundled snapshot
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the Garden API server (default)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Print the full seed catalog
    Catalog,
    /// Print one seed by id
    Seed {
        id: String,
    },
    /// Resolve a beneficiary and print its ecosystem project
    Ecosystem {
        /// Beneficiary slug
        slug: String,
        /// Restrict the lookup to this seed
        #[arg(long)]
        seed_id: Option<String>,
        /// Seed slug for the seed-scoped URL (requires --seed-id; derived
        /// from the seed name when omitted)
        #[arg(long)]
        seed_slug: Option<String>,
    },
    /// Compose an ecosystem URL
    Url {
        /// Beneficiary slug
        beneficiary_slug: String,
        #[arg(long)]
        seed_id: Option<String>,
        #[arg(long)]
        seed_slug: Option<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_garden(args: &Args) -> anyhow::Result<Garden> {
    if args.offline {
        return Ok(Garden::offline());
    }

    let mut config = GardenConfig::from_env();
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    Garden::from_config(&config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

// === Server Entry ===

pub async fn run_server(garden: Garden, host: IpAddr, port: u16) -> anyhow::Result<()> {
    tracing::info!(source = %garden.describe_source(), "Catalog source configured");

    let state: SharedState = Arc::new(AppState { garden });
    let app = api::router(state);

    let addr = SocketAddr::new(host, port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, "Garden server listening");
    tracing::info!(
        "Routes: /api/v1/garden, /api/v1/seeds/:id, /api/v1/ecosystem/:slug, /api/v1/urls/ecosystem"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let garden = build_garden(&args)?;

    match args.command {
        None => run_server(garden, IpAddr::from([127, 0, 0, 1]), 8080).await,
        Some(CliCommand::Serve { host, port }) => run_server(garden, host, port).await,
        Some(CliCommand::Catalog) => print_json(&garden.fetch_garden_data().await),
        Some(CliCommand::Seed { id }) => match garden.fetch_seed_by_id(&id).await {
            Some(seed) => print_json(&seed),
            None => bail!("No seed with id '{}'", id),
        },
        Some(CliCommand::Ecosystem {
            slug,
            seed_id,
            seed_slug,
        }) => {
            let view = match (seed_id.as_deref(), seed_slug.as_deref()) {
                (Some(id), Some(seed_slug)) => {
                    resolve_ecosystem(&garden, Some((id, seed_slug)), &slug).await
                }
                (Some(id), None) => garden
                    .find_beneficiary_in_seed(id, &slug)
                    .await
                    .map(|found| {
                        let seed_slug = slugify(&found.seed.name);
                        ecosystem_response(&found, Some(&seed_slug))
                    }),
                (None, Some(_)) => bail!("--seed-slug needs --seed-id"),
                (None, None) => resolve_ecosystem(&garden, None, &slug).await,
            };
            match view {
                Some(view) => print_json(&view),
                None => bail!("No beneficiary with slug '{}'", slug),
            }
        }
        Some(CliCommand::Url {
            beneficiary_slug,
            seed_id,
            seed_slug,
        }) => {
            let params = EcosystemUrlParams {
                seed_id,
                seed_slug,
                beneficiary_slug,
            };
            println!("{}", build_ecosystem_url(&params));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    run(Args::parse()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_serve() {
        let args = Args::try_parse_from(["garden"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.offline);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["garden", "seed", "2", "--offline"]).unwrap();
        assert!(args.offline);
        assert!(matches!(args.command, Some(CliCommand::Seed { ref id }) if id == "2"));
    }

    #[test]
    fn test_endpoint_override() {
        let args =
            Args::try_parse_from(["garden", "--endpoint", "http://127.0.0.1:9/x", "catalog"])
                .unwrap();
        let garden = build_garden(&args).unwrap();
        assert!(garden.describe_source().contains("http://127.0.0.1:9/x"));
    }

    #[tokio::test]
    async fn test_offline_seed_command() {
        let args = Args::try_parse_from(["garden", "--offline", "seed", "1"]).unwrap();
        assert!(run(args).await.is_ok());

        let missing = Args::try_parse_from(["garden", "--offline", "seed", "404"]).unwrap();
        assert!(run(missing).await.is_err());
    }

    #[tokio::test]
    async fn test_ecosystem_command_rejects_slug_without_id() {
        let args = Args::try_parse_from([
            "garden",
            "--offline",
            "ecosystem",
            "grg",
            "--seed-slug",
            "equatorial-roots",
        ])
        .unwrap();
        assert!(run(args).await.is_err());
    }

    #[tokio::test]
    async fn test_ecosystem_command_derives_seed_slug() {
        let args = Args::try_parse_from([
            "garden", "--offline", "ecosystem", "grg", "--seed-id", "2",
        ])
        .unwrap();
        assert!(run(args).await.is_ok());

        let wrong_seed = Args::try_parse_from([
            "garden", "--offline", "ecosystem", "grg", "--seed-id", "1",
        ])
        .unwrap();
        assert!(run(wrong_seed).await.is_err());
    }
}
