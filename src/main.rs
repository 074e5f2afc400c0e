mod analysis;
mod api;
mod config;
mod display;
mod error;
mod rate_limit;
mod search;
mod server;
#[cfg(test)]
mod testing;

use anyhow::Context;
use api::{RiotApiClient, StatsProvider};
use clap::Parser;
use config::Config;
use display::console::{display_banner, display_error, display_info, display_success};
use display::AssetUrls;
use search::SearchService;
use server::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Summoner Search")]
#[command(about = "Look up a summoner's profile and recent matches in the browser", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Region (default: RIOT_REGION or na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Match lookups run in parallel per search (default: FETCH_WORKERS or 4)
    #[arg(short, long)]
    workers: Option<usize>,
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: Args) -> anyhow::Result<()> {
    display_info("Loading configuration...");
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(workers) = args.workers {
        config.fetch_workers = workers.max(1);
    }
    display_success(&format!("Stats API: {}", config.api_base()));

    let provider: Arc<dyn StatsProvider> = Arc::new(RiotApiClient::new(&config));
    let state = AppState {
        search: Arc::new(SearchService::new(
            provider,
            config.match_count,
            config.fetch_workers,
        )),
        assets: Arc::new(AssetUrls::for_version(&config.ddragon_version)),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&args.bind)
            .await
            .with_context(|| format!("failed to bind {}", args.bind))?;

        display_banner(&args.bind, &config.region, config.match_count);
        server::serve(listener, state).await.context("server error")?;

        display_success("Server stopped");
        Ok::<(), anyhow::Error>(())
    })
}
