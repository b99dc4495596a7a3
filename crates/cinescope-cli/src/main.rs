//! cinescope - movie discovery landing page and TMDB feed endpoint.

/// Application configuration (TOML).
mod config;
/// Tracing subscriber setup.
mod telemetry;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::instrument;
use url::Url;

use crate::config::{AppConfig, resolve_config_path, resolve_log_path};
use cinescope_api::feed::{FeedApi, FeedClient};
use cinescope_api::tmdb::TmdbClient;
use cinescope_api::{Category, MediaType, Movie};
use cinescope_proxy::ProxyState;
use cinescope_tui::{PageOptions, run_landing_page};

/// User-Agent sent to the feed endpoint and TMDB.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Open the movie discovery landing page.
    Browse(BrowseArgs),
    /// Serve the movie feed endpoint backed by TMDB.
    Serve(ServeArgs),
    /// Query the movie feed endpoint.
    Feed(FeedCommand),
}

/// Arguments for the `browse` subcommand.
#[derive(clap::Args)]
struct BrowseArgs {
    /// Feed endpoint URL (default: `feed.endpoint` from config).
    #[arg(long)]
    endpoint: Option<String>,
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
struct ServeArgs {
    /// Listen address (default: `server.bind` from config).
    #[arg(long)]
    bind: Option<String>,
}

/// Arguments for the `feed` subcommand.
#[derive(clap::Args)]
struct FeedCommand {
    /// Feed endpoint URL (default: `feed.endpoint` from config).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Feed subcommand to run.
    #[command(subcommand)]
    command: FeedSubcommands,
}

/// Available feed subcommands.
#[derive(Subcommand)]
enum FeedSubcommands {
    /// Weekly trending movies and series.
    Trending,
    /// Highest rated movies.
    TopRated,
    /// Popular movies.
    Movies,
    /// Popular TV series.
    Series,
    /// Search movies, series and people.
    Search(SearchArgs),
}

/// Arguments for the `feed search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "blade runner").
    #[arg(long, required = true)]
    query: String,
}

/// Builds the feed client for an endpoint URL.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the client fails to build.
fn build_feed_client(endpoint: &str) -> Result<FeedClient> {
    let url = Url::parse(endpoint).with_context(|| format!("invalid feed endpoint: {endpoint}"))?;
    FeedClient::builder()
        .endpoint(url)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build feed client")
}

/// Builds the TMDB client when `TMDB_API_TOKEN` is set.
///
/// # Errors
///
/// Returns an error if the token is set but the client fails to build.
fn build_tmdb_client() -> Result<Option<TmdbClient>> {
    let Some(api_token) = std::env::var("TMDB_API_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
    else {
        return Ok(None);
    };

    TmdbClient::builder()
        .api_token(api_token)
        .user_agent(USER_AGENT)
        .build()
        .map(Some)
        .context("failed to build TMDB client")
}

/// Runs the `browse` subcommand.
///
/// # Errors
///
/// Returns an error if the config is invalid or the terminal UI fails.
#[instrument(skip_all)]
async fn run_browse(args: &BrowseArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = AppConfig::load(&resolve_config_path(dir)?)?;
    let endpoint = args.endpoint.as_deref().unwrap_or(&config.feed.endpoint);
    let client = build_feed_client(endpoint)?;
    tracing::info!(endpoint = %client.endpoint(), "opening landing page");

    let options = PageOptions {
        search_debounce: config.feed.search_debounce(),
        probe_artwork: config.feed.probe_artwork,
    };
    run_landing_page(Arc::new(client), options).await
}

/// Runs the `serve` subcommand.
///
/// Starts without a TMDB token too; feed requests then answer with an
/// error body.
///
/// # Errors
///
/// Returns an error if the bind address is invalid or the server fails.
#[instrument(skip_all)]
async fn run_serve(args: &ServeArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = AppConfig::load(&resolve_config_path(dir)?)?;
    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address: {bind}"))?;

    let tmdb = build_tmdb_client()?;
    if tmdb.is_none() {
        tracing::warn!("TMDB_API_TOKEN is not set; feed requests will fail");
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    cinescope_proxy::serve(listener, ProxyState::new(tmdb, config.server.language)).await
}

/// Runs the `feed` subcommand and logs one line per movie.
///
/// # Errors
///
/// Returns an error if the config or endpoint is invalid.
#[instrument(skip_all)]
async fn run_feed(cmd: &FeedCommand, dir: Option<&PathBuf>) -> Result<()> {
    let config = AppConfig::load(&resolve_config_path(dir)?)?;
    let endpoint = cmd.endpoint.as_deref().unwrap_or(&config.feed.endpoint);
    let client = build_feed_client(endpoint)?;

    let movies = match &cmd.command {
        FeedSubcommands::Trending => client.fetch_category(Category::Trending).await,
        FeedSubcommands::TopRated => client.fetch_category(Category::TopRated).await,
        FeedSubcommands::Movies => client.fetch_category(Category::Movies).await,
        FeedSubcommands::Series => client.fetch_category(Category::Series).await,
        FeedSubcommands::Search(args) => client.search_movies(&args.query).await,
    };

    log_movies(&movies);
    Ok(())
}

/// Logs movies as a tab separated table.
fn log_movies(movies: &[Movie]) {
    tracing::info!("ID\tRating\tYear\tType\tTitle");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            movie.id,
            movie.rating,
            if movie.year.is_empty() { "-" } else { &movie.year },
            movie.media_type.map_or("-", MediaType::as_str),
            movie.title,
        );
    }
    tracing::info!("Total: {} movies", movies.len());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match cli.command {
        Commands::Browse(_) => Some(resolve_log_path(cli.dir.as_ref())?),
        Commands::Serve(_) | Commands::Feed(_) => None,
    };
    telemetry::init_tracing(log_file.as_deref())?;

    match cli.command {
        Commands::Browse(args) => run_browse(&args, cli.dir.as_ref()).await,
        Commands::Serve(args) => run_serve(&args, cli.dir.as_ref()).await,
        Commands::Feed(cmd) => run_feed(&cmd, cli.dir.as_ref()).await,
    }
}
