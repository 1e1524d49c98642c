//! anilist - AniList anime lookup CLI.

/// Application configuration (TOML).
mod config;
/// Result rendering.
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AniListConfig, AppConfig, resolve_config_path};
use anilist_api::anime::{
    AnimeService, DEFAULT_LIST_PER_PAGE, DEFAULT_PAGE, Media, MediaResponse, Paging,
};
use anilist_api::graphql::{ANILIST_ENDPOINT, AniListClient};

/// `User-Agent` sent when the config does not set one.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding an optional AniList access token.
const TOKEN_ENV: &str = "ANILIST_TOKEN";

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
    /// Query anime on AniList.
    Anime(AnimeCommand),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a config file with default settings.
    Init,
}

/// Arguments for the `anime` subcommand.
#[derive(clap::Args)]
struct AnimeCommand {
    /// Anime subcommand to run.
    #[command(subcommand)]
    command: AnimeSubcommands,
}

/// Available anime subcommands.
#[derive(Subcommand)]
enum AnimeSubcommands {
    /// Show an anime by ID.
    Get(IdArgs),
    /// List the characters of an anime.
    Characters(CharactersArgs),
    /// Search anime by keyword.
    Search(SearchArgs),
    /// List trending anime.
    Trending(PagingArgs),
    /// List popular anime.
    Popular(PagingArgs),
    /// List anime of a genre.
    Genre(GenreArgs),
    /// Show an anime by title.
    Title(TitleArgs),
    /// List the staff of an anime.
    Staff(IdArgs),
    /// List media related to an anime.
    Relations(IdArgs),
    /// List recommendations based on an anime.
    Recommendations(IdArgs),
}

/// Arguments identifying one anime.
#[derive(clap::Args)]
struct IdArgs {
    /// AniList media ID (e.g. 1 for Cowboy Bebop).
    #[arg(long, required = true)]
    id: u32,
}

/// Arguments for the `anime characters` subcommand.
#[derive(clap::Args)]
struct CharactersArgs {
    /// AniList media ID.
    #[arg(long, required = true)]
    id: u32,
    /// Follow pagination and fetch every character.
    #[arg(long)]
    all: bool,
}

/// Page selection shared by list subcommands.
#[derive(clap::Args)]
struct PagingArgs {
    /// Page number (1-based).
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,
    /// Items per page.
    #[arg(long, default_value_t = DEFAULT_LIST_PER_PAGE)]
    per_page: u32,
}

impl From<&PagingArgs> for Paging {
    fn from(args: &PagingArgs) -> Self {
        Self::new(args.page, args.per_page)
    }
}

/// Arguments for the `anime search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search keyword (e.g. "Frieren").
    #[arg(long, required = true)]
    query: String,
    #[command(flatten)]
    paging: PagingArgs,
}

/// Arguments for the `anime genre` subcommand.
#[derive(clap::Args)]
struct GenreArgs {
    /// Genre name (e.g. "Action").
    #[arg(long, required = true)]
    genre: String,
    #[command(flatten)]
    paging: PagingArgs,
}

/// Arguments for the `anime title` subcommand.
#[derive(clap::Args)]
struct TitleArgs {
    /// Anime title (e.g. "Cowboy Bebop").
    #[arg(long, required = true)]
    title: String,
}

/// Builds an AniList client from config.
///
/// Adds a bearer token when `ANILIST_TOKEN` is set and non-empty.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid or the client fails to build.
fn build_client(config: &AniListConfig) -> Result<AniListClient> {
    let mut builder = AniListClient::builder()
        .endpoint(config.endpoint_url()?)
        .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
    if let Some(interval) = config.min_interval() {
        builder = builder.min_interval(interval);
    }
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.is_empty()
    {
        tracing::debug!("Using access token from {TOKEN_ENV}");
        builder = builder.access_token(token);
    }
    builder.build().context("failed to build AniList client")
}

/// Loads config and builds the anime service.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the client fails to build.
#[instrument(skip_all)]
fn build_service(dir: Option<&PathBuf>) -> Result<AnimeService<AniListClient>> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    tracing::debug!(path = %config_path.display(), "Loaded config");

    let service = AnimeService::new(build_client(&config.anilist)?);
    Ok(match config.pagination.max_pages {
        Some(limit) => service.max_pages(limit),
        None => service,
    })
}

/// Runs the `config init` subcommand.
///
/// Leaves an existing config file untouched.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or written.
#[instrument(skip_all)]
fn run_config_init(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() {
        tracing::info!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    let config = AppConfig {
        anilist: AniListConfig {
            endpoint: Some(String::from(ANILIST_ENDPOINT)),
            ..AniListConfig::default()
        },
        ..AppConfig::default()
    };
    config.save(&config_path).context("failed to save config")?;
    tracing::info!("Wrote {}", config_path.display());

    Ok(())
}

/// Extracts the media of a response, failing when the API returned none.
fn require_media(response: MediaResponse, what: &str) -> Result<Media> {
    response
        .media
        .with_context(|| format!("no anime found for {what}"))
}

/// Runs the `anime get` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_get(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_anime_by_id(args.id)
        .await
        .context("failed to fetch anime")?;
    let media = require_media(response, &format!("id {}", args.id))?;

    output::render_media(&media);
    Ok(())
}

/// Runs the `anime characters` subcommand.
///
/// Without `--all` only the first page is shown.
///
/// # Errors
///
/// Returns an error if the service fails to build or any API request fails.
#[instrument(skip_all)]
async fn run_characters(args: &CharactersArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;

    let edges = if args.all {
        service
            .get_all_characters_from_anime(args.id)
            .await
            .context("failed to fetch characters")?
    } else {
        let response = service
            .get_characters(args.id)
            .await
            .context("failed to fetch characters")?;
        let media = require_media(response, &format!("id {}", args.id))?;
        let connection = media.characters.unwrap_or_default();
        if connection.has_next_page() {
            tracing::info!("More characters available, pass --all to fetch every page");
        }
        connection.into_present_edges()
    };

    output::render_characters(&edges);
    Ok(())
}

/// Runs the `anime search` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_anime_by_search(&args.query, Paging::from(&args.paging))
        .await
        .context("failed to search anime")?;

    output::render_media_page(&response.page.unwrap_or_default());
    Ok(())
}

/// Runs the `anime trending` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_trending(args: &PagingArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_trending_anime(Paging::from(args))
        .await
        .context("failed to fetch trending anime")?;

    output::render_media_page(&response.page.unwrap_or_default());
    Ok(())
}

/// Runs the `anime popular` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_popular(args: &PagingArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_popular_anime(Paging::from(args))
        .await
        .context("failed to fetch popular anime")?;

    output::render_media_page(&response.page.unwrap_or_default());
    Ok(())
}

/// Runs the `anime genre` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genre(args: &GenreArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_anime_list_by_genre(&args.genre, Paging::from(&args.paging))
        .await
        .context("failed to fetch anime by genre")?;

    output::render_media_page(&response.page.unwrap_or_default());
    Ok(())
}

/// Runs the `anime title` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_title(args: &TitleArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_anime_by_title(&args.title)
        .await
        .context("failed to fetch anime by title")?;
    let media = require_media(response, &format!("title {:?}", args.title))?;

    output::render_media(&media);
    Ok(())
}

/// Runs the `anime staff` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_staff(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_staff(args.id)
        .await
        .context("failed to fetch staff")?;
    let media = require_media(response, &format!("id {}", args.id))?;

    output::render_staff(&media);
    Ok(())
}

/// Runs the `anime relations` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_relations(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_relations(args.id)
        .await
        .context("failed to fetch relations")?;
    let media = require_media(response, &format!("id {}", args.id))?;

    output::render_relations(&media);
    Ok(())
}

/// Runs the `anime recommendations` subcommand.
///
/// # Errors
///
/// Returns an error if the service fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_recommendations(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let service = build_service(dir)?;
    let response = service
        .get_recommendations(args.id)
        .await
        .context("failed to fetch recommendations")?;
    let media = require_media(response, &format!("id {}", args.id))?;

    output::render_recommendations(&media);
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Anime(anime) => match anime.command {
            AnimeSubcommands::Get(args) => run_get(&args, dir).await,
            AnimeSubcommands::Characters(args) => run_characters(&args, dir).await,
            AnimeSubcommands::Search(args) => run_search(&args, dir).await,
            AnimeSubcommands::Trending(args) => run_trending(&args, dir).await,
            AnimeSubcommands::Popular(args) => run_popular(&args, dir).await,
            AnimeSubcommands::Genre(args) => run_genre(&args, dir).await,
            AnimeSubcommands::Title(args) => run_title(&args, dir).await,
            AnimeSubcommands::Staff(args) => run_staff(&args, dir).await,
            AnimeSubcommands::Relations(args) => run_relations(&args, dir).await,
            AnimeSubcommands::Recommendations(args) => run_recommendations(&args, dir).await,
        },
        Commands::Config(config) => match config.command {
            ConfigSubcommands::Init => run_config_init(dir),
        },
    }
}
