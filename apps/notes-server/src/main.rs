use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use api_ingress::{ApiIngress, ApiIngressConfig};
use auth::{config::AuthConfig, AuthModule};
use clap::{Parser, Subcommand};
use notes::{config::NotesConfig, NotesModule};
use runtime::{AppConfig, CliArgs};

mod db;

/// Notes Server - authenticated personal notes over HTTP
#[derive(Parser)]
#[command(name = "notes-server")]
#[command(about = "Notes Server - authenticated personal notes over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Notes Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

/// Typed module sections, failing on unknown keys or bad values.
struct ModuleConfigs {
    api_ingress: ApiIngressConfig,
    auth: AuthConfig,
    notes: NotesConfig,
}

fn module_configs(config: &AppConfig) -> Result<ModuleConfigs> {
    let notes: NotesConfig = config.module_config(NotesModule::NAME)?;
    notes
        .validate()
        .with_context(|| format!("invalid config for module '{}'", NotesModule::NAME))?;

    Ok(ModuleConfigs {
        api_ingress: config.module_config("api_ingress")?,
        auth: config.module_config(AuthModule::NAME)?,
        notes,
    })
}

fn bind_addr(config: &AppConfig) -> Result<SocketAddr> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .with_context(|| format!("invalid bind address '{raw}'"))
}

async fn run_server(config: AppConfig) -> Result<()> {
    let modules = module_configs(&config)?;
    let addr = bind_addr(&config)?;

    let db_config = config
        .database
        .clone()
        .context("Database configuration missing")?;
    let db = db::connect(&db_config, Path::new(&config.server.home_dir)).await?;

    tracing::info!("Initializing modules...");
    let auth = AuthModule::init(db.clone(), modules.auth).await?;
    let notes = NotesModule::init(db, modules.notes, auth.client()).await?;

    let mut ingress_config = modules.api_ingress;
    if config.server.timeout_sec > 0 {
        ingress_config.request_timeout_sec = config.server.timeout_sec;
    }

    let ingress = ApiIngress::new(ingress_config)
        .mount(AuthModule::NAME, auth.router(), AuthModule::openapi())
        .mount(NotesModule::NAME, notes.router(), NotesModule::openapi());

    ingress
        .serve(addr, async {
            if let Err(e) = apikit::shutdown::wait_for_shutdown().await {
                tracing::error!("Shutdown signal handler failed: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    module_configs(&config)?;
    bind_addr(&config)?;

    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}
