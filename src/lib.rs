pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use db::Store;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_logging(&config);
    config.validate()?;

    match cli.command() {
        Commands::Serve => run_server(config).await,
        Commands::Init => cmd_init(&config).await,
        Commands::InitConfig => cmd_init_config(),
        Commands::Appointments => cmd_appointments(&config).await,
    }
}

fn init_logging(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn open_store(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
    .with_context(|| format!("Failed to open database {}", config.general.database_path))
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Clinic v{} starting...", env!("CARGO_PKG_VERSION"));

    let state = api::create_app_state(&config).await?;
    let app = api::router(state);

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}

async fn cmd_init(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let report = store.initialize(&config.schedule).await?;
    let counts = store.table_counts().await?;

    if report.is_empty() {
        println!("Database already initialized.");
    } else {
        println!(
            "Seeded {} citizens, {} doctors, {} time slots.",
            report.citizens, report.doctors, report.time_slots
        );
    }

    println!();
    println!("{:<14} {:>6}", "Table", "Rows");
    println!("{}", "-".repeat(21));
    println!("{:<14} {:>6}", "citizens", counts.citizens);
    println!("{:<14} {:>6}", "doctors", counts.doctors);
    println!(
        "{:<14} {:>6}  ({} booked)",
        "time_slots", counts.time_slots, counts.booked_slots
    );
    println!("{:<14} {:>6}", "appointments", counts.appointments);

    Ok(())
}

fn cmd_init_config() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!(
            "Wrote default configuration to {}",
            Config::default_config_path().display()
        );
    } else {
        println!(
            "{} already exists, leaving it untouched",
            Config::default_config_path().display()
        );
    }
    Ok(())
}

async fn cmd_appointments(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let appointments = store.list_appointments().await?;

    if appointments.is_empty() {
        println!("No appointments booked yet.");
        return Ok(());
    }

    println!(
        "{:<5} {:<12} {:<6} {:<14} {:<28} {}",
        "ID", "Date", "Time", "National ID", "Doctor", "Booked at"
    );
    println!("{}", "-".repeat(90));

    for details in appointments {
        println!(
            "{:<5} {:<12} {:<6} {:<14} {:<28} {}",
            details.appointment.id,
            details.slot.date,
            details.slot.time,
            details.citizen.national_id,
            details.doctor.full_name,
            details.appointment.created_at
        );
    }

    Ok(())
}
