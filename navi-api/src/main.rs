use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use navi_api::config::{ApiConfig, CorsConfig};
use navi_api::routes::configure_routes;
use navi_api::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "navi-api", version, about = "Navi assessment API server")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn build_cors(cors: Option<&CorsConfig>) -> Cors {
    let Some(cors) = cors else {
        return Cors::default();
    };

    let mut builder = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        builder = builder.allow_any_origin();
    } else {
        for origin in &cors.allowed_origins {
            builder = builder.allowed_origin(origin);
        }
    }
    builder
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (config, config_path) =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!(path = %config_path.display(), "Loaded configuration");

    let database = Arc::new(
        Database::new(&config.database.path).context("Failed to initialize database")?,
    );
    info!(path = %config.database.path.display(), "Database initialized");

    let bind_addr = config.bind_address();
    info!("Starting navi-api server at http://{}", bind_addr);

    let db_data = web::Data::new(database);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .wrap(build_cors(config_data.cors.as_ref()))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {bind_addr}"))?
    .run()
    .await?;

    Ok(())
}
