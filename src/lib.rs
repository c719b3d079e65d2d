pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use config::{config_loader, config_model::RepositoryKind};
use infrastructure::{
    axum_http::http_serve,
    in_memory::webinars::WebinarInMemory,
    postgres::{postgres_connection, repositories::webinars::WebinarPostgres},
};

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("webinar-seats")?;

    let dotenvy_env = config_loader::load()?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    match dotenvy_env.repository {
        RepositoryKind::Postgres => {
            let postgres_pool =
                postgres_connection::establish_connection(&dotenvy_env.database.url)?;
            info!("Postgres connection has been established");

            let webinar_repository = WebinarPostgres::new(Arc::new(postgres_pool));
            http_serve::start(Arc::new(dotenvy_env), Arc::new(webinar_repository)).await?;
        }
        RepositoryKind::InMemory => {
            info!("Using in-memory webinar repository, data is lost on shutdown");

            let webinar_repository = WebinarInMemory::new();
            http_serve::start(Arc::new(dotenvy_env), Arc::new(webinar_repository)).await?;
        }
    }

    Ok(())
}
