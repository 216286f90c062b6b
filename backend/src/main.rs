//! Trivia server entry-point: loads settings, prepares storage and serves
//! the REST API.

mod server;

use std::time::Duration;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use trivia::inbound::http::health::HealthState;
use trivia::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, TriviaSettings, build_health_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = TriviaSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let db_pool = connect_database(&settings).await?;
    let health_state: web::Data<HealthState> = build_health_state(db_pool.as_ref());

    let mut config = ServerConfig::new(settings.bind_addr())
        .with_questions_per_page(settings.questions_per_page())
        .with_quiz_seed(settings.quiz_seed);
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }
    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(make_metrics());
    }

    info!(addr = %settings.bind_addr(), "starting trivia server");
    let server = create_server(health_state, config)?;
    server.await
}

/// Open the pool and bring the schema up to date.
///
/// Without a database URL the server runs on the built-in fixtures.
async fn connect_database(settings: &TriviaSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        warn!("no database URL configured; serving the read-only fixture bank");
        return Ok(None);
    };

    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_pending_migrations(&url)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let max_size = settings.db_max_connections();
    let pool_config = PoolConfig::new(url)
        .with_max_size(max_size)
        .with_min_idle(Some(max_size.min(2)))
        .with_connection_timeout(Duration::from_secs(10));
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(Some(pool))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<actix_web_prom::PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("trivia")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "Prometheus metrics disabled");
            None
        }
    }
}
