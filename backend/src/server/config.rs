//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use pagination::DEFAULT_PAGE_SIZE;
use trivia::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) questions_per_page: u32,
    pub(crate) quiz_seed: Option<u64>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration serving fixture data on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            questions_per_page: DEFAULT_PAGE_SIZE,
            quiz_seed: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Page size for question listings.
    #[must_use]
    pub fn with_questions_per_page(mut self, per_page: u32) -> Self {
        self.questions_per_page = per_page;
        self
    }

    /// Fix the quiz generator seed for reproducible selection.
    #[must_use]
    pub fn with_quiz_seed(mut self, seed: Option<u64>) -> Self {
        self.quiz_seed = seed;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
