//! Start-up settings loaded via OrthoConfig.
//!
//! Every field can come from the command line, a configuration file or a
//! `TRIVIA_*` environment variable.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use pagination::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct TriviaSettings {
    /// Interface to bind, `0.0.0.0` when unset.
    pub host: Option<IpAddr>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL URL. Falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Questions returned per page by `GET /questions`.
    pub questions_per_page: Option<u32>,
    /// Fixed seed for quiz selection; entropy when unset.
    pub quiz_seed: Option<u64>,
    /// Leave the schema untouched at start-up.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl TriviaSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, consulting `DATABASE_URL` as a fallback.
    ///
    /// Blank values count as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Page size for question listings. Zero falls back to the default.
    pub fn questions_per_page(&self) -> u32 {
        self.questions_per_page
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Maximum pool size.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "TRIVIA_HOST",
        "TRIVIA_PORT",
        "TRIVIA_DATABASE_URL",
        "TRIVIA_QUESTIONS_PER_PAGE",
        "TRIVIA_QUIZ_SEED",
        "TRIVIA_SKIP_MIGRATIONS",
        "TRIVIA_DB_MAX_CONNECTIONS",
        "DATABASE_URL",
    ];

    fn load_from_empty_args() -> TriviaSettings {
        TriviaSettings::load_from_iter([OsString::from("trivia-server")])
            .expect("config should load")
    }

    fn cleared() -> Vec<(&'static str, Option<String>)> {
        VARS.iter().map(|name| (*name, None)).collect()
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.questions_per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(settings.quiz_seed, None);
        assert!(!settings.skip_migrations);
        assert_eq!(settings.db_max_connections(), DEFAULT_MAX_CONNECTIONS);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut vars = cleared();
        vars.extend([
            ("TRIVIA_HOST", Some("127.0.0.1".to_owned())),
            ("TRIVIA_PORT", Some("5000".to_owned())),
            ("TRIVIA_DATABASE_URL", Some("postgres://db/trivia".to_owned())),
            ("TRIVIA_QUESTIONS_PER_PAGE", Some("5".to_owned())),
            ("TRIVIA_QUIZ_SEED", Some("42".to_owned())),
            ("TRIVIA_SKIP_MIGRATIONS", Some("true".to_owned())),
            ("TRIVIA_DB_MAX_CONNECTIONS", Some("3".to_owned())),
        ]);
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:5000".parse().expect("addr"));
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://db/trivia")
        );
        assert_eq!(settings.questions_per_page(), 5);
        assert_eq!(settings.quiz_seed, Some(42));
        assert!(settings.skip_migrations);
        assert_eq!(settings.db_max_connections(), 3);
    }

    #[rstest]
    #[case(Some("postgres://fallback/trivia"), Some("postgres://fallback/trivia"))]
    #[case(Some("   "), None)]
    #[case(None, None)]
    fn database_url_falls_back_to_standard_variable(
        #[case] fallback: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut vars = cleared();
        vars.push(("DATABASE_URL", fallback.map(str::to_owned)));
        let _guard = lock_env(vars);

        assert_eq!(load_from_empty_args().database_url().as_deref(), expected);
    }

    #[rstest]
    fn zero_sizes_fall_back_to_defaults() {
        let mut vars = cleared();
        vars.extend([
            ("TRIVIA_QUESTIONS_PER_PAGE", Some("0".to_owned())),
            ("TRIVIA_DB_MAX_CONNECTIONS", Some("0".to_owned())),
        ]);
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();
        assert_eq!(settings.questions_per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(settings.db_max_connections(), DEFAULT_MAX_CONNECTIONS);
    }
}
