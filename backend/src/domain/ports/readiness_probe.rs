//! Port for checking that a backing service can take traffic.

use async_trait::async_trait;

/// Reports whether a dependency, usually the database, is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// `true` when the dependency answered a trivial request.
    async fn is_reachable(&self) -> bool;
}
