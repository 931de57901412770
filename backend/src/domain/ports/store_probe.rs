//! Port used by readiness probes to confirm the backing store is reachable.

use async_trait::async_trait;

use crate::domain::Error;

/// Checks that a store connection can be acquired.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Acquire and release one connection.
    async fn check(&self) -> Result<(), Error>;
}
