// src/repositories/unit_of_work.rs

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::AppResult;

/// Transactional boundary over repository writes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Make every staged change durable
    async fn commit(&self, cancellation: CancellationToken) -> AppResult<()>;

    /// Drop every staged change without making it durable
    async fn rollback(&self) -> AppResult<()>;
}
