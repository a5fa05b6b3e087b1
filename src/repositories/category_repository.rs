// src/repositories/category_repository.rs

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::Category;
use crate::error::AppResult;

/// Collection-like access to stored categories.
/// Writes are staged until the owning UnitOfWork commits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: Category, cancellation: CancellationToken) -> AppResult<()>;
    async fn get(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<Option<Category>>;
    async fn exists(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<bool>;
}
