// src/repositories/in_memory.rs
//
// Process-local collaborators for the composition root and tests.
//
// The repository stages inserts; the unit of work moves staged
// categories into the committed map. Both share one InMemoryStore.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{CategoryRepository, UnitOfWork};
use crate::domain::Category;
use crate::error::{AppError, AppResult};

#[derive(Debug, Default)]
struct StoreState {
    staged: Vec<Category>,
    committed: HashMap<Uuid, Category>,
}

impl StoreState {
    fn find(&self, id: Uuid) -> Option<&Category> {
        self.committed
            .get(&id)
            .or_else(|| self.staged.iter().find(|c| c.id() == id))
    }
}

/// Shared backing state for the in-memory collaborators
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Categories made durable by a commit
    pub async fn committed(&self) -> Vec<Category> {
        let state = self.state.read().await;
        let mut categories: Vec<Category> = state.committed.values().cloned().collect();
        categories.sort_by_key(|c| c.created_at());
        categories
    }

    /// Number of inserts waiting for a commit
    pub async fn staged_count(&self) -> usize {
        self.state.read().await.staged.len()
    }
}

fn ensure_not_cancelled(cancellation: &CancellationToken) -> AppResult<()> {
    if cancellation.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    Ok(())
}

pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: Category, cancellation: CancellationToken) -> AppResult<()> {
        ensure_not_cancelled(&cancellation)?;
        let mut state = self.store.state.write().await;

        if state.find(category.id()).is_some() {
            return Err(AppError::Conflict(format!(
                "category {} already exists",
                category.id()
            )));
        }

        log::debug!("Staging category {}", category.id());
        state.staged.push(category);
        Ok(())
    }

    async fn get(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<Option<Category>> {
        ensure_not_cancelled(&cancellation)?;
        let state = self.store.state.read().await;
        Ok(state.find(id).cloned())
    }

    async fn exists(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<bool> {
        ensure_not_cancelled(&cancellation)?;
        let state = self.store.state.read().await;
        Ok(state.find(id).is_some())
    }
}

pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWork {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self, cancellation: CancellationToken) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        let staged = std::mem::take(&mut state.staged);

        // a cancelled commit discards the staged set
        if cancellation.is_cancelled() {
            log::debug!("Commit cancelled, discarding {} staged categories", staged.len());
            return Err(AppError::Cancelled);
        }

        log::debug!("Committing {} staged categories", staged.len());
        for category in staged {
            state.committed.insert(category.id(), category);
        }
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        log::debug!("Rolling back {} staged categories", state.staged.len());
        state.staged.clear();
        Ok(())
    }
}
