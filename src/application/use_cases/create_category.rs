// src/application/use_cases/create_category.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::application::dto::{CreateCategoryInput, CreateCategoryOutput};
use crate::domain::{Category, Clock};
use crate::error::{AppError, AppResult};
use crate::repositories::{CategoryRepository, UnitOfWork};

/// Creates a category and makes it durable
#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation: CancellationToken,
    ) -> AppResult<CreateCategoryOutput>;
}

pub struct CreateCategory {
    repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    clock: Arc<dyn Clock>,
}

impl CreateCategory {
    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            unit_of_work,
            clock,
        }
    }
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategory {
    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation: CancellationToken,
    ) -> AppResult<CreateCategoryOutput> {
        if cancellation.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let category = Category::create(
            input.name,
            input.description,
            input.is_active,
            self.clock.as_ref(),
        )
        .map_err(|e| {
            log::warn!("Rejected category input: {}", e);
            AppError::Domain(e)
        })?;

        let output = CreateCategoryOutput::from(&category);

        self.repository.insert(category, cancellation.clone()).await?;
        if let Err(commit_error) = self.unit_of_work.commit(cancellation).await {
            if let Err(rollback_error) = self.unit_of_work.rollback().await {
                log::error!("Rollback after failed commit failed: {}", rollback_error);
            }
            return Err(commit_error);
        }

        log::info!("Category {} created ({})", output.id, output.name);
        Ok(output)
    }
}
