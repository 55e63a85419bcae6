use super::gateway_fault;
use crate::command::Command;
use crate::dto::Dto;
use crate::use_case::{UseCase, UseCaseResult};
use async_trait::async_trait;
use catalog_domain::category::{Category, CategoryGateway, CategoryId};
use catalog_domain::config::ValidationConfig;
use catalog_domain::entity::Entity;
use catalog_domain::validation::{Notification, ValidationHandler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name,
            description,
            is_active,
        }
    }
}

impl Command for CreateCategoryCommand {
    const NAME: &'static str = "CreateCategory";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl Dto for CreateCategoryOutput {}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

/// 创建分类：构造 → 校验 → 网关 `create`（仅在校验通过时调用一次）
pub struct CreateCategoryUseCase<G: ?Sized> {
    gateway: Arc<G>,
    config: ValidationConfig,
}

impl<G> CreateCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_config(gateway, ValidationConfig::default())
    }

    pub fn with_config(gateway: Arc<G>, config: ValidationConfig) -> Self {
        Self { gateway, config }
    }
}

#[async_trait]
impl<G> UseCase for CreateCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    type Input = CreateCategoryCommand;
    type Output = CreateCategoryOutput;

    #[instrument(skip_all, fields(command = CreateCategoryCommand::NAME))]
    async fn execute(&self, command: CreateCategoryCommand) -> UseCaseResult<CreateCategoryOutput> {
        let CreateCategoryCommand {
            name,
            description,
            is_active,
        } = command;

        let category = Category::new_category(name, description, is_active);

        let mut notification = Notification::new();
        category.validate_with(&mut notification, self.config)?;
        if notification.has_error() {
            debug!(errors = notification.len(), "category rejected");
            return Err(notification);
        }

        let created = self
            .gateway
            .create(category)
            .await
            .map_err(|e| gateway_fault("create", e))?;

        info!(id = %created.id(), "category created");
        Ok(CreateCategoryOutput::from(&created))
    }
}
