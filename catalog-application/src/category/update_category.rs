use super::{gateway_fault, not_found};
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
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            is_active,
        }
    }
}

impl Command for UpdateCategoryCommand {
    const NAME: &'static str = "UpdateCategory";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl Dto for UpdateCategoryOutput {}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

/// 更新分类：加载 → 变更 → 校验 → 网关 `update`
///
/// 分类不存在时不会调用 `update`，返回
/// `Category with {id} was not found` 这一条错误。
pub struct UpdateCategoryUseCase<G: ?Sized> {
    gateway: Arc<G>,
    config: ValidationConfig,
}

impl<G> UpdateCategoryUseCase<G>
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
impl<G> UseCase for UpdateCategoryUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    type Input = UpdateCategoryCommand;
    type Output = UpdateCategoryOutput;

    #[instrument(skip_all, fields(command = UpdateCategoryCommand::NAME, id = %command.id))]
    async fn execute(&self, command: UpdateCategoryCommand) -> UseCaseResult<UpdateCategoryOutput> {
        let UpdateCategoryCommand {
            id,
            name,
            description,
            is_active,
        } = command;
        let id = CategoryId::from(id);

        let Some(mut category) = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(|e| gateway_fault("find_by_id", e))?
        else {
            return Err(not_found(&id));
        };

        category.update(name, description, is_active);

        let mut notification = Notification::new();
        category.validate_with(&mut notification, self.config)?;
        if notification.has_error() {
            debug!(errors = notification.len(), "category update rejected");
            return Err(notification);
        }

        let updated = self
            .gateway
            .update(category)
            .await
            .map_err(|e| gateway_fault("update", e))?;

        info!(id = %updated.id(), "category updated");
        Ok(UpdateCategoryOutput::from(&updated))
    }
}
