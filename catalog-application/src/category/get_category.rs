use super::{gateway_fault, not_found};
use crate::dto::Dto;
use crate::query::Query;
use crate::use_case::{UseCase, UseCaseResult};
use async_trait::async_trait;
use catalog_domain::category::{Category, CategoryGateway, CategoryId};
use catalog_domain::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryByIdQuery {
    pub id: String,
}

impl GetCategoryByIdQuery {
    pub fn with(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Query for GetCategoryByIdQuery {
    const NAME: &'static str = "GetCategoryById";
    type Dto = CategoryOutput;
}

/// 分类读模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Dto for CategoryOutput {}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().map(str::to_owned),
            description: category.description().map(str::to_owned),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

/// 按标识读取分类，只调用网关 `find_by_id`
pub struct GetCategoryByIdUseCase<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G> GetCategoryByIdUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> UseCase for GetCategoryByIdUseCase<G>
where
    G: CategoryGateway + ?Sized,
{
    type Input = GetCategoryByIdQuery;
    type Output = <GetCategoryByIdQuery as Query>::Dto;

    #[instrument(skip_all, fields(query = GetCategoryByIdQuery::NAME, id = %query.id))]
    async fn execute(&self, query: GetCategoryByIdQuery) -> UseCaseResult<Self::Output> {
        let id = CategoryId::from(query.id);

        match self.gateway.find_by_id(&id).await {
            Ok(Some(category)) => Ok(CategoryOutput::from(&category)),
            Ok(None) => Err(not_found(&id)),
            Err(err) => Err(gateway_fault("find_by_id", err)),
        }
    }
}
