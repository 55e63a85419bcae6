use super::{Category, CategoryId};
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 分类持久化端口，由基础设施层实现
///
/// 任一方法返回 `Err` 即视为意外故障，由应用层转换为 `Notification`。
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: Category) -> DomainResult<Category>;

    async fn update(&self, category: Category) -> DomainResult<Category>;

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;
}

#[async_trait]
impl<T> CategoryGateway for Arc<T>
where
    T: CategoryGateway + ?Sized,
{
    async fn create(&self, category: Category) -> DomainResult<Category> {
        (**self).create(category).await
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        (**self).update(category).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        (**self).find_by_id(id).await
    }
}
