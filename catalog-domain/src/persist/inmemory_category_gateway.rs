use crate::aggregate::AggregateRoot;
use crate::category::{Category, CategoryGateway, CategoryId};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// 基于内存的 CategoryGateway 实现
/// - 以标识文本为键保存聚合副本
/// - 重复创建返回 `Conflict`，更新不存在的分类返回 `NotFound`
#[derive(Debug, Default)]
pub struct InMemoryCategoryGateway {
    categories: DashMap<String, Category>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> DomainResult<Category> {
        match self.categories.entry(category.id().to_string()) {
            Entry::Occupied(_) => Err(DomainError::Conflict {
                reason: format!("{} {} already exists", Category::TYPE, category.id()),
            }),
            Entry::Vacant(slot) => {
                tracing::trace!(aggregate = Category::TYPE, id = %category.id(), "stored");
                slot.insert(category.clone());
                Ok(category)
            }
        }
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        let Some(mut stored) = self.categories.get_mut(category.id().value()) else {
            return Err(DomainError::NotFound {
                reason: format!("{} {}", Category::TYPE, category.id()),
            });
        };
        tracing::trace!(aggregate = Category::TYPE, id = %category.id(), "replaced");
        *stored = category.clone();
        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.get(id.value()).map(|c| c.value().clone()))
    }
}
