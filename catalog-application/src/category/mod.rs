//! 分类用例
//!
mod create_category;
mod get_category;
mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use get_category::{CategoryOutput, GetCategoryByIdQuery, GetCategoryByIdUseCase};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};

use catalog_domain::aggregate::AggregateRoot;
use catalog_domain::category::{Category, CategoryId};
use catalog_domain::error::DomainError;
use catalog_domain::validation::{Notification, ValidationError};

/// “分类不存在”的错误信息
pub fn not_found_message(id: &CategoryId) -> String {
    format!("Category with {id} was not found")
}

fn not_found(id: &CategoryId) -> Notification {
    tracing::debug!(aggregate = Category::TYPE, %id, "not found");
    Notification::from(ValidationError::new(not_found_message(id)))
}

// 网关故障转为单条错误，仓储故障的信息即其原因
fn gateway_fault(operation: &'static str, err: DomainError) -> Notification {
    tracing::warn!(aggregate = Category::TYPE, operation, error = %err, "gateway failed");
    Notification::from(err)
}
