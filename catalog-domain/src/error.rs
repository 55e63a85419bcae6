//! 领域层统一错误定义
//!
//! 聚焦校验、取值、仓储三类最小必要集合，
//! 便于网关实现与应用层统一转换为 `DomainError`。
//!
use crate::validation::ValidationError;
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则 ---
    #[error("validation failed: {}", join_messages(.errors))]
    Validation { errors: Vec<ValidationError> },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 仓储/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("conflict: {reason}")]
    Conflict { reason: String },
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
