use super::{ValidationError, ValidationHandler};
use crate::error::{DomainError, DomainResult};

/// 快速失败的校验处理器：第一条错误即返回 `DomainError::Validation`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::Validation {
            errors: vec![error],
        })
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}
