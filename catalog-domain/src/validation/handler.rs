use super::ValidationError;
use crate::error::DomainResult;

/// 校验错误的写入端口
///
/// 实现者决定遇到错误时是收集（`Notification`）还是立即返回错误
/// （`ThrowsValidationHandler`）。
pub trait ValidationHandler {
    /// 追加一条错误
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// 已收集的错误（按插入顺序）
    fn errors(&self) -> &[ValidationError];

    /// 依次追加多条错误，遇到 `Err` 即停止
    fn append_all(&mut self, errors: Vec<ValidationError>) -> DomainResult<()> {
        errors.into_iter().try_for_each(|e| self.append(e))
    }

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    /// 第一条错误；为空时返回 `None`
    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}
