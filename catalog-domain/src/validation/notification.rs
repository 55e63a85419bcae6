use super::{ValidationError, ValidationHandler};
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 按插入顺序收集校验错误
///
/// 每次用例调用新建一个实例；`append` 永不失败。
/// 也是用例结果的错误分支：领域校验错误与网关故障都以它返回。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<ValidationError> for Notification {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// 把意外故障桥接到校验错误通道
///
/// - `Validation` 直接展开其错误列表；
/// - `Repository` 成为一条错误，信息即故障原因本身；
/// - 其余故障成为一条携带其 `Display` 信息的错误。
impl From<DomainError> for Notification {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { errors } => Self { errors },
            DomainError::Repository { reason } => Self::from(ValidationError::new(reason)),
            other => Self::from(ValidationError::new(other.to_string())),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(e.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for Notification {}
