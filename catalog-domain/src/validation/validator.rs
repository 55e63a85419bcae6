use super::ValidationHandler;
use crate::error::DomainResult;

/// 针对单个聚合的规则集合，错误写入传入的处理器
pub trait Validator {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;
}
