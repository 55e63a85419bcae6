//! 聚合根（AggregateRoot）抽象
//!
//! 约束一个聚合的核心能力：
//! - 通过 `Entity` 具备标识；
//! - `validate` 将不变量检查结果写入校验处理器，而不是直接中断流程。
//!
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::validation::ValidationHandler;

/// 聚合根接口
pub trait AggregateRoot: Entity + Clone {
    /// 聚合类型名（日志与错误信息中使用）
    const TYPE: &'static str;

    /// 校验聚合，错误写入 `handler`
    ///
    /// 只有快速失败类型的处理器才会返回 `Err`。
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;
}
