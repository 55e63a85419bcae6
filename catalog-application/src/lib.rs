//! 目录应用层（catalog-application）
//!
//! 以用例（`UseCase`）编排领域对象与网关：
//! 命令 → 构造或加载聚合 → 校验写入 `Notification` → 调用网关 → 输出或错误集合。
//!
//! 所有用例返回 `Result<Output, Notification>`：领域校验错误、网关故障与
//! “分类不存在”都经由同一个错误分支返回。
//!
pub mod category;
pub mod command;
pub mod dto;
pub mod query;
pub mod use_case;

pub use use_case::{UseCase, UseCaseResult};
