//! 实体（Entity）基础抽象
//!
//! 为聚合与实体提供统一的标识（Id）能力，通常由 `#[entity]` 宏实现。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可克隆与可比较
    type Id: FromStr + Clone + Display + PartialEq + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 两个实体是否为同一标识（与其余字段无关）
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
