//! 目录领域层（catalog-domain）
//!
//! 提供商品目录“分类”切片的领域模型与领域层接口：
//! - 实体（`entity`）与聚合根（`aggregate`）抽象
//! - 校验模型（`validation`）：`Notification` 收集器与快速失败处理器
//! - 分类聚合（`category`）：标识、生命周期、名称校验与网关端口
//! - 仓储实现（`persist`）：进程内网关，供测试与演示使用
//! - 校验参数（`config`）
//!
//! 本 crate 与存储实现解耦，仅定义领域层接口与最小必要的错误类型。
//!
//! 典型用法：
//! 1. 通过 `Category::new_category` 创建聚合；
//! 2. 调用 `validate` 将错误写入 `Notification`；
//! 3. 无错误时交给 `CategoryGateway` 持久化。
//!
pub mod aggregate;
pub mod category;
pub mod config;
pub mod entity;
pub mod error;
pub mod persist;
pub mod validation;

// 允许在本 crate 内部通过 ::catalog_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 中也能解析。
extern crate self as catalog_domain;
