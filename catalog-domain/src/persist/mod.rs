//! 仓储实现
//!
//! 目前只包含进程内实现，供测试与演示使用；
//! 真实存储由基础设施层实现 `CategoryGateway`。
//!
mod inmemory_category_gateway;

pub use inmemory_category_gateway::InMemoryCategoryGateway;
