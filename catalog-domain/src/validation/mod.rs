//! 校验模型
//!
//! - `ValidationError`：单条可读错误信息
//! - `ValidationHandler`：错误写入端口，决定“收集”还是“快速失败”
//! - `Notification`：按插入顺序收集错误，作为用例的错误通道
//! - `ThrowsValidationHandler`：遇到第一条错误即返回 `DomainError::Validation`
//! - `Validator`：针对某个聚合的规则集合
//!
mod error;
mod handler;
mod notification;
mod throws;
mod validator;

pub use error::ValidationError;
pub use handler::ValidationHandler;
pub use notification::Notification;
pub use throws::ThrowsValidationHandler;
pub use validator::Validator;
