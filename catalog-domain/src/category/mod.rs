//! 分类（Category）聚合
//!
mod aggregate;
mod category_id;
mod gateway;
mod validator;

pub use aggregate::Category;
pub use category_id::CategoryId;
pub use gateway::CategoryGateway;
pub use validator::{
    CategoryValidator, NAME_EMPTY_MESSAGE, NAME_NULL_MESSAGE, name_length_message,
};
