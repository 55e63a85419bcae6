//! 目录领域层过程宏（catalog-macros）
//!
//! - `#[entity]`：为具名字段结构体注入 `id` 字段并实现 `Entity`
//! - `#[entity_id]`：为单字段 tuple struct 形式的标识类型生成常用实现
//! - `#[value_object]`：为值对象合并值语义所需的派生
//!
use proc_macro::TokenStream;

mod entity;
mod entity_id;
mod utils;
mod value_object;

/// 实体宏
///
/// 用法：`#[entity(id = CategoryId)]`，`id` 缺省为 `String`；
/// `#[entity(debug = false)]` 可关闭 `Debug` 派生以便手写实现。
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
///
/// 仅支持单字段 tuple struct，例如 `struct CategoryId(String);`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏
///
/// 支持结构体（具名或 tuple）与枚举，参数 `debug = true|false`。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
