use catalog_macros::entity_id;
use uuid::Uuid;

/// 分类标识：不透明字符串，新建时为 UUID v7 文本
#[entity_id]
pub struct CategoryId(String);

impl CategoryId {
    /// 生成一个新的唯一标识
    pub fn unique() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

/// 包装外部传入的标识，不做格式检查
impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
