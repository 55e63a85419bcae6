use super::Category;
use crate::config::ValidationConfig;
use crate::error::DomainResult;
use crate::validation::{ValidationError, ValidationHandler, Validator};

pub const NAME_NULL_MESSAGE: &str = "'name' should not be null";
pub const NAME_EMPTY_MESSAGE: &str = "'name' should not be empty";

pub fn name_length_message(config: &ValidationConfig) -> String {
    format!(
        "'name' must be between {} and {} character",
        config.name_min_length, config.name_max_length
    )
}

// 空白字符：控制类空白与 Unicode 空格，不含不换行空格（U+00A0、U+2007、U+202F）
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

/// 分类名称规则：缺失 → 空白 → 长度，命中第一条即停止
///
/// 长度按去除首尾控制字符与空格（`<= U+0020`）后的字符数计算。
pub struct CategoryValidator<'a> {
    category: &'a Category,
    config: ValidationConfig,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self::with_config(category, ValidationConfig::default())
    }

    pub fn with_config(category: &'a Category, config: ValidationConfig) -> Self {
        Self { category, config }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        let Some(name) = self.category.name() else {
            return handler.append(ValidationError::new(NAME_NULL_MESSAGE));
        };

        if name.chars().all(is_blank_char) {
            return handler.append(ValidationError::new(NAME_EMPTY_MESSAGE));
        }

        let length = name.trim_matches(|c: char| c <= ' ').chars().count();
        if length < self.config.name_min_length || length > self.config.name_max_length {
            return handler.append(ValidationError::new(name_length_message(&self.config)));
        }

        Ok(())
    }
}
