//! 校验参数
//!
//! [`ValidationConfig`] 控制分类名称的长度区间，默认 3..=255：
//!
//! ```rust
//! use catalog_domain::config::ValidationConfig;
//!
//! let config = ValidationConfig::default();
//! assert_eq!(config.name_min_length, 3);
//! assert_eq!(config.name_max_length, 255);
//!
//! let relaxed = ValidationConfig::builder().name_min_length(1).build();
//! assert!(relaxed.validate().is_ok());
//! ```
use crate::error::{DomainError, DomainResult};
use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_NAME_MAX_LENGTH: usize = 255;

/// 名称校验的长度区间（按去除首尾空白后的字符数计算）
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[builder(default = DEFAULT_NAME_MIN_LENGTH)]
    pub name_min_length: usize,
    #[builder(default = DEFAULT_NAME_MAX_LENGTH)]
    pub name_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// 检查区间是否合法：下限至少为 1，且不大于上限
    pub fn validate(&self) -> DomainResult<()> {
        if self.name_min_length == 0 {
            return Err(DomainError::InvalidValue {
                reason: "name_min_length must be >= 1".into(),
            });
        }
        if self.name_min_length > self.name_max_length {
            return Err(DomainError::InvalidValue {
                reason: format!(
                    "name_min_length ({}) must not exceed name_max_length ({})",
                    self.name_min_length, self.name_max_length
                ),
            });
        }
        Ok(())
    }
}
