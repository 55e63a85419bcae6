use super::{CategoryId, CategoryValidator};
use crate::aggregate::AggregateRoot;
use crate::config::ValidationConfig;
use crate::error::DomainResult;
use crate::validation::{ValidationHandler, Validator};
use catalog_macros::entity;
use chrono::{DateTime, Duration, Utc};

/// 分类聚合
///
/// 生命周期：
/// - 通过 [`Category::new_category`] 创建，生成标识与时间戳；
/// - 仅通过 `activate` / `deactivate` / `update` 变更，每次变更都刷新 `updated_at`；
/// - 只做软删除：停用时记录 `deleted_at`，重新启用时清空。
///
/// 不变量：`deleted_at.is_some() == !active`。
#[entity(id = CategoryId)]
#[derive(PartialEq)]
pub struct Category {
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// 创建新分类；停用状态下 `deleted_at == created_at == updated_at`
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// 以已存储的全部字段还原聚合，供网关实现使用
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// 停用：首次停用时记录 `deleted_at`，已停用时保留原值
    pub fn deactivate(&mut self) -> &mut Self {
        let now = self.next_timestamp();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
        self
    }

    /// 启用：清空 `deleted_at`
    pub fn activate(&mut self) -> &mut Self {
        let now = self.next_timestamp();
        self.deleted_at = None;
        self.active = true;
        self.updated_at = now;
        self
    }

    /// 覆盖名称、描述与启用状态，启用状态按 activate/deactivate 规则切换
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.updated_at = self.next_timestamp();
        self
    }

    /// 按给定参数校验，错误写入 `handler`
    pub fn validate_with(
        &self,
        handler: &mut dyn ValidationHandler,
        config: ValidationConfig,
    ) -> DomainResult<()> {
        CategoryValidator::with_config(self, config).validate(handler)
    }

    // 时钟精度不足时仍保证 updated_at 严格递增；已到时间上限则保持不变
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add_signed(Duration::microseconds(1))
                .unwrap_or(self.updated_at)
        }
    }
}

impl AggregateRoot for Category {
    const TYPE: &'static str = "category";

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        CategoryValidator::new(self).validate(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::validation::{Notification, ThrowsValidationHandler};

    fn category(name: &str, description: Option<&str>, active: bool) -> Category {
        Category::new_category(Some(name.into()), description.map(str::to_owned), active)
    }

    #[test]
    fn new_active_category_has_no_deleted_at() {
        let c = category("Filmes", Some("A categoria mais assistida"), true);

        assert!(!c.id().value().is_empty());
        assert_eq!(c.name(), Some("Filmes"));
        assert_eq!(c.description(), Some("A categoria mais assistida"));
        assert!(c.is_active());
        assert_eq!(c.created_at(), c.updated_at());
        assert!(c.deleted_at().is_none());
        assert!(c.validate(&mut ThrowsValidationHandler).is_ok());
    }

    #[test]
    fn new_inactive_category_is_soft_deleted_at_creation() {
        let c = category("Ramon", Some(" description "), false);

        assert!(!c.is_active());
        assert_eq!(c.deleted_at(), Some(c.created_at()));
        assert_eq!(c.created_at(), c.updated_at());
        assert!(c.validate(&mut ThrowsValidationHandler).is_ok());
    }

    #[test]
    fn blank_description_is_valid() {
        let c = category("Ramon", Some(" "), true);
        let mut n = Notification::new();
        c.validate(&mut n).unwrap();
        assert!(!n.has_error());
    }

    #[test]
    fn deactivate_sets_deleted_at_and_bumps_updated_at() {
        let mut c = category("Ramon", Some(" description "), true);
        let before = c.clone();

        c.deactivate();

        assert!(c.same_identity_as(&before));
        assert!(!c.is_active());
        assert!(c.deleted_at().is_some());
        assert_eq!(c.created_at(), before.created_at());
        assert!(c.updated_at() > before.updated_at());
        assert_eq!(c.name(), Some("Ramon"));
    }

    #[test]
    fn deactivate_twice_keeps_first_deleted_at() {
        let mut c = category("Ramon", None, true);
        c.deactivate();
        let first = c.deleted_at();
        let updated = c.updated_at();

        c.deactivate();

        assert_eq!(c.deleted_at(), first);
        assert!(c.updated_at() > updated);
    }

    #[test]
    fn activate_clears_deleted_at_and_bumps_updated_at() {
        let mut c = category("Ramon", Some(" description "), false);
        let before = c.clone();

        c.activate();

        assert_eq!(c.id(), before.id());
        assert!(c.is_active());
        assert!(c.deleted_at().is_none());
        assert_eq!(c.created_at(), before.created_at());
        assert!(c.updated_at() > before.updated_at());
    }

    #[test]
    fn activate_on_active_category_still_bumps_updated_at() {
        let mut c = category("Ramon", None, true);
        let updated = c.updated_at();
        c.activate();
        assert!(c.updated_at() > updated);
        assert!(c.deleted_at().is_none());
    }

    #[test]
    fn update_overwrites_fields_and_switches_state() {
        let mut c = category("filme", Some("descricao alguma ai"), true);
        let before = c.clone();

        c.update(Some("Ramon".into()), Some("categoria assistida".into()), false);

        assert_eq!(c.id(), before.id());
        assert_eq!(c.name(), Some("Ramon"));
        assert_eq!(c.description(), Some("categoria assistida"));
        assert!(!c.is_active());
        assert!(c.deleted_at().is_some());
        assert_eq!(c.created_at(), before.created_at());
        assert!(c.updated_at() > before.updated_at());
        assert!(c.validate(&mut ThrowsValidationHandler).is_ok());
    }

    #[test]
    fn update_with_invalid_name_still_mutates_but_fails_validation() {
        let mut c = category("filme", Some("descricao alguma ai"), true);

        c.update(None, Some("categoria assistida".into()), false);

        assert_eq!(c.name(), None);
        assert!(!c.is_active());
        assert!(c.deleted_at().is_some());

        let mut n = Notification::new();
        c.validate(&mut n).unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(
            n.first_error().map(|e| e.message()),
            Some("'name' should not be null")
        );
    }

    #[test]
    fn clone_is_an_independent_copy() {
        let original = category("Ramon", None, true);
        let mut copy = original.clone();
        copy.deactivate();

        assert!(original.is_active());
        assert!(!copy.is_active());
        assert!(copy.same_identity_as(&original));
        assert_ne!(copy, original);
    }

    #[test]
    fn rehydrated_category_keeps_all_fields() {
        let c = category("Ramon", Some("d"), false);
        let restored = Category::with(
            c.id().clone(),
            c.name().map(str::to_owned),
            c.description().map(str::to_owned),
            c.is_active(),
            c.created_at(),
            c.updated_at(),
            c.deleted_at(),
        );
        assert_eq!(restored, c);
    }

    #[test]
    fn mutating_at_the_end_of_time_does_not_overflow() {
        let max = DateTime::<Utc>::MAX_UTC;
        let mut c = Category::with(
            CategoryId::from("late"),
            Some("Filmes".into()),
            None,
            false,
            max,
            max,
            Some(max),
        );

        c.activate();
        assert!(c.is_active());
        assert_eq!(c.updated_at(), max);

        c.update(Some("Séries".into()), None, false);
        assert_eq!(c.updated_at(), max);
        assert_eq!(c.deleted_at(), Some(max));
    }
}
