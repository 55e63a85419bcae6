//! 集成测试共用的辅助工具
#![allow(dead_code)]

use async_trait::async_trait;
use catalog_domain::category::{Category, CategoryGateway, CategoryId};
use catalog_domain::error::{DomainError, DomainResult};
use catalog_domain::persist::InMemoryCategoryGateway;
use std::sync::{Arc, Mutex};

/// 记录调用并可注入故障的网关替身，内部委托给内存网关
#[derive(Default, Clone)]
pub struct RecordingGateway {
    inner: Arc<InMemoryCategoryGateway>,
    pub created: Arc<Mutex<Vec<Category>>>,
    pub updated: Arc<Mutex<Vec<Category>>>,
    pub find_calls: Arc<Mutex<usize>>,
    write_fault: Option<String>,
    find_fault: Option<String>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// create/update 返回 `DomainError::Repository { reason }`
    pub fn failing_writes(reason: &str) -> Self {
        Self {
            write_fault: Some(reason.to_owned()),
            ..Self::default()
        }
    }

    /// find_by_id 返回 `DomainError::Repository { reason }`
    pub fn failing_reads(reason: &str) -> Self {
        Self {
            find_fault: Some(reason.to_owned()),
            ..Self::default()
        }
    }

    /// 绕过记录直接写入底层存储
    pub async fn seed(&self, category: Category) {
        self.inner.create(category).await.expect("seed category");
    }

    pub fn created(&self) -> Vec<Category> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Category> {
        self.updated.lock().unwrap().clone()
    }

    fn fault(reason: &Option<String>) -> DomainResult<()> {
        match reason {
            Some(reason) => Err(DomainError::Repository {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryGateway for RecordingGateway {
    async fn create(&self, category: Category) -> DomainResult<Category> {
        self.created.lock().unwrap().push(category.clone());
        Self::fault(&self.write_fault)?;
        self.inner.create(category).await
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        self.updated.lock().unwrap().push(category.clone());
        Self::fault(&self.write_fault)?;
        self.inner.update(category).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        *self.find_calls.lock().unwrap() += 1;
        Self::fault(&self.find_fault)?;
        self.inner.find_by_id(id).await
    }
}
