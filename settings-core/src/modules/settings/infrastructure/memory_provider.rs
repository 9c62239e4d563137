// In-Memory Settings Provider
//
// 基于内存的持久化提供者实现（用于测试和开发）
// 支持注入写入失败，以便验证「乐观变更、不回滚」策略

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::settings::ports::{SettingsError, SettingsProvider};

/// 内存持久化提供者
#[derive(Default)]
pub struct InMemorySettingsProvider {
    values: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    fail_writes: AtomicBool,
}

impl InMemorySettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置某个类别键的内容（模拟已有的持久化数据）
    pub async fn seed(&self, key: &str, value: serde_json::Value) {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value);
    }

    /// 让后续写入失败（模拟持久层故障）
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// 当前存储的键数量
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettingsProvider {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), SettingsError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(SettingsError::Storage(
                "simulated write failure".to_string(),
            ));
        }

        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SettingsError> {
        let mut values = self.values.write().await;
        values.clear();
        Ok(())
    }
}
