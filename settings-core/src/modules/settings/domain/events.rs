// Settings Domain Events
//
// 设置领域事件定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::SettingsCategory;

/// 类别变更事件
///
/// 内存变更后立即发出，不受回写结果影响
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryChangedEvent {
    pub category: SettingsCategory,
    pub timestamp: DateTime<Utc>,
}

impl CategoryChangedEvent {
    pub fn new(category: SettingsCategory) -> Self {
        Self {
            category,
            timestamp: Utc::now(),
        }
    }
}

/// 类别的水合来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsSource {
    /// 内置默认值（持久层缺失或损坏）
    Default,
    /// 持久层中的有效数据
    Provider,
}

/// 类别水合事件，记录每个类别的实际来源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsHydratedEvent {
    pub category: SettingsCategory,
    pub source: SettingsSource,
    pub timestamp: DateTime<Utc>,
}

impl SettingsHydratedEvent {
    pub fn new(category: SettingsCategory, source: SettingsSource) -> Self {
        Self {
            category,
            source,
            timestamp: Utc::now(),
        }
    }
}

/// 设置重置事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResetEvent {
    pub timestamp: DateTime<Utc>,
}

impl SettingsResetEvent {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

impl Default for SettingsResetEvent {
    fn default() -> Self {
        Self::new()
    }
}
