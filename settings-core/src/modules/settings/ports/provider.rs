// Settings Provider Port
//
// 持久化提供者端口：每个类别一个键的 JSON 读写抽象
// 不保证跨键的原子性，各类别独立持久化

use async_trait::async_trait;

use super::SettingsError;

/// 持久化提供者
///
/// 键为类别键（storeInfo、banners 等），值为该类别的完整 JSON
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// 读取某个类别键的 JSON 值，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError>;

    /// 写入某个类别键的 JSON 值，整体覆盖
    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), SettingsError>;

    /// 清除全部持久化内容
    async fn clear(&self) -> Result<(), SettingsError>;
}
