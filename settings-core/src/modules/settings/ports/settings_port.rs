// Settings Port
//
// 设置服务端口与错误类型定义

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::settings::domain::{
    Banner, CategoryChangedEvent, ContactInfo, CopyrightSettings, Feature, FooterColumn,
    FooterLink, MarketingBanner, NavLink, PageContent, PageContentPatch, PartialContactInfo,
    PartialCopyrightSettings, PartialStoreInfo, PartialThemeSettings, SettingsDocument,
    SettingsResetEvent, StoreInfo, ThemeSettings,
};
use crate::shared::SequenceEdit;

/// 设置错误类型
///
/// 水合失败不在此列：损坏的类别在内部回退为默认值，不上抛
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 回写失败；内存状态已变更且不回滚
    #[error("Write-back failed for category {category}: {reason}")]
    WriteBack {
        category: &'static str,
        reason: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}

/// 设置端口 - 视图层消费的读写操作全集
#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// 当前内存文档的快照
    async fn document(&self) -> SettingsDocument;

    // 单例类别的部分更新

    async fn update_store_info(&self, patch: PartialStoreInfo) -> Result<StoreInfo, SettingsError>;

    async fn update_contact_info(
        &self,
        patch: PartialContactInfo,
    ) -> Result<ContactInfo, SettingsError>;

    async fn update_theme(
        &self,
        patch: PartialThemeSettings,
    ) -> Result<ThemeSettings, SettingsError>;

    async fn update_copyright(
        &self,
        patch: PartialCopyrightSettings,
    ) -> Result<CopyrightSettings, SettingsError>;

    /// 更新页面内容；未知的页面键会创建新条目
    async fn update_page(
        &self,
        page_id: &str,
        patch: PageContentPatch,
    ) -> Result<PageContent, SettingsError>;

    // 有序集合的编辑操作

    async fn edit_banners(&self, edit: SequenceEdit<Banner>) -> Result<Vec<Banner>, SettingsError>;

    async fn edit_features(
        &self,
        edit: SequenceEdit<Feature>,
    ) -> Result<Vec<Feature>, SettingsError>;

    async fn edit_nav_links(
        &self,
        edit: SequenceEdit<NavLink>,
    ) -> Result<Vec<NavLink>, SettingsError>;

    async fn edit_footer_columns(
        &self,
        edit: SequenceEdit<FooterColumn>,
    ) -> Result<Vec<FooterColumn>, SettingsError>;

    /// 编辑指定页脚列内的链接序列；列 ID 未命中时整体为空操作
    async fn edit_footer_links(
        &self,
        column_id: &str,
        edit: SequenceEdit<FooterLink>,
    ) -> Result<Vec<FooterColumn>, SettingsError>;

    async fn edit_marketing_banners(
        &self,
        edit: SequenceEdit<MarketingBanner>,
    ) -> Result<Vec<MarketingBanner>, SettingsError>;

    // 生效条目选择器

    async fn active_banners(&self) -> Vec<Banner>;

    async fn active_nav_links(&self) -> Vec<NavLink>;

    async fn active_marketing_banners(&self, now: DateTime<Utc>) -> Vec<MarketingBanner>;

    /// 重置为内置默认值并清空持久层
    async fn reset(&self) -> Result<SettingsDocument, SettingsError>;
}

/// 设置观察者 - 监听类别变更
pub trait SettingsObserver: Send + Sync {
    /// 类别内存变更后调用（早于回写结果）
    fn on_category_changed(&self, event: &CategoryChangedEvent);

    /// 设置被整体重置后调用
    fn on_reset(&self, _event: &SettingsResetEvent) {}
}
