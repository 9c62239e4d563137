// Settings Module
//
// 店铺设置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含设置文档、类别实体、默认值与选择器
// - ports: 端口层，定义设置服务与持久化提供者的抽象接口
// - infrastructure: 基础设施层，实现具体的持久化提供者适配器
// - application: 应用层，实现文档存储与 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    Banner, BannerPosition, ContactInfo, CopyrightSettings, Feature, FooterColumn, FooterLink,
    MarketingBanner, MarketingPosition, NavLink, PageContent, PageContentPatch,
    PartialContactInfo, PartialCopyrightSettings, PartialStoreInfo, PartialThemeSettings,
    SettingsCategory, SettingsDocument, SocialLinks, StoreInfo, ThemeMode, ThemeSettings,
};

pub use domain::{
    CategoryChangedEvent, SettingsHydratedEvent, SettingsResetEvent, SettingsSource,
};

// Ports
pub use ports::{SettingsError, SettingsObserver, SettingsPort, SettingsProvider};

// Infrastructure
pub use infrastructure::{FileSettingsProvider, InMemorySettingsProvider};

// Application
pub use application::{CommandHandler, QueryHandler, SettingsService, SettingsStore};

use std::sync::Arc;

use crate::shared::{IdGenerator, UuidIds};

/// Settings 模块容器
///
/// 管理模块内的依赖注入
pub struct SettingsModule {
    store: Arc<SettingsStore>,
    service: SettingsService,
}

impl SettingsModule {
    /// 使用内存提供者创建（用于测试）
    pub fn new_in_memory() -> Self {
        let provider = Arc::new(InMemorySettingsProvider::new());
        Self::with_provider(provider, Arc::new(UuidIds::new()))
    }

    /// 使用文件存储创建
    pub fn new_with_store(data_dir: std::path::PathBuf) -> Self {
        let provider = Arc::new(FileSettingsProvider::new(data_dir));
        Self::with_provider(provider, Arc::new(UuidIds::new()))
    }

    /// 使用自定义提供者与 ID 生成策略创建
    pub fn with_provider(provider: Arc<dyn SettingsProvider>, ids: Arc<dyn IdGenerator>) -> Self {
        let store = Arc::new(SettingsStore::new(provider, ids));
        Self {
            service: SettingsService::new(store.clone()),
            store,
        }
    }

    /// 获取设置服务
    pub fn service(&self) -> &SettingsService {
        &self.service
    }

    /// 获取文档存储
    pub fn store(&self) -> &Arc<SettingsStore> {
        &self.store
    }

    /// 从持久层水合全部类别
    pub async fn hydrate(&self) -> Vec<SettingsHydratedEvent> {
        self.store.hydrate().await
    }

    /// 注册类别变更观察者
    pub async fn subscribe(&self, observer: Arc<dyn SettingsObserver>) {
        self.store.subscribe(observer).await;
    }

    /// 当前内存文档的快照
    pub async fn document(&self) -> SettingsDocument {
        self.service.document().await
    }

    /// 重置为内置默认值并清空持久层
    pub async fn reset(&self) -> Result<SettingsDocument, SettingsError> {
        self.service.reset().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{SequenceEdit, SequentialIds};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_settings_module_integration() {
        let module = SettingsModule::new_in_memory();
        module.hydrate().await;

        // 获取默认文档
        let document = module.document().await;
        assert_eq!(document.store_info.name, "MarketHub");
        assert_eq!(document.nav_links.len(), 5);

        // 更新店铺信息
        let updated = module
            .service()
            .update_store_info(PartialStoreInfo {
                name: Some("TechHub".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "TechHub");

        // 其他类别不受影响
        let document = module.document().await;
        assert_eq!(document.nav_links.len(), 5);

        // 重置
        let reset = module.reset().await.unwrap();
        assert_eq!(reset.store_info.name, "MarketHub");
    }

    #[tokio::test]
    async fn test_settings_module_persists_across_restarts() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        {
            let module = SettingsModule::new_with_store(data_dir.clone());
            module.hydrate().await;
            module
                .service()
                .update_contact_info(PartialContactInfo {
                    email: Some("support@techhub.example".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        // 重新创建模块，模拟重启
        let module = SettingsModule::new_with_store(data_dir);
        let events = module.hydrate().await;

        let contact_source = events
            .iter()
            .find(|e| e.category == SettingsCategory::ContactInfo)
            .map(|e| e.source)
            .unwrap();
        assert_eq!(contact_source, SettingsSource::Provider);

        let document = module.document().await;
        assert_eq!(document.contact_info.email, "support@techhub.example");
        // 未回写过的类别仍为默认值
        assert_eq!(document.banners.len(), 2);
    }

    #[tokio::test]
    async fn test_settings_module_footer_link_namespacing() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let module = SettingsModule::with_provider(
            provider,
            Arc::new(SequentialIds::starting_after(100)),
        );
        module.hydrate().await;

        let columns = module
            .service()
            .edit_footer_links("2", SequenceEdit::Append(FooterLink::new("Returns", "/returns")))
            .await
            .unwrap();

        let added = columns[1].links.last().unwrap();
        assert_eq!(added.id, "2-101");
    }
}
