// Settings Store
//
// 规范内存设置文档的持有者：启动时按类别水合，变更后按类别整体回写
// 回写失败不回滚内存状态（乐观策略），错误上抛由调用方提示用户

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::modules::settings::domain::{
    selectors, Banner, CategoryChangedEvent, ContactInfo, CopyrightSettings, Feature,
    FooterColumn, FooterLink, MarketingBanner, NavLink, PageContent, PageContentPatch,
    PartialContactInfo, PartialCopyrightSettings, PartialStoreInfo, PartialThemeSettings,
    SettingsCategory, SettingsDocument, SettingsHydratedEvent, SettingsResetEvent,
    SettingsSource, StoreInfo, ThemeSettings,
};
use crate::modules::settings::ports::{SettingsError, SettingsObserver, SettingsProvider};
use crate::shared::{sequence, IdGenerator, SequenceEdit};

/// 设置文档存储
///
/// 持久化提供者与 ID 生成策略均由构造注入
pub struct SettingsStore {
    document: RwLock<SettingsDocument>,
    provider: Arc<dyn SettingsProvider>,
    ids: Arc<dyn IdGenerator>,
    observers: RwLock<Vec<Arc<dyn SettingsObserver>>>,
}

impl SettingsStore {
    pub fn new(provider: Arc<dyn SettingsProvider>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            document: RwLock::new(SettingsDocument::default()),
            provider,
            ids,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// 从持久层水合全部类别
    ///
    /// 缺失、读取失败或形状不符的类别独立回退为内置默认值，
    /// 单个类别的损坏不影响其余类别
    pub async fn hydrate(&self) -> Vec<SettingsHydratedEvent> {
        let mut events = Vec::with_capacity(SettingsCategory::ALL.len());
        let mut document = self.document.write().await;

        for category in SettingsCategory::ALL {
            let source = match self.provider.get(category.key()).await {
                Ok(Some(value)) => match document.apply_category_value(category, value) {
                    Ok(()) => SettingsSource::Provider,
                    Err(e) => {
                        tracing::warn!(
                            "Stored blob for {} is malformed, falling back to default: {}",
                            category.key(),
                            e
                        );
                        document.reset_category(category);
                        SettingsSource::Default
                    }
                },
                Ok(None) => {
                    document.reset_category(category);
                    SettingsSource::Default
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to read {} from provider, falling back to default: {}",
                        category.key(),
                        e
                    );
                    document.reset_category(category);
                    SettingsSource::Default
                }
            };
            events.push(SettingsHydratedEvent::new(category, source));
        }

        tracing::info!("Settings document hydrated");
        events
    }

    /// 当前内存文档的快照，总是反映最近一次已提交的变更
    pub async fn document(&self) -> SettingsDocument {
        self.document.read().await.clone()
    }

    /// 注册类别变更观察者
    pub async fn subscribe(&self, observer: Arc<dyn SettingsObserver>) {
        self.observers.write().await.push(observer);
    }

    async fn notify_changed(&self, category: SettingsCategory) {
        let event = CategoryChangedEvent::new(category);
        let observers = self.observers.read().await;
        for observer in observers.iter() {
            observer.on_category_changed(&event);
        }
    }

    /// 回写整个变更类别；失败时内存状态保持已变更
    async fn write_back(&self, category: SettingsCategory) -> Result<(), SettingsError> {
        let value = {
            let document = self.document.read().await;
            document.category_value(category)?
        };

        self.provider
            .set(category.key(), &value)
            .await
            .map_err(|e| {
                tracing::warn!("Write-back failed for {}: {}", category.key(), e);
                SettingsError::WriteBack {
                    category: category.key(),
                    reason: e.to_string(),
                }
            })
    }

    /// 变更类别后的统一提交路径：先通知观察者，再回写
    async fn commit(&self, category: SettingsCategory) -> Result<(), SettingsError> {
        self.notify_changed(category).await;
        self.write_back(category).await
    }

    // 单例类别

    pub async fn update_store_info(
        &self,
        patch: PartialStoreInfo,
    ) -> Result<StoreInfo, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            document.store_info.merge(patch);
            document.store_info.clone()
        };
        self.commit(SettingsCategory::StoreInfo).await?;
        Ok(updated)
    }

    pub async fn update_contact_info(
        &self,
        patch: PartialContactInfo,
    ) -> Result<ContactInfo, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            document.contact_info.merge(patch);
            document.contact_info.clone()
        };
        self.commit(SettingsCategory::ContactInfo).await?;
        Ok(updated)
    }

    pub async fn update_theme(
        &self,
        patch: PartialThemeSettings,
    ) -> Result<ThemeSettings, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            document.theme_settings.merge(patch);
            document.theme_settings.clone()
        };
        self.commit(SettingsCategory::ThemeSettings).await?;
        Ok(updated)
    }

    pub async fn update_copyright(
        &self,
        patch: PartialCopyrightSettings,
    ) -> Result<CopyrightSettings, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            document.copyright_settings.merge(patch);
            document.copyright_settings.clone()
        };
        self.commit(SettingsCategory::CopyrightSettings).await?;
        Ok(updated)
    }

    /// 更新页面内容；未知的页面键会创建新条目（pages 为可扩展映射）
    pub async fn update_page(
        &self,
        page_id: &str,
        patch: PageContentPatch,
    ) -> Result<PageContent, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let page = document.pages.entry(page_id.to_string()).or_default();
            page.merge(patch);
            page.clone()
        };
        self.commit(SettingsCategory::Pages).await?;
        Ok(updated)
    }

    // 有序集合类别

    pub async fn edit_banners(
        &self,
        edit: SequenceEdit<Banner>,
    ) -> Result<Vec<Banner>, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let next = sequence::apply(&document.banners, edit, self.ids.as_ref(), "");
            document.banners = next;
            document.banners.clone()
        };
        self.commit(SettingsCategory::Banners).await?;
        Ok(updated)
    }

    pub async fn edit_features(
        &self,
        edit: SequenceEdit<Feature>,
    ) -> Result<Vec<Feature>, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let next = sequence::apply(&document.features, edit, self.ids.as_ref(), "");
            document.features = next;
            document.features.clone()
        };
        self.commit(SettingsCategory::Features).await?;
        Ok(updated)
    }

    pub async fn edit_nav_links(
        &self,
        edit: SequenceEdit<NavLink>,
    ) -> Result<Vec<NavLink>, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let next = sequence::apply(&document.nav_links, edit, self.ids.as_ref(), "");
            document.nav_links = next;
            document.nav_links.clone()
        };
        self.commit(SettingsCategory::NavLinks).await?;
        Ok(updated)
    }

    pub async fn edit_footer_columns(
        &self,
        edit: SequenceEdit<FooterColumn>,
    ) -> Result<Vec<FooterColumn>, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let next = sequence::apply(&document.footer_columns, edit, self.ids.as_ref(), "");
            document.footer_columns = next;
            document.footer_columns.clone()
        };
        self.commit(SettingsCategory::FooterColumns).await?;
        Ok(updated)
    }

    /// 编辑指定页脚列内的链接序列
    ///
    /// 新链接的 ID 以列 ID 为命名空间；列 ID 未命中时整体为空操作
    pub async fn edit_footer_links(
        &self,
        column_id: &str,
        edit: SequenceEdit<FooterLink>,
    ) -> Result<Vec<FooterColumn>, SettingsError> {
        let (updated, matched) = {
            let mut document = self.document.write().await;
            let matched = match document
                .footer_columns
                .iter_mut()
                .find(|c| c.id == column_id)
            {
                Some(column) => {
                    let next = sequence::apply(&column.links, edit, self.ids.as_ref(), column_id);
                    column.links = next;
                    true
                }
                None => false,
            };
            (document.footer_columns.clone(), matched)
        };
        if matched {
            self.commit(SettingsCategory::FooterColumns).await?;
        }
        Ok(updated)
    }

    pub async fn edit_marketing_banners(
        &self,
        edit: SequenceEdit<MarketingBanner>,
    ) -> Result<Vec<MarketingBanner>, SettingsError> {
        let updated = {
            let mut document = self.document.write().await;
            let next = sequence::apply(&document.marketing_banners, edit, self.ids.as_ref(), "");
            document.marketing_banners = next;
            document.marketing_banners.clone()
        };
        self.commit(SettingsCategory::MarketingBanners).await?;
        Ok(updated)
    }

    // 选择器

    pub async fn active_banners(&self) -> Vec<Banner> {
        let document = self.document.read().await;
        selectors::active_banners(&document)
    }

    pub async fn active_nav_links(&self) -> Vec<NavLink> {
        let document = self.document.read().await;
        selectors::active_nav_links(&document)
    }

    pub async fn active_marketing_banners(&self, now: DateTime<Utc>) -> Vec<MarketingBanner> {
        let document = self.document.read().await;
        selectors::active_marketing_banners(&document, now)
    }

    /// 重置为内置默认值并清空持久层
    pub async fn reset(&self) -> Result<SettingsDocument, SettingsError> {
        self.provider.clear().await?;

        let document = {
            let mut current = self.document.write().await;
            *current = SettingsDocument::default();
            current.clone()
        };

        let event = SettingsResetEvent::new();
        let observers = self.observers.read().await;
        for observer in observers.iter() {
            observer.on_reset(&event);
        }

        tracing::info!("Settings reset to defaults");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::domain::defaults;
    use crate::modules::settings::infrastructure::InMemorySettingsProvider;
    use crate::shared::SequentialIds;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store_with(provider: Arc<InMemorySettingsProvider>) -> SettingsStore {
        SettingsStore::new(provider, Arc::new(SequentialIds::starting_after(100)))
    }

    #[tokio::test]
    async fn test_hydrate_empty_provider_falls_back_to_defaults() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider);

        let events = store.hydrate().await;
        assert!(events.iter().all(|e| e.source == SettingsSource::Default));

        let document = store.document().await;
        assert_eq!(document.banners.len(), 2);
        assert_eq!(document.banners[0].id, "1");
        assert_eq!(document.banners[0].title, "Welcome to MarketHub");
        assert_eq!(document.banners[1].id, "2");
        assert_eq!(document.banners[1].title, "Exclusive Tech Deals");
    }

    #[tokio::test]
    async fn test_hydrate_isolates_corrupt_category() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        provider
            .seed("banners", serde_json::json!("not-a-sequence"))
            .await;
        provider
            .seed(
                "navLinks",
                serde_json::json!([
                    {"id": "9", "text": "Only", "url": "/only", "isActive": true}
                ]),
            )
            .await;

        let store = store_with(provider);
        let events = store.hydrate().await;

        let source_of = |category: SettingsCategory| {
            events
                .iter()
                .find(|e| e.category == category)
                .map(|e| e.source)
                .unwrap()
        };
        assert_eq!(source_of(SettingsCategory::Banners), SettingsSource::Default);
        assert_eq!(
            source_of(SettingsCategory::NavLinks),
            SettingsSource::Provider
        );

        let document = store.document().await;
        assert_eq!(document.banners, defaults::banners());
        assert_eq!(document.nav_links.len(), 1);
        assert_eq!(document.nav_links[0].id, "9");
    }

    #[tokio::test]
    async fn test_mutation_writes_back_whole_category() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider.clone());
        store.hydrate().await;

        store
            .edit_banners(SequenceEdit::Remove {
                id: "1".to_string(),
            })
            .await
            .unwrap();

        let persisted = provider.get("banners").await.unwrap().unwrap();
        let banners: Vec<Banner> = serde_json::from_value(persisted).unwrap();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].id, "2");
    }

    #[tokio::test]
    async fn test_write_back_failure_keeps_memory_mutated() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider.clone());
        store.hydrate().await;

        provider.set_fail_writes(true);
        let result = store
            .update_contact_info(PartialContactInfo {
                show_social_icons: Some(false),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(SettingsError::WriteBack { category: "contactInfo", .. })
        ));

        // 内存状态已变更，不回滚
        let document = store.document().await;
        assert!(!document.contact_info.show_social_icons);
    }

    #[tokio::test]
    async fn test_quick_links_append_then_remove_restores_default() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider);
        store.hydrate().await;

        let original = store.document().await.footer_columns;

        let columns = store
            .edit_footer_links("1", SequenceEdit::Append(FooterLink::new("New", "/new")))
            .await
            .unwrap();
        assert_eq!(columns[0].links.len(), 6);
        let new_id = columns[0].links[5].id.clone();
        assert!(new_id.starts_with("1-"));

        let restored = store
            .edit_footer_links("1", SequenceEdit::Remove { id: new_id })
            .await
            .unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored[0].links.len(), 5);
    }

    #[tokio::test]
    async fn test_footer_links_unknown_column_is_noop() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider.clone());
        store.hydrate().await;

        let observer = Arc::new(CountingObserver::new());
        store.subscribe(observer.clone()).await;

        let before = store.document().await.footer_columns;
        let after = store
            .edit_footer_links("missing", SequenceEdit::Append(FooterLink::new("X", "/x")))
            .await
            .unwrap();

        assert_eq!(after, before);
        // 未命中列：不通知观察者，也不回写
        assert_eq!(observer.changed.load(Ordering::Relaxed), 0);
        assert!(provider.get("footerColumns").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_page_touches_only_target_key() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider);
        store.hydrate().await;

        let before = store.document().await.pages;

        let updated = store
            .update_page(
                "about",
                PageContentPatch {
                    title: Some("New About".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New About");
        assert_eq!(updated.content, before["about"].content);

        let after = store.document().await.pages;
        for (key, page) in &before {
            if key != "about" {
                assert_eq!(&after[key], page);
            }
        }
    }

    #[tokio::test]
    async fn test_update_page_creates_unknown_key() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider);
        store.hydrate().await;

        let created = store
            .update_page(
                "returns",
                PageContentPatch {
                    title: Some("Returns".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(created.title, "Returns");
        assert!(store.document().await.pages.contains_key("returns"));
    }

    #[tokio::test]
    async fn test_append_assigns_id_from_injected_generator() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = SettingsStore::new(provider, Arc::new(SequentialIds::starting_after(100)));
        store.hydrate().await;

        let links = store
            .edit_nav_links(SequenceEdit::Append(NavLink::new("Deals", "/deals")))
            .await
            .unwrap();

        assert_eq!(links[links.len() - 1].id, "101");
    }

    #[tokio::test]
    async fn test_append_over_seeded_ids_stays_unique() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        // 计数器从 1 开始，与种子横幅的 ID "1"、"2" 正面冲突
        let store = SettingsStore::new(provider, Arc::new(SequentialIds::new()));
        store.hydrate().await;

        let item = store.document().await.banners[0].clone();
        let banners = store.edit_banners(SequenceEdit::Append(item)).await.unwrap();

        assert_eq!(banners.len(), 3);
        assert_eq!(banners[2].id, "3");
        let mut ids: Vec<&str> = banners.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), banners.len());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults_and_clears_provider() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider.clone());
        store.hydrate().await;

        store
            .edit_banners(SequenceEdit::ReplaceAll(Vec::new()))
            .await
            .unwrap();
        assert!(store.document().await.banners.is_empty());

        let document = store.reset().await.unwrap();
        assert_eq!(document.banners, defaults::banners());
        assert!(provider.is_empty().await);
    }

    struct CountingObserver {
        changed: AtomicUsize,
        resets: AtomicUsize,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                changed: AtomicUsize::new(0),
                resets: AtomicUsize::new(0),
            }
        }
    }

    impl SettingsObserver for CountingObserver {
        fn on_category_changed(&self, _event: &CategoryChangedEvent) {
            self.changed.fetch_add(1, Ordering::Relaxed);
        }

        fn on_reset(&self, _event: &SettingsResetEvent) {
            self.resets.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[tokio::test]
    async fn test_observers_receive_change_and_reset_events() {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = store_with(provider.clone());
        store.hydrate().await;

        let observer = Arc::new(CountingObserver::new());
        store.subscribe(observer.clone()).await;

        store
            .update_theme(PartialThemeSettings {
                primary_color: Some("#000000".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // 回写失败时观察者仍收到变更通知
        provider.set_fail_writes(true);
        let _ = store
            .edit_features(SequenceEdit::Append(Feature::new("star", "New", "desc")))
            .await;
        provider.set_fail_writes(false);

        store.reset().await.unwrap();

        assert_eq!(observer.changed.load(Ordering::Relaxed), 2);
        assert_eq!(observer.resets.load(Ordering::Relaxed), 1);
    }
}
