// Settings Service
//
// 设置服务门面，提供统一的 API

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::{
    ActiveBannersHandler, ActiveBannersQuery, ActiveMarketingBannersHandler,
    ActiveMarketingBannersQuery, ActiveNavLinksHandler, ActiveNavLinksQuery, CommandHandler,
    EditBannersCommand, EditBannersHandler, EditFeaturesCommand, EditFeaturesHandler,
    EditFooterColumnsCommand, EditFooterColumnsHandler, EditFooterLinksCommand,
    EditFooterLinksHandler, EditMarketingBannersCommand, EditMarketingBannersHandler,
    EditNavLinksCommand, EditNavLinksHandler, GetCategoryValueHandler, GetCategoryValueQuery,
    GetDocumentHandler, GetDocumentQuery, QueryHandler, ResetSettingsCommand,
    ResetSettingsHandler, SettingsStore, UpdateContactInfoCommand, UpdateContactInfoHandler,
    UpdateCopyrightCommand, UpdateCopyrightHandler, UpdatePageCommand, UpdatePageHandler,
    UpdateStoreInfoCommand, UpdateStoreInfoHandler, UpdateThemeCommand, UpdateThemeHandler,
};
use crate::modules::settings::domain::{
    Banner, ContactInfo, CopyrightSettings, Feature, FooterColumn, FooterLink, MarketingBanner,
    NavLink, PageContent, PageContentPatch, PartialContactInfo, PartialCopyrightSettings,
    PartialStoreInfo, PartialThemeSettings, SettingsCategory, SettingsDocument, StoreInfo,
    ThemeSettings,
};
use crate::modules::settings::ports::{SettingsError, SettingsPort};
use crate::shared::SequenceEdit;

/// 设置服务实现
pub struct SettingsService {
    store: Arc<SettingsStore>,
    // Handlers
    get_document_handler: GetDocumentHandler,
    get_category_value_handler: GetCategoryValueHandler,
    update_store_info_handler: UpdateStoreInfoHandler,
    update_contact_info_handler: UpdateContactInfoHandler,
    update_theme_handler: UpdateThemeHandler,
    update_copyright_handler: UpdateCopyrightHandler,
    update_page_handler: UpdatePageHandler,
    edit_banners_handler: EditBannersHandler,
    edit_features_handler: EditFeaturesHandler,
    edit_nav_links_handler: EditNavLinksHandler,
    edit_footer_columns_handler: EditFooterColumnsHandler,
    edit_footer_links_handler: EditFooterLinksHandler,
    edit_marketing_banners_handler: EditMarketingBannersHandler,
    active_banners_handler: ActiveBannersHandler,
    active_nav_links_handler: ActiveNavLinksHandler,
    active_marketing_banners_handler: ActiveMarketingBannersHandler,
    reset_handler: ResetSettingsHandler,
}

impl SettingsService {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self {
            get_document_handler: GetDocumentHandler::new(store.clone()),
            get_category_value_handler: GetCategoryValueHandler::new(store.clone()),
            update_store_info_handler: UpdateStoreInfoHandler::new(store.clone()),
            update_contact_info_handler: UpdateContactInfoHandler::new(store.clone()),
            update_theme_handler: UpdateThemeHandler::new(store.clone()),
            update_copyright_handler: UpdateCopyrightHandler::new(store.clone()),
            update_page_handler: UpdatePageHandler::new(store.clone()),
            edit_banners_handler: EditBannersHandler::new(store.clone()),
            edit_features_handler: EditFeaturesHandler::new(store.clone()),
            edit_nav_links_handler: EditNavLinksHandler::new(store.clone()),
            edit_footer_columns_handler: EditFooterColumnsHandler::new(store.clone()),
            edit_footer_links_handler: EditFooterLinksHandler::new(store.clone()),
            edit_marketing_banners_handler: EditMarketingBannersHandler::new(store.clone()),
            active_banners_handler: ActiveBannersHandler::new(store.clone()),
            active_nav_links_handler: ActiveNavLinksHandler::new(store.clone()),
            active_marketing_banners_handler: ActiveMarketingBannersHandler::new(store.clone()),
            reset_handler: ResetSettingsHandler::new(store.clone()),
            store,
        }
    }

    /// 获取文档存储引用
    pub fn store(&self) -> &Arc<SettingsStore> {
        &self.store
    }

    /// 获取单个类别的 JSON 值
    pub async fn category_value(
        &self,
        category: SettingsCategory,
    ) -> Result<serde_json::Value, SettingsError> {
        self.get_category_value_handler
            .handle(GetCategoryValueQuery::new(category))
            .await
    }
}

#[async_trait]
impl SettingsPort for SettingsService {
    async fn document(&self) -> SettingsDocument {
        self.get_document_handler
            .handle(GetDocumentQuery)
            .await
            .unwrap_or_default()
    }

    async fn update_store_info(
        &self,
        patch: PartialStoreInfo,
    ) -> Result<StoreInfo, SettingsError> {
        let response = self
            .update_store_info_handler
            .handle(UpdateStoreInfoCommand::new(patch))
            .await?;
        Ok(response.store_info)
    }

    async fn update_contact_info(
        &self,
        patch: PartialContactInfo,
    ) -> Result<ContactInfo, SettingsError> {
        let response = self
            .update_contact_info_handler
            .handle(UpdateContactInfoCommand::new(patch))
            .await?;
        Ok(response.contact_info)
    }

    async fn update_theme(
        &self,
        patch: PartialThemeSettings,
    ) -> Result<ThemeSettings, SettingsError> {
        let response = self
            .update_theme_handler
            .handle(UpdateThemeCommand::new(patch))
            .await?;
        Ok(response.theme_settings)
    }

    async fn update_copyright(
        &self,
        patch: PartialCopyrightSettings,
    ) -> Result<CopyrightSettings, SettingsError> {
        let response = self
            .update_copyright_handler
            .handle(UpdateCopyrightCommand::new(patch))
            .await?;
        Ok(response.copyright_settings)
    }

    async fn update_page(
        &self,
        page_id: &str,
        patch: PageContentPatch,
    ) -> Result<PageContent, SettingsError> {
        let response = self
            .update_page_handler
            .handle(UpdatePageCommand::new(page_id, patch))
            .await?;
        Ok(response.page)
    }

    async fn edit_banners(&self, edit: SequenceEdit<Banner>) -> Result<Vec<Banner>, SettingsError> {
        let response = self
            .edit_banners_handler
            .handle(EditBannersCommand::new(edit))
            .await?;
        Ok(response.banners)
    }

    async fn edit_features(
        &self,
        edit: SequenceEdit<Feature>,
    ) -> Result<Vec<Feature>, SettingsError> {
        let response = self
            .edit_features_handler
            .handle(EditFeaturesCommand::new(edit))
            .await?;
        Ok(response.features)
    }

    async fn edit_nav_links(
        &self,
        edit: SequenceEdit<NavLink>,
    ) -> Result<Vec<NavLink>, SettingsError> {
        let response = self
            .edit_nav_links_handler
            .handle(EditNavLinksCommand::new(edit))
            .await?;
        Ok(response.nav_links)
    }

    async fn edit_footer_columns(
        &self,
        edit: SequenceEdit<FooterColumn>,
    ) -> Result<Vec<FooterColumn>, SettingsError> {
        let response = self
            .edit_footer_columns_handler
            .handle(EditFooterColumnsCommand::new(edit))
            .await?;
        Ok(response.footer_columns)
    }

    async fn edit_footer_links(
        &self,
        column_id: &str,
        edit: SequenceEdit<FooterLink>,
    ) -> Result<Vec<FooterColumn>, SettingsError> {
        let response = self
            .edit_footer_links_handler
            .handle(EditFooterLinksCommand::new(column_id, edit))
            .await?;
        Ok(response.footer_columns)
    }

    async fn edit_marketing_banners(
        &self,
        edit: SequenceEdit<MarketingBanner>,
    ) -> Result<Vec<MarketingBanner>, SettingsError> {
        let response = self
            .edit_marketing_banners_handler
            .handle(EditMarketingBannersCommand::new(edit))
            .await?;
        Ok(response.marketing_banners)
    }

    async fn active_banners(&self) -> Vec<Banner> {
        self.active_banners_handler
            .handle(ActiveBannersQuery)
            .await
            .unwrap_or_default()
    }

    async fn active_nav_links(&self) -> Vec<NavLink> {
        self.active_nav_links_handler
            .handle(ActiveNavLinksQuery)
            .await
            .unwrap_or_default()
    }

    async fn active_marketing_banners(&self, now: DateTime<Utc>) -> Vec<MarketingBanner> {
        self.active_marketing_banners_handler
            .handle(ActiveMarketingBannersQuery::new(now))
            .await
            .unwrap_or_default()
    }

    async fn reset(&self) -> Result<SettingsDocument, SettingsError> {
        let response = self.reset_handler.handle(ResetSettingsCommand).await?;
        Ok(response.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::domain::ThemeMode;
    use crate::modules::settings::infrastructure::InMemorySettingsProvider;
    use crate::shared::SequentialIds;

    async fn new_service() -> SettingsService {
        let provider = Arc::new(InMemorySettingsProvider::new());
        let store = Arc::new(SettingsStore::new(
            provider,
            Arc::new(SequentialIds::starting_after(100)),
        ));
        store.hydrate().await;
        SettingsService::new(store)
    }

    #[tokio::test]
    async fn test_settings_service() {
        let service = new_service().await;

        // 获取完整文档
        let document = service.document().await;
        assert_eq!(document.theme_settings.mode, ThemeMode::System);

        // 更新主题
        let updated = service
            .update_theme(PartialThemeSettings {
                mode: Some(ThemeMode::Dark),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.mode, ThemeMode::Dark);

        // 重置设置
        let reset = service.reset().await.unwrap();
        assert_eq!(reset.theme_settings.mode, ThemeMode::System);
    }

    #[tokio::test]
    async fn test_service_sequence_editing() {
        let service = new_service().await;

        // 追加导航链接，ID 由注入的生成器分配
        let links = service
            .edit_nav_links(SequenceEdit::Append(NavLink::new("Deals", "/deals")))
            .await
            .unwrap();
        assert_eq!(links.last().unwrap().id, "101");

        // 删除后恢复默认序列
        let links = service
            .edit_nav_links(SequenceEdit::Remove {
                id: "101".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(links.len(), 5);
    }

    #[tokio::test]
    async fn test_service_category_value() {
        let service = new_service().await;

        let value = service
            .category_value(SettingsCategory::ContactInfo)
            .await
            .unwrap();
        assert!(value.get("email").is_some());
    }
}
