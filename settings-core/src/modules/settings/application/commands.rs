// Settings Commands
//
// 设置相关的命令处理器

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::settings::domain::{
    Banner, ContactInfo, CopyrightSettings, Feature, FooterColumn, FooterLink, MarketingBanner,
    NavLink, PageContent, PageContentPatch, PartialContactInfo, PartialCopyrightSettings,
    PartialStoreInfo, PartialThemeSettings, SettingsDocument, StoreInfo, ThemeSettings,
};
use crate::modules::settings::ports::SettingsError;
use crate::shared::SequenceEdit;

use super::store::SettingsStore;

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C> {
    type Output;
    type Error;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}

// ============================================================================
// Update Store Info Command
// ============================================================================

/// 更新店铺信息命令
#[derive(Debug, Clone)]
pub struct UpdateStoreInfoCommand {
    pub patch: PartialStoreInfo,
}

impl UpdateStoreInfoCommand {
    pub fn new(patch: PartialStoreInfo) -> Self {
        Self { patch }
    }
}

/// 更新店铺信息响应
#[derive(Debug, Clone)]
pub struct UpdateStoreInfoResponse {
    pub store_info: StoreInfo,
}

/// 更新店铺信息命令处理器
pub struct UpdateStoreInfoHandler {
    store: Arc<SettingsStore>,
}

impl UpdateStoreInfoHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<UpdateStoreInfoCommand> for UpdateStoreInfoHandler {
    type Output = UpdateStoreInfoResponse;
    type Error = SettingsError;

    async fn handle(&self, command: UpdateStoreInfoCommand) -> Result<Self::Output, Self::Error> {
        let store_info = self.store.update_store_info(command.patch).await?;
        Ok(UpdateStoreInfoResponse { store_info })
    }
}

// ============================================================================
// Update Contact Info Command
// ============================================================================

/// 更新联系方式命令
#[derive(Debug, Clone)]
pub struct UpdateContactInfoCommand {
    pub patch: PartialContactInfo,
}

impl UpdateContactInfoCommand {
    pub fn new(patch: PartialContactInfo) -> Self {
        Self { patch }
    }
}

/// 更新联系方式响应
#[derive(Debug, Clone)]
pub struct UpdateContactInfoResponse {
    pub contact_info: ContactInfo,
}

/// 更新联系方式命令处理器
pub struct UpdateContactInfoHandler {
    store: Arc<SettingsStore>,
}

impl UpdateContactInfoHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<UpdateContactInfoCommand> for UpdateContactInfoHandler {
    type Output = UpdateContactInfoResponse;
    type Error = SettingsError;

    async fn handle(
        &self,
        command: UpdateContactInfoCommand,
    ) -> Result<Self::Output, Self::Error> {
        let contact_info = self.store.update_contact_info(command.patch).await?;
        Ok(UpdateContactInfoResponse { contact_info })
    }
}

// ============================================================================
// Update Theme Command
// ============================================================================

/// 更新主题配置命令
#[derive(Debug, Clone)]
pub struct UpdateThemeCommand {
    pub patch: PartialThemeSettings,
}

impl UpdateThemeCommand {
    pub fn new(patch: PartialThemeSettings) -> Self {
        Self { patch }
    }
}

/// 更新主题配置响应
#[derive(Debug, Clone)]
pub struct UpdateThemeResponse {
    pub theme_settings: ThemeSettings,
}

/// 更新主题配置命令处理器
pub struct UpdateThemeHandler {
    store: Arc<SettingsStore>,
}

impl UpdateThemeHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<UpdateThemeCommand> for UpdateThemeHandler {
    type Output = UpdateThemeResponse;
    type Error = SettingsError;

    async fn handle(&self, command: UpdateThemeCommand) -> Result<Self::Output, Self::Error> {
        let theme_settings = self.store.update_theme(command.patch).await?;
        Ok(UpdateThemeResponse { theme_settings })
    }
}

// ============================================================================
// Update Copyright Command
// ============================================================================

/// 更新版权信息命令
#[derive(Debug, Clone)]
pub struct UpdateCopyrightCommand {
    pub patch: PartialCopyrightSettings,
}

impl UpdateCopyrightCommand {
    pub fn new(patch: PartialCopyrightSettings) -> Self {
        Self { patch }
    }
}

/// 更新版权信息响应
#[derive(Debug, Clone)]
pub struct UpdateCopyrightResponse {
    pub copyright_settings: CopyrightSettings,
}

/// 更新版权信息命令处理器
pub struct UpdateCopyrightHandler {
    store: Arc<SettingsStore>,
}

impl UpdateCopyrightHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<UpdateCopyrightCommand> for UpdateCopyrightHandler {
    type Output = UpdateCopyrightResponse;
    type Error = SettingsError;

    async fn handle(&self, command: UpdateCopyrightCommand) -> Result<Self::Output, Self::Error> {
        let copyright_settings = self.store.update_copyright(command.patch).await?;
        Ok(UpdateCopyrightResponse { copyright_settings })
    }
}

// ============================================================================
// Update Page Command
// ============================================================================

/// 更新页面内容命令
#[derive(Debug, Clone)]
pub struct UpdatePageCommand {
    pub page_id: String,
    pub patch: PageContentPatch,
}

impl UpdatePageCommand {
    pub fn new(page_id: impl Into<String>, patch: PageContentPatch) -> Self {
        Self {
            page_id: page_id.into(),
            patch,
        }
    }
}

/// 更新页面内容响应
#[derive(Debug, Clone)]
pub struct UpdatePageResponse {
    pub page: PageContent,
}

/// 更新页面内容命令处理器
pub struct UpdatePageHandler {
    store: Arc<SettingsStore>,
}

impl UpdatePageHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<UpdatePageCommand> for UpdatePageHandler {
    type Output = UpdatePageResponse;
    type Error = SettingsError;

    async fn handle(&self, command: UpdatePageCommand) -> Result<Self::Output, Self::Error> {
        let page = self
            .store
            .update_page(&command.page_id, command.patch)
            .await?;
        Ok(UpdatePageResponse { page })
    }
}

// ============================================================================
// Edit Banners Command
// ============================================================================

/// 编辑首页横幅序列命令
#[derive(Debug, Clone)]
pub struct EditBannersCommand {
    pub edit: SequenceEdit<Banner>,
}

impl EditBannersCommand {
    pub fn new(edit: SequenceEdit<Banner>) -> Self {
        Self { edit }
    }
}

/// 编辑首页横幅序列响应
#[derive(Debug, Clone)]
pub struct EditBannersResponse {
    pub banners: Vec<Banner>,
}

/// 编辑首页横幅序列命令处理器
pub struct EditBannersHandler {
    store: Arc<SettingsStore>,
}

impl EditBannersHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditBannersCommand> for EditBannersHandler {
    type Output = EditBannersResponse;
    type Error = SettingsError;

    async fn handle(&self, command: EditBannersCommand) -> Result<Self::Output, Self::Error> {
        let banners = self.store.edit_banners(command.edit).await?;
        Ok(EditBannersResponse { banners })
    }
}

// ============================================================================
// Edit Features Command
// ============================================================================

/// 编辑特色项序列命令
#[derive(Debug, Clone)]
pub struct EditFeaturesCommand {
    pub edit: SequenceEdit<Feature>,
}

impl EditFeaturesCommand {
    pub fn new(edit: SequenceEdit<Feature>) -> Self {
        Self { edit }
    }
}

/// 编辑特色项序列响应
#[derive(Debug, Clone)]
pub struct EditFeaturesResponse {
    pub features: Vec<Feature>,
}

/// 编辑特色项序列命令处理器
pub struct EditFeaturesHandler {
    store: Arc<SettingsStore>,
}

impl EditFeaturesHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditFeaturesCommand> for EditFeaturesHandler {
    type Output = EditFeaturesResponse;
    type Error = SettingsError;

    async fn handle(&self, command: EditFeaturesCommand) -> Result<Self::Output, Self::Error> {
        let features = self.store.edit_features(command.edit).await?;
        Ok(EditFeaturesResponse { features })
    }
}

// ============================================================================
// Edit Nav Links Command
// ============================================================================

/// 编辑导航链接序列命令
#[derive(Debug, Clone)]
pub struct EditNavLinksCommand {
    pub edit: SequenceEdit<NavLink>,
}

impl EditNavLinksCommand {
    pub fn new(edit: SequenceEdit<NavLink>) -> Self {
        Self { edit }
    }
}

/// 编辑导航链接序列响应
#[derive(Debug, Clone)]
pub struct EditNavLinksResponse {
    pub nav_links: Vec<NavLink>,
}

/// 编辑导航链接序列命令处理器
pub struct EditNavLinksHandler {
    store: Arc<SettingsStore>,
}

impl EditNavLinksHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditNavLinksCommand> for EditNavLinksHandler {
    type Output = EditNavLinksResponse;
    type Error = SettingsError;

    async fn handle(&self, command: EditNavLinksCommand) -> Result<Self::Output, Self::Error> {
        let nav_links = self.store.edit_nav_links(command.edit).await?;
        Ok(EditNavLinksResponse { nav_links })
    }
}

// ============================================================================
// Edit Footer Columns Command
// ============================================================================

/// 编辑页脚列序列命令
#[derive(Debug, Clone)]
pub struct EditFooterColumnsCommand {
    pub edit: SequenceEdit<FooterColumn>,
}

impl EditFooterColumnsCommand {
    pub fn new(edit: SequenceEdit<FooterColumn>) -> Self {
        Self { edit }
    }
}

/// 编辑页脚列序列响应
#[derive(Debug, Clone)]
pub struct EditFooterColumnsResponse {
    pub footer_columns: Vec<FooterColumn>,
}

/// 编辑页脚列序列命令处理器
pub struct EditFooterColumnsHandler {
    store: Arc<SettingsStore>,
}

impl EditFooterColumnsHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditFooterColumnsCommand> for EditFooterColumnsHandler {
    type Output = EditFooterColumnsResponse;
    type Error = SettingsError;

    async fn handle(
        &self,
        command: EditFooterColumnsCommand,
    ) -> Result<Self::Output, Self::Error> {
        let footer_columns = self.store.edit_footer_columns(command.edit).await?;
        Ok(EditFooterColumnsResponse { footer_columns })
    }
}

// ============================================================================
// Edit Footer Links Command
// ============================================================================

/// 编辑页脚链接序列命令（作用于指定列）
#[derive(Debug, Clone)]
pub struct EditFooterLinksCommand {
    pub column_id: String,
    pub edit: SequenceEdit<FooterLink>,
}

impl EditFooterLinksCommand {
    pub fn new(column_id: impl Into<String>, edit: SequenceEdit<FooterLink>) -> Self {
        Self {
            column_id: column_id.into(),
            edit,
        }
    }
}

/// 编辑页脚链接序列响应
#[derive(Debug, Clone)]
pub struct EditFooterLinksResponse {
    pub footer_columns: Vec<FooterColumn>,
}

/// 编辑页脚链接序列命令处理器
pub struct EditFooterLinksHandler {
    store: Arc<SettingsStore>,
}

impl EditFooterLinksHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditFooterLinksCommand> for EditFooterLinksHandler {
    type Output = EditFooterLinksResponse;
    type Error = SettingsError;

    async fn handle(&self, command: EditFooterLinksCommand) -> Result<Self::Output, Self::Error> {
        let footer_columns = self
            .store
            .edit_footer_links(&command.column_id, command.edit)
            .await?;
        Ok(EditFooterLinksResponse { footer_columns })
    }
}

// ============================================================================
// Edit Marketing Banners Command
// ============================================================================

/// 编辑营销条序列命令
#[derive(Debug, Clone)]
pub struct EditMarketingBannersCommand {
    pub edit: SequenceEdit<MarketingBanner>,
}

impl EditMarketingBannersCommand {
    pub fn new(edit: SequenceEdit<MarketingBanner>) -> Self {
        Self { edit }
    }
}

/// 编辑营销条序列响应
#[derive(Debug, Clone)]
pub struct EditMarketingBannersResponse {
    pub marketing_banners: Vec<MarketingBanner>,
}

/// 编辑营销条序列命令处理器
pub struct EditMarketingBannersHandler {
    store: Arc<SettingsStore>,
}

impl EditMarketingBannersHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditMarketingBannersCommand> for EditMarketingBannersHandler {
    type Output = EditMarketingBannersResponse;
    type Error = SettingsError;

    async fn handle(
        &self,
        command: EditMarketingBannersCommand,
    ) -> Result<Self::Output, Self::Error> {
        let marketing_banners = self.store.edit_marketing_banners(command.edit).await?;
        Ok(EditMarketingBannersResponse { marketing_banners })
    }
}

// ============================================================================
// Reset Settings Command
// ============================================================================

/// 重置设置命令
#[derive(Debug, Clone)]
pub struct ResetSettingsCommand;

/// 重置设置响应
#[derive(Debug, Clone)]
pub struct ResetSettingsResponse {
    pub document: SettingsDocument,
}

/// 重置设置命令处理器
pub struct ResetSettingsHandler {
    store: Arc<SettingsStore>,
}

impl ResetSettingsHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<ResetSettingsCommand> for ResetSettingsHandler {
    type Output = ResetSettingsResponse;
    type Error = SettingsError;

    async fn handle(&self, _command: ResetSettingsCommand) -> Result<Self::Output, Self::Error> {
        let document = self.store.reset().await?;
        Ok(ResetSettingsResponse { document })
    }
}
