// Settings Queries
//
// 设置相关的查询处理器

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::settings::domain::{
    Banner, MarketingBanner, NavLink, SettingsCategory, SettingsDocument,
};
use crate::modules::settings::ports::SettingsError;

use super::store::SettingsStore;

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q> {
    type Output;
    type Error;

    async fn handle(&self, query: Q) -> Result<Self::Output, Self::Error>;
}

// ============================================================================
// Get Document Query
// ============================================================================

/// 获取完整设置文档查询
#[derive(Debug, Clone)]
pub struct GetDocumentQuery;

/// 获取完整设置文档查询处理器
pub struct GetDocumentHandler {
    store: Arc<SettingsStore>,
}

impl GetDocumentHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<GetDocumentQuery> for GetDocumentHandler {
    type Output = SettingsDocument;
    type Error = SettingsError;

    async fn handle(&self, _query: GetDocumentQuery) -> Result<Self::Output, Self::Error> {
        Ok(self.store.document().await)
    }
}

// ============================================================================
// Get Category Value Query
// ============================================================================

/// 获取单个类别的 JSON 值查询
#[derive(Debug, Clone)]
pub struct GetCategoryValueQuery {
    pub category: SettingsCategory,
}

impl GetCategoryValueQuery {
    pub fn new(category: SettingsCategory) -> Self {
        Self { category }
    }
}

/// 获取单个类别的 JSON 值查询处理器
pub struct GetCategoryValueHandler {
    store: Arc<SettingsStore>,
}

impl GetCategoryValueHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<GetCategoryValueQuery> for GetCategoryValueHandler {
    type Output = serde_json::Value;
    type Error = SettingsError;

    async fn handle(&self, query: GetCategoryValueQuery) -> Result<Self::Output, Self::Error> {
        let document = self.store.document().await;
        Ok(document.category_value(query.category)?)
    }
}

// ============================================================================
// Active Banners Query
// ============================================================================

/// 获取启用中的首页横幅查询
#[derive(Debug, Clone)]
pub struct ActiveBannersQuery;

/// 获取启用中的首页横幅查询处理器
pub struct ActiveBannersHandler {
    store: Arc<SettingsStore>,
}

impl ActiveBannersHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<ActiveBannersQuery> for ActiveBannersHandler {
    type Output = Vec<Banner>;
    type Error = SettingsError;

    async fn handle(&self, _query: ActiveBannersQuery) -> Result<Self::Output, Self::Error> {
        Ok(self.store.active_banners().await)
    }
}

// ============================================================================
// Active Nav Links Query
// ============================================================================

/// 获取启用中的导航链接查询
#[derive(Debug, Clone)]
pub struct ActiveNavLinksQuery;

/// 获取启用中的导航链接查询处理器
pub struct ActiveNavLinksHandler {
    store: Arc<SettingsStore>,
}

impl ActiveNavLinksHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<ActiveNavLinksQuery> for ActiveNavLinksHandler {
    type Output = Vec<NavLink>;
    type Error = SettingsError;

    async fn handle(&self, _query: ActiveNavLinksQuery) -> Result<Self::Output, Self::Error> {
        Ok(self.store.active_nav_links().await)
    }
}

// ============================================================================
// Active Marketing Banners Query
// ============================================================================

/// 获取当前投放中的营销条查询
///
/// 调用方注入查询时刻，日期窗口按 UTC 零点对齐、两端闭区间
#[derive(Debug, Clone)]
pub struct ActiveMarketingBannersQuery {
    pub now: DateTime<Utc>,
}

impl ActiveMarketingBannersQuery {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// 获取当前投放中的营销条查询处理器
pub struct ActiveMarketingBannersHandler {
    store: Arc<SettingsStore>,
}

impl ActiveMarketingBannersHandler {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<ActiveMarketingBannersQuery> for ActiveMarketingBannersHandler {
    type Output = Vec<MarketingBanner>;
    type Error = SettingsError;

    async fn handle(
        &self,
        query: ActiveMarketingBannersQuery,
    ) -> Result<Self::Output, Self::Error> {
        Ok(self.store.active_marketing_banners(query.now).await)
    }
}
