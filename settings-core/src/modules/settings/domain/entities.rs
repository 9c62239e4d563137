// Settings Domain Entities
//
// 单例类别实体、页面内容与设置文档聚合根
// 单例类别支持部分字段合并（patch），未出现的字段保持不变

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::collections::{Banner, Feature, FooterColumn, MarketingBanner, NavLink};
use super::defaults;
use super::value_objects::{SettingsCategory, SocialLinks, ThemeMode};

/// 店铺基础信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social_links: SocialLinks,
    pub logo: String,
    pub favicon: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "MarketHub".to_string(),
            description: "Your one-stop multi-vendor marketplace".to_string(),
            email: "support@markethub.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "100 Commerce Street, Suite 500, San Francisco, CA".to_string(),
            social_links: SocialLinks {
                facebook: Some("https://facebook.com/markethub".to_string()),
                twitter: Some("https://twitter.com/markethub".to_string()),
                instagram: Some("https://instagram.com/markethub".to_string()),
                youtube: None,
            },
            logo: "/images/logo.svg".to_string(),
            favicon: "/favicon.ico".to_string(),
        }
    }
}

impl StoreInfo {
    /// 合并部分字段更新
    pub fn merge(&mut self, partial: PartialStoreInfo) {
        if let Some(name) = partial.name {
            self.name = name;
        }
        if let Some(description) = partial.description {
            self.description = description;
        }
        if let Some(email) = partial.email {
            self.email = email;
        }
        if let Some(phone) = partial.phone {
            self.phone = phone;
        }
        if let Some(address) = partial.address {
            self.address = address;
        }
        if let Some(social_links) = partial.social_links {
            self.social_links = social_links;
        }
        if let Some(logo) = partial.logo {
            self.logo = logo;
        }
        if let Some(favicon) = partial.favicon {
            self.favicon = favicon;
        }
    }
}

/// 店铺信息的部分更新
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialStoreInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
}

/// 联系方式配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub show_social_icons: bool,
    pub enable_newsletter_signup: bool,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@markethub.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "100 Commerce Street, Suite 500, San Francisco, CA".to_string(),
            show_social_icons: true,
            enable_newsletter_signup: true,
        }
    }
}

impl ContactInfo {
    pub fn merge(&mut self, partial: PartialContactInfo) {
        if let Some(email) = partial.email {
            self.email = email;
        }
        if let Some(phone) = partial.phone {
            self.phone = phone;
        }
        if let Some(address) = partial.address {
            self.address = address;
        }
        if let Some(show_social_icons) = partial.show_social_icons {
            self.show_social_icons = show_social_icons;
        }
        if let Some(enable_newsletter_signup) = partial.enable_newsletter_signup {
            self.enable_newsletter_signup = enable_newsletter_signup;
        }
    }
}

/// 联系方式的部分更新
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub show_social_icons: Option<bool>,
    pub enable_newsletter_signup: Option<bool>,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub border_radius: String,
    /// 自定义样式，本层不解析
    pub custom_css: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
            primary_color: "#2563eb".to_string(),
            secondary_color: "#0f172a".to_string(),
            accent_color: "#f59e0b".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            border_radius: "0.5rem".to_string(),
            custom_css: String::new(),
        }
    }
}

impl ThemeSettings {
    pub fn merge(&mut self, partial: PartialThemeSettings) {
        if let Some(mode) = partial.mode {
            self.mode = mode;
        }
        if let Some(primary_color) = partial.primary_color {
            self.primary_color = primary_color;
        }
        if let Some(secondary_color) = partial.secondary_color {
            self.secondary_color = secondary_color;
        }
        if let Some(accent_color) = partial.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(font_family) = partial.font_family {
            self.font_family = font_family;
        }
        if let Some(border_radius) = partial.border_radius {
            self.border_radius = border_radius;
        }
        if let Some(custom_css) = partial.custom_css {
            self.custom_css = custom_css;
        }
    }
}

/// 主题配置的部分更新
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialThemeSettings {
    pub mode: Option<ThemeMode>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub border_radius: Option<String>,
    pub custom_css: Option<String>,
}

/// 版权信息配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyrightSettings {
    pub text: String,
    pub show_year: bool,
    pub company_name: String,
    pub rights_text: String,
}

impl Default for CopyrightSettings {
    fn default() -> Self {
        Self {
            text: "Copyright".to_string(),
            show_year: true,
            company_name: "MarketHub Inc.".to_string(),
            rights_text: "All rights reserved.".to_string(),
        }
    }
}

impl CopyrightSettings {
    pub fn merge(&mut self, partial: PartialCopyrightSettings) {
        if let Some(text) = partial.text {
            self.text = text;
        }
        if let Some(show_year) = partial.show_year {
            self.show_year = show_year;
        }
        if let Some(company_name) = partial.company_name {
            self.company_name = company_name;
        }
        if let Some(rights_text) = partial.rights_text {
            self.rights_text = rights_text;
        }
    }
}

/// 版权信息的部分更新
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialCopyrightSettings {
    pub text: Option<String>,
    pub show_year: Option<bool>,
    pub company_name: Option<String>,
    pub rights_text: Option<String>,
}

/// 静态页面内容
///
/// content 为富文本/HTML 字符串，本层不解析不校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub seo_title: String,
    pub seo_description: String,
    pub banner_image: String,
    pub is_active: bool,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            content: String::new(),
            seo_title: String::new(),
            seo_description: String::new(),
            banner_image: String::new(),
            is_active: true,
        }
    }
}

impl PageContent {
    pub fn merge(&mut self, patch: PageContentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(seo_title) = patch.seo_title {
            self.seo_title = seo_title;
        }
        if let Some(seo_description) = patch.seo_description {
            self.seo_description = seo_description;
        }
        if let Some(banner_image) = patch.banner_image {
            self.banner_image = banner_image;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// 页面内容的部分更新
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageContentPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub banner_image: Option<String>,
    pub is_active: Option<bool>,
}

/// 设置文档聚合根
///
/// 全部配置类别的内存视图，生命周期与会话一致：
/// 启动时按类别水合，每次变更后按类别整体回写
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub store_info: StoreInfo,
    pub banners: Vec<Banner>,
    pub features: Vec<Feature>,
    pub nav_links: Vec<NavLink>,
    pub footer_columns: Vec<FooterColumn>,
    pub contact_info: ContactInfo,
    pub pages: HashMap<String, PageContent>,
    pub marketing_banners: Vec<MarketingBanner>,
    pub theme_settings: ThemeSettings,
    pub copyright_settings: CopyrightSettings,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            store_info: StoreInfo::default(),
            banners: defaults::banners(),
            features: defaults::features(),
            nav_links: defaults::nav_links(),
            footer_columns: defaults::footer_columns(),
            contact_info: ContactInfo::default(),
            pages: defaults::pages(),
            marketing_banners: defaults::marketing_banners(),
            theme_settings: ThemeSettings::default(),
            copyright_settings: CopyrightSettings::default(),
        }
    }
}

impl SettingsDocument {
    /// 提取某一类别的 JSON 值（用于回写）
    pub fn category_value(
        &self,
        category: SettingsCategory,
    ) -> Result<serde_json::Value, serde_json::Error> {
        match category {
            SettingsCategory::StoreInfo => serde_json::to_value(&self.store_info),
            SettingsCategory::Banners => serde_json::to_value(&self.banners),
            SettingsCategory::Features => serde_json::to_value(&self.features),
            SettingsCategory::NavLinks => serde_json::to_value(&self.nav_links),
            SettingsCategory::FooterColumns => serde_json::to_value(&self.footer_columns),
            SettingsCategory::ContactInfo => serde_json::to_value(&self.contact_info),
            SettingsCategory::Pages => serde_json::to_value(&self.pages),
            SettingsCategory::MarketingBanners => serde_json::to_value(&self.marketing_banners),
            SettingsCategory::ThemeSettings => serde_json::to_value(&self.theme_settings),
            SettingsCategory::CopyrightSettings => serde_json::to_value(&self.copyright_settings),
        }
    }

    /// 用持久化的 JSON 值替换某一类别
    ///
    /// 形状不符时返回错误且不改动文档，由调用方回退默认值
    pub fn apply_category_value(
        &mut self,
        category: SettingsCategory,
        value: serde_json::Value,
    ) -> Result<(), serde_json::Error> {
        match category {
            SettingsCategory::StoreInfo => self.store_info = serde_json::from_value(value)?,
            SettingsCategory::Banners => self.banners = serde_json::from_value(value)?,
            SettingsCategory::Features => self.features = serde_json::from_value(value)?,
            SettingsCategory::NavLinks => self.nav_links = serde_json::from_value(value)?,
            SettingsCategory::FooterColumns => {
                self.footer_columns = serde_json::from_value(value)?
            }
            SettingsCategory::ContactInfo => self.contact_info = serde_json::from_value(value)?,
            SettingsCategory::Pages => self.pages = serde_json::from_value(value)?,
            SettingsCategory::MarketingBanners => {
                self.marketing_banners = serde_json::from_value(value)?
            }
            SettingsCategory::ThemeSettings => {
                self.theme_settings = serde_json::from_value(value)?
            }
            SettingsCategory::CopyrightSettings => {
                self.copyright_settings = serde_json::from_value(value)?
            }
        }
        Ok(())
    }

    /// 将某一类别恢复为内置默认值
    pub fn reset_category(&mut self, category: SettingsCategory) {
        match category {
            SettingsCategory::StoreInfo => self.store_info = StoreInfo::default(),
            SettingsCategory::Banners => self.banners = defaults::banners(),
            SettingsCategory::Features => self.features = defaults::features(),
            SettingsCategory::NavLinks => self.nav_links = defaults::nav_links(),
            SettingsCategory::FooterColumns => self.footer_columns = defaults::footer_columns(),
            SettingsCategory::ContactInfo => self.contact_info = ContactInfo::default(),
            SettingsCategory::Pages => self.pages = defaults::pages(),
            SettingsCategory::MarketingBanners => {
                self.marketing_banners = defaults::marketing_banners()
            }
            SettingsCategory::ThemeSettings => self.theme_settings = ThemeSettings::default(),
            SettingsCategory::CopyrightSettings => {
                self.copyright_settings = CopyrightSettings::default()
            }
        }
    }
}
