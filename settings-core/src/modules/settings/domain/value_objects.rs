// Settings Value Objects
//
// 店铺设置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 设置类别
///
/// 每个类别独立水合与回写，互不影响
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsCategory {
    StoreInfo,
    Banners,
    Features,
    NavLinks,
    FooterColumns,
    ContactInfo,
    Pages,
    MarketingBanners,
    ThemeSettings,
    CopyrightSettings,
}

impl SettingsCategory {
    pub const ALL: [SettingsCategory; 10] = [
        SettingsCategory::StoreInfo,
        SettingsCategory::Banners,
        SettingsCategory::Features,
        SettingsCategory::NavLinks,
        SettingsCategory::FooterColumns,
        SettingsCategory::ContactInfo,
        SettingsCategory::Pages,
        SettingsCategory::MarketingBanners,
        SettingsCategory::ThemeSettings,
        SettingsCategory::CopyrightSettings,
    ];

    /// 持久化键，与前端存储键保持一致
    pub fn key(&self) -> &'static str {
        match self {
            SettingsCategory::StoreInfo => "storeInfo",
            SettingsCategory::Banners => "banners",
            SettingsCategory::Features => "features",
            SettingsCategory::NavLinks => "navLinks",
            SettingsCategory::FooterColumns => "footerColumns",
            SettingsCategory::ContactInfo => "contactInfo",
            SettingsCategory::Pages => "pages",
            SettingsCategory::MarketingBanners => "marketingBanners",
            SettingsCategory::ThemeSettings => "themeSettings",
            SettingsCategory::CopyrightSettings => "copyrightSettings",
        }
    }
}

/// 首页横幅的内容对齐位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// 营销条的停靠位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketingPosition {
    #[default]
    Top,
    Bottom,
}

/// 主题模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl From<&str> for ThemeMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }
}

/// 社交链接集合，均为可选
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// 固定页面键
///
/// 键集固定为以下七个，但 pages 映射允许出现未知键而不报错
pub mod page_keys {
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const TERMS: &str = "terms";
    pub const PRIVACY: &str = "privacy";
    pub const FAQS: &str = "faqs";
    pub const SHIPPING: &str = "shipping";
    pub const VENDOR: &str = "vendor";

    pub const ALL: [&str; 7] = [ABOUT, CONTACT, TERMS, PRIVACY, FAQS, SHIPPING, VENDOR];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_are_unique() {
        let mut keys: Vec<&str> = SettingsCategory::ALL.iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SettingsCategory::ALL.len());
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!(ThemeMode::from("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from("DARK"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from("anything"), ThemeMode::System);
    }

    #[test]
    fn test_banner_position_serde() {
        let json = serde_json::to_string(&BannerPosition::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }
}
