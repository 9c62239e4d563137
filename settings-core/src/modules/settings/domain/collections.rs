// Collection Entities
//
// 有序集合类别的实体定义：首页横幅、特色项、导航链接、营销条、页脚列与页脚链接
// 序列顺序即展示顺序，由调用方通过上移/下移控制

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::Keyed;

use super::value_objects::{BannerPosition, MarketingPosition};

/// 首页横幅
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub position: BannerPosition,
    pub is_active: bool,
}

impl Keyed for Banner {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// 特色项（图标为符号名，不做校验）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Keyed for Feature {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// 导航链接
///
/// isActive 控制可见性，与删除不同：隐藏的链接仍保留在序列中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub id: String,
    pub text: String,
    pub url: String,
    pub is_active: bool,
}

impl NavLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
            url: url.into(),
            is_active: true,
        }
    }
}

impl Keyed for NavLink {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// 页脚链接
///
/// ID 在创建时以父列 ID 为命名空间，但查找始终按「列 ID + 链接 ID」进行，
/// 不依赖链接 ID 的全局唯一性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub id: String,
    pub text: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
            url: url.into(),
        }
    }
}

impl Keyed for FooterLink {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// 页脚列，独占其链接序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumn {
    pub id: String,
    pub title: String,
    pub links: Vec<FooterLink>,
}

impl Keyed for FooterColumn {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// 营销条
///
/// 日期范围为闭区间，两端锚定到 UTC 零点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingBanner {
    pub id: String,
    pub title: String,
    pub content: String,
    pub background_color: String,
    pub text_color: String,
    pub button_text: String,
    pub button_link: String,
    pub button_color: String,
    pub position: MarketingPosition,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl Keyed for MarketingBanner {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_starts_active() {
        let link = NavLink::new("Home", "/");
        assert!(link.is_active);
        assert!(link.id.is_empty());
    }

    #[test]
    fn test_marketing_banner_date_serde() {
        let json = serde_json::json!({
            "id": "m1",
            "title": "Summer Sale",
            "content": "Up to 50% off",
            "backgroundColor": "#ff5722",
            "textColor": "#ffffff",
            "buttonText": "Shop",
            "buttonLink": "/sale",
            "buttonColor": "#000000",
            "position": "top",
            "startDate": "2025-06-01",
            "endDate": "2025-08-31",
            "isActive": true
        });

        let banner: MarketingBanner = serde_json::from_value(json).unwrap();
        assert_eq!(
            banner.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(banner.position, MarketingPosition::Top);
    }
}
