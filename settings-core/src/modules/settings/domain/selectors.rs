// Active-Item Selectors
//
// 纯派生函数：按可见标志与日期窗口筛选当前生效的条目
// 每次调用重新计算，不做缓存

use chrono::{DateTime, NaiveTime, Utc};

use super::collections::{Banner, MarketingBanner, NavLink};
use super::entities::SettingsDocument;

/// 当前生效的首页横幅，保持原有顺序
pub fn active_banners(document: &SettingsDocument) -> Vec<Banner> {
    document
        .banners
        .iter()
        .filter(|banner| banner.is_active)
        .cloned()
        .collect()
}

/// 当前生效的导航链接，保持原有顺序
pub fn active_nav_links(document: &SettingsDocument) -> Vec<NavLink> {
    document
        .nav_links
        .iter()
        .filter(|link| link.is_active)
        .cloned()
        .collect()
}

/// 当前生效的营销条
///
/// 条件：isActive 且 startDate <= now <= endDate
/// 两端日期锚定到 UTC 零点，闭区间
pub fn active_marketing_banners(
    document: &SettingsDocument,
    now: DateTime<Utc>,
) -> Vec<MarketingBanner> {
    document
        .marketing_banners
        .iter()
        .filter(|banner| banner.is_active && in_window(banner, now))
        .cloned()
        .collect()
}

fn in_window(banner: &MarketingBanner, now: DateTime<Utc>) -> bool {
    let start = banner.start_date.and_time(NaiveTime::MIN).and_utc();
    let end = banner.end_date.and_time(NaiveTime::MIN).and_utc();
    now >= start && now <= end
}
