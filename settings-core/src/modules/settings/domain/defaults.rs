// Compiled-in Defaults
//
// 集合类别的内置默认值
// 持久层缺失或损坏时按类别回退到这里的种子数据

use std::collections::HashMap;

use super::collections::{Banner, Feature, FooterColumn, FooterLink, MarketingBanner, NavLink};
use super::entities::PageContent;
use super::value_objects::{page_keys, BannerPosition};

/// 默认首页横幅
pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: "1".to_string(),
            image: "/images/banners/hero-1.jpg".to_string(),
            title: "Welcome to MarketHub".to_string(),
            subtitle: "Shop thousands of products from trusted vendors".to_string(),
            button_text: "Shop Now".to_string(),
            button_link: "/products".to_string(),
            position: BannerPosition::Center,
            is_active: true,
        },
        Banner {
            id: "2".to_string(),
            image: "/images/banners/hero-2.jpg".to_string(),
            title: "Exclusive Tech Deals".to_string(),
            subtitle: "Save big on laptops, phones and accessories".to_string(),
            button_text: "Browse Deals".to_string(),
            button_link: "/category/electronics".to_string(),
            position: BannerPosition::Left,
            is_active: true,
        },
    ]
}

/// 默认特色项
pub fn features() -> Vec<Feature> {
    let items = [
        ("truck", "Free Shipping", "Free delivery on orders over $50"),
        ("shield", "Secure Payments", "Your transactions are protected"),
        ("refresh", "Easy Returns", "30-day hassle-free return policy"),
        ("headset", "24/7 Support", "We are here whenever you need us"),
    ];

    items
        .iter()
        .enumerate()
        .map(|(index, (icon, title, description))| Feature {
            id: (index + 1).to_string(),
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// 默认导航链接
pub fn nav_links() -> Vec<NavLink> {
    let items = [
        ("Home", "/"),
        ("Products", "/products"),
        ("Vendors", "/vendors"),
        ("About", "/about"),
        ("Contact", "/contact"),
    ];

    items
        .iter()
        .enumerate()
        .map(|(index, (text, url))| NavLink {
            id: (index + 1).to_string(),
            text: text.to_string(),
            url: url.to_string(),
            is_active: true,
        })
        .collect()
}

/// 默认页脚列
///
/// 链接 ID 以父列 ID 为命名空间
pub fn footer_columns() -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            id: "1".to_string(),
            title: "Quick Links".to_string(),
            links: footer_links(
                "1",
                &[
                    ("Home", "/"),
                    ("Products", "/products"),
                    ("Vendors", "/vendors"),
                    ("About Us", "/about"),
                    ("Contact", "/contact"),
                ],
            ),
        },
        FooterColumn {
            id: "2".to_string(),
            title: "Customer Service".to_string(),
            links: footer_links(
                "2",
                &[
                    ("FAQs", "/faqs"),
                    ("Shipping Information", "/shipping"),
                    ("Terms of Service", "/terms"),
                    ("Privacy Policy", "/privacy"),
                ],
            ),
        },
    ]
}

fn footer_links(column_id: &str, items: &[(&str, &str)]) -> Vec<FooterLink> {
    items
        .iter()
        .enumerate()
        .map(|(index, (text, url))| FooterLink {
            id: format!("{column_id}-{}", index + 1),
            text: text.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// 默认营销条：无种子数据，全部由管理员创建
pub fn marketing_banners() -> Vec<MarketingBanner> {
    Vec::new()
}

/// 默认静态页面内容，覆盖全部固定页面键
pub fn pages() -> HashMap<String, PageContent> {
    let entries = [
        (
            page_keys::ABOUT,
            "About Us",
            "The story behind MarketHub",
            "<p>MarketHub connects independent vendors with shoppers worldwide.</p>",
        ),
        (
            page_keys::CONTACT,
            "Contact Us",
            "We would love to hear from you",
            "<p>Reach our team through the form below or by email.</p>",
        ),
        (
            page_keys::TERMS,
            "Terms of Service",
            "",
            "<p>By using MarketHub you agree to the following terms.</p>",
        ),
        (
            page_keys::PRIVACY,
            "Privacy Policy",
            "",
            "<p>How we collect, use and protect your data.</p>",
        ),
        (
            page_keys::FAQS,
            "Frequently Asked Questions",
            "Answers to common questions",
            "<p>Find answers about ordering, shipping and returns.</p>",
        ),
        (
            page_keys::SHIPPING,
            "Shipping Information",
            "",
            "<p>Delivery times and shipping costs by region.</p>",
        ),
        (
            page_keys::VENDOR,
            "Become a Vendor",
            "Start selling on MarketHub today",
            "<p>Join thousands of vendors growing their business with us.</p>",
        ),
    ];

    entries
        .iter()
        .map(|(key, title, subtitle, content)| {
            (
                key.to_string(),
                PageContent {
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                    content: content.to_string(),
                    seo_title: format!("{title} | MarketHub"),
                    seo_description: String::new(),
                    banner_image: String::new(),
                    is_active: true,
                },
            )
        })
        .collect()
}
