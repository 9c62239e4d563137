// MarketHub Settings Core
//
// 店铺设置文档库：按类别水合、按类别整体回写，
// 损坏的类别独立回退为内置默认值

pub mod modules;
pub mod shared;

pub use modules::settings::{
    Banner, ContactInfo, CopyrightSettings, Feature, FooterColumn, FooterLink, MarketingBanner,
    NavLink, PageContent, PageContentPatch, PartialContactInfo, PartialCopyrightSettings,
    PartialStoreInfo, PartialThemeSettings, SettingsCategory, SettingsDocument, SettingsError,
    SettingsObserver, SettingsPort, SettingsProvider, SettingsService, SettingsStore, StoreInfo,
    ThemeSettings,
};
pub use modules::SettingsModule;
pub use shared::{IdGenerator, SequenceEdit, SequentialIds, UuidIds};
