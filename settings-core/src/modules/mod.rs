// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - settings: 设置模块，处理店铺设置文档

pub mod settings;

pub use settings::SettingsModule;
