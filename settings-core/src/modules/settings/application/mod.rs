// Settings Application Layer
//
// 应用层实现文档存储与 CQRS 命令和查询处理器

pub mod commands;
pub mod queries;
pub mod service;
pub mod store;

pub use commands::*;
pub use queries::*;
pub use service::*;
pub use store::*;
