// Settings Infrastructure Layer
//
// 设置模块的持久化提供者实现

pub mod file_provider;
pub mod memory_provider;

pub use file_provider::*;
pub use memory_provider::*;
