// Settings Ports Layer
//
// 定义设置模块的端口（接口）

pub mod provider;
pub mod settings_port;

pub use provider::*;
pub use settings_port::*;
